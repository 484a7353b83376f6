//! The fixed eight-train roster.
//!
//! Train ids, names, priorities, and routes are fixed line data, not
//! runtime configuration — mirroring the original simulator's hardcoded
//! `train_configs` table. Each route is a flattened sequence of block ids,
//! validated and resolved against the topology at construction time.

use rail_core::BlockIdx;
use rail_topology::Topology;

use crate::error::{TrainError, TrainResult};
use crate::priority::Priority;
use crate::store::TrainStore;

struct TrainSpec {
    id: &'static str,
    name: &'static str,
    priority: Priority,
    route: &'static [&'static str],
}

const ROSTER: &[TrainSpec] = &[
    TrainSpec {
        id: "T1",
        name: "EXP-12001",
        priority: Priority::Express,
        route: &["B1", "B2", "B3", "B4", "B5", "B6", "B7"],
    },
    TrainSpec {
        id: "T2",
        name: "REG-22002",
        priority: Priority::Regional,
        route: &["B7", "B6", "B5", "B4", "B3", "B2", "B1"],
    },
    TrainSpec {
        id: "T3",
        name: "EXP-12003",
        priority: Priority::Express,
        route: &["B1", "B2", "B8", "B9", "B6", "B7"],
    },
    TrainSpec {
        id: "T4",
        name: "FRE-32004",
        priority: Priority::Freight,
        route: &["B3", "B4", "B5", "B10"],
    },
    TrainSpec {
        id: "T5",
        name: "REG-22005",
        priority: Priority::Regional,
        route: &["B6", "B9", "B8", "B2", "B1"],
    },
    TrainSpec {
        id: "T6",
        name: "EXP-12006",
        priority: Priority::Express,
        route: &["B1", "B2", "B3", "B11"],
    },
    TrainSpec {
        id: "T7",
        name: "FRE-32007",
        priority: Priority::Freight,
        route: &["B10", "B5", "B4", "B3", "B2", "B1"],
    },
    TrainSpec {
        id: "T8",
        name: "REG-22008",
        priority: Priority::Regional,
        route: &["B7", "B6", "B5", "B4", "B3", "B2", "B1"],
    },
];

/// Resolve the fixed eight-train roster's routes against `topology` and
/// build a freshly allocated [`TrainStore`].
///
/// Dynamic placement fields (current block occupancy, staggered entry
/// times, initial delay draws) are left at sentinel/zero values — the
/// engine's `reset()` fills them in using occupancy state this crate does
/// not own.
pub fn build_default_roster(topology: &Topology) -> TrainResult<TrainStore> {
    let mut ids = Vec::with_capacity(ROSTER.len());
    let mut names = Vec::with_capacity(ROSTER.len());
    let mut priorities = Vec::with_capacity(ROSTER.len());
    let mut routes: Vec<Vec<BlockIdx>> = Vec::with_capacity(ROSTER.len());

    for spec in ROSTER {
        if spec.route.is_empty() {
            return Err(TrainError::EmptyRoute(spec.id.to_string()));
        }
        let resolved: Vec<BlockIdx> = spec
            .route
            .iter()
            .map(|block_id| {
                topology
                    .index_of(block_id)
                    .map_err(|_| TrainError::UnknownBlockInRoute {
                        train: spec.id.to_string(),
                        block: block_id.to_string(),
                    })
            })
            .collect::<TrainResult<_>>()?;

        ids.push(spec.id.to_string());
        names.push(spec.name.to_string());
        priorities.push(spec.priority);
        routes.push(resolved);
    }

    Ok(TrainStore::new(ids, names, priorities, routes))
}
