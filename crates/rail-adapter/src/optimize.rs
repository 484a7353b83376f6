//! Translate an [`OptimizerSnapshot`] into a dispatch [`Plan`].
//!
//! Builds each train's remaining route as a sequence of
//! [`TrainRouteBlock`]s, solves once, and for every train whose optimized
//! start on its current segment is later than "now" emits a hold on its
//! immediate next block — the optimizer is consulted for a one-step
//! recommendation, not a multi-block schedule handed to the engine.

use std::collections::HashMap;

use rail_optimizer::{DispatchOptimizer, OptimizerParams, TrainRouteBlock};
use rail_plan::{HoldDirective, Plan};

use crate::error::AdapterResult;
use crate::snapshot::{OptimizerBlockView, OptimizerSnapshot};

const DEFAULT_LENGTH_KM: f64 = 1.0;
const DEFAULT_SPEED_KMH: f64 = 80.0;

pub fn optimize_from_sim(snapshot: &OptimizerSnapshot, seed: Option<u64>) -> AdapterResult<Plan> {
    let blocks_by_id: HashMap<&str, &OptimizerBlockView> =
        snapshot.blocks.iter().map(|b| (b.id.as_str(), b)).collect();
    let dwell_sec_default = snapshot.params.dwell_sec.max(0);

    let mut routes = Vec::new();
    for train in &snapshot.trains {
        if train.route.is_empty() {
            continue;
        }
        let start_idx = train.route_index.min(train.route.len() - 1);
        for block_id in &train.route[start_idx..] {
            let b = blocks_by_id.get(block_id.as_str());
            let is_station = b.map(|b| b.station).unwrap_or(false);
            let length_km = b.map(|b| b.length_km).filter(|&v| v > 0.0).unwrap_or(DEFAULT_LENGTH_KM);
            let speed_kmh = b
                .map(|b| b.max_speed_kmh)
                .filter(|&v| v > 0.0)
                .unwrap_or(DEFAULT_SPEED_KMH);

            let travel_sec = if is_station {
                0
            } else {
                ((length_km / speed_kmh.max(1.0)) * 3600.0).max(1.0) as i64
            };
            let dwell_sec = if is_station { dwell_sec_default } else { 0 };

            routes.push(TrainRouteBlock {
                train_id: train.id.clone(),
                block_id: block_id.clone(),
                is_station,
                travel_sec,
                dwell_sec,
            });
        }
    }

    let optimizer = DispatchOptimizer::new(OptimizerParams::new(
        snapshot.params.max_time_sec,
        snapshot.params.headway_sec,
        snapshot.params.time_limit_sec,
        snapshot.params.num_workers,
    ));
    let schedule = optimizer.optimize(0, &routes, seed);

    let mut holds = Vec::new();
    for train in &snapshot.trains {
        if train.route.is_empty() || train.route_index >= train.route.len() - 1 {
            continue;
        }
        let next_block_id = &train.route[train.route_index + 1];
        let Some(segments) = schedule.get(&train.id) else {
            continue;
        };
        let Some(&(start_sec, _)) = segments.first() else {
            continue;
        };
        if start_sec > 0 {
            holds.push(HoldDirective::new(
                train.id.clone(),
                next_block_id.clone(),
                start_sec as u32,
            )?);
        }
    }

    Ok(Plan::new(holds))
}
