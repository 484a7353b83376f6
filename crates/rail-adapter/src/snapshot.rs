//! Optimizer-input snapshot: a plain, serializable view of engine state
//! decoupled from the engine's own internal types, so the optimizer path
//! can be exercised (and tested) without a live [`Engine`].

use serde::Serialize;

use rail_engine::{Engine, IssueSummary};

/// Optimizer-relevant scheduling defaults not carried by [`EngineParams`]
/// — mirrors the `getattr(sim, ..., default)` fallbacks the original
/// snapshot builder used for fields the live engine never tracked.
///
/// [`EngineParams`]: rail_engine::EngineParams
const DEFAULT_MAX_TIME_SEC: i64 = 3600;
const DEFAULT_TIME_LIMIT_SEC: f64 = 1.5;
const DEFAULT_NUM_WORKERS: u32 = 4;

#[derive(Clone, Debug, Serialize)]
pub struct OptimizerBlockView {
    pub id: String,
    pub name: String,
    pub length_km: f64,
    pub max_speed_kmh: f64,
    pub station: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct OptimizerTrainView {
    pub id: String,
    pub name: String,
    pub priority: String,
    pub route: Vec<String>,
    pub route_index: usize,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct OptimizerParamsView {
    pub headway_sec: i64,
    pub dwell_sec: i64,
    pub default_speed_kmh: f64,
    pub max_time_sec: i64,
    pub time_limit_sec: f64,
    pub num_workers: u32,
}

#[derive(Clone, Debug, Serialize)]
pub struct OptimizerSnapshot {
    pub sim_time_iso: String,
    pub params: OptimizerParamsView,
    pub blocks: Vec<OptimizerBlockView>,
    pub trains: Vec<OptimizerTrainView>,
    pub issues: Vec<IssueSummary>,
}

/// Assemble optimizer input directly from a live engine's topology and
/// train roster.
pub fn build_optimizer_input(engine: &Engine) -> OptimizerSnapshot {
    let state = engine.get_state_message();
    let topology = engine.topology();
    let trains = engine.trains();
    let engine_params = engine.params();

    let blocks = topology
        .blocks()
        .iter()
        .map(|b| OptimizerBlockView {
            id: b.id.clone(),
            name: b.name.clone(),
            length_km: b.length_km,
            max_speed_kmh: b.max_speed_kmh,
            station: b.is_station(),
        })
        .collect();

    let mut train_views = Vec::with_capacity(trains.count);
    for i in trains.train_ids() {
        let idx = i.index();
        let route = trains.route[idx]
            .iter()
            .map(|&bidx| topology.block(bidx).id.clone())
            .collect();
        train_views.push(OptimizerTrainView {
            id: trains.id[idx].clone(),
            name: trains.name[idx].clone(),
            priority: trains.priority[idx].to_string(),
            route,
            route_index: trains.route_index[idx],
        });
    }

    let params = OptimizerParamsView {
        headway_sec: engine_params.headway_sec.max(0.0) as i64,
        dwell_sec: engine_params.dwell_sec.max(0.0) as i64,
        default_speed_kmh: topology.default_speed_kmh.max(1.0),
        max_time_sec: DEFAULT_MAX_TIME_SEC,
        time_limit_sec: DEFAULT_TIME_LIMIT_SEC,
        num_workers: DEFAULT_NUM_WORKERS,
    };

    OptimizerSnapshot {
        sim_time_iso: state.sim_time_iso,
        params,
        blocks,
        trains: train_views,
        issues: state.issues,
    }
}
