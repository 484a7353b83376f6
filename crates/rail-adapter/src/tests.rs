use rail_engine::EngineBuilder;
use rail_topology::load_topology_str;

use crate::optimize::optimize_from_sim;
use crate::snapshot::{
    build_optimizer_input, OptimizerBlockView, OptimizerParamsView, OptimizerSnapshot,
    OptimizerTrainView,
};

fn full_topology() -> rail_topology::Topology {
    let json = r#"{
        "blocks": [
            {"id": "B1",  "name": "B1",  "length_km": 1.0, "max_speed_kmh": 100.0, "adjacent_blocks": ["B2"]},
            {"id": "B2",  "name": "B2",  "length_km": 1.0, "max_speed_kmh": 100.0, "adjacent_blocks": ["B1", "B3", "B8"]},
            {"id": "B3",  "name": "B3",  "length_km": 1.0, "max_speed_kmh": 100.0, "adjacent_blocks": ["B2", "B4", "B11"]},
            {"id": "B4",  "name": "B4",  "length_km": 1.0, "max_speed_kmh": 100.0, "adjacent_blocks": ["B3", "B5"]},
            {"id": "B5",  "name": "B5",  "length_km": 1.0, "max_speed_kmh": 100.0, "adjacent_blocks": ["B4", "B6", "B10"]},
            {"id": "B6",  "name": "B6",  "length_km": 1.0, "max_speed_kmh": 100.0, "adjacent_blocks": ["B5", "B7", "B9"]},
            {"id": "B7",  "name": "B7",  "length_km": 1.0, "max_speed_kmh": 100.0, "adjacent_blocks": ["B6"]},
            {"id": "B8",  "name": "B8",  "length_km": 1.0, "max_speed_kmh": 100.0, "adjacent_blocks": ["B2", "B9"]},
            {"id": "B9",  "name": "B9",  "length_km": 1.0, "max_speed_kmh": 100.0, "adjacent_blocks": ["B6", "B8"]},
            {"id": "B10", "name": "B10", "length_km": 1.0, "max_speed_kmh": 100.0, "adjacent_blocks": ["B5"]},
            {"id": "B11", "name": "B11", "length_km": 1.0, "max_speed_kmh": 100.0, "adjacent_blocks": ["B3"]}
        ],
        "default_headway_sec": 120,
        "default_dwell_sec": 60
    }"#;
    load_topology_str(json).unwrap()
}

fn synthetic_snapshot() -> OptimizerSnapshot {
    OptimizerSnapshot {
        sim_time_iso: "2026-01-01T00:00:00Z".to_string(),
        params: OptimizerParamsView {
            headway_sec: 60,
            dwell_sec: 30,
            default_speed_kmh: 80.0,
            max_time_sec: 600,
            time_limit_sec: 1.0,
            num_workers: 1,
        },
        blocks: vec![
            OptimizerBlockView {
                id: "B1".to_string(),
                name: "B1".to_string(),
                length_km: 1.0,
                max_speed_kmh: 80.0,
                station: false,
            },
            OptimizerBlockView {
                id: "B2".to_string(),
                name: "B2".to_string(),
                length_km: 1.0,
                max_speed_kmh: 80.0,
                station: false,
            },
        ],
        trains: vec![
            OptimizerTrainView {
                id: "T1".to_string(),
                name: "T1".to_string(),
                priority: "EXPRESS".to_string(),
                route: vec!["B1".to_string(), "B2".to_string()],
                route_index: 0,
            },
            OptimizerTrainView {
                id: "T2".to_string(),
                name: "T2".to_string(),
                priority: "REGIONAL".to_string(),
                route: vec!["B1".to_string(), "B2".to_string()],
                route_index: 0,
            },
        ],
        issues: Vec::new(),
    }
}

#[test]
fn build_optimizer_input_reflects_live_engine_roster() {
    let engine = EngineBuilder::new(full_topology()).seed(7).build().unwrap();
    let snapshot = build_optimizer_input(&engine);

    assert_eq!(snapshot.blocks.len(), 11);
    assert_eq!(snapshot.trains.len(), 8);
    for train in &snapshot.trains {
        assert!(!train.route.is_empty());
        assert!(train.route_index < train.route.len());
    }
}

#[test]
fn optimize_from_sim_holds_the_contended_train_on_its_next_block() {
    let snapshot = synthetic_snapshot();
    let plan = optimize_from_sim(&snapshot, Some(1)).unwrap();

    // two trains both starting at B1 heading into B2 with a 60s headway:
    // exactly one of them should come back with a hold on B2.
    assert_eq!(plan.holds.len(), 1);
    let hold = &plan.holds[0];
    assert_eq!(hold.block_id, "B2");
    assert!(hold.not_before_offset_sec > 0);
}

#[test]
fn optimize_from_sim_emits_no_holds_for_trains_already_at_terminus() {
    let mut snapshot = synthetic_snapshot();
    for train in &mut snapshot.trains {
        train.route_index = train.route.len() - 1;
    }
    let plan = optimize_from_sim(&snapshot, None).unwrap();
    assert!(plan.is_empty());
}

#[test]
fn optimize_from_sim_skips_trains_with_empty_routes() {
    let mut snapshot = synthetic_snapshot();
    snapshot.trains[0].route.clear();
    let plan = optimize_from_sim(&snapshot, None).unwrap();
    // T1 contributes no segments at all; only T2 can possibly be held, and
    // with no contention on B2 it shouldn't need one either.
    assert!(plan.holds.iter().all(|h| h.train_id == "T2"));
}
