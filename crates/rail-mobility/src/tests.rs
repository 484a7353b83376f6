//! Unit tests for rail-mobility.

use rail_core::{BlockIdx, SimTime, TrainIdx};
use rail_plan::{HoldDirective, Plan};
use rail_topology::{load_topology_str, Topology};
use rail_train::build_default_roster;

use crate::event::EventIdGen;
use crate::movement::{step_train, MobilityParams};
use crate::occupancy::{BlockOccupancy, IssueKind};

/// Topology covering every block id the default roster's routes reference,
/// so `build_default_roster` resolves cleanly in every test here.
fn full_topology() -> Topology {
    let json = r#"{
        "blocks": [
            {"id": "B1",  "name": "B1",  "length_km": 1.0, "max_speed_kmh": 100.0, "adjacent_blocks": ["B2"]},
            {"id": "B2",  "name": "B2",  "length_km": 1.0, "max_speed_kmh": 100.0, "adjacent_blocks": ["B1", "B3", "B8"]},
            {"id": "B3",  "name": "B3",  "length_km": 1.0, "max_speed_kmh": 100.0, "adjacent_blocks": ["B2", "B4", "B11"]},
            {"id": "B4",  "name": "B4",  "length_km": 1.0, "max_speed_kmh": 100.0, "adjacent_blocks": ["B3", "B5"]},
            {"id": "B5",  "name": "B5",  "length_km": 1.0, "max_speed_kmh": 100.0, "adjacent_blocks": ["B4", "B6", "B10"]},
            {"id": "B6",  "name": "B6",  "length_km": 1.0, "max_speed_kmh": 100.0, "adjacent_blocks": ["B5", "B7", "B9"]},
            {"id": "B7",  "name": "B7",  "length_km": 1.0, "max_speed_kmh": 100.0, "adjacent_blocks": ["B6"]},
            {"id": "B8",  "name": "B8",  "length_km": 1.0, "max_speed_kmh": 100.0, "adjacent_blocks": ["B2", "B9"], "station_id": "S1", "platform_id": "P1"},
            {"id": "B9",  "name": "B9",  "length_km": 1.0, "max_speed_kmh": 100.0, "adjacent_blocks": ["B6", "B8"]},
            {"id": "B10", "name": "B10", "length_km": 1.0, "max_speed_kmh": 100.0, "adjacent_blocks": ["B5"]},
            {"id": "B11", "name": "B11", "length_km": 1.0, "max_speed_kmh": 100.0, "adjacent_blocks": ["B3"]}
        ],
        "stations": [{"id": "S1", "name": "Platform Station", "platforms": [{"id": "P1", "name": "1", "capacity": 1}]}]
    }"#;
    load_topology_str(json).unwrap()
}

fn zero_gating_params() -> MobilityParams {
    MobilityParams {
        headway_sec: 0.0,
        dwell_sec: 0.0,
        max_block_travel_sec: 45.0,
    }
}

#[test]
fn train_travels_then_gates_on_occupied_block() {
    let topo = full_topology();
    let mut trains = build_default_roster(&topo).unwrap();
    let mut occ = BlockOccupancy::new(topo.block_count());
    let mut ids = EventIdGen::new();
    let params = zero_gating_params();
    let no_holds = Plan::empty().to_index(SimTime::ZERO);

    let t1 = TrainIdx(0);
    occ.occupy(trains.current_block[0], t1); // T1 starts on B1
    let b2 = topo.index_of("B2").unwrap();
    occ.occupy(b2, TrainIdx(1)); // phantom occupant blocks T1's next hop
    trains.will_exit_at[0] = SimTime::ZERO; // ready to traverse immediately

    let out = step_train(t1, SimTime(5.0), 5.0, 1, &topo, &mut trains, &mut occ, &no_holds, &params, &mut ids);
    assert!(out.events.is_empty());
    assert!(!out.moved);
    assert_eq!(trains.waiting_sec[0], 5.0);
    assert_eq!(trains.delay_minutes[0], 0.0);

    occ.vacate(b2, SimTime(5.0));
    let out = step_train(t1, SimTime(10.0), 5.0, 2, &topo, &mut trains, &mut occ, &no_holds, &params, &mut ids);
    assert!(out.moved);
    assert_eq!(out.events.len(), 2);
    assert_eq!(out.events[0].event_kind.to_string(), "TRAIN_DEPARTED");
    assert_eq!(out.events[1].event_kind.to_string(), "TRAIN_ARRIVED");
    assert_eq!(trains.current_block[0], b2);
    assert!(occ.is_free(trains.route[0][0])); // B1 vacated
    assert!(!occ.is_free(b2)); // B2 now occupied by T1
}

#[test]
fn train_held_by_plan_does_not_move() {
    let topo = full_topology();
    let mut trains = build_default_roster(&topo).unwrap();
    let mut occ = BlockOccupancy::new(topo.block_count());
    let mut ids = EventIdGen::new();
    let params = zero_gating_params();

    let t1 = TrainIdx(0);
    trains.will_exit_at[0] = SimTime::ZERO;
    let plan = Plan::new(vec![HoldDirective::new("T1", "B2", 100).unwrap()]);
    let index = plan.to_index(SimTime::ZERO);

    let out = step_train(t1, SimTime(1.0), 1.0, 1, &topo, &mut trains, &mut occ, &index, &params, &mut ids);
    assert!(!out.moved);
    assert_eq!(trains.route_index[0], 0);
    assert_eq!(trains.waiting_sec[0], 1.0);
}

#[test]
fn zero_offset_hold_does_not_gate_first_step() {
    let topo = full_topology();
    let mut trains = build_default_roster(&topo).unwrap();
    let mut occ = BlockOccupancy::new(topo.block_count());
    let mut ids = EventIdGen::new();
    let params = zero_gating_params();

    let t1 = TrainIdx(0);
    trains.will_exit_at[0] = SimTime::ZERO;
    let plan = Plan::new(vec![HoldDirective::new("T1", "B2", 0).unwrap()]);
    let index = plan.to_index(SimTime::ZERO);

    let out = step_train(t1, SimTime(1.0), 1.0, 1, &topo, &mut trains, &mut occ, &index, &params, &mut ids);
    assert!(out.moved);
}

#[test]
fn dwell_counts_down_before_terminus_completion_check() {
    let topo = full_topology();
    let mut trains = build_default_roster(&topo).unwrap();
    let mut occ = BlockOccupancy::new(topo.block_count());
    let mut ids = EventIdGen::new();
    let params = zero_gating_params();
    let no_holds = Plan::empty().to_index(SimTime::ZERO);

    let t1 = TrainIdx(0);
    trains.dwell_remaining[0] = 12.0;
    trains.will_exit_at[0] = SimTime::ZERO;

    let out = step_train(t1, SimTime(5.0), 5.0, 1, &topo, &mut trains, &mut occ, &no_holds, &params, &mut ids);
    assert!(!out.moved);
    assert_eq!(trains.dwell_remaining[0], 7.0);

    let out = step_train(t1, SimTime(12.0), 7.0, 2, &topo, &mut trains, &mut occ, &no_holds, &params, &mut ids);
    assert_eq!(trains.dwell_remaining[0], 0.0);
    assert!(out.moved);
}

#[test]
fn train_at_terminus_completes_without_moving() {
    let topo = full_topology();
    let mut trains = build_default_roster(&topo).unwrap();
    let mut occ = BlockOccupancy::new(topo.block_count());
    let mut ids = EventIdGen::new();
    let params = zero_gating_params();
    let no_holds = Plan::empty().to_index(SimTime::ZERO);

    let t4 = TrainIdx(3); // FREIGHT, route B3,B4,B5,B10
    let last = trains.route[3].len() - 1;
    trains.route_index[3] = last;
    trains.current_block[3] = trains.route[3][last];
    trains.will_exit_at[3] = SimTime::ZERO;

    let out = step_train(t4, SimTime(1.0), 1.0, 1, &topo, &mut trains, &mut occ, &no_holds, &params, &mut ids);
    assert!(out.completed);
    assert!(!out.moved);
    assert!(out.events.is_empty());
}

#[test]
fn block_issue_gates_entry_like_occupancy() {
    let mut occ = BlockOccupancy::new(3);
    let b = BlockIdx(1);
    assert!(occ.is_free(b));
    occ.set_issue(b, IssueKind::SignalFailure, SimTime::ZERO);
    assert!(occ.has_issue(b));
    occ.clear_issue(b);
    assert!(!occ.has_issue(b));
}

#[test]
fn headway_zero_disables_gating() {
    let occ = BlockOccupancy::new(2);
    let b = BlockIdx(0);
    assert!(occ.headway_elapsed(b, SimTime(0.0), 0.0));
}

#[test]
fn headway_enforced_after_last_exit() {
    let mut occ = BlockOccupancy::new(2);
    let b = BlockIdx(0);
    occ.vacate(b, SimTime(100.0));
    assert!(!occ.headway_elapsed(b, SimTime(150.0), 120.0));
    assert!(occ.headway_elapsed(b, SimTime(220.0), 120.0));
}
