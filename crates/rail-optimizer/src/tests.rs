use crate::{DispatchOptimizer, OptimizerParams, TrainRouteBlock};

fn block(train_id: &str, block_id: &str, travel_sec: i64) -> TrainRouteBlock {
    TrainRouteBlock {
        train_id: train_id.to_string(),
        block_id: block_id.to_string(),
        is_station: false,
        dwell_sec: 0,
        travel_sec,
    }
}

#[test]
fn single_train_route_respects_precedence() {
    let routes = vec![
        block("T1", "B1", 30),
        block("T1", "B2", 45),
        block("T1", "B3", 20),
    ];
    let opt = DispatchOptimizer::new(OptimizerParams::new(600, 0, 1.0, 1));
    let schedule = opt.optimize(0, &routes, None);

    let intervals = schedule.get("T1").expect("T1 scheduled");
    assert_eq!(intervals.len(), 3);
    for pair in intervals.windows(2) {
        assert!(pair[1].0 >= pair[0].1, "next segment must not start before prior ends");
    }
    assert_eq!(intervals[0].1 - intervals[0].0, 30);
    assert_eq!(intervals[1].1 - intervals[1].0, 45);
}

#[test]
fn two_trains_sharing_a_block_are_separated_by_headway() {
    let routes = vec![block("T1", "B1", 30), block("T2", "B1", 30)];
    let opt = DispatchOptimizer::new(OptimizerParams::new(600, 60, 1.0, 1));
    let schedule = opt.optimize(0, &routes, None);

    let t1 = schedule.get("T1").unwrap()[0];
    let t2 = schedule.get("T2").unwrap()[0];
    let gap = if t1.0 <= t2.0 { t2.0 - t1.1 } else { t1.0 - t2.1 };
    assert!(gap >= 60, "expected at least 60s headway between occupants of B1, got {gap}");
}

#[test]
fn zero_headway_allows_simultaneous_occupation() {
    let routes = vec![block("T1", "B1", 30), block("T2", "B1", 30)];
    let opt = DispatchOptimizer::new(OptimizerParams::new(600, 0, 1.0, 1));
    let schedule = opt.optimize(0, &routes, None);

    // with no headway constraint the solver is free to let both trains
    // start at time zero to minimize makespan
    let t1 = schedule.get("T1").unwrap()[0];
    let t2 = schedule.get("T2").unwrap()[0];
    assert_eq!(t1.0, 0);
    assert_eq!(t2.0, 0);
}

#[test]
fn same_train_revisiting_a_block_is_still_subject_to_headway() {
    // a loop route that revisits a block is scheduled like any other pair
    // of intervals sharing that block, headway included
    let routes = vec![
        block("T1", "B1", 10),
        block("T1", "B2", 10),
        block("T1", "B1", 10),
    ];
    let opt = DispatchOptimizer::new(OptimizerParams::new(600, 120, 1.0, 1));
    let schedule = opt.optimize(0, &routes, None);
    let intervals = schedule.get("T1").unwrap();
    assert_eq!(intervals.len(), 3);
    let gap = intervals[2].0 - intervals[0].1;
    assert!(gap >= 120, "expected at least 120s headway between the two B1 visits, got {gap}");
}

#[test]
fn infeasible_model_returns_empty_schedule() {
    // horizon too short for the train's own route to fit: duration exceeds
    // max_time_sec, so no start/end assignment can satisfy the bounds
    let routes = vec![block("T1", "B1", 500)];
    let opt = DispatchOptimizer::new(OptimizerParams::new(10, 0, 1.0, 1));
    let schedule = opt.optimize(0, &routes, None);
    assert!(schedule.is_empty());
}

#[test]
fn empty_route_list_returns_empty_schedule() {
    let opt = DispatchOptimizer::new(OptimizerParams::default());
    let schedule = opt.optimize(0, &[], None);
    assert!(schedule.is_empty());
}

#[test]
fn params_clamp_rather_than_reject() {
    let params = OptimizerParams::new(-5, -10, 0.0, 0);
    assert_eq!(params.max_time_sec, 1);
    assert_eq!(params.headway_sec, 0);
    assert_eq!(params.time_limit_sec, 0.1);
    assert_eq!(params.num_workers, 1);
}
