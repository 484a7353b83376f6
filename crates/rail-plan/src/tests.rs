//! Unit tests for rail-plan.

use rail_core::SimTime;

use crate::{HoldDirective, Plan};

fn hold(train: &str, block: &str, offset: u32) -> HoldDirective {
    HoldDirective::new(train, block, offset).unwrap()
}

#[test]
fn new_rejects_empty_ids() {
    assert!(HoldDirective::new("", "B1", 10).is_err());
    assert!(HoldDirective::new("T1", "", 10).is_err());
}

#[test]
fn merged_dedups_keeping_max_offset() {
    let plan = Plan::new(vec![
        hold("T1", "B2", 10),
        hold("T1", "B2", 40),
        hold("T2", "B5", 5),
    ]);
    let merged = plan.merged();
    assert_eq!(merged.holds.len(), 2);
    let t1 = merged.holds.iter().find(|h| h.train_id == "T1").unwrap();
    assert_eq!(t1.not_before_offset_sec, 40);
}

#[test]
fn merged_is_idempotent() {
    let plan = Plan::new(vec![hold("T1", "B2", 10), hold("T1", "B2", 40)]);
    let once = plan.merged();
    let twice = once.merged();
    assert_eq!(once.holds.len(), twice.holds.len());
    assert_eq!(
        once.holds[0].not_before_offset_sec,
        twice.holds[0].not_before_offset_sec
    );
}

#[test]
fn empty_plan_is_empty() {
    assert!(Plan::empty().is_empty());
    assert!(!Plan::new(vec![hold("T1", "B2", 0)]).is_empty());
}

#[test]
fn to_index_materializes_absolute_deadline() {
    let plan = Plan::new(vec![hold("T1", "B2", 30)]);
    let index = plan.to_index(SimTime(100.0));
    assert!(index.is_held("T1", "B2", SimTime(110.0)));
    assert!(!index.is_held("T1", "B2", SimTime(130.0)));
    assert!(!index.is_held("T1", "B2", SimTime(130.1)));
}

#[test]
fn zero_offset_hold_is_no_op_immediately() {
    let plan = Plan::new(vec![hold("T1", "B2", 0)]);
    let index = plan.to_index(SimTime(100.0));
    assert!(!index.is_held("T1", "B2", SimTime(100.0)));
}

#[test]
fn unrelated_train_block_pair_is_never_held() {
    let plan = Plan::new(vec![hold("T1", "B2", 1000)]);
    let index = plan.to_index(SimTime(0.0));
    assert!(!index.is_held("T2", "B2", SimTime(0.0)));
    assert!(!index.is_held("T1", "B9", SimTime(0.0)));
}
