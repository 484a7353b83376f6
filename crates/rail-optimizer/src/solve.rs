//! MILP interval-scheduling solve, via `good_lp`/`microlp`.
//!
//! Mirrors a CP-SAT interval model: each route-block gets a `[start, end)`
//! pair of integer vars bounded to `[now_sec, now_sec + max_time_sec]`, with
//! duration fixed by [`TrainRouteBlock::duration_sec`]. Two families of
//! constraint tie the intervals together:
//!
//! - precedence: within one train's route, block `k+1` cannot start before
//!   block `k` ends.
//! - headway: any two intervals on the same block must not overlap, with at
//!   least `headway_sec` between them. This is a disjunction (`a before b`
//!   OR `b before a`) and is linearized with a binary indicator per ordered
//!   pair and a big-M constant, since `good_lp` has no native disjunction
//!   support.
//!
//! The objective minimizes makespan, the latest interval end across the
//! whole schedule — there is no reward for finishing *early*, only for
//! finishing the last train sooner.
//!
//! If `headway_sec <= 0` the headway family is omitted entirely rather than
//! relaxed with a zero minimum gap — a zero-width disjunction would still
//! force the solver to pick an arbitrary order between trains that don't
//! need one.

use std::collections::HashMap;

use good_lp::solvers::microlp::microlp;
use good_lp::{constraint, variable, variables, Solution, SolverModel, Variable};

use crate::model::{OptimizerParams, TrainRouteBlock};

/// Per-train list of `(start_sec, end_sec)` intervals, in route order.
pub type Schedule = HashMap<String, Vec<(i64, i64)>>;

pub struct DispatchOptimizer {
    params: OptimizerParams,
}

impl DispatchOptimizer {
    pub fn new(params: OptimizerParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &OptimizerParams {
        &self.params
    }

    /// Solve for the given routes, anchored at `now_sec`.
    ///
    /// `seed` has no effect on `microlp` (it has no randomized tie-breaking
    /// to seed) and is accepted only for call-site symmetry with the rest of
    /// the simulation's seeded-determinism story.
    ///
    /// Returns an empty map if there are no routes to schedule, or if the
    /// solver reports the model infeasible — callers treat both the same
    /// way, as "no holds needed".
    pub fn optimize(
        &self,
        now_sec: i64,
        routes: &[TrainRouteBlock],
        _seed: Option<u64>,
    ) -> Schedule {
        if routes.is_empty() {
            return Schedule::new();
        }

        let now = now_sec as f64;
        let horizon_hi = (now_sec + self.params.max_time_sec) as f64;
        let m_big = self.params.max_time_sec as f64;
        let headway = self.params.headway_sec as f64;

        let mut vars = variables!();
        let mut starts = Vec::with_capacity(routes.len());
        let mut ends = Vec::with_capacity(routes.len());
        for _ in routes {
            starts.push(vars.add(variable().integer().min(now).max(horizon_hi)));
            ends.push(vars.add(variable().integer().min(now).max(horizon_hi)));
        }
        let makespan = vars.add(variable().min(now).max(horizon_hi));

        let mut constraints = Vec::new();
        for (i, r) in routes.iter().enumerate() {
            let duration = r.duration_sec() as f64;
            constraints.push(constraint!(ends[i] == starts[i] + duration));
            constraints.push(constraint!(makespan >= ends[i]));
        }

        precedence_constraints(routes, &starts, &ends, &mut constraints);
        if headway > 0.0 {
            headway_constraints(routes, &starts, &ends, headway, m_big, &mut vars, &mut constraints);
        }

        let mut model = vars.minimise(makespan).using(microlp);
        for c in constraints {
            model = model.with(c);
        }

        let solution = match model.solve() {
            Ok(solution) => solution,
            Err(_) => return Schedule::new(),
        };

        let mut schedule = Schedule::new();
        for (i, r) in routes.iter().enumerate() {
            let s = solution.value(starts[i]).round() as i64;
            let e = solution.value(ends[i]).round() as i64;
            schedule.entry(r.train_id.clone()).or_default().push((s, e));
        }
        for intervals in schedule.values_mut() {
            intervals.sort_by_key(|(s, _)| *s);
        }
        schedule
    }
}

fn precedence_constraints(
    routes: &[TrainRouteBlock],
    starts: &[Variable],
    ends: &[Variable],
    constraints: &mut Vec<good_lp::Constraint>,
) {
    let mut by_train: HashMap<&str, Vec<usize>> = HashMap::new();
    for (i, r) in routes.iter().enumerate() {
        by_train.entry(r.train_id.as_str()).or_default().push(i);
    }
    for segments in by_train.values() {
        for pair in segments.windows(2) {
            let (cur, next) = (pair[0], pair[1]);
            constraints.push(constraint!(starts[next] >= ends[cur]));
        }
    }
}

fn headway_constraints(
    routes: &[TrainRouteBlock],
    starts: &[Variable],
    ends: &[Variable],
    headway: f64,
    m_big: f64,
    vars: &mut good_lp::ProblemVariables,
    constraints: &mut Vec<good_lp::Constraint>,
) {
    let mut by_block: HashMap<&str, Vec<usize>> = HashMap::new();
    for (i, r) in routes.iter().enumerate() {
        by_block.entry(r.block_id.as_str()).or_default().push(i);
    }
    for segments in by_block.values() {
        for a in 0..segments.len() {
            for b in (a + 1)..segments.len() {
                let k1 = segments[a];
                let k2 = segments[b];
                let o12 = vars.add(variable().integer().min(0.0).max(1.0));
                let o21 = vars.add(variable().integer().min(0.0).max(1.0));
                constraints.push(constraint!(o12 + o21 == 1.0));
                constraints.push(constraint!(
                    starts[k2] >= ends[k1] + headway - m_big + m_big * o12
                ));
                constraints.push(constraint!(
                    starts[k1] >= ends[k2] + headway - m_big + m_big * o21
                ));
            }
        }
    }
}
