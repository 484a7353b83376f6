//! Core train storage: `TrainStore` (Structure-of-Arrays train state).
//!
//! Every `Vec` field has exactly `count` elements; `TrainIdx` is the index
//! into all of them:
//!
//! ```ignore
//! let block = store.current_block[train.index()];
//! ```
//!
//! [`crate::roster::build_default_roster`] allocates the arrays and fills in
//! the static fields (id, name, priority, route). Dynamic placement fields
//! (`current_block`, `entered_block_at`, initial `delay_minutes`, …) start at
//! sentinel values — the engine's `reset()` fills them in, since placement
//! depends on block occupancy state this crate does not own.

use std::collections::HashMap;

use rail_core::{BlockIdx, SimTime, TrainIdx};

use crate::priority::Priority;

/// Structure-of-Arrays storage for all train state.
pub struct TrainStore {
    /// Number of trains. Equals the length of every array below.
    pub count: usize,

    pub id: Vec<String>,
    pub name: Vec<String>,
    pub priority: Vec<Priority>,

    /// Each train's full route as a sequence of block indices, fixed at
    /// construction (no rerouting).
    pub route: Vec<Vec<BlockIdx>>,
    /// Index into `route[i]` of the block the train currently occupies.
    pub route_index: Vec<usize>,

    pub current_block: Vec<BlockIdx>,
    pub next_block: Vec<BlockIdx>,

    pub speed_kmh: Vec<f64>,
    pub entered_block_at: Vec<SimTime>,
    pub will_exit_at: Vec<SimTime>,

    /// Integer-minute portion of cumulative `waiting_sec`.
    pub delay_minutes: Vec<f64>,
    pub dwell_remaining: Vec<f64>,
    pub waiting_sec: Vec<f64>,

    id_index: HashMap<String, TrainIdx>,
}

impl TrainStore {
    /// `true` if there are no trains.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `TrainIdx`s in ascending index (roster) order.
    pub fn train_ids(&self) -> impl Iterator<Item = TrainIdx> + '_ {
        (0..self.count as u32).map(TrainIdx)
    }

    /// Resolve a wire-format train id to its internal index.
    pub fn index_of(&self, train_id: &str) -> Option<TrainIdx> {
        self.id_index.get(train_id).copied()
    }

    pub fn contains(&self, train_id: &str) -> bool {
        self.id_index.contains_key(train_id)
    }

    /// `true` if the train has consumed its entire route.
    #[inline]
    pub fn is_at_terminus(&self, train: TrainIdx) -> bool {
        let i = train.index();
        self.route_index[i] + 1 >= self.route[i].len()
    }

    /// Block the train will move into next, or `None` at the terminus.
    pub fn peek_next_block(&self, train: TrainIdx) -> Option<BlockIdx> {
        let i = train.index();
        self.route[i].get(self.route_index[i] + 1).copied()
    }

    pub(crate) fn new(
        ids: Vec<String>,
        names: Vec<String>,
        priorities: Vec<Priority>,
        routes: Vec<Vec<BlockIdx>>,
    ) -> Self {
        let count = ids.len();
        let id_index = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), TrainIdx(i as u32)))
            .collect();
        let speed_kmh = priorities.iter().map(|p| p.nominal_speed_kmh()).collect();
        let current_block = routes.iter().map(|r| r[0]).collect();

        Self {
            count,
            id: ids,
            name: names,
            priority: priorities,
            route: routes,
            route_index: vec![0; count],
            current_block,
            next_block: vec![BlockIdx::INVALID; count],
            speed_kmh,
            entered_block_at: vec![SimTime::ZERO; count],
            will_exit_at: vec![SimTime::ZERO; count],
            delay_minutes: vec![0.0; count],
            dwell_remaining: vec![0.0; count],
            waiting_sec: vec![0.0; count],
            id_index,
        }
    }
}
