//! Block/station network and its builder.
//!
//! # Data layout
//!
//! Blocks are stored in a flat `Vec` indexed by [`BlockIdx`]; a
//! `HashMap<String, BlockIdx>` resolves the string ids used on the wire
//! (topology files, trains' routes, hold directives) to dense indices. This
//! mirrors the id-interning pattern used elsewhere in the workspace, adapted
//! here because the domain's wire ids are strings rather than pre-assigned
//! integers.

use std::collections::HashMap;

use rail_core::BlockIdx;

use crate::error::{TopologyError, TopologyResult};

// ── Static value types ────────────────────────────────────────────────────────

/// A platform at a station.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Platform {
    pub id: String,
    pub name: String,
    pub capacity: u32,
}

/// A station groups one or more platforms under a shared id.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Station {
    pub id: String,
    pub name: String,
    pub platforms: Vec<Platform>,
}

/// Static description of one block: a fixed segment of track (or station
/// platform track) that admits at most one train at a time.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockStatic {
    pub id: String,
    pub name: String,
    pub length_km: f64,
    pub max_speed_kmh: f64,
    pub adjacent_blocks: Vec<String>,
    pub station_id: Option<String>,
    pub platform_id: Option<String>,
}

impl BlockStatic {
    #[inline]
    pub fn is_station(&self) -> bool {
        self.station_id.is_some()
    }
}

// ── Topology ──────────────────────────────────────────────────────────────────

/// The validated, index-resolved block network plus its default parameters.
///
/// Built via [`TopologyBuilder`]. Immutable once built — `rail-mobility`
/// keeps its own mutable runtime state (occupancy, issues) alongside a
/// `Topology` reference rather than inside it.
#[derive(Clone)]
pub struct Topology {
    blocks: Vec<BlockStatic>,
    stations: Vec<Station>,
    id_index: HashMap<String, BlockIdx>,

    pub default_headway_sec: u32,
    pub default_dwell_sec: u32,
    pub default_speed_kmh: f64,
}

impl Topology {
    #[inline]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub fn blocks(&self) -> &[BlockStatic] {
        &self.blocks
    }

    #[inline]
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    #[inline]
    pub fn block(&self, idx: BlockIdx) -> &BlockStatic {
        &self.blocks[idx.index()]
    }

    /// Resolve a wire-format block id to its dense index.
    pub fn index_of(&self, block_id: &str) -> TopologyResult<BlockIdx> {
        self.id_index
            .get(block_id)
            .copied()
            .ok_or_else(|| TopologyError::UnknownBlock(block_id.to_string()))
    }

    pub fn contains(&self, block_id: &str) -> bool {
        self.id_index.contains_key(block_id)
    }
}

// ── TopologyBuilder ───────────────────────────────────────────────────────────

/// Validate a raw set of blocks/stations and produce a [`Topology`].
///
/// Rejects unknown adjacency references and duplicate block ids — both
/// indicate a malformed topology file, and `reset()` is required to fail
/// fast rather than build a network with dangling edges.
pub struct TopologyBuilder {
    blocks: Vec<BlockStatic>,
    stations: Vec<Station>,
    default_headway_sec: u32,
    default_dwell_sec: u32,
    default_speed_kmh: f64,
}

impl TopologyBuilder {
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            stations: Vec::new(),
            default_headway_sec: 120,
            default_dwell_sec: 60,
            default_speed_kmh: 80.0,
        }
    }

    pub fn add_block(&mut self, block: BlockStatic) -> &mut Self {
        self.blocks.push(block);
        self
    }

    pub fn add_station(&mut self, station: Station) -> &mut Self {
        self.stations.push(station);
        self
    }

    pub fn default_headway_sec(&mut self, v: u32) -> &mut Self {
        self.default_headway_sec = v;
        self
    }

    pub fn default_dwell_sec(&mut self, v: u32) -> &mut Self {
        self.default_dwell_sec = v;
        self
    }

    pub fn default_speed_kmh(&mut self, v: f64) -> &mut Self {
        self.default_speed_kmh = v;
        self
    }

    /// Validate adjacency and build the dense index.
    pub fn build(self) -> TopologyResult<Topology> {
        let mut id_index = HashMap::with_capacity(self.blocks.len());
        for (i, b) in self.blocks.iter().enumerate() {
            if id_index
                .insert(b.id.clone(), BlockIdx(i as u32))
                .is_some()
            {
                return Err(TopologyError::DuplicateBlock(b.id.clone()));
            }
        }

        for b in &self.blocks {
            for adj in &b.adjacent_blocks {
                if !id_index.contains_key(adj) {
                    return Err(TopologyError::UnknownBlock(adj.clone()));
                }
            }
            if let Some(station_id) = &b.station_id {
                if !self.stations.iter().any(|s| &s.id == station_id) {
                    return Err(TopologyError::UnknownStation(station_id.clone()));
                }
            }
            if b.length_km < 0.0 {
                return Err(TopologyError::InvalidBlockAttribute(format!(
                    "block {:?} has negative length_km {}",
                    b.id, b.length_km
                )));
            }
            if b.max_speed_kmh <= 0.0 {
                return Err(TopologyError::InvalidBlockAttribute(format!(
                    "block {:?} has non-positive max_speed_kmh {}",
                    b.id, b.max_speed_kmh
                )));
            }
        }

        Ok(Topology {
            blocks: self.blocks,
            stations: self.stations,
            id_index,
            default_headway_sec: self.default_headway_sec,
            default_dwell_sec: self.default_dwell_sec,
            default_speed_kmh: self.default_speed_kmh,
        })
    }
}

impl Default for TopologyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
