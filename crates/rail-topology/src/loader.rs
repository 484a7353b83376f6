//! Topology-file loading.
//!
//! # JSON format
//!
//! ```json
//! {
//!   "stations": [
//!     {"id": "S1", "name": "Central", "platforms": [{"id": "P1", "name": "1", "capacity": 1}]}
//!   ],
//!   "blocks": [
//!     {"id": "B1", "name": "Approach", "length_km": 1.0, "max_speed_kmh": 80.0,
//!      "adjacent_blocks": ["B2"], "station_id": null, "platform_id": null}
//!   ],
//!   "default_headway_sec": 120,
//!   "default_dwell_sec": 60,
//!   "default_speed_kmh": 80.0
//! }
//! ```
//!
//! Fields absent from the file fall back to [`TopologyBuilder`]'s defaults.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{TopologyError, TopologyResult};
use crate::topology::{BlockStatic, Platform, Station, Topology, TopologyBuilder};

#[derive(Deserialize)]
struct PlatformFile {
    id: String,
    name: String,
    capacity: u32,
}

#[derive(Deserialize)]
struct StationFile {
    id: String,
    name: String,
    #[serde(default)]
    platforms: Vec<PlatformFile>,
}

#[derive(Deserialize)]
struct BlockFile {
    id: String,
    name: String,
    length_km: f64,
    max_speed_kmh: f64,
    #[serde(default)]
    adjacent_blocks: Vec<String>,
    #[serde(default)]
    station_id: Option<String>,
    #[serde(default)]
    platform_id: Option<String>,
}

fn default_headway() -> u32 {
    120
}
fn default_dwell() -> u32 {
    60
}
fn default_speed() -> f64 {
    80.0
}

#[derive(Deserialize)]
struct TopologyFile {
    #[serde(default)]
    stations: Vec<StationFile>,
    blocks: Vec<BlockFile>,
    #[serde(default = "default_headway")]
    default_headway_sec: u32,
    #[serde(default = "default_dwell")]
    default_dwell_sec: u32,
    #[serde(default = "default_speed")]
    default_speed_kmh: f64,
}

/// Load and validate a topology from a JSON file on disk.
pub fn load_topology(path: &Path) -> TopologyResult<Topology> {
    let file = std::fs::File::open(path).map_err(TopologyError::Io)?;
    load_topology_reader(file)
}

/// Like [`load_topology`] but accepts any `Read` source — useful for tests.
pub fn load_topology_reader<R: Read>(mut reader: R) -> TopologyResult<Topology> {
    let mut buf = String::new();
    reader
        .read_to_string(&mut buf)
        .map_err(TopologyError::Io)?;
    load_topology_str(&buf)
}

/// Parse a topology from an in-memory JSON string.
pub fn load_topology_str(json: &str) -> TopologyResult<Topology> {
    let file: TopologyFile =
        serde_json::from_str(json).map_err(|e| TopologyError::Parse(e.to_string()))?;

    let mut builder = TopologyBuilder::new();
    builder
        .default_headway_sec(file.default_headway_sec)
        .default_dwell_sec(file.default_dwell_sec)
        .default_speed_kmh(file.default_speed_kmh);

    for s in file.stations {
        builder.add_station(Station {
            id: s.id,
            name: s.name,
            platforms: s
                .platforms
                .into_iter()
                .map(|p| Platform {
                    id: p.id,
                    name: p.name,
                    capacity: p.capacity,
                })
                .collect(),
        });
    }

    for b in file.blocks {
        builder.add_block(BlockStatic {
            id: b.id,
            name: b.name,
            length_km: b.length_km,
            max_speed_kmh: b.max_speed_kmh,
            adjacent_blocks: b.adjacent_blocks,
            station_id: b.station_id,
            platform_id: b.platform_id,
        });
    }

    builder.build()
}
