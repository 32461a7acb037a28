//! JSON layout files (`sensors.json`).
//!
//! ```json
//! { "broadcast_radius": 70, "coverage_radius": 50,
//!   "sensors": [ { "x": 120, "y": 80, "fence": false } ] }
//! ```
//!
//! `fence` is always written; files without it load with `fence: false`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardConfig, Marker};
use crate::error::{BoardError, BoardResult};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SensorRecord {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub fence: bool,
}

impl From<&Marker> for SensorRecord {
    fn from(m: &Marker) -> Self {
        Self {
            x: m.position.x,
            y: m.position.y,
            fence: m.fence,
        }
    }
}

impl From<SensorRecord> for Marker {
    fn from(r: SensorRecord) -> Self {
        Self {
            position: Vec2::new(r.x, r.y),
            fence: r.fence,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub broadcast_radius: f32,
    pub coverage_radius: f32,
    pub sensors: Vec<SensorRecord>,
}

impl Snapshot {
    pub fn from_json(text: &str) -> BoardResult<Self> {
        let snapshot: Snapshot = serde_json::from_str(text).map_err(BoardError::Parse)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn to_json(&self) -> BoardResult<String> {
        serde_json::to_string_pretty(self).map_err(BoardError::Encode)
    }

    pub fn config(&self) -> BoardConfig {
        BoardConfig {
            broadcast_radius: self.broadcast_radius,
            coverage_radius: self.coverage_radius,
        }
    }

    fn validate(&self) -> BoardResult<()> {
        check_radius("broadcast_radius", self.broadcast_radius)?;
        check_radius("coverage_radius", self.coverage_radius)?;
        if let Some(index) = self
            .sensors
            .iter()
            .position(|s| !(s.x.is_finite() && s.y.is_finite()))
        {
            return Err(BoardError::InvalidPosition { index });
        }
        Ok(())
    }
}

fn check_radius(name: &'static str, value: f32) -> BoardResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(BoardError::InvalidRadius { name, value })
    }
}

impl Board {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            broadcast_radius: self.config.broadcast_radius,
            coverage_radius: self.config.coverage_radius,
            sensors: self.markers.iter().map(SensorRecord::from).collect(),
        }
    }

    pub fn restore(&mut self, snapshot: Snapshot) {
        let config = snapshot.config();
        let markers = snapshot.sensors.into_iter().map(Marker::from).collect();
        self.replace(markers, config);
    }

    pub fn to_json(&self) -> BoardResult<String> {
        self.snapshot().to_json()
    }

    /// Parse and restore. On error the board is left as it was.
    pub fn load_json(&mut self, text: &str) -> BoardResult<()> {
        let snapshot = Snapshot::from_json(text)?;
        log::info!(
            "[board] restored {} sensors (broadcast={:.1} coverage={:.1})",
            snapshot.sensors.len(),
            snapshot.broadcast_radius,
            snapshot.coverage_radius
        );
        self.restore(snapshot);
        Ok(())
    }
}
