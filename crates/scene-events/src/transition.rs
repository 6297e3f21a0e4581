//! Zone transition records.
//!
//! One record per enter/exit crossing, written by the headless runner as
//! JSONL (one record per line) so external tools can replay a drive.
//!
//! # Example
//!
//! ```
//! use scene_events::{TransitionKind, TransitionRecord};
//!
//! let record = TransitionRecord::new(12, 0, "projects", TransitionKind::Entered)
//!     .with_camera_angle("projects");
//! assert_eq!(record.tick, 12);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a zone crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    /// Agent crossed from outside to inside.
    Entered,
    /// Agent crossed from inside to outside.
    Exited,
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionKind::Entered => write!(f, "in"),
            TransitionKind::Exited => write!(f, "out"),
        }
    }
}

/// A single enter/exit crossing, suitable for an append-only event log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// Tick on which the crossing was observed.
    pub tick: u64,
    /// Creation-order index of the zone.
    pub zone: usize,
    /// Zone label from its payload.
    pub label: String,
    /// Direction of the crossing.
    pub kind: TransitionKind,
    /// Camera preset carried by the payload, present on enter records only.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub camera_angle: Option<String>,
}

impl TransitionRecord {
    /// Creates a new record.
    pub fn new(tick: u64, zone: usize, label: impl Into<String>, kind: TransitionKind) -> Self {
        Self {
            tick,
            zone,
            label: label.into(),
            kind,
            camera_angle: None,
        }
    }

    /// Attaches the camera preset name.
    pub fn with_camera_angle(mut self, angle: impl Into<String>) -> Self {
        self.camera_angle = Some(angle.into());
        self
    }
}
