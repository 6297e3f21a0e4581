//! Zone payload data.
//!
//! A payload is attached to a zone at registration time and delivered to
//! enter listeners verbatim. It carries everything the camera state machine
//! and effect animator need to react to a crossing.

use serde::{Deserialize, Serialize};

/// Data attached to a trigger zone, immutable after registration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ZonePayload {
    /// Human-readable label, used in logs and the transition record stream.
    pub label: String,
    /// Camera preset to activate while the agent is inside, if any.
    pub camera_angle: Option<String>,
    /// When true, entering the zone fades post-processing blur to zero and
    /// exiting restores the ambient strength.
    pub focus: bool,
}

impl ZonePayload {
    /// Creates a payload with only a label.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Sets the camera preset name.
    pub fn with_camera_angle(mut self, angle: impl Into<String>) -> Self {
        self.camera_angle = Some(angle.into());
        self
    }

    /// Marks the zone as a focus zone.
    pub fn with_focus(mut self) -> Self {
        self.focus = true;
        self
    }
}
