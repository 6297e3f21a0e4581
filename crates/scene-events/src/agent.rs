//! Per-tick snapshot of the driven agent.

use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// Read-only snapshot of the agent, pulled from the physics collaborator
/// once per tick. The core never writes back into physics state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentSample {
    /// Ground-plane position of the agent.
    pub position: Vec2,
    /// Signed forward speed, in world units per tick. Negative when
    /// reversing.
    pub forward_speed: f32,
}

impl AgentSample {
    /// Creates a new sample.
    pub fn new(position: Vec2, forward_speed: f32) -> Self {
        Self {
            position,
            forward_speed,
        }
    }

    /// A stationary sample at the given position.
    pub fn at(x: f32, y: f32) -> Self {
        Self::new(Vec2::new(x, y), 0.0)
    }
}
