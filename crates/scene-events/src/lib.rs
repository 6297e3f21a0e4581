//! Shared data types for the showroom scene core.
//!
//! This crate contains pure data structures with no coordination logic.
//! It is a dependency for all other crates in the workspace.

pub mod agent;
pub mod math;
pub mod payload;
pub mod tile;
pub mod transition;

// Re-export math types
pub use math::Vec2;

// Re-export agent types
pub use agent::AgentSample;

// Re-export payload types
pub use payload::ZonePayload;

// Re-export tile types
pub use tile::Tile;

// Re-export transition types
pub use transition::{TransitionKind, TransitionRecord};
