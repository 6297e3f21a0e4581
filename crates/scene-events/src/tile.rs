//! Path tiles connecting consecutive content sections.

use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// A straight traversable path segment between two sections, immutable
/// once built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// Start point of the segment.
    pub start: Vec2,
    /// Displacement from start to end.
    pub delta: Vec2,
}

impl Tile {
    /// Creates a tile from a start point and a displacement.
    pub fn new(start: Vec2, delta: Vec2) -> Self {
        Self { start, delta }
    }

    /// Creates a tile spanning from `start` to `end`.
    pub fn between(start: Vec2, end: Vec2) -> Self {
        Self {
            start,
            delta: end - start,
        }
    }

    /// End point of the segment.
    pub fn end(&self) -> Vec2 {
        self.start + self.delta
    }

    /// Length of the segment.
    pub fn length(&self) -> f32 {
        self.delta.length()
    }
}
