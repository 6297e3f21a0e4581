//! Animated title strip.
//!
//! Renders a fixed-width strip of underscores with a vehicle glyph whose
//! position tracks the agent's accumulated forward travel, wrapping around
//! at the strip width. Intended for a browser tab title or any other
//! single-line display. The accumulated position never goes below zero, so
//! reversing at the start of a drive parks the glyph at the right edge
//! instead of wrapping backwards.

use serde::{Deserialize, Serialize};

/// Marquee tuning, loaded from the `[marquee]` config section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarqueeConfig {
    /// Strip width in underscore cells.
    pub width: usize,
    /// Glyph rendered at the travel position.
    pub glyph: String,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            width: 20,
            glyph: "🚗".to_string(),
        }
    }
}

/// Travel-driven title strip.
pub struct TitleMarquee {
    config: MarqueeConfig,
    absolute_position: f32,
}

impl TitleMarquee {
    /// Creates a marquee parked at position zero.
    pub fn new(config: MarqueeConfig) -> Self {
        Self {
            config,
            absolute_position: 0.0,
        }
    }

    /// Feeds one tick of forward speed.
    pub fn observe(&mut self, forward_speed: f32) {
        self.absolute_position += forward_speed;
        if self.absolute_position < 0.0 {
            self.absolute_position = 0.0;
        }
    }

    /// Current glyph cell, wrapped to the strip width.
    pub fn position(&self) -> usize {
        let width = self.config.width as f32;
        ((self.absolute_position % width).round() as usize).min(self.config.width)
    }

    /// Renders the strip; the glyph moves right-to-left as travel grows.
    pub fn render(&self) -> String {
        let position = self.position();
        format!(
            "{}{}{}",
            "_".repeat(self.config.width - position),
            self.config.glyph,
            "_".repeat(position)
        )
    }

    /// Accumulated non-negative travel.
    pub fn absolute_position(&self) -> f32 {
        self.absolute_position
    }
}
