//! Distance-triggered narrative prompt.
//!
//! Watches the agent's forward speed each tick and, once enough ground has
//! been covered, fires a one-shot prompt, e.g. to offer a tutorial dialog
//! after the visitor has driven around for a while. The threshold scales
//! with how many times the prompt has already been seen, so returning
//! visitors have to drive further before being asked again.

use serde::{Deserialize, Serialize};

/// Journey prompt tuning, loaded from the `[journey]` config section.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct JourneyConfig {
    /// Base distance the agent must travel before the prompt first fires.
    pub min_distance: f32,
    /// Number of messages the prompt steps through.
    pub message_count: usize,
}

impl Default for JourneyConfig {
    fn default() -> Self {
        Self {
            min_distance: 75.0,
            message_count: 4,
        }
    }
}

/// One-shot prompt driven by accumulated travel distance.
pub struct JourneyPrompt {
    config: JourneyConfig,
    traveled: f32,
    threshold: f32,
    seen_count: u32,
    shown: bool,
    prevented: bool,
    step: usize,
}

impl JourneyPrompt {
    /// Creates a prompt that has never been seen.
    pub fn new(config: JourneyConfig) -> Self {
        Self::with_seen_count(config, 0)
    }

    /// Creates a prompt for a visitor who has already seen it `seen_count`
    /// times; the trigger threshold grows accordingly.
    pub fn with_seen_count(config: JourneyConfig, seen_count: u32) -> Self {
        Self {
            threshold: config.min_distance * (seen_count + 1) as f32,
            config,
            traveled: 0.0,
            seen_count,
            shown: false,
            prevented: false,
            step: 0,
        }
    }

    /// Feeds one tick of forward speed. Returns true exactly once, on the
    /// tick the prompt should be shown.
    pub fn observe(&mut self, forward_speed: f32) -> bool {
        self.traveled += forward_speed;
        if self.prevented || self.shown || self.traveled <= self.threshold {
            return false;
        }
        self.shown = true;
        self.seen_count += 1;
        tracing::info!(
            traveled = self.traveled,
            seen_count = self.seen_count,
            "journey prompt triggered"
        );
        true
    }

    /// Advances to the next message, saturating at the last one.
    pub fn next(&mut self) {
        if self.step < self.config.message_count {
            self.step += 1;
        }
    }

    /// Permanently suppresses the prompt (the visitor opted out).
    pub fn dismiss_forever(&mut self) {
        self.prevented = true;
    }

    /// Total distance accumulated so far.
    pub fn traveled(&self) -> f32 {
        self.traveled
    }

    /// Whether the prompt has been shown this session.
    pub fn shown(&self) -> bool {
        self.shown
    }

    /// How many times the prompt has been seen, including this session.
    pub fn seen_count(&self) -> u32 {
        self.seen_count
    }

    /// Index of the current message.
    pub fn step(&self) -> usize {
        self.step
    }
}
