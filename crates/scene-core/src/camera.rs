//! Camera preset state machine.
//!
//! Maps zone events to named camera presets and applies the transition to
//! the external renderer synchronously, through the [`CameraRig`] seam. The
//! machine holds exactly one active preset at a time.
//!
//! Known caveat, kept on purpose: any zone exit reverts to `"default"`
//! without checking whether another zone is still active. With overlapping
//! zones this produces a spurious default transition when leaving the inner
//! zone. The one-active-preset model is that simple by design; see the
//! layout builder docs for how overlap arises.

/// Name of the implicit initial preset.
pub const DEFAULT_PRESET: &str = "default";

/// Seam to the external renderer's camera.
///
/// The core only ever sets a named angle; framing math lives on the other
/// side of this trait.
pub trait CameraRig {
    /// Applies the named camera configuration.
    fn set_angle(&mut self, preset: &str);
}

/// One-active-preset state machine over string-keyed camera presets.
pub struct CameraStateMachine {
    rig: Box<dyn CameraRig>,
    presets: Vec<String>,
    active: String,
}

impl CameraStateMachine {
    /// Creates the machine in the `"default"` state and applies it to the
    /// rig immediately.
    pub fn new(mut rig: Box<dyn CameraRig>) -> Self {
        rig.set_angle(DEFAULT_PRESET);
        Self {
            rig,
            presets: vec![DEFAULT_PRESET.to_string()],
            active: DEFAULT_PRESET.to_string(),
        }
    }

    /// Registers a preset name ahead of time. Registration is idempotent;
    /// activating an unknown preset registers it on the fly.
    pub fn register_preset(&mut self, name: &str) {
        if !self.presets.iter().any(|p| p == name) {
            self.presets.push(name.to_string());
        }
    }

    /// Transitions to the named preset and applies it to the rig. Within a
    /// tick the last caller wins.
    pub fn activate(&mut self, preset: &str) {
        self.register_preset(preset);
        if self.active != preset {
            tracing::debug!(from = %self.active, to = %preset, "camera preset change");
        }
        self.active = preset.to_string();
        self.rig.set_angle(preset);
    }

    /// Reverts to `"default"`, unconditionally.
    pub fn revert(&mut self) {
        self.activate(DEFAULT_PRESET);
    }

    /// Currently active preset name.
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Registered preset names, `"default"` first, then registration order.
    pub fn presets(&self) -> &[String] {
        &self.presets
    }
}
