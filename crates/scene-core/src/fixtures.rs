//! Recording collaborators for tests and headless runs.
//!
//! The scene core talks to the outside world through three seams: the
//! camera rig, the uniform sink, and the agent provider. These fixtures
//! implement all three against in-memory state so a drive can be executed
//! and inspected without a renderer or a physics engine.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use scene_events::{AgentSample, Vec2};

use crate::camera::CameraRig;
use crate::effects::UniformSink;
use crate::scene::AgentProvider;

/// Camera rig that appends every applied preset to a shared log.
#[derive(Clone, Default)]
pub struct RecordingRig {
    log: Rc<RefCell<Vec<String>>>,
}

impl RecordingRig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the applied-preset log, in application order.
    pub fn log(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.log)
    }
}

impl CameraRig for RecordingRig {
    fn set_angle(&mut self, preset: &str) {
        self.log.borrow_mut().push(preset.to_string());
    }
}

/// Uniform sink that mirrors the latest value of every uniform.
#[derive(Clone, Default)]
pub struct RecordingSink {
    values: Rc<RefCell<BTreeMap<String, f32>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest value written for the named uniform, if any.
    pub fn value(&self, name: &str) -> Option<f32> {
        self.values.borrow().get(name).copied()
    }
}

impl UniformSink for RecordingSink {
    fn set_uniform(&mut self, name: &str, value: f32) {
        self.values.borrow_mut().insert(name.to_string(), value);
    }
}

/// Agent that drives along +x at a constant per-tick step.
pub struct StraightLineDriver {
    position: Vec2,
    step: f32,
}

impl StraightLineDriver {
    /// Creates a driver starting at `start`, moving `step` units along +x
    /// per tick.
    pub fn new(start: Vec2, step: f32) -> Self {
        Self {
            position: start,
            step,
        }
    }
}

impl AgentProvider for StraightLineDriver {
    fn sample(&mut self) -> AgentSample {
        self.position.x += self.step;
        AgentSample::new(self.position, self.step)
    }
}

/// Agent that replays a fixed list of samples, holding the last one once
/// the script runs out.
pub struct ScriptedDriver {
    samples: Vec<AgentSample>,
    cursor: usize,
}

impl ScriptedDriver {
    pub fn new(samples: Vec<AgentSample>) -> Self {
        assert!(!samples.is_empty(), "scripted driver needs samples");
        Self { samples, cursor: 0 }
    }
}

impl AgentProvider for ScriptedDriver {
    fn sample(&mut self) -> AgentSample {
        let sample = self.samples[self.cursor];
        if self.cursor + 1 < self.samples.len() {
            self.cursor += 1;
        }
        sample
    }
}
