//! Post-processing parameter animation.
//!
//! Smoothly drives numeric render uniforms toward target values without
//! visible discontinuities. The critical invariant: retargeting an in-flight
//! animation restarts it from the parameter's current interpolated value,
//! never from the old target, so a retarget can never cause a jump.
//!
//! Interpolation is linear in time and independent per parameter. All
//! active animations are advanced once per tick, before any tick-dependent
//! consumer reads the now-current values.

use serde::{Deserialize, Serialize};

use scene_events::math::lerp;

/// Seam to the renderer's uniform table. The animator writes, the renderer
/// reads.
pub trait UniformSink {
    /// Sets the named scalar uniform.
    fn set_uniform(&mut self, name: &str, value: f32);
}

/// Handle to a tracked parameter, stable for the animator's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamId(usize);

/// Blur/focus tuning, loaded from the `[effects]` config section.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Blur strength applied while no focus zone is active.
    pub ambient_blur: f32,
    /// Seconds a focus fade takes, in either direction.
    pub focus_duration: f32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            ambient_blur: 1.0,
            focus_duration: 2.0,
        }
    }
}

struct AnimatedParameter {
    name: String,
    current: f32,
    from: f32,
    target: f32,
    duration: f32,
    elapsed: f32,
    active: bool,
}

/// Interpolates tracked parameters toward target values over time.
pub struct EffectAnimator {
    sink: Box<dyn UniformSink>,
    params: Vec<AnimatedParameter>,
}

impl EffectAnimator {
    /// Creates an animator writing through the given sink.
    pub fn new(sink: Box<dyn UniformSink>) -> Self {
        Self {
            sink,
            params: Vec::new(),
        }
    }

    /// Registers a parameter and writes its initial value through the sink.
    pub fn track(&mut self, name: &str, initial: f32) -> ParamId {
        let id = ParamId(self.params.len());
        self.sink.set_uniform(name, initial);
        self.params.push(AnimatedParameter {
            name: name.to_string(),
            current: initial,
            from: initial,
            target: initial,
            duration: 0.0,
            elapsed: 0.0,
            active: false,
        });
        id
    }

    /// Starts (or replaces) an animation toward `target` over `duration`
    /// seconds. The animation begins at the parameter's current
    /// interpolated value, which is what makes retargeting continuous. A
    /// non-positive duration completes on the next advance.
    pub fn animate_to(&mut self, id: ParamId, target: f32, duration: f32) {
        let param = &mut self.params[id.0];
        param.from = param.current;
        param.target = target;
        param.duration = duration;
        param.elapsed = 0.0;
        param.active = true;
    }

    /// Advances every active animation by `delta` seconds and writes the
    /// new current values through the sink. Animations that reach their
    /// target are retired; the value then stays at the target until the
    /// parameter is retargeted.
    pub fn advance(&mut self, delta: f32) {
        for param in self.params.iter_mut().filter(|p| p.active) {
            param.elapsed += delta;
            let t = if param.duration <= 0.0 {
                1.0
            } else {
                (param.elapsed / param.duration).min(1.0)
            };
            param.current = lerp(param.from, param.target, t);
            if t >= 1.0 {
                // Land exactly on the target, never overshoot.
                param.current = param.target;
                param.active = false;
            }
            self.sink.set_uniform(&param.name, param.current);
        }
    }

    /// Current interpolated value of a parameter.
    pub fn current(&self, id: ParamId) -> f32 {
        self.params[id.0].current
    }

    /// Whether an animation is in flight for the parameter.
    pub fn is_animating(&self, id: ParamId) -> bool {
        self.params[id.0].active
    }

    /// Number of animations currently in flight.
    pub fn active_count(&self) -> usize {
        self.params.iter().filter(|p| p.active).count()
    }
}
