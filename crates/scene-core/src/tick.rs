//! Logical tick scheduling and viewport watching.
//!
//! The scheduler decouples simulation state updates from rendering: the
//! render loop (or a headless driver) calls [`TickScheduler::advance`] once
//! per frame and every subscriber runs to completion before the call
//! returns. Nothing in the core overlaps or suspends.

use crate::bus::{Event, EventBus, Handler, HandlerError};

/// Payload of the single logical `tick` event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickEvent {
    /// Monotonically increasing tick counter, starting at 1 on the first
    /// advance.
    pub tick: u64,
    /// Time elapsed since the previous tick, in seconds.
    pub delta: f32,
    /// Total time elapsed since the scheduler was created, in seconds.
    pub elapsed: f32,
}

/// Subscription key for tick events. There is only one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    Tick,
}

impl Event for TickEvent {
    type Kind = TickKind;

    fn kind(&self) -> TickKind {
        TickKind::Tick
    }
}

/// Fires one logical `tick` per display refresh, or at a fixed configurable
/// rate for headless use.
pub struct TickScheduler {
    bus: EventBus<TickEvent>,
    tick: u64,
    elapsed: f32,
    fixed_delta: Option<f32>,
}

impl TickScheduler {
    /// Creates a scheduler driven by externally supplied frame deltas.
    pub fn new() -> Self {
        Self {
            bus: EventBus::new(),
            tick: 0,
            elapsed: 0.0,
            fixed_delta: None,
        }
    }

    /// Creates a scheduler that steps at a fixed rate (ticks per second).
    pub fn with_rate(ticks_per_second: f32) -> Self {
        let mut scheduler = Self::new();
        scheduler.fixed_delta = Some(1.0 / ticks_per_second);
        scheduler
    }

    /// Registers a tick handler.
    pub fn on_tick(&mut self, handler: Handler<TickEvent>) {
        self.bus.on(TickKind::Tick, handler);
    }

    /// Removes every tick handler.
    pub fn off(&mut self) {
        self.bus.off(TickKind::Tick);
    }

    /// Advances one tick with the given frame delta and dispatches the tick
    /// event. Returns the event so the driver can reuse the counter.
    pub fn advance(&mut self, delta: f32) -> Result<TickEvent, HandlerError> {
        self.tick += 1;
        self.elapsed += delta;
        let event = TickEvent {
            tick: self.tick,
            delta,
            elapsed: self.elapsed,
        };
        self.bus.trigger(&event)?;
        Ok(event)
    }

    /// Advances one fixed-rate step. Falls back to a 60 Hz delta when no
    /// rate was configured.
    pub fn step(&mut self) -> Result<TickEvent, HandlerError> {
        let delta = self.fixed_delta.unwrap_or(1.0 / 60.0);
        self.advance(delta)
    }

    /// Current tick count.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Total elapsed time in seconds.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// The fixed per-step delta, if one was configured.
    pub fn fixed_delta(&self) -> Option<f32> {
        self.fixed_delta
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Payload of the `resize` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeEvent {
    pub width: u32,
    pub height: u32,
}

/// Subscription key for resize events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeKind {
    Resize,
}

impl Event for ResizeEvent {
    type Kind = ResizeKind;

    fn kind(&self) -> ResizeKind {
        ResizeKind::Resize
    }
}

/// Thin wrapper over viewport size sampling.
///
/// Fires `resize` only when the observed width/height actually differ from
/// the previous sample, so subscribers never see redundant events.
pub struct ViewportWatcher {
    bus: EventBus<ResizeEvent>,
    last: Option<(u32, u32)>,
}

impl ViewportWatcher {
    /// Creates a watcher with no recorded size.
    pub fn new() -> Self {
        Self {
            bus: EventBus::new(),
            last: None,
        }
    }

    /// Registers a resize handler.
    pub fn on_resize(&mut self, handler: Handler<ResizeEvent>) {
        self.bus.on(ResizeKind::Resize, handler);
    }

    /// Removes every resize handler.
    pub fn off(&mut self) {
        self.bus.off(ResizeKind::Resize);
    }

    /// Feeds an observed viewport size. Returns whether a resize event was
    /// dispatched.
    pub fn sample(&mut self, width: u32, height: u32) -> Result<bool, HandlerError> {
        if self.last == Some((width, height)) {
            return Ok(false);
        }
        self.last = Some((width, height));
        self.bus.trigger(&ResizeEvent { width, height })?;
        Ok(true)
    }

    /// The most recently observed size.
    pub fn current(&self) -> Option<(u32, u32)> {
        self.last
    }
}

impl Default for ViewportWatcher {
    fn default() -> Self {
        Self::new()
    }
}
