//! Scene coordination core: spatial triggers, camera presets, effect fades.
//!
//! The core keeps camera framing, post-processing intensity, and narrative
//! triggers synchronized with a car driving through a large, sparse world.
//! Rendering and physics stay outside; the core talks to them through the
//! [`camera::CameraRig`], [`effects::UniformSink`], and
//! [`scene::AgentProvider`] seams.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────┐  tick   ┌──────────────┐  in/out   ┌────────────────────┐
//! │ physics │ ──────▶ │ ZoneRegistry │ ────────▶ │ CameraStateMachine │
//! └─────────┘         └──────────────┘     │     ├────────────────────┤
//!                                          └───▶ │   EffectAnimator   │
//!                                                └────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`bus`]: Typed publish/subscribe primitive used by every component
//! - [`tick`]: Tick scheduling and viewport resize watching
//! - [`zones`]: Trigger zones and per-tick containment evaluation
//! - [`camera`]: Camera preset state machine
//! - [`effects`]: Post-processing parameter animation
//! - [`layout`]: Procedural section/tile layout
//! - [`recorder`]: Transition stream recording for logs and tests
//! - [`journey`]: Distance-triggered narrative prompt
//! - [`marquee`]: Travel-driven title strip
//! - [`scene`]: Wiring of all of the above
//! - [`config`]: TOML configuration
//! - [`fixtures`]: Recording collaborators for tests and headless runs

pub mod bus;
pub mod camera;
pub mod config;
pub mod effects;
pub mod fixtures;
pub mod journey;
pub mod layout;
pub mod marquee;
pub mod recorder;
pub mod scene;
pub mod tick;
pub mod zones;

// Re-export bus types
pub use bus::{Event, EventBus, Handler, HandlerError};

// Re-export tick types
pub use tick::{ResizeEvent, ResizeKind, TickEvent, TickKind, TickScheduler, ViewportWatcher};

// Re-export zone types
pub use zones::{Zone, ZoneError, ZoneEvent, ZoneEventKind, ZoneId, ZoneRegistry};

// Re-export camera types
pub use camera::{CameraRig, CameraStateMachine, DEFAULT_PRESET};

// Re-export effect types
pub use effects::{EffectAnimator, EffectsConfig, ParamId, UniformSink};

// Re-export layout types
pub use layout::{
    build_layout, default_sections, LayoutConfig, PlacedSection, SectionDescriptor, WorldLayout,
};

// Re-export journey and marquee types
pub use journey::{JourneyConfig, JourneyPrompt};
pub use marquee::{MarqueeConfig, TitleMarquee};

// Re-export recorder types
pub use recorder::TransitionLog;

// Re-export scene types
pub use scene::{AgentProvider, Scene, SceneError, BLUR_X_UNIFORM, BLUR_Y_UNIFORM};

// Re-export config types
pub use config::{default_config_toml, ConfigError, SceneConfig};
