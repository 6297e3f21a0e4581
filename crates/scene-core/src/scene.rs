//! Scene wiring.
//!
//! Owns every core component, builds the world layout at construction, and
//! connects the zone event stream to its consumers: zone enter events drive
//! the camera state machine and start focus fades on the effect animator,
//! zone exits revert both. One [`Scene::step`] call is one logical tick.
//!
//! Everything runs single-threaded and synchronously; the `Rc<RefCell<..>>`
//! handles exist so zone handlers can reach the camera machine and animator
//! without the registry owning them.

use std::cell::RefCell;
use std::rc::Rc;

use rand::Rng;
use thiserror::Error;

use scene_events::AgentSample;

use crate::bus::{Handler, HandlerError};
use crate::camera::{CameraRig, CameraStateMachine};
use crate::config::{ConfigError, SceneConfig};
use crate::effects::{EffectAnimator, ParamId, UniformSink};
use crate::journey::JourneyPrompt;
use crate::layout::{build_layout, SectionDescriptor, WorldLayout};
use crate::marquee::TitleMarquee;
use crate::tick::{TickEvent, TickScheduler, ViewportWatcher};
use crate::zones::{ZoneError, ZoneEvent, ZoneRegistry};

/// Horizontal blur strength uniform driven by focus zones.
pub const BLUR_X_UNIFORM: &str = "u_blur_strength_x";
/// Vertical blur strength uniform driven by focus zones.
pub const BLUR_Y_UNIFORM: &str = "u_blur_strength_y";

/// Seam to the physics collaborator: one read per tick, no writes back.
pub trait AgentProvider {
    /// Samples the agent's current position and forward speed.
    fn sample(&mut self) -> AgentSample;
}

/// Errors surfaced by scene construction and stepping.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("zone error: {0}")]
    Zone(#[from] ZoneError),
    #[error("handler error: {0}")]
    Handler(#[from] HandlerError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// The assembled scene coordination core.
pub struct Scene {
    config: SceneConfig,
    scheduler: TickScheduler,
    viewport: ViewportWatcher,
    registry: Rc<RefCell<ZoneRegistry>>,
    camera: Rc<RefCell<CameraStateMachine>>,
    effects: Rc<RefCell<EffectAnimator>>,
    journey: JourneyPrompt,
    marquee: TitleMarquee,
    agent: Box<dyn AgentProvider>,
    layout: WorldLayout,
    last_sample: Option<AgentSample>,
}

impl Scene {
    /// Builds the world from `sections`, registers one zone per section,
    /// and wires camera and effect reactions to the zone event stream.
    pub fn new(
        config: SceneConfig,
        sections: &[SectionDescriptor],
        rng: &mut impl Rng,
        agent: Box<dyn AgentProvider>,
        rig: Box<dyn CameraRig>,
        sink: Box<dyn UniformSink>,
    ) -> Result<Self, SceneError> {
        let mut registry = ZoneRegistry::new();
        let layout = build_layout(sections, &config.layout, rng, &mut registry)?;

        let mut camera = CameraStateMachine::new(rig);
        for section in sections {
            if let Some(angle) = &section.camera_angle {
                camera.register_preset(angle);
            }
        }
        let camera = Rc::new(RefCell::new(camera));

        let mut animator = EffectAnimator::new(sink);
        let blur_x = animator.track(BLUR_X_UNIFORM, config.effects.ambient_blur);
        let blur_y = animator.track(BLUR_Y_UNIFORM, config.effects.ambient_blur);
        let effects = Rc::new(RefCell::new(animator));

        let registry = Rc::new(RefCell::new(registry));
        wire_zone_reactions(
            &registry,
            &layout,
            &camera,
            &effects,
            (blur_x, blur_y),
            config.effects.ambient_blur,
            config.effects.focus_duration,
        );

        Ok(Self {
            scheduler: TickScheduler::new(),
            viewport: ViewportWatcher::new(),
            journey: JourneyPrompt::new(config.journey),
            marquee: TitleMarquee::new(config.marquee.clone()),
            config,
            registry,
            camera,
            effects,
            agent,
            layout,
            last_sample: None,
        })
    }

    /// Runs one logical tick: pull one agent sample, fire the tick bus,
    /// re-evaluate zone containment (camera and effect reactions run from
    /// the zone buses), advance in-flight effect animations, then feed the
    /// travel-driven extras.
    pub fn step(&mut self, delta: f32) -> Result<TickEvent, SceneError> {
        let sample = self.agent.sample();
        self.last_sample = Some(sample);

        let event = self.scheduler.advance(delta)?;
        self.registry.borrow_mut().evaluate(sample.position)?;
        self.effects.borrow_mut().advance(delta);
        self.journey.observe(sample.forward_speed);
        self.marquee.observe(sample.forward_speed);
        Ok(event)
    }

    /// Registers an external tick listener (UI, narrative, debug...). The
    /// core does not know who subscribes.
    pub fn on_tick(&mut self, handler: Handler<TickEvent>) {
        self.scheduler.on_tick(handler);
    }

    /// Removes every subscription from every bus so nothing keeps closures
    /// over destroyed renderer objects alive.
    pub fn teardown(&mut self) {
        self.scheduler.off();
        self.viewport.off();
        self.registry.borrow_mut().clear_listeners();
    }

    /// Shared handle to the zone registry, e.g. to attach external zone
    /// listeners.
    pub fn registry(&self) -> Rc<RefCell<ZoneRegistry>> {
        Rc::clone(&self.registry)
    }

    /// Shared handle to the effect animator.
    pub fn effects(&self) -> Rc<RefCell<EffectAnimator>> {
        Rc::clone(&self.effects)
    }

    /// Currently active camera preset name.
    pub fn active_preset(&self) -> String {
        self.camera.borrow().active().to_string()
    }

    /// The built world layout.
    pub fn layout(&self) -> &WorldLayout {
        &self.layout
    }

    /// Viewport watcher for resize sampling.
    pub fn viewport_mut(&mut self) -> &mut ViewportWatcher {
        &mut self.viewport
    }

    /// Journey prompt state.
    pub fn journey(&self) -> &JourneyPrompt {
        &self.journey
    }

    pub fn journey_mut(&mut self) -> &mut JourneyPrompt {
        &mut self.journey
    }

    /// Title marquee state.
    pub fn marquee(&self) -> &TitleMarquee {
        &self.marquee
    }

    /// Current tick count.
    pub fn tick(&self) -> u64 {
        self.scheduler.tick()
    }

    /// The sample read on the most recent step.
    pub fn last_sample(&self) -> Option<AgentSample> {
        self.last_sample
    }

    /// The configuration the scene was built with.
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }
}

/// Attaches the camera and effect reactions to every section zone.
#[allow(clippy::too_many_arguments)]
fn wire_zone_reactions(
    registry: &Rc<RefCell<ZoneRegistry>>,
    layout: &WorldLayout,
    camera: &Rc<RefCell<CameraStateMachine>>,
    effects: &Rc<RefCell<EffectAnimator>>,
    blur: (ParamId, ParamId),
    ambient_blur: f32,
    focus_duration: f32,
) {
    let mut registry = registry.borrow_mut();
    for placed in &layout.sections {
        let zone_focus = registry.zone(placed.zone).payload().focus;

        let enter_camera = Rc::clone(camera);
        let enter_effects = Rc::clone(effects);
        registry
            .zone_mut(placed.zone)
            .on_enter(Box::new(move |event| {
                if let ZoneEvent::Entered(payload) = event {
                    if let Some(angle) = &payload.camera_angle {
                        enter_camera.borrow_mut().activate(angle);
                    }
                    if payload.focus {
                        let mut fx = enter_effects.borrow_mut();
                        fx.animate_to(blur.0, 0.0, focus_duration);
                        fx.animate_to(blur.1, 0.0, focus_duration);
                    }
                }
                Ok(())
            }));

        let exit_camera = Rc::clone(camera);
        let exit_effects = Rc::clone(effects);
        registry.zone_mut(placed.zone).on_exit(Box::new(move |_| {
            // Revert unconditionally: with overlapping zones this can
            // produce a spurious default transition, a documented caveat of
            // the one-active-preset model.
            exit_camera.borrow_mut().revert();
            if zone_focus {
                let mut fx = exit_effects.borrow_mut();
                fx.animate_to(blur.0, ambient_blur, focus_duration);
                fx.animate_to(blur.1, ambient_blur, focus_duration);
            }
            Ok(())
        }));
    }
}
