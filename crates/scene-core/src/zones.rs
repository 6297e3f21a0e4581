//! Trigger zones and per-tick containment evaluation.
//!
//! A zone is an axis-aligned rectangle in the ground plane. The registry
//! owns every zone, re-evaluates agent containment once per tick, and turns
//! state changes into `in`/`out` events on each zone's own bus. Containment
//! is a closed box test: a point exactly on the boundary is inside.
//!
//! Evaluation walks zones in creation order. With overlapping zones this
//! makes the later-created zone's enter handler run last, which is what
//! gives the camera state machine its last-writer-wins behavior.
//!
//! The scan is O(zone count) per tick. Zone counts here are tens, not
//! thousands, so a spatial index would buy nothing.

use thiserror::Error;

use scene_events::{Vec2, ZonePayload};

use crate::bus::{Event, EventBus, Handler, HandlerError};

/// Zone event delivered to that zone's listeners only.
#[derive(Debug, Clone, PartialEq)]
pub enum ZoneEvent {
    /// Agent crossed from outside to inside; carries the zone's payload.
    Entered(ZonePayload),
    /// Agent crossed from inside to outside.
    Exited,
}

/// Subscription key for zone events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneEventKind {
    Entered,
    Exited,
}

impl Event for ZoneEvent {
    type Kind = ZoneEventKind;

    fn kind(&self) -> ZoneEventKind {
        match self {
            ZoneEvent::Entered(_) => ZoneEventKind::Entered,
            ZoneEvent::Exited => ZoneEventKind::Exited,
        }
    }
}

/// Stable handle to a registered zone. Indexes the registry in creation
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoneId(usize);

impl ZoneId {
    /// Creation-order index of the zone.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Errors raised at zone registration time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ZoneError {
    /// Half extents must be strictly positive in both axes.
    #[error("zone half extents must be positive, got ({x}, {y})")]
    InvalidExtents { x: f32, y: f32 },
}

/// An axis-aligned rectangular trigger region.
///
/// Geometry and payload are immutable after registration; the only mutable
/// state is the live containment flag, owned by the registry's evaluation
/// step.
pub struct Zone {
    id: ZoneId,
    center: Vec2,
    half_extents: Vec2,
    payload: ZonePayload,
    inside: bool,
    bus: EventBus<ZoneEvent>,
}

impl Zone {
    fn new(id: ZoneId, center: Vec2, half_extents: Vec2, payload: ZonePayload) -> Self {
        Self {
            id,
            center,
            half_extents,
            payload,
            inside: false,
            bus: EventBus::new(),
        }
    }

    /// Closed box test, axis-aligned, no rotation.
    pub fn contains(&self, point: Vec2) -> bool {
        (point.x - self.center.x).abs() <= self.half_extents.x
            && (point.y - self.center.y).abs() <= self.half_extents.y
    }

    /// Registers an enter handler.
    pub fn on_enter(&mut self, handler: Handler<ZoneEvent>) {
        self.bus.on(ZoneEventKind::Entered, handler);
    }

    /// Registers an exit handler.
    pub fn on_exit(&mut self, handler: Handler<ZoneEvent>) {
        self.bus.on(ZoneEventKind::Exited, handler);
    }

    /// Removes every handler for the given kind.
    pub fn off(&mut self, kind: ZoneEventKind) {
        self.bus.off(kind);
    }

    pub fn id(&self) -> ZoneId {
        self.id
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn half_extents(&self) -> Vec2 {
        self.half_extents
    }

    pub fn payload(&self) -> &ZonePayload {
        &self.payload
    }

    /// Whether the agent was inside this zone on the last evaluation.
    pub fn is_inside(&self) -> bool {
        self.inside
    }
}

/// Owns all trigger zones and evaluates agent containment each tick.
pub struct ZoneRegistry {
    zones: Vec<Zone>,
}

impl ZoneRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self { zones: Vec::new() }
    }

    /// Registers a new zone. Fails on non-positive half extents; the caller
    /// must not proceed with a half-built zone.
    pub fn add_zone(
        &mut self,
        center: Vec2,
        half_extents: Vec2,
        payload: ZonePayload,
    ) -> Result<ZoneId, ZoneError> {
        if half_extents.x <= 0.0 || half_extents.y <= 0.0 {
            return Err(ZoneError::InvalidExtents {
                x: half_extents.x,
                y: half_extents.y,
            });
        }
        let id = ZoneId(self.zones.len());
        self.zones.push(Zone::new(id, center, half_extents, payload));
        Ok(id)
    }

    /// Re-evaluates every zone against the agent position, in creation
    /// order. Emits `in` on an outside-to-inside crossing and `out` on the
    /// reverse; an unchanged state emits nothing, so repeated evaluation at
    /// the same position is idempotent.
    pub fn evaluate(&mut self, position: Vec2) -> Result<(), HandlerError> {
        for zone in self.zones.iter_mut() {
            let inside = zone.contains(position);
            if inside == zone.inside {
                continue;
            }
            zone.inside = inside;
            if inside {
                tracing::debug!(
                    zone = zone.id.index(),
                    label = %zone.payload.label,
                    "agent entered zone"
                );
                let event = ZoneEvent::Entered(zone.payload.clone());
                zone.bus.trigger(&event)?;
            } else {
                tracing::debug!(
                    zone = zone.id.index(),
                    label = %zone.payload.label,
                    "agent exited zone"
                );
                zone.bus.trigger(&ZoneEvent::Exited)?;
            }
        }
        Ok(())
    }

    /// Borrow a zone by id.
    pub fn zone(&self, id: ZoneId) -> &Zone {
        &self.zones[id.0]
    }

    /// Mutably borrow a zone by id, e.g. to attach handlers.
    pub fn zone_mut(&mut self, id: ZoneId) -> &mut Zone {
        &mut self.zones[id.0]
    }

    /// Zones in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Zone> {
        self.zones.iter()
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Removes every handler from every zone. Containment state is kept;
    /// only the subscriptions go away.
    pub fn clear_listeners(&mut self) {
        for zone in self.zones.iter_mut() {
            zone.bus.clear();
        }
    }
}

impl Default for ZoneRegistry {
    fn default() -> Self {
        Self::new()
    }
}
