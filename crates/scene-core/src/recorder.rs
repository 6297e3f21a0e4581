//! Transition stream recording.
//!
//! Subscribes to every zone in a registry and turns crossings into
//! [`TransitionRecord`]s, tagged with the tick the driver announces before
//! each step. The headless runner serializes the collected records as
//! JSONL; tests assert on them directly.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use scene_events::{TransitionKind, TransitionRecord};

use crate::zones::{ZoneEvent, ZoneRegistry};

/// Collects zone crossings from an entire registry.
#[derive(Clone, Default)]
pub struct TransitionLog {
    tick: Rc<Cell<u64>>,
    records: Rc<RefCell<Vec<TransitionRecord>>>,
}

impl TransitionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Announces the tick that subsequent crossings belong to.
    pub fn set_tick(&self, tick: u64) {
        self.tick.set(tick);
    }

    /// Subscribes a recording listener to every zone currently in the
    /// registry.
    pub fn attach(&self, registry: &Rc<RefCell<ZoneRegistry>>) {
        let mut registry = registry.borrow_mut();
        let ids: Vec<_> = registry.iter().map(|z| z.id()).collect();
        for id in ids {
            let label = registry.zone(id).payload().label.clone();

            let tick = Rc::clone(&self.tick);
            let records = Rc::clone(&self.records);
            let enter_label = label.clone();
            registry.zone_mut(id).on_enter(Box::new(move |event| {
                let mut record = TransitionRecord::new(
                    tick.get(),
                    id.index(),
                    enter_label.clone(),
                    TransitionKind::Entered,
                );
                if let ZoneEvent::Entered(payload) = event {
                    if let Some(angle) = &payload.camera_angle {
                        record = record.with_camera_angle(angle.clone());
                    }
                }
                records.borrow_mut().push(record);
                Ok(())
            }));

            let tick = Rc::clone(&self.tick);
            let records = Rc::clone(&self.records);
            registry.zone_mut(id).on_exit(Box::new(move |_| {
                records.borrow_mut().push(TransitionRecord::new(
                    tick.get(),
                    id.index(),
                    label.clone(),
                    TransitionKind::Exited,
                ));
                Ok(())
            }));
        }
    }

    /// Snapshot of the records collected so far.
    pub fn records(&self) -> Vec<TransitionRecord> {
        self.records.borrow().clone()
    }

    /// Number of records collected so far.
    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}
