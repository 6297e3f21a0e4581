//! Typed publish/subscribe primitive.
//!
//! Every component in the core owns its own bus instead of reaching for an
//! ambient global emitter. Handlers are dispatched synchronously in
//! registration order, and a whole event kind can be unsubscribed in one
//! call so scene teardown never leaks closures over destroyed renderer
//! objects.
//!
//! There is deliberately no error isolation: the first handler that fails
//! aborts the remaining dispatch for that trigger call and the error
//! propagates to the tick driver. Swallowing it would hide scheduling bugs.

use std::fmt;
use thiserror::Error;

/// A value that can be published on an [`EventBus`].
///
/// `Kind` is the subscription key: handlers register for a kind and receive
/// every event whose [`Event::kind`] matches.
pub trait Event {
    /// Subscription key type.
    type Kind: Copy + Eq + fmt::Debug;

    /// The kind of this particular event value.
    fn kind(&self) -> Self::Kind;
}

/// Error returned by a failing event handler.
///
/// Carries a message only; the bus does not interpret it, it just stops
/// dispatching and hands it back to whoever triggered the event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("event handler failed: {message}")]
pub struct HandlerError {
    message: String,
}

impl HandlerError {
    /// Creates a new handler error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Boxed event handler. Handlers may mutate captured state and may fail.
pub type Handler<E> = Box<dyn FnMut(&E) -> Result<(), HandlerError>>;

struct Channel<E: Event> {
    kind: E::Kind,
    handlers: Vec<Handler<E>>,
}

/// Synchronous, single-threaded event bus.
///
/// Channel lookup is a linear scan; buses in this system carry a handful of
/// kinds at most.
pub struct EventBus<E: Event> {
    channels: Vec<Channel<E>>,
}

impl<E: Event> EventBus<E> {
    /// Creates an empty bus.
    pub fn new() -> Self {
        Self {
            channels: Vec::new(),
        }
    }

    /// Registers a handler for `kind`. Multiple handlers per kind are
    /// allowed and run in registration order.
    pub fn on(&mut self, kind: E::Kind, handler: Handler<E>) {
        match self.channels.iter_mut().find(|c| c.kind == kind) {
            Some(channel) => channel.handlers.push(handler),
            None => self.channels.push(Channel {
                kind,
                handlers: vec![handler],
            }),
        }
    }

    /// Removes every handler registered for `kind`.
    pub fn off(&mut self, kind: E::Kind) {
        self.channels.retain(|c| c.kind != kind);
    }

    /// Removes all handlers for all kinds.
    pub fn clear(&mut self) {
        self.channels.clear();
    }

    /// Dispatches `event` to every handler registered for its kind, in
    /// registration order. The first handler error aborts the rest.
    pub fn trigger(&mut self, event: &E) -> Result<(), HandlerError> {
        let kind = event.kind();
        if let Some(channel) = self.channels.iter_mut().find(|c| c.kind == kind) {
            for handler in channel.handlers.iter_mut() {
                handler(event)?;
            }
        }
        Ok(())
    }

    /// Number of handlers registered for `kind`.
    pub fn handler_count(&self, kind: E::Kind) -> usize {
        self.channels
            .iter()
            .find(|c| c.kind == kind)
            .map_or(0, |c| c.handlers.len())
    }
}

impl<E: Event> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestKind {
        A,
        B,
    }

    struct TestEvent {
        kind: TestKind,
        value: i32,
    }

    impl Event for TestEvent {
        type Kind = TestKind;

        fn kind(&self) -> TestKind {
            self.kind
        }
    }

    fn event(kind: TestKind, value: i32) -> TestEvent {
        TestEvent { kind, value }
    }

    #[test]
    fn test_dispatch_in_registration_order() {
        let mut bus: EventBus<TestEvent> = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let seen = Rc::clone(&seen);
            bus.on(
                TestKind::A,
                Box::new(move |_| {
                    seen.borrow_mut().push(tag);
                    Ok(())
                }),
            );
        }

        bus.trigger(&event(TestKind::A, 0)).unwrap();
        assert_eq!(*seen.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_kinds_are_independent() {
        let mut bus: EventBus<TestEvent> = EventBus::new();
        let sum = Rc::new(RefCell::new(0));

        let sum_a = Rc::clone(&sum);
        bus.on(
            TestKind::A,
            Box::new(move |e| {
                *sum_a.borrow_mut() += e.value;
                Ok(())
            }),
        );

        bus.trigger(&event(TestKind::B, 100)).unwrap();
        assert_eq!(*sum.borrow(), 0);

        bus.trigger(&event(TestKind::A, 7)).unwrap();
        assert_eq!(*sum.borrow(), 7);
    }

    #[test]
    fn test_off_removes_all_handlers_for_kind() {
        let mut bus: EventBus<TestEvent> = EventBus::new();
        let count = Rc::new(RefCell::new(0));

        for _ in 0..3 {
            let count = Rc::clone(&count);
            bus.on(
                TestKind::A,
                Box::new(move |_| {
                    *count.borrow_mut() += 1;
                    Ok(())
                }),
            );
        }
        assert_eq!(bus.handler_count(TestKind::A), 3);

        bus.off(TestKind::A);
        assert_eq!(bus.handler_count(TestKind::A), 0);

        bus.trigger(&event(TestKind::A, 0)).unwrap();
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_failing_handler_aborts_dispatch() {
        let mut bus: EventBus<TestEvent> = EventBus::new();
        let count = Rc::new(RefCell::new(0));

        let count_before = Rc::clone(&count);
        bus.on(
            TestKind::A,
            Box::new(move |_| {
                *count_before.borrow_mut() += 1;
                Ok(())
            }),
        );
        bus.on(
            TestKind::A,
            Box::new(|_| Err(HandlerError::new("boom"))),
        );
        let count_after = Rc::clone(&count);
        bus.on(
            TestKind::A,
            Box::new(move |_| {
                *count_after.borrow_mut() += 1;
                Ok(())
            }),
        );

        let result = bus.trigger(&event(TestKind::A, 0));
        assert_eq!(result, Err(HandlerError::new("boom")));
        // Only the handler before the failing one ran.
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_trigger_with_no_handlers_is_ok() {
        let mut bus: EventBus<TestEvent> = EventBus::new();
        assert!(bus.trigger(&event(TestKind::A, 0)).is_ok());
    }

    #[test]
    fn test_clear_removes_everything() {
        let mut bus: EventBus<TestEvent> = EventBus::new();
        bus.on(TestKind::A, Box::new(|_| Ok(())));
        bus.on(TestKind::B, Box::new(|_| Ok(())));

        bus.clear();
        assert_eq!(bus.handler_count(TestKind::A), 0);
        assert_eq!(bus.handler_count(TestKind::B), 0);
    }
}
