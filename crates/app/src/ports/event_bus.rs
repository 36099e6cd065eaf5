//! Event bus port: notification of successful mutations.

use std::sync::Arc;

use homehub_domain::event::Event;

/// Receives an [`Event`] after every successful create, update, or delete.
///
/// Publishing is fire-and-forget: it cannot fail the operation that
/// produced the event.
pub trait EventPublisher: Send + Sync {
    /// Publish an event to all current subscribers.
    fn publish(&self, event: Event);
}

impl<T: EventPublisher + ?Sized> EventPublisher for Arc<T> {
    fn publish(&self, event: Event) {
        (**self).publish(event);
    }
}
