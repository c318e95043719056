//! Broadcast event bus using mpsc channels.
//!
//! Every subscriber gets its own channel. Publishing clones the event into
//! each live channel; the subscriber drains its receiver when convenient.
//!
//! This is pure Rust with no external dependencies beyond std.

use std::cell::{Cell, RefCell};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::types::SettingsEvent;

/// Identifier of one subscription on an [`EventBus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Event bus with any number of single-consumer subscriptions.
///
/// # Example
///
/// ```
/// use xeyes_indicator::events::{EventBus, SettingsEvent};
/// use xeyes_indicator::model::SettingKey;
///
/// let bus = EventBus::new();
/// let sub = bus.subscribe();
///
/// bus.publish(SettingsEvent::Changed(SettingKey::EyeWidth));
///
/// let events = sub.drain();
/// assert_eq!(events.len(), 1);
/// ```
pub struct EventBus {
    senders: RefCell<Vec<(SubscriptionId, Sender<SettingsEvent>)>>,
    next_id: Cell<u64>,
}

impl EventBus {
    /// Create a new event bus.
    pub fn new() -> Self {
        Self {
            senders: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
        }
    }

    /// Register a new subscriber.
    pub fn subscribe(&self) -> Subscription {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        let (sender, receiver) = mpsc::channel();
        self.senders.borrow_mut().push((id, sender));
        Subscription { id, receiver }
    }

    /// Remove a subscriber.
    ///
    /// Consumes the handle, so a subscription can only be released once.
    pub fn unsubscribe(&self, subscription: Subscription) {
        self.senders
            .borrow_mut()
            .retain(|(id, _)| *id != subscription.id);
    }

    /// Publish an event to every subscriber.
    ///
    /// Subscribers whose handle was dropped without unsubscribing are pruned.
    pub fn publish(&self, event: SettingsEvent) {
        self.senders
            .borrow_mut()
            .retain(|(_, sender)| sender.send(event).is_ok());
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.senders.borrow().len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving end of one subscription.
pub struct Subscription {
    id: SubscriptionId,
    receiver: Receiver<SettingsEvent>,
}

impl Subscription {
    /// This subscription's identifier.
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Try to receive the next event without blocking.
    pub fn try_recv(&self) -> Option<SettingsEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drain all pending events into a Vec.
    pub fn drain(&self) -> Vec<SettingsEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}
