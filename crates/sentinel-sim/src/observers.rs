//! Detection observers.
//!
//! A multicast hook: controllers (NPC brains, alarms, UI) subscribe a
//! callback and receive every `DetectionEvent` of the sentries they watch.

use sentinel_core::events::DetectionEvent;

/// Callback invoked with each detection.
pub type DetectionCallback = Box<dyn FnMut(&DetectionEvent) + Send>;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

enum Scope {
    Sentry(u32),
    All,
}

struct Subscription {
    id: SubscriptionId,
    scope: Scope,
    callback: DetectionCallback,
}

/// Registry of detection callbacks, invoked in subscription order.
#[derive(Default)]
pub struct DetectionHub {
    subscriptions: Vec<Subscription>,
    next_id: u64,
}

impl DetectionHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Receive detections from one sentry.
    pub fn subscribe(
        &mut self,
        sentry_id: u32,
        callback: impl FnMut(&DetectionEvent) + Send + 'static,
    ) -> SubscriptionId {
        self.add(Scope::Sentry(sentry_id), Box::new(callback))
    }

    /// Receive detections from every sentry.
    pub fn subscribe_all(
        &mut self,
        callback: impl FnMut(&DetectionEvent) + Send + 'static,
    ) -> SubscriptionId {
        self.add(Scope::All, Box::new(callback))
    }

    /// Remove a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        self.subscriptions.len() != before
    }

    /// Drop every subscription bound to one sentry.
    pub fn remove_sentry(&mut self, sentry_id: u32) {
        self.subscriptions
            .retain(|s| !matches!(s.scope, Scope::Sentry(id) if id == sentry_id));
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Invoke every callback interested in `event`.
    pub fn notify(&mut self, event: &DetectionEvent) {
        for sub in &mut self.subscriptions {
            let wanted = match sub.scope {
                Scope::All => true,
                Scope::Sentry(id) => id == event.sentry_id,
            };
            if wanted {
                (sub.callback)(event);
            }
        }
    }

    fn add(&mut self, scope: Scope, callback: DetectionCallback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription {
            id,
            scope,
            callback,
        });
        id
    }
}
