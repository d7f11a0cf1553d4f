//! Activation dispatch: thread-safe publish/subscribe fan-out
//!
//! The one genuinely concurrent boundary in the crate. The OS delivers
//! activation callbacks on a thread of its choosing, potentially long
//! after `show` returned, so publishing takes a snapshot of the
//! subscriber list under a mutex and invokes the callbacks outside it.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tracing::error;

use crate::domain::ToastActivation;

type ActivationCallback = dyn Fn(&ToastActivation) + Send + Sync;

/// Token returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription {
    id: u64,
}

/// Ordered subscriber registry with snapshot-then-invoke fan-out.
pub(crate) struct ActivationHub {
    subscribers: Mutex<Vec<(u64, Arc<ActivationCallback>)>>,
    next_id: AtomicU64,
}

impl ActivationHub {
    pub(crate) fn new() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    pub(crate) fn subscribe(
        &self,
        callback: impl Fn(&ToastActivation) + Send + Sync + 'static,
    ) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.subscribers
            .lock()
            .expect("subscriber list lock poisoned")
            .push((id, Arc::new(callback)));
        Subscription { id }
    }

    pub(crate) fn unsubscribe(&self, subscription: Subscription) {
        self.subscribers
            .lock()
            .expect("subscriber list lock poisoned")
            .retain(|(id, _)| *id != subscription.id);
    }

    pub(crate) fn has_subscribers(&self) -> bool {
        !self
            .subscribers
            .lock()
            .expect("subscriber list lock poisoned")
            .is_empty()
    }

    /// Fan an event out to every subscriber present when the call
    /// started, in subscription order.
    ///
    /// Callbacks run outside the lock, so handlers may freely
    /// subscribe/unsubscribe without deadlocking, and a panicking
    /// subscriber neither stops the rest nor unwinds into the
    /// (possibly OS-owned) calling thread.
    pub(crate) fn publish(&self, event: &ToastActivation) {
        let snapshot: Vec<Arc<ActivationCallback>> = self
            .subscribers
            .lock()
            .expect("subscriber list lock poisoned")
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();

        for callback in snapshot {
            if panic::catch_unwind(AssertUnwindSafe(|| callback(event))).is_err() {
                error!(
                    action_token = event.action_token(),
                    "activation subscriber panicked; continuing fan-out"
                );
            }
        }
    }
}

/// Cloneable handle a backend uses to publish activation events back
/// into the facade's fan-out.
#[derive(Clone)]
pub struct ActivationSink {
    hub: Arc<ActivationHub>,
}

impl ActivationSink {
    pub(crate) fn new(hub: Arc<ActivationHub>) -> Self {
        Self { hub }
    }

    /// Deliver one activation event to all current subscribers.
    ///
    /// Safe to call from any thread, any number of times.
    pub fn publish(&self, event: ToastActivation) {
        self.hub.publish(&event);
    }

    /// Whether anyone is currently listening. Backends use this to skip
    /// expensive activation plumbing nobody would observe.
    pub fn has_subscribers(&self) -> bool {
        self.hub.has_subscribers()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn event(token: &str) -> ToastActivation {
        ToastActivation::new(token, HashMap::new())
    }

    #[test]
    fn fan_out_follows_subscription_order() {
        let hub = Arc::new(ActivationHub::new());
        let seen = Arc::new(Mutex::new(Vec::new()));

        for name in ["first", "second", "third"] {
            let seen = Arc::clone(&seen);
            hub.subscribe(move |_| seen.lock().unwrap().push(name));
        }

        hub.publish(&event("go"));
        assert_eq!(*seen.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn unsubscribed_callback_is_not_invoked() {
        let hub = Arc::new(ActivationHub::new());
        let count = Arc::new(AtomicU64::new(0));

        let counter = Arc::clone(&count);
        let subscription = hub.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        hub.unsubscribe(subscription);

        hub.publish(&event("go"));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn handler_may_unsubscribe_itself_mid_fan_out() {
        let hub = Arc::new(ActivationHub::new());
        let count = Arc::new(AtomicU64::new(0));

        let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));
        let subscription = {
            let hub_for_handler = Arc::clone(&hub);
            let slot = Arc::clone(&slot);
            let count = Arc::clone(&count);
            hub.subscribe(move |_| {
                count.fetch_add(1, Ordering::SeqCst);
                if let Some(subscription) = slot.lock().unwrap().take() {
                    hub_for_handler.unsubscribe(subscription);
                }
            })
        };
        *slot.lock().unwrap() = Some(subscription);

        hub.publish(&event("one"));
        hub.publish(&event("two"));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn panicking_subscriber_does_not_stop_later_ones() {
        let hub = Arc::new(ActivationHub::new());
        let reached = Arc::new(AtomicU64::new(0));

        hub.subscribe(|_| panic!("subscriber failure"));
        let reached_clone = Arc::clone(&reached);
        hub.subscribe(move |_| {
            reached_clone.fetch_add(1, Ordering::SeqCst);
        });

        hub.publish(&event("go"));
        assert_eq!(reached.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn sink_reports_subscriber_presence() {
        let hub = Arc::new(ActivationHub::new());
        let sink = ActivationSink::new(Arc::clone(&hub));
        assert!(!sink.has_subscribers());

        let subscription = hub.subscribe(|_| {});
        assert!(sink.has_subscribers());

        hub.unsubscribe(subscription);
        assert!(!sink.has_subscribers());
    }
}
