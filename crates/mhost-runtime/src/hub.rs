#![forbid(unsafe_code)]

//! Platform event hub.
//!
//! # Architecture
//!
//! The hub stores subscribers as `Weak<RefCell<dyn PlatformEventTarget>>`
//! behind an `Rc<RefCell<..>>`. Dispatch takes a snapshot of the live
//! targets, releases the hub borrow, then delivers to each target in turn, so
//! a target may subscribe or unsubscribe while handling an event.
//!
//! # Invariants
//!
//! 1. Targets receive events in registration order.
//! 2. Every dispatched event reaches each live target at most once.
//! 3. Dead targets (dropped hosts) are pruned during dispatch.
//! 4. Dropping a [`Subscription`] removes the target before the next dispatch.
//! 5. A newly subscribed target is told the last known orientation through
//!    [`PlatformEventTarget::observe_orientation`], never as an event.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Target already borrowed | Dispatch re-entered from inside the target | Skipped, logged at `warn` |
//! | Hub dropped first | Subscription outlives hub | Drop is a no-op |
//! | Target dropped | Host released without unsubscribing | Pruned on next dispatch |

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use mhost_core::{Orientation, PlatformEvent};

/// Receiver of platform events.
pub trait PlatformEventTarget {
    /// Handle one platform event.
    fn handle_platform_event(&mut self, event: &PlatformEvent);

    /// Learn the platform orientation without treating it as a change.
    ///
    /// Called once on subscription when the hub already knows the orientation.
    fn observe_orientation(&mut self, orientation: Orientation) {
        let _ = orientation;
    }
}

type TargetRef = Weak<RefCell<dyn PlatformEventTarget>>;

struct HubInner {
    targets: Vec<(u64, TargetRef)>,
    next_id: u64,
    orientation: Option<Orientation>,
}

/// Serial, single-threaded fan-out of platform events.
///
/// Cloning yields another handle to the same hub.
#[derive(Clone)]
pub struct PlatformEventHub {
    inner: Rc<RefCell<HubInner>>,
}

impl Default for PlatformEventHub {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PlatformEventHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("PlatformEventHub")
            .field("targets", &inner.targets.len())
            .field("orientation", &inner.orientation)
            .finish()
    }
}

impl PlatformEventHub {
    /// Create a hub with no subscribers and no known orientation.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(HubInner {
                targets: Vec::new(),
                next_id: 0,
                orientation: None,
            })),
        }
    }

    /// Create a hub that already knows the platform orientation.
    #[must_use]
    pub fn with_orientation(orientation: Orientation) -> Self {
        let hub = Self::new();
        hub.inner.borrow_mut().orientation = Some(orientation);
        hub
    }

    /// Subscribe `target`. The hub keeps only a weak reference.
    #[must_use = "dropping the subscription unsubscribes the target"]
    pub fn subscribe<T: PlatformEventTarget + 'static>(
        &self,
        target: &Rc<RefCell<T>>,
    ) -> Subscription {
        let strong: Rc<RefCell<dyn PlatformEventTarget>> = target.clone();
        let weak = Rc::downgrade(&strong);

        let (id, orientation) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.targets.push((id, weak));
            (id, inner.orientation)
        };

        if let Some(orientation) = orientation {
            match target.try_borrow_mut() {
                Ok(mut t) => t.observe_orientation(orientation),
                Err(_) => {
                    tracing::warn!(subscription = id, "target busy, orientation not replayed");
                }
            }
        }
        tracing::debug!(subscription = id, "platform event target subscribed");

        Subscription {
            id,
            hub: Rc::downgrade(&self.inner),
        }
    }

    /// Deliver `event` to every live target.
    ///
    /// Returns the number of targets that handled it.
    pub fn dispatch(&self, event: &PlatformEvent) -> usize {
        let live: Vec<Rc<RefCell<dyn PlatformEventTarget>>> = {
            let mut inner = self.inner.borrow_mut();
            if let PlatformEvent::OrientationChanged(orientation) = event {
                inner.orientation = Some(*orientation);
            }
            inner.targets.retain(|(_, weak)| weak.strong_count() > 0);
            inner
                .targets
                .iter()
                .filter_map(|(_, weak)| weak.upgrade())
                .collect()
        };

        let mut delivered = 0;
        for target in live {
            match target.try_borrow_mut() {
                Ok(mut t) => {
                    t.handle_platform_event(event);
                    delivered += 1;
                }
                Err(_) => {
                    tracing::warn!(event = event.kind(), "target busy, platform event skipped");
                }
            }
        }
        tracing::trace!(event = event.kind(), delivered, "platform event dispatched");
        delivered
    }

    /// Last orientation reported through this hub.
    #[must_use]
    pub fn current_orientation(&self) -> Option<Orientation> {
        self.inner.borrow().orientation
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .borrow()
            .targets
            .iter()
            .filter(|(_, weak)| weak.strong_count() > 0)
            .count()
    }
}

/// RAII guard for a hub subscription. Dropping it unsubscribes.
pub struct Subscription {
    id: u64,
    hub: Weak<RefCell<HubInner>>,
}

impl Subscription {
    /// Whether the hub this subscription belongs to is still alive.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.hub.strong_count() > 0
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("connected", &self.is_connected())
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(hub) = self.hub.upgrade()
            && let Ok(mut inner) = hub.try_borrow_mut()
        {
            inner.targets.retain(|(id, _)| *id != self.id);
        }
    }
}

// ---------------------------------------------------------------------------
// SubscriptionScope: lifecycle management
// ---------------------------------------------------------------------------

/// Holds subscriptions for a logical scope (for example, a screen owning
/// several hosts). Dropping the scope releases them all.
#[derive(Debug, Default)]
pub struct SubscriptionScope {
    subscriptions: Vec<Subscription>,
}

impl SubscriptionScope {
    /// Create an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep `sub` alive until the scope is dropped or cleared.
    pub fn hold(&mut self, sub: Subscription) {
        self.subscriptions.push(sub);
    }

    /// Subscribe `target` to `hub` and hold the subscription.
    pub fn subscribe<T: PlatformEventTarget + 'static>(
        &mut self,
        hub: &PlatformEventHub,
        target: &Rc<RefCell<T>>,
    ) -> &mut Self {
        self.subscriptions.push(hub.subscribe(target));
        self
    }

    /// Number of held subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    /// Whether the scope holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Release every subscription now, in reverse registration order.
    pub fn clear(&mut self) {
        while self.subscriptions.pop().is_some() {}
    }
}

impl Drop for SubscriptionScope {
    fn drop(&mut self) {
        self.clear();
    }
}
