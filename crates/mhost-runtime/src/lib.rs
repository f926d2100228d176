#![forbid(unsafe_code)]

//! Single-threaded platform-event delivery for modal hosts.
//!
//! The platform pushes [`PlatformEvent`](mhost_core::PlatformEvent)s into a
//! [`PlatformEventHub`]; the hub delivers them, serially and in registration
//! order, to every live [`PlatformEventTarget`]. Targets are held weakly, so
//! subscribing never extends a host's lifetime.

pub mod hub;

pub use hub::{PlatformEventHub, PlatformEventTarget, Subscription, SubscriptionScope};
