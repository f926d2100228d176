#![forbid(unsafe_code)]

//! Modal host public facade.
//!
//! Re-exports the pieces an embedding layer needs: the host itself, its
//! configuration, the interactor contract, and the platform event hub. The
//! common subset is also available as [`prelude`].
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use mhost::{
//!     HostEnvironment, ModalConfig, ModalHost, Orientation, PlatformEvent, PlatformEventHub,
//! };
//!
//! let host = Rc::new(RefCell::new(ModalHost::with_config(
//!     HostEnvironment::touch(),
//!     ModalConfig::new().supported_orientations(["portrait"]),
//! )));
//! let hub = PlatformEventHub::new();
//! let _subscription = hub.subscribe(&host);
//! assert_eq!(hub.dispatch(&PlatformEvent::OrientationChanged(Orientation::LandscapeLeft)), 1);
//! assert_eq!(host.borrow().platform_orientation(), Orientation::LandscapeLeft);
//! ```

pub use mhost_core as core;
pub use mhost_modal as modal;
pub use mhost_runtime as runtime;

pub use mhost_core::{
    CapabilityError, HostEnvironment, Orientation, OrientationMask, OrientationSpec,
    PlatformCapabilities, PlatformEvent, RemoteButton, resolve_orientation,
};
pub use mhost_modal::{
    AnimationType, ConfigFields, ContextId, LifecycleState, ModalConfig, ModalConfigPatch,
    ModalHost, ModalHostEvent, ModalHostId, PresentOutcome, PresentRequest, PresentationContext,
    PresentationInteractor, PresentationStyle, Rejection, Transition,
};
pub use mhost_runtime::{PlatformEventHub, PlatformEventTarget, Subscription, SubscriptionScope};

#[cfg(feature = "tracing-json")]
pub use mhost_core::logging;

/// The types an embedding layer touches to wire up a host.
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use mhost::prelude::*;
///
/// struct Overlay;
///
/// impl PresentationInteractor for Overlay {
///     fn present(&self, _: ModalHostId, _: &PresentationContext, _: bool) -> PresentOutcome {
///         PresentOutcome::Completed
///     }
///     fn dismiss(&self, _: ModalHostId, _: &PresentationContext, _: bool) {}
/// }
///
/// let overlay = Rc::new(Overlay);
/// let events = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&events);
///
/// let mut host = ModalHost::with_config(HostEnvironment::touch(), ModalConfig::new());
/// host.set_interactor(&overlay);
/// host.set_event_handler(move |event: &ModalHostEvent| sink.borrow_mut().push(event.clone()));
/// host.configure(ModalConfigPatch::new().animation_type("fade"));
///
/// let host = Rc::new(RefCell::new(host));
/// let hub = PlatformEventHub::new();
/// let _subscription = hub.subscribe(&host);
///
/// assert!(host.borrow_mut().present().is_accepted());
/// assert_eq!(*events.borrow(), vec![ModalHostEvent::Show]);
/// assert_eq!(hub.subscriber_count(), 1);
/// ```
pub mod prelude {
    pub use mhost_core::{HostEnvironment, Orientation, OrientationSpec};
    pub use mhost_modal::{
        ModalConfig, ModalConfigPatch, ModalHost, ModalHostEvent, ModalHostId, PresentOutcome,
        PresentRequest, PresentationContext, PresentationInteractor,
    };
    pub use mhost_runtime::{PlatformEventHub, Subscription};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude as p;
    use mhost_harness::{CompletionMode, HostFixture};

    #[test]
    fn facade_types_drive_a_fixture() {
        let fx = HostFixture::touch(
            ModalConfig::new().supported_orientations([OrientationSpec::Landscape]),
            CompletionMode::Immediate,
        );
        let request: PresentRequest = fx.host.borrow_mut().request_present(true);
        assert!(matches!(request, PresentRequest::Shown(_)));
        fx.rotate(Orientation::PortraitUpsideDown);
        assert_eq!(
            fx.log.events(),
            vec![
                ModalHostEvent::Show,
                ModalHostEvent::OrientationChange(OrientationSpec::Landscape),
            ]
        );
    }

    #[test]
    fn prelude_names_the_facade_types() {
        let host: p::ModalHost = p::ModalHost::new(p::HostEnvironment::touch());
        let hub: p::PlatformEventHub = PlatformEventHub::new();
        assert_eq!(hub.subscriber_count(), 0);
        assert_eq!(host.config(), &p::ModalConfig::default());
        assert!(p::ModalConfigPatch::new().is_empty());
    }
}
