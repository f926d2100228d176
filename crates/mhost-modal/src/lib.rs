#![forbid(unsafe_code)]

//! Modal host: presents content as an overlay by delegating to an external
//! presentation interactor.
//!
//! # Protocol
//!
//! 1. The application builds a [`ModalHost`] from a
//!    [`HostEnvironment`](mhost_core::HostEnvironment), attaches an
//!    [`PresentationInteractor`] (held weakly), and installs an event handler.
//! 2. [`ModalHost::request_present`] mints a fresh [`PresentationContext`] and
//!    hands it to the interactor.
//! 3. When the interactor reports completion, the host emits
//!    [`ModalHostEvent::Show`] exactly once.
//! 4. [`ModalHost::request_dismiss`] forwards the same context to the
//!    interactor. Dismissal emits nothing.
//! 5. Platform orientation and remote-control events, delivered through
//!    [`mhost_runtime::PlatformEventHub`], are re-emitted as
//!    [`ModalHostEvent::OrientationChange`] and [`ModalHostEvent::RequestClose`].
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use mhost_core::HostEnvironment;
//! use mhost_modal::{
//!     ModalConfig, ModalHost, ModalHostEvent, ModalHostId, PresentOutcome,
//!     PresentationContext, PresentationInteractor,
//! };
//!
//! struct Instant;
//!
//! impl PresentationInteractor for Instant {
//!     fn present(&self, _: ModalHostId, _: &PresentationContext, _: bool) -> PresentOutcome {
//!         PresentOutcome::Completed
//!     }
//!     fn dismiss(&self, _: ModalHostId, _: &PresentationContext, _: bool) {}
//! }
//!
//! let interactor = Rc::new(Instant);
//! let events = Rc::new(RefCell::new(Vec::new()));
//!
//! let mut host = ModalHost::with_config(
//!     HostEnvironment::touch(),
//!     ModalConfig::new().animation_type("slide"),
//! );
//! host.set_interactor(&interactor);
//! let sink = Rc::clone(&events);
//! host.set_event_handler(move |event| sink.borrow_mut().push(event.clone()));
//!
//! host.present();
//! assert_eq!(*events.borrow(), vec![ModalHostEvent::Show]);
//! ```

pub mod config;
pub mod event;
pub mod host;
pub mod interactor;
pub mod remote;

pub use config::{
    AnimationType, ConfigFields, ModalConfig, ModalConfigPatch, PresentationStyle, Transition,
};
pub use event::{ModalHostEvent, PresentRequest, Rejection};
pub use host::{EventHandler, LifecycleState, ModalHost};
pub use interactor::{
    ConfigSnapshot, ContextId, ModalHostId, PresentOutcome, PresentationContext,
    PresentationInteractor,
};
pub use remote::{RemoteAction, RemoteHandler};
