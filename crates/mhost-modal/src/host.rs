#![forbid(unsafe_code)]

//! The modal host.
//!
//! A [`ModalHost`] owns its configuration and lifecycle state and emits
//! lifecycle events, but delegates putting content on screen to a
//! [`PresentationInteractor`] it references weakly.
//!
//! # State Machine
//!
//! ```text
//!   new(env) ──► Active ──invalidate()──► Invalidated (terminal)
//! ```
//!
//! Within `Active`, the host only tracks the request it has in flight and
//! whether it emitted `Show` for the current context. What is actually on
//! screen is the interactor's to know ([`PresentationInteractor::is_presented`]).
//!
//! # Invariants
//!
//! 1. `Show` is emitted at most once per presentation context, and only when
//!    the completion names the pending context.
//! 2. At most one presentation request is in flight.
//! 3. After `invalidate()` the interactor is never called again and no event
//!    is emitted. Invalidating again changes nothing.
//! 4. Each platform event produces at most one host event, synchronously.
//! 5. `request_dismiss` forwards to a live interactor unconditionally, with
//!    the current context, even if it was never presented.
//! 6. The host never holds a strong reference to its interactor.
//! 7. While showing, `request_present` is absorbed before the interactor is
//!    consulted, so the presented context stays current until dismissal.
//! 8. Two consecutive `OrientationChange` events never carry the same value
//!    unless a `Show` separates them.
//!
//! # Orientation Reporting
//!
//! While showing, each platform orientation change is resolved to the entry
//! of `supported_orientations` that allows it, or the first recognized entry
//! when none does. An unrestricted list (empty, or nothing recognized)
//! resolves to the platform value itself. Narrowing the list while showing
//! re-evaluates only when the platform orientation or the last reported
//! value falls outside the new list; narrowing to an empty list never
//! reports.
//!
//! A resolved value is reported unless it repeats the value last delivered
//! since `Show`. Before the first delivery, `Show`'s resolved value counts
//! as known only while the platform orientation is allowed, so a rotation
//! into a disallowed orientation still reports its fallback once.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | No interactor | Never attached, or dropped | Request absorbed, logged at `warn` |
//! | Redundant present | Already presented or in flight | Request absorbed, logged at `debug` |
//! | Stale completion | Completion for an old or unknown context | Ignored, logged at `debug` |
//! | Use after invalidate | Teardown raced with updates | Absorbed, logged at `debug` |
//!
//! No operation panics or returns an error the caller must handle.

use std::fmt;
use std::rc::{Rc, Weak};

use mhost_core::{
    HostEnvironment, Orientation, OrientationSpec, PlatformEvent, RemoteButton,
    resolve_orientation,
};
use mhost_runtime::PlatformEventTarget;

use crate::config::{ConfigFields, ModalConfig, ModalConfigPatch};
use crate::event::{ModalHostEvent, PresentRequest, Rejection};
use crate::interactor::{
    ContextId, ModalHostId, PresentOutcome, PresentationContext, PresentationInteractor,
};
use crate::remote::{RemoteAction, RemoteHandler};

/// Callback receiving host events.
pub type EventHandler = Box<dyn FnMut(&ModalHostEvent)>;

/// Lifecycle state of a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleState {
    /// Constructed and usable.
    Active,
    /// Torn down. Terminal.
    Invalidated,
}

/// A modal overlay host coordinating with an external interactor.
pub struct ModalHost {
    id: ModalHostId,
    environment: HostEnvironment,
    config: ModalConfig,
    state: LifecycleState,
    interactor: Option<Weak<dyn PresentationInteractor>>,
    /// Context used by the last presentation attempt (or the initial unused one).
    context: PresentationContext,
    /// Context whose completion is awaited.
    pending: Option<ContextId>,
    /// `Show` emitted for `context` and not dismissed since.
    showing: bool,
    platform_orientation: Orientation,
    last_reported: Option<OrientationSpec>,
    /// An `OrientationChange` was delivered since the last `Show`.
    orientation_reported: bool,
    remote: Option<RemoteHandler>,
    on_event: Option<EventHandler>,
}

impl fmt::Debug for ModalHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalHost")
            .field("id", &self.id)
            .field("environment", &self.environment.id())
            .field("state", &self.state)
            .field("config", &self.config)
            .field("context", &self.context.id())
            .field("pending", &self.pending)
            .field("showing", &self.showing)
            .field("platform_orientation", &self.platform_orientation)
            .field("last_reported", &self.last_reported)
            .field("orientation_reported", &self.orientation_reported)
            .field("interactor_attached", &self.live_interactor().is_some())
            .field("remote", &self.remote.is_some())
            .finish_non_exhaustive()
    }
}

impl ModalHost {
    /// Create an active host for `environment` with the default configuration.
    #[must_use]
    pub fn new(environment: HostEnvironment) -> Self {
        Self::with_config(environment, ModalConfig::default())
    }

    /// Create an active host with an initial configuration.
    #[must_use]
    pub fn with_config(environment: HostEnvironment, config: ModalConfig) -> Self {
        let id = ModalHostId::next();
        let remote = RemoteHandler::for_environment(&environment);
        let context = PresentationContext::new(id, &config);
        tracing::debug!(
            host = id.get(),
            environment = environment.id().get(),
            remote = remote.is_some(),
            "modal host created"
        );
        Self {
            id,
            environment,
            config,
            state: LifecycleState::Active,
            interactor: None,
            context,
            pending: None,
            showing: false,
            platform_orientation: Orientation::default(),
            last_reported: None,
            orientation_reported: false,
            remote,
            on_event: None,
        }
    }

    // --- Wiring ---

    /// Address `interactor` from now on, replacing any previous one.
    ///
    /// Only a weak reference is kept. Ignored after invalidation.
    pub fn set_interactor<I: PresentationInteractor + 'static>(&mut self, interactor: &Rc<I>) {
        let strong: Rc<dyn PresentationInteractor> = interactor.clone();
        self.set_interactor_weak(Rc::downgrade(&strong));
    }

    /// Address an already-weak interactor reference.
    pub fn set_interactor_weak(&mut self, interactor: Weak<dyn PresentationInteractor>) {
        if self.is_invalidated() {
            tracing::debug!(host = self.id.get(), "interactor ignored after invalidation");
            return;
        }
        self.interactor = Some(interactor);
    }

    /// Stop addressing any interactor.
    pub fn clear_interactor(&mut self) {
        self.interactor = None;
    }

    /// Install the event handler, replacing any previous one.
    pub fn set_event_handler(&mut self, handler: impl FnMut(&ModalHostEvent) + 'static) {
        if self.is_invalidated() {
            tracing::debug!(host = self.id.get(), "event handler ignored after invalidation");
            return;
        }
        self.on_event = Some(Box::new(handler));
    }

    // --- Configuration ---

    /// Apply a partial configuration update.
    ///
    /// Returns the fields that changed. When the supported orientations
    /// change while showing, orientation is re-evaluated.
    pub fn configure(&mut self, patch: ModalConfigPatch) -> ConfigFields {
        if self.is_invalidated() {
            tracing::debug!(
                host = self.id.get(),
                reason = Rejection::Invalidated.as_str(),
                "configure absorbed"
            );
            return ConfigFields::empty();
        }
        let changed = self.config.apply(patch);
        if changed.contains(ConfigFields::SUPPORTED_ORIENTATIONS) {
            self.reevaluate_orientation();
        }
        changed
    }

    // --- Presentation ---

    /// Ask the interactor to present, animating when the configured animation
    /// type animates.
    pub fn present(&mut self) -> PresentRequest {
        let animated = self.config.animation_type.is_animated();
        self.request_present(animated)
    }

    /// Ask the interactor to present this host's content.
    pub fn request_present(&mut self, animated: bool) -> PresentRequest {
        if self.is_invalidated() {
            return self.reject(Rejection::Invalidated);
        }
        let Some(interactor) = self.live_interactor() else {
            return self.reject(Rejection::InteractorAbsent);
        };
        if self.pending.is_some() {
            return self.reject(Rejection::PresentationInFlight);
        }
        if self.showing || interactor.is_presented(self.id) {
            return self.reject(Rejection::AlreadyPresented);
        }

        self.context = PresentationContext::new(self.id, &self.config);
        self.showing = false;
        let context_id = self.context.id();
        self.pending = Some(context_id);
        tracing::debug!(
            host = self.id.get(),
            context = context_id.get(),
            animated,
            "presentation requested"
        );

        match interactor.present(self.id, &self.context, animated) {
            PresentOutcome::Completed => {
                self.complete_presentation(context_id);
                PresentRequest::Shown(context_id)
            }
            PresentOutcome::Pending => PresentRequest::Pending(context_id),
        }
    }

    /// Signal that the interactor finished presenting `context`.
    ///
    /// Emits `Show` and returns `true` only for the pending context.
    pub fn complete_presentation(&mut self, context: ContextId) -> bool {
        if self.is_invalidated() || self.pending != Some(context) {
            tracing::debug!(
                host = self.id.get(),
                context = context.get(),
                reason = Rejection::StaleCompletion.as_str(),
                "completion ignored"
            );
            return false;
        }
        self.pending = None;
        self.showing = true;
        self.last_reported = Some(self.resolve(self.platform_orientation));
        self.orientation_reported = false;
        tracing::debug!(host = self.id.get(), context = context.get(), "presented");
        self.emit(&ModalHostEvent::Show);
        true
    }

    /// Ask the interactor to dismiss, using the current context.
    ///
    /// Returns whether the request reached an interactor. Emits nothing.
    pub fn request_dismiss(&mut self, animated: bool) -> bool {
        self.pending = None;
        self.showing = false;
        let Some(interactor) = self.live_interactor() else {
            let reason = if self.is_invalidated() {
                Rejection::Invalidated
            } else {
                Rejection::InteractorAbsent
            };
            match reason {
                Rejection::Invalidated => tracing::debug!(
                    host = self.id.get(),
                    reason = reason.as_str(),
                    "dismissal absorbed"
                ),
                _ => tracing::warn!(
                    host = self.id.get(),
                    reason = reason.as_str(),
                    "dismissal absorbed"
                ),
            }
            return false;
        };
        tracing::debug!(
            host = self.id.get(),
            context = self.context.id().get(),
            animated,
            "dismissal requested"
        );
        interactor.dismiss(self.id, &self.context, animated);
        true
    }

    // --- Lifecycle ---

    /// Tear the host down. Idempotent.
    ///
    /// Releases the interactor, the event handler, and the remote handler,
    /// and forgets any in-flight request. Interactor-side transitions already
    /// running are not cancelled.
    pub fn invalidate(&mut self) {
        if self.is_invalidated() {
            return;
        }
        self.state = LifecycleState::Invalidated;
        self.interactor = None;
        self.pending = None;
        self.showing = false;
        self.remote = None;
        self.on_event = None;
        tracing::debug!(host = self.id.get(), "modal host invalidated");
    }

    // --- Platform events ---

    fn handle_orientation(&mut self, orientation: Orientation) {
        self.platform_orientation = orientation;
        if !self.showing {
            return;
        }
        let reported = self.resolve(orientation);
        self.report_orientation(reported);
    }

    fn handle_remote(&mut self, button: RemoteButton) {
        let Some(handler) = &self.remote else {
            return;
        };
        match handler.action_for(button) {
            Some(RemoteAction::RequestClose) if self.showing => {
                self.emit(&ModalHostEvent::RequestClose);
            }
            _ => {}
        }
    }

    fn reevaluate_orientation(&mut self) {
        if !self.showing {
            return;
        }
        let mask = self.config.orientation_mask();
        let platform_allowed = mask.allows(self.platform_orientation);
        let reported_allowed = self
            .last_reported
            .as_ref()
            .is_none_or(|spec| mask.contains(spec.mask()));
        if platform_allowed && reported_allowed {
            return;
        }
        let reported = self.resolve(self.platform_orientation);
        self.report_orientation(reported);
    }

    fn report_orientation(&mut self, reported: OrientationSpec) {
        if self.last_reported.as_ref() == Some(&reported)
            && (self.orientation_reported
                || self.config.orientation_mask().allows(self.platform_orientation))
        {
            return;
        }
        self.last_reported = Some(reported.clone());
        self.orientation_reported = true;
        self.emit(&ModalHostEvent::OrientationChange(reported));
    }

    fn resolve(&self, orientation: Orientation) -> OrientationSpec {
        resolve_orientation(&self.config.supported_orientations, orientation)
    }

    // --- Helpers ---

    fn live_interactor(&self) -> Option<Rc<dyn PresentationInteractor>> {
        self.interactor.as_ref().and_then(Weak::upgrade)
    }

    fn reject(&self, reason: Rejection) -> PresentRequest {
        match reason {
            Rejection::InteractorAbsent => tracing::warn!(
                host = self.id.get(),
                reason = reason.as_str(),
                "presentation absorbed"
            ),
            _ => tracing::debug!(
                host = self.id.get(),
                reason = reason.as_str(),
                "presentation absorbed"
            ),
        }
        PresentRequest::Rejected(reason)
    }

    fn emit(&mut self, event: &ModalHostEvent) {
        tracing::trace!(host = self.id.get(), event = event.name(), "emit");
        if let Some(handler) = self.on_event.as_mut() {
            handler(event);
        }
    }

    // --- State Queries ---

    /// Host id, as passed to the interactor.
    #[inline]
    pub const fn id(&self) -> ModalHostId {
        self.id
    }

    /// The environment handle the host was built with.
    #[inline]
    pub const fn environment(&self) -> &HostEnvironment {
        &self.environment
    }

    /// Current configuration.
    #[inline]
    pub const fn config(&self) -> &ModalConfig {
        &self.config
    }

    /// Lifecycle state.
    #[inline]
    pub const fn state(&self) -> LifecycleState {
        self.state
    }

    /// Whether the host has been invalidated.
    #[inline]
    pub fn is_invalidated(&self) -> bool {
        self.state == LifecycleState::Invalidated
    }

    /// Context of the last presentation attempt, or the initial unused one.
    #[inline]
    pub const fn current_context(&self) -> &PresentationContext {
        &self.context
    }

    /// Context whose completion is awaited, if any.
    #[inline]
    pub const fn pending_context(&self) -> Option<ContextId> {
        self.pending
    }

    /// Whether a live interactor is attached.
    #[must_use]
    pub fn has_interactor(&self) -> bool {
        self.live_interactor().is_some()
    }

    /// Whether the interactor reports this host on screen (`false` without one).
    #[must_use]
    pub fn is_presented(&self) -> bool {
        self.live_interactor()
            .is_some_and(|interactor| interactor.is_presented(self.id))
    }

    /// Whether `Show` was emitted for the current context and no dismissal
    /// was requested since.
    #[inline]
    pub const fn is_showing(&self) -> bool {
        self.showing
    }

    /// Whether the host listens to remote-control navigation.
    #[inline]
    pub const fn has_remote_handler(&self) -> bool {
        self.remote.is_some()
    }

    /// Last orientation delivered by the platform.
    #[inline]
    pub const fn platform_orientation(&self) -> Orientation {
        self.platform_orientation
    }

    /// Last orientation value reported (or established by `Show`).
    #[inline]
    pub fn last_reported_orientation(&self) -> Option<&OrientationSpec> {
        self.last_reported.as_ref()
    }
}

impl PlatformEventTarget for ModalHost {
    fn handle_platform_event(&mut self, event: &PlatformEvent) {
        if self.is_invalidated() {
            return;
        }
        match *event {
            PlatformEvent::OrientationChanged(orientation) => self.handle_orientation(orientation),
            PlatformEvent::RemoteNavigation(button) => self.handle_remote(button),
        }
    }

    fn observe_orientation(&mut self, orientation: Orientation) {
        self.platform_orientation = orientation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// Minimal interactor: records calls, completes on demand.
    #[derive(Default)]
    struct StubInteractor {
        presents: RefCell<Vec<ContextId>>,
        dismisses: RefCell<Vec<ContextId>>,
        complete_immediately: Cell<bool>,
        presented: Cell<bool>,
    }

    impl PresentationInteractor for StubInteractor {
        fn present(
            &self,
            _host: ModalHostId,
            context: &PresentationContext,
            _animated: bool,
        ) -> PresentOutcome {
            self.presents.borrow_mut().push(context.id());
            self.presented.set(true);
            if self.complete_immediately.get() {
                PresentOutcome::Completed
            } else {
                PresentOutcome::Pending
            }
        }

        fn dismiss(&self, _host: ModalHostId, context: &PresentationContext, _animated: bool) {
            self.dismisses.borrow_mut().push(context.id());
            self.presented.set(false);
        }

        fn is_presented(&self, _host: ModalHostId) -> bool {
            self.presented.get()
        }
    }

    fn host_with_log() -> (ModalHost, Rc<RefCell<Vec<ModalHostEvent>>>) {
        let mut host = ModalHost::new(HostEnvironment::touch());
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        host.set_event_handler(move |event| sink.borrow_mut().push(event.clone()));
        (host, log)
    }

    #[test]
    fn new_host_is_active_and_idle() {
        let host = ModalHost::new(HostEnvironment::touch());
        assert_eq!(host.state(), LifecycleState::Active);
        assert!(!host.is_showing());
        assert!(!host.is_presented());
        assert!(!host.has_interactor());
        assert!(!host.has_remote_handler());
        assert_eq!(host.pending_context(), None);
    }

    #[test]
    fn present_without_interactor_is_absorbed() {
        let (mut host, log) = host_with_log();
        assert_eq!(
            host.request_present(true),
            PresentRequest::Rejected(Rejection::InteractorAbsent)
        );
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn synchronous_completion_emits_show() {
        let (mut host, log) = host_with_log();
        let interactor = Rc::new(StubInteractor::default());
        interactor.complete_immediately.set(true);
        host.set_interactor(&interactor);

        let request = host.request_present(false);
        assert!(matches!(request, PresentRequest::Shown(_)));
        assert_eq!(*log.borrow(), vec![ModalHostEvent::Show]);
        assert!(host.is_showing());
        assert!(host.is_presented());
    }

    #[test]
    fn deferred_completion_emits_show_once() {
        let (mut host, log) = host_with_log();
        let interactor = Rc::new(StubInteractor::default());
        host.set_interactor(&interactor);

        let PresentRequest::Pending(context) = host.request_present(true) else {
            panic!("expected pending presentation");
        };
        assert!(log.borrow().is_empty());
        assert!(host.complete_presentation(context));
        assert!(!host.complete_presentation(context));
        assert_eq!(*log.borrow(), vec![ModalHostEvent::Show]);
    }

    #[test]
    fn second_request_while_in_flight_is_absorbed() {
        let (mut host, _log) = host_with_log();
        let interactor = Rc::new(StubInteractor::default());
        host.set_interactor(&interactor);

        assert!(host.request_present(true).is_accepted());
        assert_eq!(
            host.request_present(true),
            PresentRequest::Rejected(Rejection::PresentationInFlight)
        );
        assert_eq!(interactor.presents.borrow().len(), 1);
    }

    #[test]
    fn present_while_showing_is_absorbed_without_is_presented() {
        /// Coalesces presents itself and keeps the default `is_presented`.
        #[derive(Default)]
        struct Coalescing {
            presents: RefCell<Vec<ContextId>>,
            dismisses: RefCell<Vec<ContextId>>,
        }
        impl PresentationInteractor for Coalescing {
            fn present(
                &self,
                _host: ModalHostId,
                context: &PresentationContext,
                _animated: bool,
            ) -> PresentOutcome {
                self.presents.borrow_mut().push(context.id());
                PresentOutcome::Completed
            }
            fn dismiss(&self, _host: ModalHostId, context: &PresentationContext, _animated: bool) {
                self.dismisses.borrow_mut().push(context.id());
            }
        }

        let (mut host, log) = host_with_log();
        let interactor = Rc::new(Coalescing::default());
        host.set_interactor(&interactor);

        let PresentRequest::Shown(shown) = host.request_present(true) else {
            panic!("expected synchronous completion");
        };
        assert_eq!(
            host.request_present(true),
            PresentRequest::Rejected(Rejection::AlreadyPresented)
        );
        assert_eq!(*interactor.presents.borrow(), vec![shown]);
        assert_eq!(*log.borrow(), vec![ModalHostEvent::Show]);
        assert_eq!(host.current_context().id(), shown);

        assert!(host.request_dismiss(true));
        assert_eq!(*interactor.dismisses.borrow(), vec![shown]);
        assert!(host.request_present(true).is_accepted());
        assert_eq!(interactor.presents.borrow().len(), 2);
    }

    #[test]
    fn repeated_fallback_is_reported_once() {
        let mut host = ModalHost::with_config(
            HostEnvironment::touch(),
            ModalConfig::new().supported_orientations(["portrait"]),
        );
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        host.set_event_handler(move |event| sink.borrow_mut().push(event.clone()));
        let interactor = Rc::new(StubInteractor::default());
        interactor.complete_immediately.set(true);
        host.set_interactor(&interactor);
        host.request_present(true);

        for orientation in [
            Orientation::LandscapeLeft,
            Orientation::LandscapeRight,
            Orientation::Portrait,
        ] {
            host.handle_platform_event(&PlatformEvent::OrientationChanged(orientation));
        }
        assert_eq!(
            *log.borrow(),
            vec![
                ModalHostEvent::Show,
                ModalHostEvent::OrientationChange(OrientationSpec::Portrait),
            ]
        );
    }

    #[test]
    fn dropped_interactor_is_tolerated() {
        let (mut host, log) = host_with_log();
        {
            let interactor = Rc::new(StubInteractor::default());
            host.set_interactor(&interactor);
        }
        assert!(!host.has_interactor());
        assert_eq!(
            host.request_present(true),
            PresentRequest::Rejected(Rejection::InteractorAbsent)
        );
        assert!(!host.request_dismiss(true));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn host_keeps_no_strong_reference() {
        let mut host = ModalHost::new(HostEnvironment::touch());
        let interactor = Rc::new(StubInteractor::default());
        host.set_interactor(&interactor);
        assert_eq!(Rc::strong_count(&interactor), 1);
    }

    #[test]
    fn dismiss_forwards_current_context() {
        let (mut host, log) = host_with_log();
        let interactor = Rc::new(StubInteractor::default());
        host.set_interactor(&interactor);
        let initial = host.current_context().id();

        assert!(host.request_dismiss(false));
        assert_eq!(*interactor.dismisses.borrow(), vec![initial]);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn invalidate_releases_everything() {
        let mut host = ModalHost::new(HostEnvironment::remote_control());
        let interactor = Rc::new(StubInteractor::default());
        host.set_interactor(&interactor);
        assert!(host.has_remote_handler());

        host.invalidate();
        assert_eq!(host.state(), LifecycleState::Invalidated);
        assert!(!host.has_interactor());
        assert!(!host.has_remote_handler());
        assert_eq!(
            host.request_present(true),
            PresentRequest::Rejected(Rejection::Invalidated)
        );
        assert!(interactor.presents.borrow().is_empty());

        host.set_interactor(&interactor);
        assert!(!host.has_interactor());
    }

    #[test]
    fn configure_after_invalidate_is_absorbed() {
        let mut host = ModalHost::new(HostEnvironment::touch());
        host.invalidate();
        let changed = host.configure(ModalConfigPatch::new().transparent(true));
        assert!(changed.is_empty());
        assert!(!host.config().transparent);
    }

    #[test]
    fn present_uses_animation_type() {
        #[derive(Default)]
        struct AnimationRecorder {
            animated: Cell<Option<bool>>,
        }
        impl PresentationInteractor for AnimationRecorder {
            fn present(
                &self,
                _host: ModalHostId,
                _context: &PresentationContext,
                animated: bool,
            ) -> PresentOutcome {
                self.animated.set(Some(animated));
                PresentOutcome::Pending
            }
            fn dismiss(
                &self,
                _host: ModalHostId,
                _context: &PresentationContext,
                _animated: bool,
            ) {
            }
        }

        let mut host = ModalHost::with_config(
            HostEnvironment::touch(),
            ModalConfig::new().animation_type("none"),
        );
        let recorder = Rc::new(AnimationRecorder::default());
        host.set_interactor(&recorder);
        host.present();
        assert_eq!(recorder.animated.get(), Some(false));

        let mut host = ModalHost::with_config(
            HostEnvironment::touch(),
            ModalConfig::new().animation_type("fade"),
        );
        host.set_interactor(&recorder);
        host.present();
        assert_eq!(recorder.animated.get(), Some(true));
    }

    #[test]
    fn context_snapshot_follows_config() {
        let mut host = ModalHost::new(HostEnvironment::touch());
        let interactor = Rc::new(StubInteractor::default());
        host.set_interactor(&interactor);
        host.configure(ModalConfigPatch::new().transparent(true));
        host.request_present(true);
        assert!(host.current_context().snapshot().transparent);
    }

    #[test]
    fn remote_navigation_ignored_on_touch_platform() {
        let (mut host, log) = host_with_log();
        let interactor = Rc::new(StubInteractor::default());
        interactor.complete_immediately.set(true);
        host.set_interactor(&interactor);
        host.request_present(true);

        host.handle_platform_event(&PlatformEvent::RemoteNavigation(RemoteButton::Menu));
        assert_eq!(*log.borrow(), vec![ModalHostEvent::Show]);
    }

    #[test]
    fn debug_output_mentions_state() {
        let host = ModalHost::new(HostEnvironment::touch());
        let text = format!("{host:?}");
        assert!(text.contains("ModalHost"));
        assert!(text.contains("Active"));
    }
}
