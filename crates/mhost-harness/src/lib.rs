#![forbid(unsafe_code)]

//! Reference fixtures for exercising modal hosts.
//!
//! - [`RecordingInteractor`]: an interactor that records every call, tracks
//!   which hosts are on screen, and completes presentations either
//!   immediately or when told to.
//! - [`EventLog`]: a shared event sink with counting helpers.
//! - [`HostFixture`]: a host wired to both, plus a platform event hub.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use mhost_core::{HostEnvironment, Orientation, OrientationSpec, PlatformEvent, RemoteButton};
use mhost_modal::{
    ContextId, ModalConfig, ModalHost, ModalHostEvent, ModalHostId, PresentOutcome,
    PresentationContext, PresentationInteractor,
};
use mhost_runtime::{PlatformEventHub, Subscription};

// ============================================================================
// RecordingInteractor
// ============================================================================

/// How a [`RecordingInteractor`] completes presentations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionMode {
    /// `present` returns [`PresentOutcome::Completed`].
    Immediate,
    /// `present` returns [`PresentOutcome::Pending`]; the test completes it.
    #[default]
    Deferred,
}

/// A call received by a [`RecordingInteractor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractorCall {
    /// `present` was called.
    Present {
        /// Host passed in.
        host: ModalHostId,
        /// Context passed in.
        context: ContextId,
        /// Animation flag passed in.
        animated: bool,
    },
    /// `dismiss` was called.
    Dismiss {
        /// Host passed in.
        host: ModalHostId,
        /// Context passed in.
        context: ContextId,
        /// Animation flag passed in.
        animated: bool,
    },
}

/// Interactor that records calls and tracks on-screen hosts.
#[derive(Debug, Default)]
pub struct RecordingInteractor {
    mode: Cell<CompletionMode>,
    calls: RefCell<Vec<InteractorCall>>,
    presented: RefCell<HashSet<ModalHostId>>,
}

impl RecordingInteractor {
    /// Interactor with the given completion mode.
    #[must_use]
    pub fn new(mode: CompletionMode) -> Rc<Self> {
        let interactor = Self::default();
        interactor.mode.set(mode);
        Rc::new(interactor)
    }

    /// Interactor completing synchronously.
    #[must_use]
    pub fn immediate() -> Rc<Self> {
        Self::new(CompletionMode::Immediate)
    }

    /// Interactor leaving completion to the test.
    #[must_use]
    pub fn deferred() -> Rc<Self> {
        Self::new(CompletionMode::Deferred)
    }

    /// Change the completion mode.
    pub fn set_mode(&self, mode: CompletionMode) {
        self.mode.set(mode);
    }

    /// Every call, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<InteractorCall> {
        self.calls.borrow().clone()
    }

    /// Contexts passed to `present`, in order.
    #[must_use]
    pub fn presented_contexts(&self) -> Vec<ContextId> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                InteractorCall::Present { context, .. } => Some(*context),
                InteractorCall::Dismiss { .. } => None,
            })
            .collect()
    }

    /// Contexts passed to `dismiss`, in order.
    #[must_use]
    pub fn dismissed_contexts(&self) -> Vec<ContextId> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                InteractorCall::Dismiss { context, .. } => Some(*context),
                InteractorCall::Present { .. } => None,
            })
            .collect()
    }

    /// Number of `present` calls.
    #[must_use]
    pub fn present_count(&self) -> usize {
        self.presented_contexts().len()
    }

    /// Number of `dismiss` calls.
    #[must_use]
    pub fn dismiss_count(&self) -> usize {
        self.dismissed_contexts().len()
    }
}

impl PresentationInteractor for RecordingInteractor {
    fn present(
        &self,
        host: ModalHostId,
        context: &PresentationContext,
        animated: bool,
    ) -> PresentOutcome {
        self.calls.borrow_mut().push(InteractorCall::Present {
            host,
            context: context.id(),
            animated,
        });
        self.presented.borrow_mut().insert(host);
        tracing::trace!(host = host.get(), context = context.id().get(), "recorded present");
        match self.mode.get() {
            CompletionMode::Immediate => PresentOutcome::Completed,
            CompletionMode::Deferred => PresentOutcome::Pending,
        }
    }

    fn dismiss(&self, host: ModalHostId, context: &PresentationContext, animated: bool) {
        self.calls.borrow_mut().push(InteractorCall::Dismiss {
            host,
            context: context.id(),
            animated,
        });
        self.presented.borrow_mut().remove(&host);
        tracing::trace!(host = host.get(), context = context.id().get(), "recorded dismiss");
    }

    fn is_presented(&self, host: ModalHostId) -> bool {
        self.presented.borrow().contains(&host)
    }
}

// ============================================================================
// EventLog
// ============================================================================

/// Shared sink for host events.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<ModalHostEvent>>>,
}

impl EventLog {
    /// Empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install this log as `host`'s event handler.
    pub fn attach(&self, host: &mut ModalHost) {
        let events = Rc::clone(&self.events);
        host.set_event_handler(move |event| events.borrow_mut().push(event.clone()));
    }

    /// Every event, in order.
    #[must_use]
    pub fn events(&self) -> Vec<ModalHostEvent> {
        self.events.borrow().clone()
    }

    /// Number of `Show` events.
    #[must_use]
    pub fn show_count(&self) -> usize {
        self.count(|e| matches!(e, ModalHostEvent::Show))
    }

    /// Number of `RequestClose` events.
    #[must_use]
    pub fn request_close_count(&self) -> usize {
        self.count(|e| matches!(e, ModalHostEvent::RequestClose))
    }

    /// Reported orientations, in order.
    #[must_use]
    pub fn orientation_changes(&self) -> Vec<OrientationSpec> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                ModalHostEvent::OrientationChange(spec) => Some(spec.clone()),
                _ => None,
            })
            .collect()
    }

    /// Whether nothing was logged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Forget logged events.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    fn count(&self, pred: impl Fn(&ModalHostEvent) -> bool) -> usize {
        self.events.borrow().iter().filter(|e| pred(e)).count()
    }
}

// ============================================================================
// HostFixture
// ============================================================================

/// A host subscribed to a hub, wired to a recording interactor and a log.
pub struct HostFixture {
    /// The host under test.
    pub host: Rc<RefCell<ModalHost>>,
    /// Its interactor. Dropping this detaches it from the host.
    pub interactor: Rc<RecordingInteractor>,
    /// Its event log.
    pub log: EventLog,
    /// Platform event hub the host is subscribed to.
    pub hub: PlatformEventHub,
    subscription: Option<Subscription>,
}

impl std::fmt::Debug for HostFixture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostFixture")
            .field("host", &self.host)
            .field("log", &self.log)
            .field("subscribed", &self.subscription.is_some())
            .finish_non_exhaustive()
    }
}

impl HostFixture {
    /// Build a fixture on a touch platform.
    #[must_use]
    pub fn touch(config: ModalConfig, mode: CompletionMode) -> Self {
        Self::build(HostEnvironment::touch(), config, mode)
    }

    /// Build a fixture on a remote-control platform.
    #[must_use]
    pub fn remote(config: ModalConfig, mode: CompletionMode) -> Self {
        Self::build(HostEnvironment::remote_control(), config, mode)
    }

    /// Build a fixture for `env`. The hub starts in portrait.
    #[must_use]
    pub fn build(env: HostEnvironment, config: ModalConfig, mode: CompletionMode) -> Self {
        let interactor = RecordingInteractor::new(mode);
        let log = EventLog::new();
        let mut host = ModalHost::with_config(env, config);
        host.set_interactor(&interactor);
        log.attach(&mut host);

        let host = Rc::new(RefCell::new(host));
        let hub = PlatformEventHub::with_orientation(Orientation::Portrait);
        let subscription = Some(hub.subscribe(&host));
        Self {
            host,
            interactor,
            log,
            hub,
            subscription,
        }
    }

    /// Deliver a platform orientation change through the hub.
    pub fn rotate(&self, orientation: Orientation) -> usize {
        self.hub
            .dispatch(&PlatformEvent::OrientationChanged(orientation))
    }

    /// Deliver a remote button press through the hub.
    pub fn press(&self, button: RemoteButton) -> usize {
        self.hub.dispatch(&PlatformEvent::RemoteNavigation(button))
    }

    /// Complete the host's pending presentation, if any.
    pub fn complete_pending(&self) -> bool {
        let pending = self.host.borrow().pending_context();
        pending.is_some_and(|context| self.host.borrow_mut().complete_presentation(context))
    }

    /// Stop delivering platform events to the host.
    pub fn unsubscribe(&mut self) {
        self.subscription = None;
    }
}
