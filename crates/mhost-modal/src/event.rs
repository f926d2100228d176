#![forbid(unsafe_code)]

//! Events a modal host emits, and the outcomes of its requests.

use core::fmt;

use mhost_core::OrientationSpec;

use crate::interactor::ContextId;

/// Lifecycle event emitted by a host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalHostEvent {
    /// Presentation finished. Emitted once per presented context.
    Show,
    /// The reported orientation changed while presented.
    OrientationChange(OrientationSpec),
    /// Back navigation arrived from a remote control while presented.
    RequestClose,
}

impl ModalHostEvent {
    /// Event name as seen by the host application.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Show => "onShow",
            Self::OrientationChange(_) => "onOrientationChange",
            Self::RequestClose => "onRequestClose",
        }
    }
}

/// Why a request was absorbed without effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// No live interactor is attached.
    InteractorAbsent,
    /// The interactor reports the host already on screen.
    AlreadyPresented,
    /// A presentation request is still waiting for completion.
    PresentationInFlight,
    /// The host has been invalidated.
    Invalidated,
    /// A completion arrived for a context that is not pending.
    StaleCompletion,
}

impl Rejection {
    /// Stable name for log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InteractorAbsent => "interactor_absent",
            Self::AlreadyPresented => "already_presented",
            Self::PresentationInFlight => "presentation_in_flight",
            Self::Invalidated => "invalidated",
            Self::StaleCompletion => "stale_completion",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InteractorAbsent => write!(f, "no presentation interactor attached"),
            Self::AlreadyPresented => write!(f, "host is already presented"),
            Self::PresentationInFlight => write!(f, "a presentation is already in flight"),
            Self::Invalidated => write!(f, "host has been invalidated"),
            Self::StaleCompletion => write!(f, "completion for a context that is not pending"),
        }
    }
}

/// What a presentation request did. Informational; callers may ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentRequest {
    /// The interactor completed synchronously and `Show` was emitted.
    Shown(ContextId),
    /// The interactor accepted the request; completion is pending.
    Pending(ContextId),
    /// The request was absorbed.
    Rejected(Rejection),
}

impl PresentRequest {
    /// Context minted for the request, if it reached the interactor.
    #[must_use]
    pub const fn context(self) -> Option<ContextId> {
        match self {
            Self::Shown(id) | Self::Pending(id) => Some(id),
            Self::Rejected(_) => None,
        }
    }

    /// Whether the request reached the interactor.
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        !matches!(self, Self::Rejected(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_names() {
        assert_eq!(ModalHostEvent::Show.name(), "onShow");
        assert_eq!(
            ModalHostEvent::OrientationChange(OrientationSpec::Portrait).name(),
            "onOrientationChange"
        );
        assert_eq!(ModalHostEvent::RequestClose.name(), "onRequestClose");
    }

    #[test]
    fn rejected_request_has_no_context() {
        let request = PresentRequest::Rejected(Rejection::InteractorAbsent);
        assert!(!request.is_accepted());
        assert_eq!(request.context(), None);
        assert_eq!(Rejection::InteractorAbsent.as_str(), "interactor_absent");
    }
}
