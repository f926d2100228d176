#![forbid(unsafe_code)]

//! Remote-control navigation for hosts on remote-driven platforms.
//!
//! A [`RemoteHandler`] exists only when the environment advertises
//! [`PlatformCapabilities::REMOTE_CONTROL`]. Hosts without one ignore remote
//! navigation entirely; the rest of the lifecycle is unaffected.

use mhost_core::{EnvironmentId, HostEnvironment, PlatformCapabilities, RemoteButton};

/// Action a remote button maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteAction {
    /// Ask the application to close the modal.
    RequestClose,
}

/// Translates remote-control buttons into host actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteHandler {
    environment: EnvironmentId,
}

impl RemoteHandler {
    /// Build a handler if `env` is a remote-control platform.
    #[must_use]
    pub fn for_environment(env: &HostEnvironment) -> Option<Self> {
        env.supports(PlatformCapabilities::REMOTE_CONTROL)
            .then(|| Self {
                environment: env.id(),
            })
    }

    /// Environment the handler was built for.
    #[inline]
    pub const fn environment(&self) -> EnvironmentId {
        self.environment
    }

    /// Action for `button`, if any. Menu and back request close.
    #[must_use]
    pub fn action_for(&self, button: RemoteButton) -> Option<RemoteAction> {
        button
            .is_back_navigation()
            .then_some(RemoteAction::RequestClose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_remote_platforms_get_a_handler() {
        assert!(RemoteHandler::for_environment(&HostEnvironment::touch()).is_none());
        let env = HostEnvironment::remote_control();
        let handler = RemoteHandler::for_environment(&env);
        assert_eq!(handler.map(|h| h.environment()), Some(env.id()));
    }

    #[test]
    fn back_buttons_request_close() {
        let env = HostEnvironment::remote_control();
        let Some(handler) = RemoteHandler::for_environment(&env) else {
            panic!("remote environment must yield a handler");
        };
        assert_eq!(
            handler.action_for(RemoteButton::Menu),
            Some(RemoteAction::RequestClose)
        );
        assert_eq!(
            handler.action_for(RemoteButton::Back),
            Some(RemoteAction::RequestClose)
        );
        assert_eq!(handler.action_for(RemoteButton::Select), None);
        assert_eq!(handler.action_for(RemoteButton::Up), None);
    }
}
