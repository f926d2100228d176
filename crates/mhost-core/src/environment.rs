#![forbid(unsafe_code)]

//! Host environment handle.
//!
//! A [`HostEnvironment`] is the opaque token every modal host is constructed
//! with. It identifies the embedding environment (the bridge that owns the
//! host) and advertises what the platform can do. Hosts only consult it to
//! decide which optional sub-components to build.

use core::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use bitflags::bitflags;

/// Global counter for environment ids.
static ENVIRONMENT_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

bitflags! {
    /// Optional platform capabilities.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PlatformCapabilities: u32 {
        /// The platform is driven by a remote control and delivers
        /// remote-navigation events (menu/back, directional, select).
        const REMOTE_CONTROL = 1 << 0;
    }
}

impl PlatformCapabilities {
    /// Look up a single capability by its configuration name.
    #[must_use]
    pub fn from_config_name(name: &str) -> Option<Self> {
        match name.trim() {
            "remote-control" => Some(Self::REMOTE_CONTROL),
            _ => None,
        }
    }

    /// Parse a list of capability names.
    ///
    /// # Errors
    ///
    /// Returns [`CapabilityError::Unknown`] for the first unrecognized name.
    pub fn from_names<'a>(
        names: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, CapabilityError> {
        names.into_iter().try_fold(Self::empty(), |acc, name| {
            Self::from_config_name(name)
                .map(|cap| acc | cap)
                .ok_or_else(|| CapabilityError::Unknown(name.to_owned()))
        })
    }
}

/// Error parsing platform capabilities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    /// The name does not match any capability.
    Unknown(String),
}

impl fmt::Display for CapabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(name) => write!(f, "unknown platform capability: {name}"),
        }
    }
}

impl std::error::Error for CapabilityError {}

/// Unique identifier for a host environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnvironmentId(u64);

impl EnvironmentId {
    fn next() -> Self {
        Self(ENVIRONMENT_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Opaque handle to the environment embedding a modal host.
///
/// Cloning yields another handle to the same environment (same id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEnvironment {
    id: EnvironmentId,
    capabilities: PlatformCapabilities,
}

impl HostEnvironment {
    /// Create a new environment with the given capabilities.
    #[must_use]
    pub fn new(capabilities: PlatformCapabilities) -> Self {
        let id = EnvironmentId::next();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            environment = id.get(),
            capabilities = capabilities.bits(),
            "host environment created"
        );
        Self { id, capabilities }
    }

    /// Environment of a touch platform (no remote control).
    #[must_use]
    pub fn touch() -> Self {
        Self::new(PlatformCapabilities::empty())
    }

    /// Environment of a remote-control platform.
    #[must_use]
    pub fn remote_control() -> Self {
        Self::new(PlatformCapabilities::REMOTE_CONTROL)
    }

    /// The environment id.
    #[inline]
    pub const fn id(&self) -> EnvironmentId {
        self.id
    }

    /// Advertised capabilities.
    #[inline]
    pub const fn capabilities(&self) -> PlatformCapabilities {
        self.capabilities
    }

    /// Whether every capability in `caps` is advertised.
    #[inline]
    pub const fn supports(&self, caps: PlatformCapabilities) -> bool {
        self.capabilities.contains(caps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_capability_names() {
        assert_eq!(
            PlatformCapabilities::from_names(["remote-control"]),
            Ok(PlatformCapabilities::REMOTE_CONTROL)
        );
        assert_eq!(
            PlatformCapabilities::from_names(std::iter::empty()),
            Ok(PlatformCapabilities::empty())
        );
    }

    #[test]
    fn config_names_are_trimmed_and_exact() {
        assert_eq!(
            PlatformCapabilities::from_config_name(" remote-control "),
            Some(PlatformCapabilities::REMOTE_CONTROL)
        );
        assert_eq!(PlatformCapabilities::from_config_name("REMOTE_CONTROL"), None);
        assert_eq!(
            PlatformCapabilities::from_name("REMOTE_CONTROL"),
            Some(PlatformCapabilities::REMOTE_CONTROL)
        );
    }

    #[test]
    fn unknown_capability_is_an_error() {
        let err = PlatformCapabilities::from_names(["remote-control", "hologram"]).unwrap_err();
        assert_eq!(err, CapabilityError::Unknown("hologram".into()));
        assert_eq!(err.to_string(), "unknown platform capability: hologram");
    }

    #[test]
    fn environments_have_unique_ids() {
        let a = HostEnvironment::touch();
        let b = HostEnvironment::touch();
        assert_ne!(a.id(), b.id());
        assert_eq!(a.clone().id(), a.id());
    }

    #[test]
    fn supports_checks_capabilities() {
        assert!(HostEnvironment::remote_control().supports(PlatformCapabilities::REMOTE_CONTROL));
        assert!(!HostEnvironment::touch().supports(PlatformCapabilities::REMOTE_CONTROL));
    }
}
