#![forbid(unsafe_code)]

//! Platform vocabulary for modal hosts.
//!
//! - [`orientation`]: physical orientations, supported-orientation entries,
//!   masks, and the reporting policy.
//! - [`event`]: events the platform delivers to hosts.
//! - [`environment`]: the opaque environment handle hosts are built from.

pub mod environment;
pub mod event;
#[cfg(feature = "tracing-json")]
pub mod logging;
pub mod orientation;

pub use environment::{CapabilityError, EnvironmentId, HostEnvironment, PlatformCapabilities};
pub use event::{PlatformEvent, RemoteButton};
pub use orientation::{Orientation, OrientationMask, OrientationSpec, resolve_orientation};
