#![forbid(unsafe_code)]

//! Production logging bootstrap.
//!
//! Installs a JSON `tracing` subscriber filtered by `RUST_LOG` (default
//! `info`). Hosts log absorbed failures at `warn` and lifecycle transitions at
//! `debug`, so `RUST_LOG=mhost_modal=debug` shows the full protocol.

use core::fmt;

use tracing_subscriber::EnvFilter;

/// Error installing the global subscriber.
#[derive(Debug)]
pub enum LoggingError {
    /// A global subscriber is already installed.
    AlreadyInstalled(String),
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyInstalled(msg) => write!(f, "tracing subscriber already installed: {msg}"),
        }
    }
}

impl std::error::Error for LoggingError {}

/// Install the JSON subscriber as the global default.
///
/// # Errors
///
/// Returns [`LoggingError::AlreadyInstalled`] if another global subscriber
/// was set first.
pub fn init_json() -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_current_span(false)
        .try_init()
        .map_err(|err| LoggingError::AlreadyInstalled(err.to_string()))?;
    tracing::debug!("json logging installed");
    Ok(())
}
