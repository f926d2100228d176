#![forbid(unsafe_code)]

//! Events delivered by the platform to modal hosts.
//!
//! Platform events flow one way: platform → host. A host re-emits at most one
//! component event per platform event and never buffers.

use core::fmt;

use crate::orientation::Orientation;

/// Buttons of a remote-control navigation device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum RemoteButton {
    /// Menu button. Acts as "back" on remote-control platforms.
    Menu,
    /// Dedicated back button.
    Back,
    /// Select / click.
    Select,
    /// Play/pause.
    PlayPause,
    /// Directional swipe or press up.
    Up,
    /// Directional swipe or press down.
    Down,
    /// Directional swipe or press left.
    Left,
    /// Directional swipe or press right.
    Right,
}

impl RemoteButton {
    /// Whether the button is a "go back" navigation signal.
    #[inline]
    #[must_use]
    pub const fn is_back_navigation(self) -> bool {
        matches!(self, Self::Menu | Self::Back)
    }
}

/// Event from the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", content = "value", rename_all = "camelCase")
)]
pub enum PlatformEvent {
    /// The physical orientation changed.
    OrientationChanged(Orientation),
    /// A remote-control button was pressed.
    RemoteNavigation(RemoteButton),
}

impl PlatformEvent {
    /// Short name for log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::OrientationChanged(_) => "orientation",
            Self::RemoteNavigation(_) => "remote",
        }
    }
}

impl fmt::Display for PlatformEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OrientationChanged(o) => write!(f, "orientation changed to {o}"),
            Self::RemoteNavigation(b) => write!(f, "remote {b:?}"),
        }
    }
}
