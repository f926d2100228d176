#![forbid(unsafe_code)]

//! The presentation contract a modal host delegates to.
//!
//! A host never puts itself on screen. It mints a [`PresentationContext`] per
//! presentation attempt and hands it to its [`PresentationInteractor`], which
//! owns the platform transition, its timing, and the truth about what is
//! currently presented.
//!
//! # Contract
//!
//! - `present` must eventually signal completion: either synchronously by
//!   returning [`PresentOutcome::Completed`], or by returning
//!   [`PresentOutcome::Pending`] and later having the environment call
//!   [`ModalHost::complete_presentation`](crate::ModalHost::complete_presentation)
//!   with the context id.
//! - Duplicate `present` calls for a host already on screen are coalesced or
//!   rejected by the interactor.
//! - `dismiss` tolerates contexts that were never presented.
//! - Methods take `&self`: hosts only hold a `Weak` reference, so any state
//!   the interactor keeps lives behind interior mutability.

use std::sync::atomic::{AtomicU64, Ordering};

use mhost_core::OrientationMask;

use crate::config::{AnimationType, ModalConfig, PresentationStyle, Transition};

/// Global counter for host ids.
static HOST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Global counter for presentation context ids.
static CONTEXT_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a modal host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModalHostId(u64);

impl ModalHostId {
    pub(crate) fn next() -> Self {
        Self(HOST_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Unique identifier for a presentation context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContextId(u64);

impl ContextId {
    fn next() -> Self {
        Self(CONTEXT_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Configuration as it was when a presentation context was minted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSnapshot {
    /// Requested animation family.
    pub animation_type: AnimationType,
    /// Transition derived from the animation family.
    pub transition: Transition,
    /// Requested presentation style.
    pub presentation_style: PresentationStyle,
    /// Whether content beneath should stay visible.
    pub transparent: bool,
    /// Orientations the presented content allows.
    pub orientations: OrientationMask,
}

impl From<&ModalConfig> for ConfigSnapshot {
    fn from(config: &ModalConfig) -> Self {
        Self {
            animation_type: config.animation_type.clone(),
            transition: config.animation_type.transition(),
            presentation_style: config.presentation_style.clone(),
            transparent: config.transparent,
            orientations: config.orientation_mask(),
        }
    }
}

/// Opaque per-presentation correlation handle.
///
/// Created fresh for each presentation request and passed unchanged to the
/// matching dismissal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationContext {
    id: ContextId,
    host: ModalHostId,
    snapshot: ConfigSnapshot,
}

impl PresentationContext {
    pub(crate) fn new(host: ModalHostId, config: &ModalConfig) -> Self {
        Self {
            id: ContextId::next(),
            host,
            snapshot: ConfigSnapshot::from(config),
        }
    }

    /// Context id, used to correlate completion.
    #[inline]
    pub const fn id(&self) -> ContextId {
        self.id
    }

    /// Host that minted this context.
    #[inline]
    pub const fn host(&self) -> ModalHostId {
        self.host
    }

    /// Configuration captured when the context was minted.
    #[inline]
    pub const fn snapshot(&self) -> &ConfigSnapshot {
        &self.snapshot
    }
}

/// How a `present` call completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentOutcome {
    /// The transition finished before `present` returned.
    Completed,
    /// Completion will be signaled later through
    /// [`ModalHost::complete_presentation`](crate::ModalHost::complete_presentation).
    Pending,
}

/// External authority that performs presentation and dismissal.
pub trait PresentationInteractor {
    /// Present `host`'s content using `context`.
    fn present(
        &self,
        host: ModalHostId,
        context: &PresentationContext,
        animated: bool,
    ) -> PresentOutcome;

    /// Dismiss `host`'s content presented with `context`.
    fn dismiss(&self, host: ModalHostId, context: &PresentationContext, animated: bool);

    /// Whether `host`'s content is currently on screen.
    ///
    /// Interactors that do not track this report `false`; duplicate
    /// presentation is then theirs to coalesce.
    fn is_presented(&self, host: ModalHostId) -> bool {
        let _ = host;
        false
    }
}
