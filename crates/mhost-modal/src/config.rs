#![forbid(unsafe_code)]

//! Modal host configuration.
//!
//! [`ModalConfig`] is the full configuration owned by a host. Updates arrive
//! as [`ModalConfigPatch`]es: each field is independently optional, and
//! applying a patch overwrites exactly the fields it carries.
//!
//! # Invariants
//!
//! 1. **Last write wins per field**: after any sequence of patches, a field
//!    holds the value of the last patch that carried it, independent of
//!    every other field.
//! 2. **Pass-through**: unknown animation types and presentation styles are
//!    stored verbatim (`Other`) and forwarded to the interactor, never
//!    rejected.
//! 3. [`ModalConfig::apply`] reports exactly the fields whose value changed.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Unknown animation type | Newer host application | Stored as `AnimationType::Other` |
//! | Unknown presentation style | Platform-specific value | Stored as `PresentationStyle::Other` |
//! | Unknown orientation | Newer platform value | Stored as `OrientationSpec::Other`, allows nothing |

use core::fmt;

use bitflags::bitflags;
use mhost_core::{OrientationMask, OrientationSpec};

// ---------------------------------------------------------------------------
// AnimationType
// ---------------------------------------------------------------------------

/// Transition animation family requested for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum AnimationType {
    /// `"none"`: appear without animation.
    #[default]
    None,
    /// `"slide"`: slide in from the bottom.
    Slide,
    /// `"fade"`: fade in.
    Fade,
    /// Any other identifier, forwarded verbatim.
    Other(String),
}

impl AnimationType {
    /// Parse an identifier. Never fails.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "none" => Self::None,
            "slide" => Self::Slide,
            "fade" => Self::Fade,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Wire identifier, exactly as parsed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "none",
            Self::Slide => "slide",
            Self::Fade => "fade",
            Self::Other(name) => name,
        }
    }

    /// Whether presenting with this animation type should animate.
    ///
    /// Unknown types animate; the interactor decides what that means.
    #[must_use]
    pub fn is_animated(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Platform transition this animation type maps to.
    #[must_use]
    pub fn transition(&self) -> Transition {
        match self {
            Self::None => Transition::None,
            Self::Slide => Transition::CoverVertical,
            Self::Fade => Transition::CrossDissolve,
            Self::Other(name) => Transition::Custom(name.clone()),
        }
    }
}

impl From<String> for AnimationType {
    fn from(name: String) -> Self {
        match Self::parse(&name) {
            Self::Other(_) => Self::Other(name),
            known => known,
        }
    }
}

impl From<&str> for AnimationType {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl From<AnimationType> for String {
    fn from(animation: AnimationType) -> Self {
        match animation {
            AnimationType::Other(name) => name,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for AnimationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform transition used to present content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Transition {
    /// No transition.
    None,
    /// Content covers the screen from the bottom edge.
    CoverVertical,
    /// Content cross-fades in.
    CrossDissolve,
    /// Interactor-defined transition named by an unknown animation type.
    Custom(String),
}

// ---------------------------------------------------------------------------
// PresentationStyle
// ---------------------------------------------------------------------------

/// Platform modal presentation style.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum PresentationStyle {
    /// `"fullScreen"`.
    #[default]
    FullScreen,
    /// `"pageSheet"`.
    PageSheet,
    /// `"formSheet"`.
    FormSheet,
    /// `"overFullScreen"`: full screen, content beneath stays rendered.
    OverFullScreen,
    /// `"overCurrentContext"`: over the presenting context, content beneath
    /// stays rendered.
    OverCurrentContext,
    /// Any other platform style, forwarded verbatim.
    Other(String),
}

impl PresentationStyle {
    /// Parse an identifier. Never fails.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "fullScreen" => Self::FullScreen,
            "pageSheet" => Self::PageSheet,
            "formSheet" => Self::FormSheet,
            "overFullScreen" => Self::OverFullScreen,
            "overCurrentContext" => Self::OverCurrentContext,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Wire identifier, exactly as parsed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::FullScreen => "fullScreen",
            Self::PageSheet => "pageSheet",
            Self::FormSheet => "formSheet",
            Self::OverFullScreen => "overFullScreen",
            Self::OverCurrentContext => "overCurrentContext",
            Self::Other(name) => name,
        }
    }

    /// Whether the style keeps the presenting content rendered underneath.
    #[must_use]
    pub fn keeps_underlying_content(&self) -> bool {
        matches!(self, Self::OverFullScreen | Self::OverCurrentContext)
    }
}

impl From<String> for PresentationStyle {
    fn from(name: String) -> Self {
        match Self::parse(&name) {
            Self::Other(_) => Self::Other(name),
            known => known,
        }
    }
}

impl From<&str> for PresentationStyle {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl From<PresentationStyle> for String {
    fn from(style: PresentationStyle) -> Self {
        match style {
            PresentationStyle::Other(name) => name,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for PresentationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ModalConfig
// ---------------------------------------------------------------------------

bitflags! {
    /// Configuration fields, used to report what a patch changed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ConfigFields: u8 {
        /// [`ModalConfig::animation_type`].
        const ANIMATION_TYPE = 1 << 0;
        /// [`ModalConfig::presentation_style`].
        const PRESENTATION_STYLE = 1 << 1;
        /// [`ModalConfig::transparent`].
        const TRANSPARENT = 1 << 2;
        /// [`ModalConfig::supported_orientations`].
        const SUPPORTED_ORIENTATIONS = 1 << 3;
        /// [`ModalConfig::identifier`].
        const IDENTIFIER = 1 << 4;
    }
}

/// Full modal host configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct ModalConfig {
    /// Transition animation family.
    pub animation_type: AnimationType,
    /// Platform presentation style.
    pub presentation_style: PresentationStyle,
    /// Whether content beneath the modal stays visible.
    pub transparent: bool,
    /// Allowed orientations, in source order. Empty means unrestricted.
    pub supported_orientations: Vec<OrientationSpec>,
    /// Opaque identity used by the environment to correlate this host.
    pub identifier: Option<i64>,
}

impl ModalConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the animation type.
    #[must_use]
    pub fn animation_type(mut self, animation: impl Into<AnimationType>) -> Self {
        self.animation_type = animation.into();
        self
    }

    /// Set the presentation style.
    #[must_use]
    pub fn presentation_style(mut self, style: impl Into<PresentationStyle>) -> Self {
        self.presentation_style = style.into();
        self
    }

    /// Set transparency.
    #[must_use]
    pub fn transparent(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }

    /// Set the supported orientations.
    #[must_use]
    pub fn supported_orientations<I, S>(mut self, specs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OrientationSpec>,
    {
        self.supported_orientations = specs.into_iter().map(Into::into).collect();
        self
    }

    /// Set the identifier.
    #[must_use]
    pub fn identifier(mut self, identifier: Option<i64>) -> Self {
        self.identifier = identifier;
        self
    }

    /// Physical orientations allowed by [`Self::supported_orientations`].
    #[must_use]
    pub fn orientation_mask(&self) -> OrientationMask {
        OrientationMask::from_specs(&self.supported_orientations)
    }

    /// Whether content beneath the modal is expected to stay visible, either
    /// because the host is transparent or because the style keeps it.
    #[must_use]
    pub fn shows_underlying_content(&self) -> bool {
        self.transparent || self.presentation_style.keeps_underlying_content()
    }

    /// Apply `patch`, returning the fields whose value changed.
    pub fn apply(&mut self, patch: ModalConfigPatch) -> ConfigFields {
        let mut changed = ConfigFields::empty();
        if let Some(animation) = patch.animation_type {
            changed.set(ConfigFields::ANIMATION_TYPE, animation != self.animation_type);
            self.animation_type = animation;
        }
        if let Some(style) = patch.presentation_style {
            changed.set(
                ConfigFields::PRESENTATION_STYLE,
                style != self.presentation_style,
            );
            self.presentation_style = style;
        }
        if let Some(transparent) = patch.transparent {
            changed.set(ConfigFields::TRANSPARENT, transparent != self.transparent);
            self.transparent = transparent;
        }
        if let Some(specs) = patch.supported_orientations {
            changed.set(
                ConfigFields::SUPPORTED_ORIENTATIONS,
                specs != self.supported_orientations,
            );
            self.supported_orientations = specs;
        }
        if let Some(identifier) = patch.identifier {
            changed.set(ConfigFields::IDENTIFIER, identifier != self.identifier);
            self.identifier = identifier;
        }
        changed
    }
}

// ---------------------------------------------------------------------------
// ModalConfigPatch
// ---------------------------------------------------------------------------

/// Partial configuration update. `None` leaves a field untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct ModalConfigPatch {
    /// New animation type.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub animation_type: Option<AnimationType>,
    /// New presentation style.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub presentation_style: Option<PresentationStyle>,
    /// New transparency.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub transparent: Option<bool>,
    /// New supported orientations.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub supported_orientations: Option<Vec<OrientationSpec>>,
    /// New identifier. `Some(None)` clears it.
    #[cfg_attr(
        feature = "serde",
        serde(
            skip_serializing_if = "Option::is_none",
            deserialize_with = "deserialize_present"
        )
    )]
    pub identifier: Option<Option<i64>>,
}

/// Distinguishes an explicit `null` (`Some(None)`) from a missing key (`None`,
/// via `#[serde(default)]`).
#[cfg(feature = "serde")]
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl ModalConfigPatch {
    /// Create an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the animation type.
    #[must_use]
    pub fn animation_type(mut self, animation: impl Into<AnimationType>) -> Self {
        self.animation_type = Some(animation.into());
        self
    }

    /// Set the presentation style.
    #[must_use]
    pub fn presentation_style(mut self, style: impl Into<PresentationStyle>) -> Self {
        self.presentation_style = Some(style.into());
        self
    }

    /// Set transparency.
    #[must_use]
    pub fn transparent(mut self, transparent: bool) -> Self {
        self.transparent = Some(transparent);
        self
    }

    /// Set the supported orientations.
    #[must_use]
    pub fn supported_orientations<I, S>(mut self, specs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OrientationSpec>,
    {
        self.supported_orientations = Some(specs.into_iter().map(Into::into).collect());
        self
    }

    /// Set or clear the identifier.
    #[must_use]
    pub fn identifier(mut self, identifier: Option<i64>) -> Self {
        self.identifier = Some(identifier);
        self
    }

    /// Fields this patch carries.
    #[must_use]
    pub fn fields(&self) -> ConfigFields {
        let mut fields = ConfigFields::empty();
        fields.set(ConfigFields::ANIMATION_TYPE, self.animation_type.is_some());
        fields.set(
            ConfigFields::PRESENTATION_STYLE,
            self.presentation_style.is_some(),
        );
        fields.set(ConfigFields::TRANSPARENT, self.transparent.is_some());
        fields.set(
            ConfigFields::SUPPORTED_ORIENTATIONS,
            self.supported_orientations.is_some(),
        );
        fields.set(ConfigFields::IDENTIFIER, self.identifier.is_some());
        fields
    }

    /// Whether the patch carries no field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }
}

impl From<ModalConfig> for ModalConfigPatch {
    fn from(config: ModalConfig) -> Self {
        Self {
            animation_type: Some(config.animation_type),
            presentation_style: Some(config.presentation_style),
            transparent: Some(config.transparent),
            supported_orientations: Some(config.supported_orientations),
            identifier: Some(config.identifier),
        }
    }
}
