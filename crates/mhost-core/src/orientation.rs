#![forbid(unsafe_code)]

//! Orientation vocabulary shared by modal hosts and platform adapters.
//!
//! Two related types describe orientation:
//!
//! - [`Orientation`] is what the platform reports: the physical orientation
//!   of the device or window, always one of four values.
//! - [`OrientationSpec`] is an entry of a host's supported-orientations list.
//!   It may name a family (`"landscape"` covers both landscape sides) or an
//!   unrecognized identifier that is kept verbatim for forward compatibility.
//!
//! [`OrientationMask`] folds a list of specs into the set of physical
//! orientations it allows, and [`resolve_orientation`] picks the identifier a
//! host reports for a given platform orientation.
//!
//! # Invariants
//!
//! 1. `OrientationSpec::parse(s).as_str() == s` for every input, recognized or not.
//! 2. A list with no recognized entry is unrestricted: its mask is
//!    [`OrientationMask::all()`], the same as the empty list.
//! 3. When the list is restricted, [`resolve_orientation`] always returns one
//!    of the list's recognized entries.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Unknown orientation string | Newer platform value | Kept as `Other`, allows nothing |
//! | Unknown platform name | Typo or newer value | [`Orientation::parse`] returns `None` |

use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

use bitflags::bitflags;

/// Physical orientation reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Orientation {
    /// Upright portrait.
    #[default]
    Portrait,
    /// Portrait, rotated 180 degrees.
    PortraitUpsideDown,
    /// Landscape with the top edge on the left.
    LandscapeLeft,
    /// Landscape with the top edge on the right.
    LandscapeRight,
}

impl Orientation {
    /// Every orientation, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Portrait,
        Self::PortraitUpsideDown,
        Self::LandscapeLeft,
        Self::LandscapeRight,
    ];

    /// Wire identifier (`"portrait"`, `"landscape-left"`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::PortraitUpsideDown => "portrait-upside-down",
            Self::LandscapeLeft => "landscape-left",
            Self::LandscapeRight => "landscape-right",
        }
    }

    /// Parse a wire identifier. Family names such as `"landscape"` are not
    /// physical orientations and return `None`.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.as_str() == name)
    }

    /// The single mask bit for this orientation.
    #[must_use]
    pub const fn mask(self) -> OrientationMask {
        match self {
            Self::Portrait => OrientationMask::PORTRAIT,
            Self::PortraitUpsideDown => OrientationMask::PORTRAIT_UPSIDE_DOWN,
            Self::LandscapeLeft => OrientationMask::LANDSCAPE_LEFT,
            Self::LandscapeRight => OrientationMask::LANDSCAPE_RIGHT,
        }
    }

    /// Whether this is one of the two landscape sides.
    #[inline]
    #[must_use]
    pub const fn is_landscape(self) -> bool {
        matches!(self, Self::LandscapeLeft | Self::LandscapeRight)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// Set of physical orientations.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OrientationMask: u8 {
        /// [`Orientation::Portrait`].
        const PORTRAIT = 1 << 0;
        /// [`Orientation::PortraitUpsideDown`].
        const PORTRAIT_UPSIDE_DOWN = 1 << 1;
        /// [`Orientation::LandscapeLeft`].
        const LANDSCAPE_LEFT = 1 << 2;
        /// [`Orientation::LandscapeRight`].
        const LANDSCAPE_RIGHT = 1 << 3;
        /// Both landscape sides.
        const LANDSCAPE = Self::LANDSCAPE_LEFT.bits() | Self::LANDSCAPE_RIGHT.bits();
    }
}

impl OrientationMask {
    /// Fold a supported-orientations list into a mask.
    ///
    /// Unrecognized entries contribute nothing. If nothing is contributed the
    /// list imposes no restriction and the full mask is returned.
    #[must_use]
    pub fn from_specs(specs: &[OrientationSpec]) -> Self {
        let mask = specs
            .iter()
            .fold(Self::empty(), |acc, spec| acc | spec.mask());
        if mask.is_empty() { Self::all() } else { mask }
    }

    /// Whether `orientation` is in the set.
    #[inline]
    #[must_use]
    pub const fn allows(self, orientation: Orientation) -> bool {
        self.contains(orientation.mask())
    }
}

/// An entry of a supported-orientations list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum OrientationSpec {
    /// `"portrait"`.
    Portrait,
    /// `"portrait-upside-down"`.
    PortraitUpsideDown,
    /// `"landscape"`: either landscape side.
    Landscape,
    /// `"landscape-left"`.
    LandscapeLeft,
    /// `"landscape-right"`.
    LandscapeRight,
    /// Any other identifier, preserved verbatim.
    Other(String),
}

impl OrientationSpec {
    /// Parse an identifier. Never fails: unknown names become [`Self::Other`].
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "portrait" => Self::Portrait,
            "portrait-upside-down" => Self::PortraitUpsideDown,
            "landscape" => Self::Landscape,
            "landscape-left" => Self::LandscapeLeft,
            "landscape-right" => Self::LandscapeRight,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Wire identifier, exactly as parsed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Portrait => "portrait",
            Self::PortraitUpsideDown => "portrait-upside-down",
            Self::Landscape => "landscape",
            Self::LandscapeLeft => "landscape-left",
            Self::LandscapeRight => "landscape-right",
            Self::Other(name) => name,
        }
    }

    /// Physical orientations this entry allows (empty for [`Self::Other`]).
    #[must_use]
    pub fn mask(&self) -> OrientationMask {
        match self {
            Self::Portrait => OrientationMask::PORTRAIT,
            Self::PortraitUpsideDown => OrientationMask::PORTRAIT_UPSIDE_DOWN,
            Self::Landscape => OrientationMask::LANDSCAPE,
            Self::LandscapeLeft => OrientationMask::LANDSCAPE_LEFT,
            Self::LandscapeRight => OrientationMask::LANDSCAPE_RIGHT,
            Self::Other(_) => OrientationMask::empty(),
        }
    }

    /// Whether this entry allows `orientation`.
    #[must_use]
    pub fn allows(&self, orientation: Orientation) -> bool {
        self.mask().allows(orientation)
    }

    /// Whether the identifier is one this crate understands.
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<Orientation> for OrientationSpec {
    fn from(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Portrait => Self::Portrait,
            Orientation::PortraitUpsideDown => Self::PortraitUpsideDown,
            Orientation::LandscapeLeft => Self::LandscapeLeft,
            Orientation::LandscapeRight => Self::LandscapeRight,
        }
    }
}

impl From<&str> for OrientationSpec {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl From<String> for OrientationSpec {
    fn from(name: String) -> Self {
        match Self::parse(&name) {
            Self::Other(_) => Self::Other(name),
            known => known,
        }
    }
}

impl From<OrientationSpec> for String {
    fn from(spec: OrientationSpec) -> Self {
        match spec {
            OrientationSpec::Other(name) => name,
            known => known.as_str().to_owned(),
        }
    }
}

impl FromStr for OrientationSpec {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for OrientationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the identifier a host reports for `current` under `specs`.
///
/// - Unrestricted list (empty, or nothing recognized): `current` itself.
/// - Otherwise the first entry, in list order, that allows `current`.
/// - Otherwise the first recognized entry (fallback for a disallowed
///   platform orientation).
#[must_use]
pub fn resolve_orientation(specs: &[OrientationSpec], current: Orientation) -> OrientationSpec {
    let mut recognized = specs.iter().filter(|spec| spec.is_recognized());
    let Some(first) = recognized.clone().next() else {
        return OrientationSpec::from(current);
    };
    recognized
        .find(|spec| spec.allows(current))
        .unwrap_or(first)
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn specs(names: &[&str]) -> Vec<OrientationSpec> {
        names.iter().map(|n| OrientationSpec::parse(n)).collect()
    }

    #[test]
    fn orientation_names_round_trip() {
        for o in Orientation::ALL {
            assert_eq!(Orientation::parse(o.as_str()), Some(o));
        }
        assert_eq!(Orientation::parse("landscape"), None);
        assert_eq!(Orientation::parse("sideways"), None);
    }

    #[test]
    fn landscape_family_covers_both_sides() {
        let spec = OrientationSpec::Landscape;
        assert!(spec.allows(Orientation::LandscapeLeft));
        assert!(spec.allows(Orientation::LandscapeRight));
        assert!(!spec.allows(Orientation::Portrait));
    }

    #[test]
    fn unknown_spec_is_kept_verbatim() {
        let spec = OrientationSpec::parse("face-up");
        assert_eq!(spec, OrientationSpec::Other("face-up".into()));
        assert_eq!(spec.as_str(), "face-up");
        assert!(!spec.is_recognized());
        assert!(spec.mask().is_empty());
    }

    #[test]
    fn empty_list_is_unrestricted() {
        assert_eq!(OrientationMask::from_specs(&[]), OrientationMask::all());
        assert_eq!(
            OrientationMask::from_specs(&specs(&["face-up", "face-down"])),
            OrientationMask::all()
        );
    }

    #[test]
    fn mask_folds_entries() {
        let mask = OrientationMask::from_specs(&specs(&["portrait", "landscape-left"]));
        assert!(mask.allows(Orientation::Portrait));
        assert!(mask.allows(Orientation::LandscapeLeft));
        assert!(!mask.allows(Orientation::LandscapeRight));
        assert!(!mask.allows(Orientation::PortraitUpsideDown));
    }

    #[test]
    fn resolve_unrestricted_reports_platform_value() {
        assert_eq!(
            resolve_orientation(&[], Orientation::LandscapeRight),
            OrientationSpec::LandscapeRight
        );
    }

    #[test]
    fn resolve_prefers_matching_entry() {
        let list = specs(&["portrait", "landscape"]);
        assert_eq!(
            resolve_orientation(&list, Orientation::LandscapeLeft),
            OrientationSpec::Landscape
        );
    }

    #[test]
    fn resolve_falls_back_to_first_recognized() {
        let list = specs(&["face-up", "portrait", "landscape"]);
        assert_eq!(
            resolve_orientation(&list, Orientation::PortraitUpsideDown),
            OrientationSpec::Portrait
        );
    }

    proptest! {
        #[test]
        fn parse_preserves_text(name in "[a-z-]{0,24}") {
            let spec = OrientationSpec::parse(&name);
            prop_assert_eq!(spec.as_str(), name.as_str());
        }

        #[test]
        fn restricted_resolution_stays_in_list(
            picks in proptest::collection::vec(0usize..5, 1..6),
            current in 0usize..4,
        ) {
            const NAMES: [&str; 5] = [
                "portrait",
                "portrait-upside-down",
                "landscape",
                "landscape-left",
                "landscape-right",
            ];
            let list: Vec<_> = picks.iter().map(|&i| OrientationSpec::parse(NAMES[i])).collect();
            let resolved = resolve_orientation(&list, Orientation::ALL[current]);
            prop_assert!(list.contains(&resolved));
        }
    }
}
