//! Static catalog of transition kinds and their ordered direction lists.

use serde::{Deserialize, Serialize};

/// A category of visual effect.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionKind {
    Slide,
    Fade,
    Zoom,
    Blur,
    Rotate,
}

impl TransitionKind {
    /// Catalog iteration order. Keyframe construction walks kinds in this
    /// order; rule naming re-sorts alphabetically on its own.
    pub const ALL: [TransitionKind; 5] = [
        TransitionKind::Slide,
        TransitionKind::Fade,
        TransitionKind::Zoom,
        TransitionKind::Blur,
        TransitionKind::Rotate,
    ];

    /// Lowercase option key for this kind.
    pub fn key(self) -> &'static str {
        match self {
            TransitionKind::Slide => "slide",
            TransitionKind::Fade => "fade",
            TransitionKind::Zoom => "zoom",
            TransitionKind::Blur => "blur",
            TransitionKind::Rotate => "rotate",
        }
    }
}

/// Ordered direction lists per kind. The first entry of each list is both the
/// default used when a bare `true` is supplied and the fallback for
/// unrecognized direction strings, so the two can never diverge.
#[derive(Clone, Copy, Debug, Default)]
pub struct TransitionCatalog;

impl TransitionCatalog {
    pub fn new() -> Self {
        Self
    }

    pub fn directions(&self, kind: TransitionKind) -> &'static [&'static str] {
        match kind {
            TransitionKind::Slide => &["left", "right", "top", "bottom"],
            TransitionKind::Fade
            | TransitionKind::Zoom
            | TransitionKind::Blur
            | TransitionKind::Rotate => &["in", "out"],
        }
    }

    #[inline]
    pub fn default_direction(&self, kind: TransitionKind) -> &'static str {
        self.directions(kind)[0]
    }

    /// Map a user-supplied direction onto a catalog entry. Unrecognized
    /// strings fall back to the kind's first-listed direction.
    pub fn resolve_direction(&self, kind: TransitionKind, supplied: &str) -> &'static str {
        self.directions(kind)
            .iter()
            .copied()
            .find(|d| *d == supplied)
            .unwrap_or_else(|| self.default_direction(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_first_listed() {
        let catalog = TransitionCatalog::new();
        assert_eq!(catalog.default_direction(TransitionKind::Slide), "left");
        assert_eq!(catalog.default_direction(TransitionKind::Fade), "in");
        assert_eq!(catalog.default_direction(TransitionKind::Zoom), "in");
        assert_eq!(catalog.default_direction(TransitionKind::Blur), "in");
        assert_eq!(catalog.default_direction(TransitionKind::Rotate), "in");
    }

    #[test]
    fn unrecognized_direction_falls_back_to_default() {
        let catalog = TransitionCatalog::new();
        assert_eq!(
            catalog.resolve_direction(TransitionKind::Slide, "diagonal"),
            "left"
        );
        assert_eq!(catalog.resolve_direction(TransitionKind::Fade, "up"), "in");
        assert_eq!(
            catalog.resolve_direction(TransitionKind::Slide, "bottom"),
            "bottom"
        );
    }
}
