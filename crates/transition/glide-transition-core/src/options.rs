//! User-facing transition options and boundary normalization.

use serde::{Deserialize, Serialize};

use crate::catalog::{TransitionCatalog, TransitionKind};

/// Boolean-or-string shorthand for one transition kind.
///
/// JSON `false` disables the kind, `true` enables it with the catalog default
/// direction, and a string selects a direction explicitly. Direction strings
/// are not validated here; unrecognized values fall back to the kind's default
/// at keyframe-build time while still contributing their raw text to the rule
/// name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransitionSetting {
    Enabled(bool),
    Direction(String),
}

impl TransitionSetting {
    /// An empty direction string counts as off, matching the truthiness test
    /// the option object goes through.
    pub fn is_active(&self) -> bool {
        match self {
            TransitionSetting::Enabled(on) => *on,
            TransitionSetting::Direction(d) => !d.is_empty(),
        }
    }
}

fn default_duration() -> String {
    "1s".to_string()
}

fn default_easing() -> String {
    "ease-out".to_string()
}

fn default_fill_mode() -> String {
    "forwards".to_string()
}

/// Declarative configuration for one `start` call.
///
/// The element reference (`$el`) is not part of this struct; the core stays
/// DOM-free and the adapter resolves targets itself. Unknown JSON keys are
/// ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionOptions {
    #[serde(default = "default_duration")]
    pub duration: String,
    #[serde(default = "default_easing")]
    pub easing: String,
    /// `fillModel` (sic) is the wire name accepted from callers.
    #[serde(rename = "fillModel", default = "default_fill_mode")]
    pub fill_mode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slide: Option<TransitionSetting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fade: Option<TransitionSetting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<TransitionSetting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur: Option<TransitionSetting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate: Option<TransitionSetting>,
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            duration: default_duration(),
            easing: default_easing(),
            fill_mode: default_fill_mode(),
            slide: None,
            fade: None,
            zoom: None,
            blur: None,
            rotate: None,
        }
    }
}

impl TransitionOptions {
    pub fn setting(&self, kind: TransitionKind) -> Option<&TransitionSetting> {
        match kind {
            TransitionKind::Slide => self.slide.as_ref(),
            TransitionKind::Fade => self.fade.as_ref(),
            TransitionKind::Zoom => self.zoom.as_ref(),
            TransitionKind::Blur => self.blur.as_ref(),
            TransitionKind::Rotate => self.rotate.as_ref(),
        }
    }

    fn setting_mut(&mut self, kind: TransitionKind) -> &mut Option<TransitionSetting> {
        match kind {
            TransitionKind::Slide => &mut self.slide,
            TransitionKind::Fade => &mut self.fade,
            TransitionKind::Zoom => &mut self.zoom,
            TransitionKind::Blur => &mut self.blur,
            TransitionKind::Rotate => &mut self.rotate,
        }
    }

    /// Replace every bare `true` with the catalog default direction for that
    /// kind. Other settings pass through unchanged. Idempotent.
    pub fn normalize(&mut self, catalog: &TransitionCatalog) {
        for kind in TransitionKind::ALL {
            let slot = self.setting_mut(kind);
            if matches!(slot, Some(TransitionSetting::Enabled(true))) {
                *slot = Some(TransitionSetting::Direction(
                    catalog.default_direction(kind).to_string(),
                ));
            }
        }
    }

    /// `(kind, direction)` pairs for every truthy kind, in catalog order.
    /// A bare `true` that has not been normalized yet maps to the default.
    pub fn active<'a>(&'a self, catalog: &TransitionCatalog) -> Vec<(TransitionKind, &'a str)> {
        let mut out = Vec::new();
        for kind in TransitionKind::ALL {
            match self.setting(kind) {
                Some(TransitionSetting::Enabled(true)) => {
                    out.push((kind, catalog.default_direction(kind)));
                }
                Some(TransitionSetting::Direction(d)) if !d.is_empty() => {
                    out.push((kind, d.as_str()));
                }
                _ => {}
            }
        }
        out
    }
}
