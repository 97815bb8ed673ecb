//! Keyframe snapshots accumulated from normalized options.

use crate::catalog::{TransitionCatalog, TransitionKind};
use crate::options::TransitionOptions;

pub const TRANSFORM: &str = "transform";
pub const FILTER: &str = "filter";
pub const OPACITY: &str = "opacity";

/// One CSS declaration: either a shorthand whose value is a space-joined list
/// of `sub(value)` parts (`transform`, `filter`), or a direct
/// `property: value` pair (`opacity`).
#[derive(Clone, Debug, PartialEq)]
pub enum Declaration {
    Shorthand {
        property: String,
        parts: Vec<(String, String)>,
    },
    Direct {
        property: String,
        value: String,
    },
}

/// Ordered declaration set for one keyframe (`from` or `to`).
///
/// The `transform` and `filter` groups are pre-seeded empty, in that order, so
/// rendered declaration order is always transform, filter, then direct
/// properties regardless of which kind ran first. Empty groups render nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    declarations: Vec<Declaration>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl Snapshot {
    pub fn new() -> Self {
        Snapshot {
            declarations: vec![
                Declaration::Shorthand {
                    property: TRANSFORM.to_string(),
                    parts: Vec::new(),
                },
                Declaration::Shorthand {
                    property: FILTER.to_string(),
                    parts: Vec::new(),
                },
            ],
        }
    }

    /// Set `sub(value)` inside a shorthand group, creating the group at the
    /// end of the list when absent. An existing sub-property is overwritten in
    /// place, keeping its insertion position.
    pub fn set_part(&mut self, property: &str, sub: &str, value: &str) {
        for decl in &mut self.declarations {
            if let Declaration::Shorthand { property: p, parts } = decl {
                if p == property {
                    if let Some(entry) = parts.iter_mut().find(|(s, _)| s == sub) {
                        entry.1 = value.to_string();
                    } else {
                        parts.push((sub.to_string(), value.to_string()));
                    }
                    return;
                }
            }
        }
        self.declarations.push(Declaration::Shorthand {
            property: property.to_string(),
            parts: vec![(sub.to_string(), value.to_string())],
        });
    }

    /// Set a direct property, appended after existing declarations on first
    /// write.
    pub fn set(&mut self, property: &str, value: &str) {
        for decl in &mut self.declarations {
            if let Declaration::Direct { property: p, value: v } = decl {
                if p == property {
                    *v = value.to_string();
                    return;
                }
            }
        }
        self.declarations.push(Declaration::Direct {
            property: property.to_string(),
            value: value.to_string(),
        });
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Look up a shorthand sub-property value.
    pub fn part(&self, property: &str, sub: &str) -> Option<&str> {
        self.declarations.iter().find_map(|decl| match decl {
            Declaration::Shorthand { property: p, parts } if p == property => parts
                .iter()
                .find(|(s, _)| s == sub)
                .map(|(_, v)| v.as_str()),
            _ => None,
        })
    }

    /// Look up a direct property value.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations.iter().find_map(|decl| match decl {
            Declaration::Direct { property: p, value } if p == property => Some(value.as_str()),
            _ => None,
        })
    }
}

/// `start` renders as the `from` keyframe, `end` as `to`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyframeSpec {
    pub start: Snapshot,
    pub end: Snapshot,
}

impl KeyframeSpec {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Accumulate the per-kind start/end values of every truthy kind into one
/// spec. Kinds write disjoint properties, so the catalog iteration order does
/// not change the outcome.
pub fn build_keyframes(catalog: &TransitionCatalog, options: &TransitionOptions) -> KeyframeSpec {
    let mut spec = KeyframeSpec::new();
    for (kind, direction) in options.active(catalog) {
        apply_kind(catalog, &mut spec, kind, direction);
    }
    spec
}

fn apply_kind(
    catalog: &TransitionCatalog,
    spec: &mut KeyframeSpec,
    kind: TransitionKind,
    direction: &str,
) {
    let direction = catalog.resolve_direction(kind, direction);
    match kind {
        TransitionKind::Slide => {
            let (axis, start) = match direction {
                "top" => ("translateY", "-100%"),
                "right" => ("translateX", "100%"),
                "bottom" => ("translateY", "100%"),
                _ => ("translateX", "-100%"), // left
            };
            spec.start.set_part(TRANSFORM, axis, start);
            spec.end.set_part(TRANSFORM, axis, "0");
        }
        TransitionKind::Zoom => {
            let (start, end) = if direction == "out" { ("1", "5") } else { ("5", "1") };
            spec.start.set_part(TRANSFORM, "scale", start);
            spec.end.set_part(TRANSFORM, "scale", end);
        }
        TransitionKind::Fade => {
            let (start, end) = if direction == "out" { ("1", "0") } else { ("0", "1") };
            spec.start.set(OPACITY, start);
            spec.end.set(OPACITY, end);
        }
        TransitionKind::Blur => {
            let (start, end) = if direction == "out" {
                ("0", "10px")
            } else {
                ("10px", "0")
            };
            spec.start.set_part(FILTER, "blur", start);
            spec.end.set_part(FILTER, "blur", end);
        }
        TransitionKind::Rotate => {
            let (start, end) = if direction == "out" {
                ("0", "1turn")
            } else {
                ("1turn", "0")
            };
            spec.start.set_part(TRANSFORM, "rotate", start);
            spec.end.set_part(TRANSFORM, "rotate", end);
        }
    }
}
