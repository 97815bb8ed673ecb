//! Glide Transition Core (DOM-agnostic)
//!
//! Turns a declarative set of transition options (slide/fade/zoom/blur/rotate,
//! each with a direction) into a uniquely-named CSS keyframes rule and memoizes
//! the rendered rule by a content-derived name, so repeated calls with the same
//! transition semantics reuse one stylesheet rule. Everything DOM-shaped
//! (selector resolution, stylesheet injection, assigning the animation
//! shorthand) lives in the wasm adapter crate.

pub mod builder;
pub mod cache;
pub mod catalog;
pub mod error;
pub mod keyframes;
pub mod name;
pub mod options;
pub mod render;

// Re-exports for consumers (adapters)
pub use builder::{PreparedTransition, TransitionBuilder};
pub use cache::StyleCache;
pub use catalog::{TransitionCatalog, TransitionKind};
pub use error::TransitionError;
pub use keyframes::{build_keyframes, Declaration, KeyframeSpec, Snapshot};
pub use name::{derive_rule_name, RULE_NAME_PREFIX};
pub use options::{TransitionOptions, TransitionSetting};
pub use render::render_css;
