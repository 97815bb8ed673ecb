//! Orchestration: options in, rule name + stylesheet text + animation
//! shorthand out.

use log::debug;

use crate::cache::StyleCache;
use crate::catalog::TransitionCatalog;
use crate::keyframes::build_keyframes;
use crate::name::derive_rule_name;
use crate::options::TransitionOptions;
use crate::render::render_css;

/// Everything an adapter needs to run one transition.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedTransition {
    /// Cache key and `@keyframes` identifier.
    pub rule_name: String,
    /// Full stylesheet text to (re)inject. Present only when `rule_name` was
    /// not cached before this call; `None` means the live stylesheet already
    /// carries the rule.
    pub stylesheet: Option<String>,
    /// `animation` shorthand: `<name> <duration> <easing> <fill-mode>`.
    pub animation: String,
}

/// Translates transition options into memoized keyframes rules.
///
/// The cache is instance state, not process-wide: one builder per stylesheet
/// element. The check-then-insert in `prepare` is synchronous, so duplicate
/// requests for a new rule within one cooperative turn produce identical
/// idempotent writes.
#[derive(Debug, Default)]
pub struct TransitionBuilder {
    catalog: TransitionCatalog,
    cache: StyleCache,
}

impl TransitionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &TransitionCatalog {
        &self.catalog
    }

    pub fn cache(&self) -> &StyleCache {
        &self.cache
    }

    /// Normalize options, derive the rule name, and render + cache the
    /// keyframes rule on a miss.
    pub fn prepare(&mut self, mut options: TransitionOptions) -> PreparedTransition {
        options.normalize(&self.catalog);
        let rule_name = derive_rule_name(&self.catalog, &options);

        let stylesheet = if self.cache.contains(&rule_name) {
            debug!("style cache hit: {rule_name}");
            None
        } else {
            debug!("rendering keyframes rule: {rule_name}");
            let spec = build_keyframes(&self.catalog, &options);
            let css = render_css(&rule_name, &spec);
            self.cache.insert(rule_name.clone(), css);
            Some(self.cache.stylesheet_text())
        };

        let animation = format!(
            "{} {} {} {}",
            rule_name, options.duration, options.easing, options.fill_mode
        );

        PreparedTransition {
            rule_name,
            stylesheet,
            animation,
        }
    }

    /// Drop a cached rule after a failed stylesheet injection so a retry
    /// renders and injects it again instead of treating it as live.
    pub fn invalidate(&mut self, rule_name: &str) -> bool {
        let removed = self.cache.remove(rule_name).is_some();
        if removed {
            debug!("invalidated cached rule: {rule_name}");
        }
        removed
    }
}
