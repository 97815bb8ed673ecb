//! Memoized keyframes rules, keyed by rule name.

use std::collections::HashMap;

/// Insert-once map from rule name to rendered CSS text.
///
/// Entries live for the lifetime of the owning builder and are never evicted
/// in normal operation; `remove` exists only so an adapter can roll back a
/// cache write after a failed stylesheet injection.
#[derive(Clone, Debug, Default)]
pub struct StyleCache {
    rules: HashMap<String, String>,
}

impl StyleCache {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.rules.get(name).map(String::as_str)
    }

    /// First write wins. Returns `true` when the name was newly inserted;
    /// re-inserting an existing name leaves the cached text untouched.
    pub fn insert(&mut self, name: String, css: String) -> bool {
        use std::collections::hash_map::Entry;
        match self.rules.entry(name) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(css);
                true
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.rules.remove(name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// All cached rules, newline-joined. Iteration order is unspecified; each
    /// rule appears exactly once.
    pub fn stylesheet_text(&self) -> String {
        self.rules
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_first_write_wins() {
        let mut cache = StyleCache::new();
        assert!(cache.insert("a".into(), "one".into()));
        assert!(!cache.insert("a".into(), "two".into()));
        assert_eq!(cache.get("a"), Some("one"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn stylesheet_text_contains_every_rule_once() {
        let mut cache = StyleCache::new();
        cache.insert("a".into(), "@keyframes a {}".into());
        cache.insert("b".into(), "@keyframes b {}".into());
        let text = cache.stylesheet_text();
        assert_eq!(text.matches("@keyframes a {}").count(), 1);
        assert_eq!(text.matches("@keyframes b {}").count(), 1);
        assert_eq!(text.matches('\n').count(), 1);
    }

    #[test]
    fn remove_allows_reinsert() {
        let mut cache = StyleCache::new();
        cache.insert("a".into(), "one".into());
        assert_eq!(cache.remove("a"), Some("one".into()));
        assert!(cache.insert("a".into(), "two".into()));
        assert_eq!(cache.get("a"), Some("two"));
    }
}
