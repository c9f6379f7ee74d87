//! Per-style record of accepted names.
//!
//! Caches are keyed by the style name a caller asked for, not the style
//! that ended up being used, so an unknown style name keeps its own cache
//! even though it borrows the default style's rules.

use std::collections::{BTreeSet, HashMap};

/// In-memory uniqueness cache. Names are compared case-sensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameCache {
    styles: HashMap<String, BTreeSet<String>>,
}

impl NameCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `name` was accepted for `style`.
    #[must_use]
    pub fn contains(&self, style: &str, name: &str) -> bool {
        self.styles.get(style).is_some_and(|names| names.contains(name))
    }

    /// Records `name` for `style`, creating the style's set on first use.
    ///
    /// Returns `false` if the name was already present.
    pub fn insert(&mut self, style: &str, name: &str) -> bool {
        self.styles
            .entry(style.to_owned())
            .or_default()
            .insert(name.to_owned())
    }

    /// Replaces `style`'s set with an empty one.
    pub fn reset(&mut self, style: &str) {
        self.styles.insert(style.to_owned(), BTreeSet::new());
    }

    /// Empties one style's set, or every set when `style` is `None`.
    pub fn clear(&mut self, style: Option<&str>) {
        let Some(key) = style else {
            self.styles.values_mut().for_each(BTreeSet::clear);
            return;
        };
        if let Some(names) = self.styles.get_mut(key) {
            names.clear();
        }
    }

    /// Checks one style's set, or every set when `style` is `None`.
    #[must_use]
    pub fn exists(&self, name: &str, style: Option<&str>) -> bool {
        style.map_or_else(
            || self.styles.values().any(|names| names.contains(name)),
            |key| self.contains(key, name),
        )
    }

    /// Returns the names accepted for `style` in sorted order, or an empty
    /// list for an unknown style.
    #[must_use]
    pub fn names(&self, style: &str) -> Vec<String> {
        self.styles
            .get(style)
            .map(|names| names.iter().cloned().collect())
            .unwrap_or_default()
    }
}
