//! Named style storage.
//!
//! The registry starts with the built-in styles. Lookups never fail: an
//! unknown name resolves to the default style.

use std::collections::BTreeMap;

use crate::builtin::{DEFAULT_STYLE, builtin_styles, default_style};
use crate::style::PhoneticStyle;

/// Registered styles keyed by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRegistry {
    styles: BTreeMap<String, PhoneticStyle>,
    fallback: PhoneticStyle,
}

impl StyleRegistry {
    /// Creates a registry holding the built-in styles.
    ///
    /// # Example
    ///
    /// ```
    /// use namesmith::{HUMAN, StyleRegistry};
    ///
    /// let registry = StyleRegistry::with_builtins();
    /// assert!(registry.contains(HUMAN));
    /// assert_eq!(registry.lookup("Unknown").name(), "Fantasy");
    /// ```
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self {
            styles: BTreeMap::new(),
            fallback: default_style(),
        };
        for style in builtin_styles() {
            registry.register(style);
        }
        registry
    }

    /// Inserts `style`, replacing any style with the same name.
    ///
    /// Returns the replaced style, if there was one.
    pub fn register(&mut self, style: PhoneticStyle) -> Option<PhoneticStyle> {
        if style.name() == DEFAULT_STYLE {
            self.fallback = style.clone();
        }
        self.styles.insert(style.name().to_owned(), style)
    }

    /// Returns the style registered under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PhoneticStyle> {
        self.styles.get(name)
    }

    /// Returns the style registered under `name`, or the default style.
    #[must_use]
    pub fn lookup(&self, name: &str) -> &PhoneticStyle {
        self.styles.get(name).unwrap_or(&self.fallback)
    }

    /// Returns `true` if a style is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Returns the registered style names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.styles.keys().map(String::as_str).collect()
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
