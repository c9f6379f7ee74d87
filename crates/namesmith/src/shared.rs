//! Thread-safe wrapper around [`NameGenerator`].
//!
//! Every operation takes the one lock for its whole duration, so a
//! uniqueness check and the insert that follows it are never interleaved
//! with another caller's.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::catalogue::StyleCatalogue;
use crate::error::GenerationError;
use crate::generator::{GeneratedName, GenerationOptions, NameGenerator};
use crate::style::PhoneticStyle;

/// A [`NameGenerator`] behind a mutex, shareable through `Arc`.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::thread;
///
/// use namesmith::{GenerationOptions, SharedNameGenerator};
///
/// let generator = Arc::new(SharedNameGenerator::new());
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let generator = Arc::clone(&generator);
///         thread::spawn(move || generator.generate("SciFi", &GenerationOptions::default()))
///     })
///     .collect();
///
/// for handle in handles {
///     assert!(handle.join().expect("thread finished").is_ok());
/// }
/// ```
#[derive(Debug, Default)]
pub struct SharedNameGenerator {
    inner: Mutex<NameGenerator>,
}

impl SharedNameGenerator {
    /// Creates a shared generator holding the built-in styles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the wrapped generator, consuming the wrapper.
    #[must_use]
    pub fn into_inner(self) -> NameGenerator {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    // A panic mid-request leaves the cache consistent, so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, NameGenerator> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`NameGenerator::register_style`].
    pub fn register_style(&self, style: PhoneticStyle) {
        self.lock().register_style(style);
    }

    /// See [`NameGenerator::register_catalogue`].
    pub fn register_catalogue(&self, catalogue: StyleCatalogue) {
        self.lock().register_catalogue(catalogue);
    }

    /// See [`NameGenerator::has_style`].
    #[must_use]
    pub fn has_style(&self, name: &str) -> bool {
        self.lock().has_style(name)
    }

    /// Returns the registered style names in sorted order.
    #[must_use]
    pub fn style_names(&self) -> Vec<String> {
        self.lock()
            .style_names()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    /// See [`NameGenerator::generate`].
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] as the wrapped generator does.
    pub fn generate(
        &self,
        style: &str,
        options: &GenerationOptions,
    ) -> Result<String, GenerationError> {
        self.lock().generate(style, options)
    }

    /// See [`NameGenerator::generate_name`].
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] as the wrapped generator does.
    pub fn generate_name(
        &self,
        style: &str,
        options: &GenerationOptions,
    ) -> Result<GeneratedName, GenerationError> {
        self.lock().generate_name(style, options)
    }

    /// See [`NameGenerator::generate_multiple`]. The batch holds the lock
    /// throughout.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] as the wrapped generator does.
    pub fn generate_multiple(
        &self,
        count: usize,
        style: &str,
        options: &GenerationOptions,
    ) -> Result<Vec<String>, GenerationError> {
        self.lock().generate_multiple(count, style, options)
    }

    /// See [`NameGenerator::generate_with_meaning`].
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] as the wrapped generator does.
    pub fn generate_with_meaning(
        &self,
        meaning: &str,
        style: &str,
        seed: Option<u64>,
    ) -> Result<String, GenerationError> {
        self.lock().generate_with_meaning(meaning, style, seed)
    }

    /// See [`NameGenerator::clear_cache`].
    pub fn clear_cache(&self, style: Option<&str>) {
        self.lock().clear_cache(style);
    }

    /// See [`NameGenerator::name_exists`].
    #[must_use]
    pub fn name_exists(&self, name: &str, style: Option<&str>) -> bool {
        self.lock().name_exists(name, style)
    }

    /// See [`NameGenerator::generated_names`].
    #[must_use]
    pub fn generated_names(&self, style: &str) -> Vec<String> {
        self.lock().generated_names(style)
    }
}

impl From<NameGenerator> for SharedNameGenerator {
    fn from(generator: NameGenerator) -> Self {
        Self {
            inner: Mutex::new(generator),
        }
    }
}
