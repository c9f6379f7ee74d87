//! Name generation pipeline and its owning context.
//!
//! [`NameGenerator`] owns the style registry and the uniqueness caches.
//! Every request runs against its own [`RandomSource`], so a fixed seed
//! reproduces the same name for the same style, bounds and cache state.

use tracing::{debug, info, warn};

use crate::cache::NameCache;
use crate::catalogue::StyleCatalogue;
use crate::constraint::repair_candidate;
use crate::error::GenerationError;
use crate::expander::expand_template;
use crate::length::normalize_length;
use crate::phonetics::char_len;
use crate::postprocess::apply_rewrites;
use crate::random::RandomSource;
use crate::registry::StyleRegistry;
use crate::style::PhoneticStyle;

/// Maximum number of pipeline runs before a fallback name is returned.
pub const MAX_ATTEMPTS: usize = 50;

/// Literal prefix of fallback names.
pub const FALLBACK_PREFIX: &str = "Nameless";

/// Lowest fallback suffix (inclusive).
const FALLBACK_MIN: usize = 1;

/// Highest fallback suffix (exclusive).
const FALLBACK_MAX: usize = 1000;

/// Default minimum name length.
pub const DEFAULT_MIN_LENGTH: usize = 4;

/// Default maximum name length.
pub const DEFAULT_MAX_LENGTH: usize = 10;

/// Per-request generation settings.
///
/// # Example
///
/// ```
/// use namesmith::GenerationOptions;
///
/// let options = GenerationOptions::default()
///     .with_length_bounds(5, 8)
///     .with_seed(42)
///     .with_ensure_unique(false);
///
/// assert_eq!(options.min_length(), 5);
/// assert_eq!(options.max_length(), 8);
/// assert_eq!(options.seed(), Some(42));
/// assert!(!options.ensure_unique());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    min_length: usize,
    max_length: usize,
    seed: Option<u64>,
    ensure_unique: bool,
}

impl GenerationOptions {
    /// Sets the inclusive length window, counted in characters.
    #[must_use]
    pub const fn with_length_bounds(mut self, min_length: usize, max_length: usize) -> Self {
        self.min_length = min_length;
        self.max_length = max_length;
        self
    }

    /// Fixes the random seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the random seed.
    #[must_use]
    pub const fn with_optional_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Enables or disables uniqueness tracking.
    #[must_use]
    pub const fn with_ensure_unique(mut self, ensure_unique: bool) -> Self {
        self.ensure_unique = ensure_unique;
        self
    }

    /// Returns the minimum length.
    #[must_use]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    /// Returns the maximum length.
    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    /// Returns the seed, if fixed.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns `true` if accepted names must be new for their style.
    #[must_use]
    pub const fn ensure_unique(&self) -> bool {
        self.ensure_unique
    }

    const fn validate(&self) -> Result<(), GenerationError> {
        if self.max_length < self.min_length {
            return Err(GenerationError::InvalidLengthBounds {
                min: self.min_length,
                max: self.max_length,
            });
        }
        Ok(())
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            seed: None,
            ensure_unique: true,
        }
    }
}

/// A generated name together with how it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedName {
    /// The name itself.
    pub name: String,
    /// Pipeline runs used, including the accepted one.
    pub attempts: usize,
    /// `true` when every attempt was rejected and the fallback was used.
    pub fallback: bool,
    /// Seed the request ran with.
    pub seed: u64,
}

/// Style registry plus per-style uniqueness caches.
///
/// # Example
///
/// ```
/// use namesmith::{GenerationOptions, NameGenerator};
///
/// let mut generator = NameGenerator::new();
/// let options = GenerationOptions::default().with_seed(7);
///
/// let name = generator.generate("Fantasy", &options).expect("generation succeeds");
///
/// assert!(generator.name_exists(&name, Some("Fantasy")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct NameGenerator {
    registry: StyleRegistry,
    cache: NameCache,
}

impl NameGenerator {
    /// Creates a generator holding the built-in styles and empty caches.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `style`, replacing any same-named style and emptying its
    /// cache.
    pub fn register_style(&mut self, style: PhoneticStyle) {
        let name = style.name().to_owned();
        debug!(
            style = %name,
            pattern_count = style.patterns().len(),
            "registered style"
        );
        self.registry.register(style);
        self.cache.reset(&name);
    }

    /// Registers every style in `catalogue`.
    pub fn register_catalogue(&mut self, catalogue: StyleCatalogue) {
        let styles = catalogue.into_styles();
        info!(style_count = styles.len(), "registering style catalogue");
        for style in styles {
            self.register_style(style);
        }
    }

    /// Returns the style used for `name`, falling back to the default.
    #[must_use]
    pub fn style(&self, name: &str) -> &PhoneticStyle {
        self.registry.lookup(name)
    }

    /// Returns `true` if a style is registered under `name`.
    #[must_use]
    pub fn has_style(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// Returns the registered style names in sorted order.
    #[must_use]
    pub fn style_names(&self) -> Vec<&str> {
        self.registry.names()
    }

    /// Generates one name for `style`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if the length bounds are inverted or the
    /// style's constraint repair faults.
    pub fn generate(
        &mut self,
        style: &str,
        options: &GenerationOptions,
    ) -> Result<String, GenerationError> {
        self.generate_name(style, options).map(|generated| generated.name)
    }

    /// Generates one name for `style`, reporting attempts and fallback use.
    ///
    /// Running out of attempts is not an error: the result is a fallback
    /// name of the form `Nameless<n>`, which is never cached.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if the length bounds are inverted or the
    /// style's constraint repair faults.
    pub fn generate_name(
        &mut self,
        style_name: &str,
        options: &GenerationOptions,
    ) -> Result<GeneratedName, GenerationError> {
        options.validate()?;
        if !self.registry.contains(style_name) {
            debug!(style = %style_name, "unknown style, using default rules");
        }

        let style = self.registry.lookup(style_name);
        let mut rng = RandomSource::from_optional_seed(options.seed());
        let seed = rng.seed();

        for attempt in 1..=MAX_ATTEMPTS {
            let candidate = run_pipeline(style, &mut rng, options)?;

            // Check uniqueness, then final length
            if options.ensure_unique() && self.cache.contains(style_name, &candidate) {
                continue;
            }
            let length = char_len(&candidate);
            if length < options.min_length() || length > options.max_length() {
                continue;
            }

            if options.ensure_unique() {
                self.cache.insert(style_name, &candidate);
            }
            debug!(style = %style_name, attempt, name = %candidate, "accepted name");
            return Ok(GeneratedName {
                name: candidate,
                attempts: attempt,
                fallback: false,
                seed,
            });
        }

        let name = format!(
            "{FALLBACK_PREFIX}{}",
            rng.range(FALLBACK_MIN, FALLBACK_MAX)
        );
        warn!(
            style = %style_name,
            attempts = MAX_ATTEMPTS,
            min_length = options.min_length(),
            max_length = options.max_length(),
            %name,
            "attempt budget exhausted, using fallback name"
        );
        Ok(GeneratedName {
            name,
            attempts: MAX_ATTEMPTS,
            fallback: true,
            seed,
        })
    }

    /// Generates `count` names for `style`.
    ///
    /// With a fixed seed `S`, item `i` runs with seed `S + i` (wrapping), so
    /// the batch equals `count` single calls made in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`GenerationError`] raised by a single call.
    pub fn generate_multiple(
        &mut self,
        count: usize,
        style: &str,
        options: &GenerationOptions,
    ) -> Result<Vec<String>, GenerationError> {
        let mut names = Vec::with_capacity(count);
        let mut seed = options.seed();
        for _ in 0..count {
            names.push(self.generate(style, &options.with_optional_seed(seed))?);
            seed = seed.map(|value| value.wrapping_add(1));
        }
        Ok(names)
    }

    /// Empties one style's cache, or every cache when `style` is `None`.
    pub fn clear_cache(&mut self, style: Option<&str>) {
        self.cache.clear(style);
    }

    /// Checks whether `name` was accepted for `style`, or for any style when
    /// `style` is `None`.
    #[must_use]
    pub fn name_exists(&self, name: &str, style: Option<&str>) -> bool {
        self.cache.exists(name, style)
    }

    /// Returns the names accepted for `style`, sorted; empty when unknown.
    #[must_use]
    pub fn generated_names(&self, style: &str) -> Vec<String> {
        self.cache.names(style)
    }
}

/// Runs one attempt: expand, rewrite, repair, normalise.
fn run_pipeline(
    style: &PhoneticStyle,
    rng: &mut RandomSource,
    options: &GenerationOptions,
) -> Result<String, GenerationError> {
    let template = rng.pick(style.patterns()).map_or("", String::as_str);
    let raw = expand_template(template, style, rng);
    let rewritten = apply_rewrites(&raw, style, rng);
    let repaired = repair_candidate(&rewritten, style)?;
    Ok(normalize_length(
        repaired,
        style,
        rng,
        options.min_length(),
        options.max_length(),
    ))
}
