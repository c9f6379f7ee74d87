//! Behavioural tests for the namesmith crate.
//!
//! These tests validate the crate's behaviour against Gherkin scenarios
//! covering reproducible generation, uniqueness caches, fallback names and
//! catalogue loading.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use namesmith::{
    FALLBACK_PREFIX, FANTASY, GeneratedName, GenerationOptions, NameGenerator, StyleCatalogue,
    StyleError,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

// ============================================================================
// Test fixtures and constants
// ============================================================================

/// Catalogue redefining the default style with a tiny alphabet.
const FANTASY_OVERRIDE_JSON: &str = r#"{
    "version": 1,
    "styles": [{
        "name": "Fantasy",
        "patterns": ["CVCV", "CVCVC"],
        "consonants": "lmn",
        "vowels": "ae"
    }]
}"#;

const DUPLICATE_STYLE_JSON: &str = r#"{
    "version": 1,
    "styles": [
        {"name": "Dwarvish", "patterns": ["CVC"], "consonants": "dk", "vowels": "a"},
        {"name": "Dwarvish", "patterns": ["CVCV"], "consonants": "gt", "vowels": "o"}
    ]
}"#;

/// Test world holding the generator and the names it produced.
#[derive(Default, ScenarioState)]
struct World {
    generator: Slot<NameGenerator>,
    names: Slot<Vec<String>>,
    generated: Slot<GeneratedName>,
    catalogue_json: Slot<String>,
    catalogue_result: Slot<Result<StyleCatalogue, StyleError>>,
}

impl World {
    /// Extracts the generator from the world state.
    fn generator(&self) -> NameGenerator {
        self.generator.get().expect("generator should be set")
    }

    /// Extracts the generated names from the world state.
    fn names(&self) -> Vec<String> {
        self.names.get().expect("names should be generated")
    }

    /// Extracts the single generated name from the world state.
    fn generated(&self) -> GeneratedName {
        self.generated.get().expect("a name should be generated")
    }

    /// Extracts the catalogue parse result from the world state.
    fn catalogue_result(&self) -> Result<StyleCatalogue, StyleError> {
        self.catalogue_result
            .get()
            .expect("catalogue result should be set")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("a fresh name generator")]
fn a_fresh_name_generator(world: &World) {
    world.generator.set(NameGenerator::new());
}

#[given("a style catalogue redefining Fantasy")]
fn a_style_catalogue_redefining_fantasy(world: &World) {
    world.generator.set(NameGenerator::new());
    world.catalogue_json.set(FANTASY_OVERRIDE_JSON.to_owned());
}

#[given("a style catalogue with a duplicate style")]
fn a_style_catalogue_with_a_duplicate_style(world: &World) {
    world.catalogue_json.set(DUPLICATE_STYLE_JSON.to_owned());
}

// ============================================================================
// When steps
// ============================================================================

#[when("a {style} name is generated with seed {seed:u64} on two fresh generators")]
fn a_name_is_generated_on_two_fresh_generators(world: &World, style: String, seed: u64) {
    let options = GenerationOptions::default().with_seed(seed);
    let first = NameGenerator::new()
        .generate(&style, &options)
        .expect("first generation");
    let second = NameGenerator::new()
        .generate(&style, &options)
        .expect("second generation");
    world.names.set(vec![first, second]);
}

#[when("{count:usize} {style} names are generated")]
fn names_are_generated(world: &World, count: usize, style: String) {
    let mut generator = world.generator();
    let names = generator
        .generate_multiple(count, &style, &GenerationOptions::default())
        .expect("batch succeeds");
    world.generator.set(generator);
    world.names.set(names);
}

#[when("the {style} cache is cleared")]
fn the_cache_is_cleared(world: &World, style: String) {
    let mut generator = world.generator();
    generator.clear_cache(Some(&style));
    world.generator.set(generator);
}

#[when("a {style} name is requested with lengths {min:usize} to {max:usize}")]
fn a_name_is_requested_with_lengths(world: &World, style: String, min: usize, max: usize) {
    let mut generator = world.generator();
    let options = GenerationOptions::default()
        .with_length_bounds(min, max)
        .with_seed(17);
    let generated = generator
        .generate_name(&style, &options)
        .expect("fallback is not an error");
    world.generator.set(generator);
    world.generated.set(generated);
}

#[when("the catalogue is parsed")]
fn the_catalogue_is_parsed(world: &World) {
    let json = world.catalogue_json.get().expect("catalogue JSON should be set");
    world.catalogue_result.set(StyleCatalogue::from_json(&json));
}

#[when("the catalogue is registered")]
fn the_catalogue_is_registered(world: &World) {
    let json = world.catalogue_json.get().expect("catalogue JSON should be set");
    let catalogue = StyleCatalogue::from_json(&json).expect("valid catalogue");
    let mut generator = world.generator();
    generator.register_catalogue(catalogue);
    world.generator.set(generator);
}

#[when("a {style} name is generated with seed {seed:u64}")]
fn a_name_is_generated_with_seed(world: &World, style: String, seed: u64) {
    let mut generator = world.generator();
    let generated = generator
        .generate_name(&style, &GenerationOptions::default().with_seed(seed))
        .expect("generation succeeds");
    world.generator.set(generator);
    world.generated.set(generated);
}

// ============================================================================
// Then steps
// ============================================================================

#[then("both names are identical")]
fn both_names_are_identical(world: &World) {
    let names = world.names();
    assert_eq!(names.first(), names.get(1), "generation should be deterministic");
}

#[then("the {style} cache holds every generated name")]
fn the_cache_holds_every_generated_name(world: &World, style: String) {
    let generator = world.generator();
    for name in world
        .names()
        .iter()
        .filter(|name| !name.starts_with(FALLBACK_PREFIX))
    {
        assert!(
            generator.name_exists(name, Some(&style)),
            "{name} missing from {style} cache"
        );
    }
}

#[then("the {style} cache is empty")]
fn the_cache_is_empty(world: &World, style: String) {
    assert!(world.generator().generated_names(&style).is_empty());
}

#[then("the name is a fallback placeholder")]
fn the_name_is_a_fallback_placeholder(world: &World) {
    let generated = world.generated();
    assert!(generated.fallback);
    let suffix = generated
        .name
        .strip_prefix(FALLBACK_PREFIX)
        .expect("fallback prefix");
    assert!(suffix.parse::<u32>().is_ok(), "suffix {suffix} is not numeric");
    assert!(world.generator().generated_names(FANTASY).is_empty());
}

#[then("the name only uses the catalogue letters")]
fn the_name_only_uses_the_catalogue_letters(world: &World) {
    let generated = world.generated();
    assert!(!generated.fallback);
    assert!(
        generated.name.to_lowercase().chars().all(|c| "lmnae".contains(c)),
        "{} uses letters outside the catalogue",
        generated.name
    );
}

#[then("parsing fails with a duplicate style error")]
fn parsing_fails_with_a_duplicate_style_error(world: &World) {
    match world.catalogue_result() {
        Err(StyleError::DuplicateStyle { name }) => assert_eq!(name, "Dwarvish"),
        other => panic!("Expected DuplicateStyle, got: {other:?}"),
    }
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/namesmith.feature",
    name = "Seeded generation is reproducible"
)]
fn seeded_generation_is_reproducible(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/namesmith.feature",
    name = "Unique names are recorded per style"
)]
fn unique_names_are_recorded_per_style(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/namesmith.feature",
    name = "Clearing a style empties its cache"
)]
fn clearing_a_style_empties_its_cache(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/namesmith.feature",
    name = "Unreachable bounds fall back to a placeholder name"
)]
fn unreachable_bounds_fall_back(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/namesmith.feature",
    name = "Catalogue styles replace built-in styles"
)]
fn catalogue_styles_replace_builtin_styles(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/namesmith.feature",
    name = "Invalid catalogue is rejected"
)]
fn invalid_catalogue_is_rejected(world: World) {
    let _ = world;
}
