//! Unit tests for the name generator CLI helpers.

use std::sync::atomic::{AtomicUsize, Ordering};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};
use rstest::{fixture, rstest};

use super::*;
use crate::error::GenerationError;

const CATALOGUE_JSON: &str = r#"{
    "version": 1,
    "styles": [{
        "name": "Dwarvish",
        "patterns": ["CVrCVn", "CVCVm"],
        "consonants": "bdgkt",
        "vowels": "aou"
    }]
}"#;

struct CatalogueFixture {
    path: Utf8PathBuf,
}

impl Drop for CatalogueFixture {
    fn drop(&mut self) {
        cleanup_path(&self.path);
    }
}

#[fixture]
fn catalogue_fixture() -> CatalogueFixture {
    CatalogueFixture {
        path: write_catalogue(CATALOGUE_JSON),
    }
}

fn args(values: &[&str]) -> impl Iterator<Item = String> {
    values
        .iter()
        .map(|value| (*value).to_owned())
        .collect::<Vec<_>>()
        .into_iter()
}

fn parse_options(values: &[&str]) -> Options {
    let ParseOutcome::Options(options) = parse_args(args(values)).expect("parse args") else {
        panic!("expected options");
    };
    options
}

#[test]
fn parse_args_returns_help_for_help_flag() {
    let outcome = parse_args(args(&["--count", "2", "-h"])).expect("parse args");

    assert_eq!(outcome, ParseOutcome::Help);
}

#[test]
fn parse_args_uses_defaults() {
    let options = parse_options(&[]);

    assert_eq!(options, Options::default());
    assert_eq!(options.style(), "Fantasy");
    assert_eq!(options.count(), 1);
}

#[rstest]
#[case("--style")]
#[case("--count")]
#[case("--min")]
#[case("--max")]
#[case("--seed")]
#[case("--styles")]
#[case("--pattern")]
#[case("--consonants")]
#[case("--vowels")]
#[case("--merge")]
#[case("--meaning")]
fn parse_args_reports_missing_value(#[case] flag: &'static str) {
    let err = parse_args(args(&[flag])).expect_err("expected error");

    assert_eq!(err, CliError::MissingValue { flag });
}

#[test]
fn parse_args_reports_missing_second_merge_name() {
    let err = parse_args(args(&["--merge", "Aldric"])).expect_err("expected error");

    assert_eq!(err, CliError::MissingValue { flag: "--merge" });
}

#[test]
fn parse_args_reports_unknown_arguments() {
    let err = parse_args(args(&["--style", "Human", "--loud"])).expect_err("expected error");

    assert_eq!(
        err,
        CliError::UnknownArgument {
            value: "--loud".to_owned(),
        }
    );
}

#[rstest]
#[case("--count", "many")]
#[case("--min", "-1")]
#[case("--seed", "0x10")]
fn parse_args_reports_invalid_numbers(#[case] flag: &'static str, #[case] raw: &str) {
    let err = parse_args(args(&[flag, raw])).expect_err("expected error");

    let CliError::InvalidNumber { flag: bad_flag, value, .. } = err else {
        panic!("expected invalid number error");
    };
    assert_eq!(bad_flag, flag);
    assert_eq!(value, raw);
}

#[rstest]
#[case(&["--pattern", "CVC", "--merge", "Aldric", "Bael"])]
#[case(&["--meaning", "fire", "--merge", "Aldric", "Bael"])]
#[case(&["--meaning", "fire", "--meaning", "ice"])]
fn parse_args_rejects_conflicting_modes(#[case] values: &[&str]) {
    let err = parse_args(args(values)).expect_err("expected error");

    assert_eq!(err, CliError::ConflictingModes);
}

#[test]
fn parse_args_parses_full_options() {
    let options = parse_options(&[
        "--style",
        "Human",
        "--count",
        "4",
        "--min",
        "5",
        "--max",
        "9",
        "--seed",
        "2026",
        "--allow-duplicates",
        "--styles",
        "styles.json",
    ]);

    assert_eq!(options.mode(), &Mode::Generate);
    assert_eq!(options.style(), "Human");
    assert_eq!(options.count(), 4);
    assert_eq!(options.min_length, 5);
    assert_eq!(options.max_length, 9);
    assert_eq!(options.seed, Some(2026));
    assert!(options.allow_duplicates);
    assert_eq!(options.styles_path, Some(Utf8PathBuf::from("styles.json")));
}

#[test]
fn parse_args_collects_pattern_sets_in_any_order() {
    let options = parse_options(&["--vowels", "ae", "--pattern", "CVCV", "--consonants", "kl"]);

    assert_eq!(
        options.mode(),
        &Mode::Pattern {
            pattern: "CVCV".to_owned(),
            consonants: Some("kl".to_owned()),
            vowels: Some("ae".to_owned()),
        }
    );
}

#[test]
fn run_generates_requested_count() {
    let options = parse_options(&["--style", "SciFi", "--count", "5", "--seed", "11"]);

    let names = run(&options).expect("run");

    assert_eq!(names.len(), 5);
}

#[test]
fn run_is_reproducible_with_seed() {
    let options = parse_options(&["--count", "3", "--seed", "99"]);

    assert_eq!(run(&options).expect("run"), run(&options).expect("run"));
}

#[test]
fn run_reports_inverted_bounds() {
    let options = parse_options(&["--min", "9", "--max", "3"]);

    let err = run(&options).expect_err("expected error");

    assert_eq!(
        err,
        CliError::Generation {
            source: GenerationError::InvalidLengthBounds { min: 9, max: 3 },
        }
    );
}

#[test]
fn run_expands_custom_pattern() {
    let options = parse_options(&[
        "--pattern",
        "CVCV",
        "--consonants",
        "z",
        "--vowels",
        "u",
        "--count",
        "2",
    ]);

    assert_eq!(run(&options).expect("run"), vec!["Zuzu", "Zuzu"]);
}

#[test]
fn run_pattern_defaults_to_style_sets() {
    let options = parse_options(&["--pattern", "CV", "--style", "Human", "--seed", "1"]);
    let human = NameGenerator::new();
    let style = human.style("Human");

    let names = run(&options).expect("run");

    let chars: Vec<char> = names.concat().to_lowercase().chars().collect();
    assert_eq!(chars.len(), 2);
    assert!(chars.first().is_some_and(|c| style.consonants().contains(c)));
    assert!(chars.get(1).is_some_and(|c| style.vowels().contains(c)));
}

#[test]
fn run_merges_names() {
    let options = parse_options(&["--merge", "Aldric", "Thoralin", "--seed", "4"]);

    let names = run(&options).expect("run");

    assert_eq!(names, vec![merge_names("Aldric", "Thoralin", Some(4))]);
}

#[test]
fn run_generates_with_meaning() {
    let options = parse_options(&["--meaning", "calm waters", "--count", "3", "--seed", "5"]);

    let names = run(&options).expect("run");

    assert_eq!(names.len(), 3);
    for name in names {
        let lowered = name.to_lowercase();
        assert!(lowered.contains('i') || lowered.contains('w'), "{name}");
    }
}

#[rstest]
fn run_registers_catalogue_styles(catalogue_fixture: CatalogueFixture) {
    let options = parse_options(&[
        "--styles",
        catalogue_fixture.path.as_str(),
        "--style",
        "Dwarvish",
        "--count",
        "3",
        "--seed",
        "8",
    ]);

    let names = run(&options).expect("run");

    assert_eq!(names.len(), 3);
    let allowed = "bdgktaournm";
    for name in names {
        assert!(
            name.to_lowercase().chars().all(|c| allowed.contains(c))
                || name.starts_with("Nameless"),
            "{name}"
        );
    }
}

#[test]
fn run_reports_missing_catalogue() {
    let path = unique_missing_path("styles.json");
    let options = parse_options(&["--styles", path.as_str()]);

    let err = run(&options).expect_err("expected error");

    let CliError::Style {
        source: StyleError::IoError { path: err_path, message },
    } = err
    else {
        panic!("expected catalogue IO error");
    };
    assert_eq!(err_path, path);
    assert!(!message.is_empty());
}

#[test]
fn run_reports_invalid_catalogue() {
    let path = write_catalogue(r#"{"version": 2, "styles": []}"#);
    let options = parse_options(&["--styles", path.as_str()]);

    let err = run(&options).expect_err("expected error");

    assert_eq!(
        err,
        CliError::Style {
            source: StyleError::UnsupportedVersion {
                expected: 1,
                actual: 2,
            },
        }
    );
    cleanup_path(&path);
}

fn write_catalogue(json: &str) -> Utf8PathBuf {
    let path = unique_temp_path("styles.json");
    let dir = open_catalogue_dir(&path);
    let file_name = path.file_name().expect("catalogue file name");
    dir.write(file_name, json).expect("write catalogue");
    path
}

fn cleanup_path(path: &Utf8Path) {
    if let Some(parent) = path.parent() {
        let root = Dir::open_ambient_dir(".", ambient_authority()).expect("open workspace dir");
        drop(root.remove_dir_all(parent));
    }
}

fn unique_temp_path(file_name: &str) -> Utf8PathBuf {
    static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let process_id = std::process::id();
    let dir_name = format!("namegen-cli-{process_id}-{counter}");
    let dir = Utf8PathBuf::from("target")
        .join("namesmith-tests")
        .join(dir_name);
    let root = Dir::open_ambient_dir(".", ambient_authority()).expect("open workspace dir");
    root.create_dir_all(&dir).expect("create temp dir");
    dir.join(file_name)
}

fn unique_missing_path(file_name: &str) -> Utf8PathBuf {
    static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    Utf8PathBuf::from("target")
        .join("namesmith-tests")
        .join(format!("namegen-cli-missing-{counter}"))
        .join(file_name)
}

fn open_catalogue_dir(path: &Utf8Path) -> Dir {
    let parent = path.parent().unwrap_or_else(|| Utf8Path::new("."));
    Dir::open_ambient_dir(parent, ambient_authority()).expect("open catalogue dir")
}
