//! CLI support for generating names.
//!
//! The `namegen` binary delegates parsing and execution to this module so
//! both can be exercised in tests without spawning a subprocess.

mod error;

use std::fmt;
use std::iter;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};

pub use self::error::CliError;
use crate::builtin::DEFAULT_STYLE;
use crate::catalogue::StyleCatalogue;
use crate::error::StyleError;
use crate::expander::generate_from_custom_pattern;
use crate::generator::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, GenerationOptions, NameGenerator};
use crate::hybrid::merge_names;

const DEFAULT_COUNT: usize = 1;

/// What the CLI produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Run the full pipeline for the selected style.
    Generate,
    /// Expand a single template without constraints.
    Pattern {
        /// Template to expand.
        pattern: String,
        /// Consonant set; the style's own set when absent.
        consonants: Option<String>,
        /// Vowel set; the style's own set when absent.
        vowels: Option<String>,
    },
    /// Hybridise two existing names.
    Merge {
        /// Name supplying the front half.
        first: String,
        /// Name supplying the back half.
        second: String,
    },
    /// Generate names containing letters significant to a text.
    Meaning {
        /// Free-form meaning text.
        text: String,
    },
}

/// Parsed options for the name generator CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    mode: Mode,
    style: String,
    count: usize,
    min_length: usize,
    max_length: usize,
    seed: Option<u64>,
    allow_duplicates: bool,
    styles_path: Option<Utf8PathBuf>,
}

impl Options {
    /// Returns the selected mode.
    ///
    /// # Example
    ///
    /// ```
    /// use namesmith::namegen_cli::{Mode, ParseOutcome, parse_args};
    ///
    /// let args = vec!["--merge".to_owned(), "Aldric".to_owned(), "Thoralin".to_owned()];
    /// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
    ///     panic!("expected options");
    /// };
    ///
    /// assert!(matches!(options.mode(), Mode::Merge { .. }));
    /// ```
    #[must_use]
    pub const fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Returns the requested style name.
    #[must_use]
    pub fn style(&self) -> &str {
        &self.style
    }

    /// Returns how many names to produce.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    fn generation_options(&self) -> GenerationOptions {
        GenerationOptions::default()
            .with_length_bounds(self.min_length, self.max_length)
            .with_optional_seed(self.seed)
            .with_ensure_unique(!self.allow_duplicates)
    }

    /// Seeds for each item of a batch: `S, S + 1, ...` or all random.
    fn item_seeds(&self) -> impl Iterator<Item = Option<u64>> {
        iter::successors(Some(self.seed), |seed| {
            Some(seed.map(|value| value.wrapping_add(1)))
        })
        .take(self.count)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            mode: Mode::Generate,
            style: DEFAULT_STYLE.to_owned(),
            count: DEFAULT_COUNT,
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            seed: None,
            allow_duplicates: false,
            styles_path: None,
        }
    }
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Continue with the parsed options.
    Options(Options),
}

/// Parses CLI arguments into options.
///
/// `--consonants` and `--vowels` only affect `--pattern`.
///
/// # Errors
///
/// Returns [`CliError`] when a flag is unknown, lacks its value, carries an
/// unparsable number, or when several modes are requested.
///
/// # Example
///
/// ```
/// use namesmith::namegen_cli::{ParseOutcome, parse_args};
///
/// let args = vec![
///     "--style".to_owned(),
///     "SciFi".to_owned(),
///     "--count".to_owned(),
///     "3".to_owned(),
/// ];
///
/// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse args") else {
///     panic!("expected options");
/// };
/// assert_eq!(options.style(), "SciFi");
/// assert_eq!(options.count(), 3);
/// ```
pub fn parse_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let mut options = Options::default();
    let mut pattern: Option<String> = None;
    let mut consonants: Option<String> = None;
    let mut vowels: Option<String> = None;
    let mut modes: Vec<Mode> = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "--style" => options.style = next_value(&mut args, "--style")?,
            "--count" => {
                let value = next_value(&mut args, "--count")?;
                options.count = parse_number(&value, "--count")?;
            }
            "--min" => {
                let value = next_value(&mut args, "--min")?;
                options.min_length = parse_number(&value, "--min")?;
            }
            "--max" => {
                let value = next_value(&mut args, "--max")?;
                options.max_length = parse_number(&value, "--max")?;
            }
            "--seed" => {
                let value = next_value(&mut args, "--seed")?;
                options.seed = Some(parse_number(&value, "--seed")?);
            }
            "--allow-duplicates" => options.allow_duplicates = true,
            "--styles" => {
                let value = next_value(&mut args, "--styles")?;
                options.styles_path = Some(Utf8PathBuf::from(value));
            }
            "--pattern" => pattern = Some(next_value(&mut args, "--pattern")?),
            "--consonants" => consonants = Some(next_value(&mut args, "--consonants")?),
            "--vowels" => vowels = Some(next_value(&mut args, "--vowels")?),
            "--merge" => {
                let first = next_value(&mut args, "--merge")?;
                let second = next_value(&mut args, "--merge")?;
                modes.push(Mode::Merge { first, second });
            }
            "--meaning" => {
                let text = next_value(&mut args, "--meaning")?;
                modes.push(Mode::Meaning { text });
            }
            _ => return Err(CliError::UnknownArgument { value: arg }),
        }
    }

    if let Some(template) = pattern {
        modes.push(Mode::Pattern {
            pattern: template,
            consonants,
            vowels,
        });
    }
    if modes.len() > 1 {
        return Err(CliError::ConflictingModes);
    }
    if let Some(mode) = modes.pop() {
        options.mode = mode;
    }

    Ok(ParseOutcome::Options(options))
}

/// Runs the CLI request and returns the produced names in order.
///
/// A `--styles` catalogue is registered before anything is generated, so
/// its styles can replace the built-in ones.
///
/// # Errors
///
/// Returns [`CliError`] when the catalogue cannot be loaded or generation
/// fails.
///
/// # Example
///
/// ```
/// use namesmith::namegen_cli::{ParseOutcome, parse_args, run};
///
/// let args = vec![
///     "--count".to_owned(),
///     "2".to_owned(),
///     "--seed".to_owned(),
///     "7".to_owned(),
/// ];
/// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
///     panic!("expected options");
/// };
///
/// let names = run(&options).expect("run");
/// assert_eq!(names.len(), 2);
/// ```
pub fn run(options: &Options) -> Result<Vec<String>, CliError> {
    let mut generator = NameGenerator::new();
    if let Some(path) = &options.styles_path {
        generator.register_catalogue(load_catalogue(path)?);
    }

    match &options.mode {
        Mode::Generate => Ok(generator.generate_multiple(
            options.count,
            &options.style,
            &options.generation_options(),
        )?),
        Mode::Pattern {
            pattern,
            consonants,
            vowels,
        } => {
            let style = generator.style(&options.style);
            let consonant_set = consonants
                .clone()
                .unwrap_or_else(|| style.consonants().iter().collect());
            let vowel_set = vowels
                .clone()
                .unwrap_or_else(|| style.vowels().iter().collect());
            Ok(options
                .item_seeds()
                .map(|seed| generate_from_custom_pattern(pattern, &consonant_set, &vowel_set, seed))
                .collect())
        }
        Mode::Merge { first, second } => Ok(options
            .item_seeds()
            .map(|seed| merge_names(first, second, seed))
            .collect()),
        Mode::Meaning { text } => {
            let names = options
                .item_seeds()
                .map(|seed| generator.generate_with_meaning(text, &options.style, seed))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(names)
        }
    }
}

fn load_catalogue(path: &Utf8Path) -> Result<StyleCatalogue, CliError> {
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|e| StyleError::IoError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let file_name = Utf8Path::new(path.file_name().unwrap_or_else(|| path.as_str()));
    Ok(StyleCatalogue::from_file(&dir, file_name)?)
}

fn next_value<I>(args: &mut I, flag: &'static str) -> Result<String, CliError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(CliError::MissingValue { flag })
}

fn parse_number<T>(value: &str, flag: &'static str) -> Result<T, CliError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    value.parse::<T>().map_err(|err| CliError::InvalidNumber {
        flag,
        value: value.to_owned(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests;
