//! Name generator CLI.
//!
//! This binary delegates to `namesmith::namegen_cli` for parsing and
//! execution, keeping the CLI behaviour testable without spawning a process.
//! Names go to stdout one per line; diagnostics go to stderr.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use namesmith::namegen_cli::{CliError, ParseOutcome, parse_args, run as run_cli};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Err(err) = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
    {
        drop(err);
    }
}

fn run() -> Result<(), CliError> {
    match parse_args(env::args().skip(1))? {
        ParseOutcome::Help => {
            print_usage(io::stdout().lock());
            Ok(())
        }
        ParseOutcome::Options(options) => {
            let names = run_cli(&options)?;
            write_names(io::stdout().lock(), &names);
            Ok(())
        }
    }
}

fn print_usage(mut out: impl Write) {
    let usage = concat!(
        "Usage: namegen [options]\n",
        "\n",
        "Options:\n",
        "  --style <name>           Style to use (defaults to Fantasy)\n",
        "  --count <n>              Number of names (defaults to 1)\n",
        "  --min <n>                Minimum length (defaults to 4)\n",
        "  --max <n>                Maximum length (defaults to 10)\n",
        "  --seed <seed>            RNG seed (defaults to random)\n",
        "  --allow-duplicates       Do not enforce per-style uniqueness\n",
        "  --styles <path>          Register styles from a JSON catalogue\n",
        "  --pattern <template>     Expand a template without constraints\n",
        "  --consonants <chars>     Consonants for --pattern\n",
        "  --vowels <chars>         Vowels for --pattern\n",
        "  --merge <first> <second> Hybridise two names\n",
        "  --meaning <text>         Bias names towards a meaning\n",
        "  -h, --help               Print this help output\n",
        "\n",
        "Set RUST_LOG (e.g. RUST_LOG=namesmith=debug) for diagnostics on stderr.\n",
    );
    if let Err(err) = out.write_all(usage.as_bytes()) {
        drop(err);
    }
}

fn write_names(mut out: impl Write, names: &[String]) {
    for name in names {
        if let Err(err) = writeln!(out, "{name}") {
            drop(err);
            return;
        }
    }
}
