//! krand CLI - Random Fixtures from the Command Line
//!
//! This is the command-line entry point for the krand generation library.
//!
//! # Commands
//!
//! - `krand int --start 0 --end 10 --parity even` - Draw bounded integers
//! - `krand array --kind double --size 8` - Generate a single row of values
//! - `krand matrix --kind bool --rows 3 --cols 4 --digits` - Generate and print a matrix
//! - `krand string --len 12 --alphabet alphabetic` - Draw strings from an alphabet
//!
//! # Entropy
//!
//! The generator is configured from `--config` (TOML), then `KRAND_MODE` /
//! `KRAND_SEED`, then `--seed` / `--secure`. Generated data goes to stdout;
//! logs go to stderr.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use krand_collections::{Alphabet, BoolStyle, CollectionGenerator, ScalarKind};
use krand_core::config::{build_config, ConfigOverrides};
use krand_core::{Entropy, Parity};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod error;

pub use error::{CliError, Result};

/// krand random fixture generator CLI
#[derive(Parser, Debug)]
#[command(name = "krand")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed for a reproducible standard-mode generator
    #[arg(short, long, global = true, conflicts_with = "secure")]
    seed: Option<u64>,

    /// Use the operating system CSPRNG
    #[arg(long, global = true)]
    secure: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ParityArg {
    Even,
    Odd,
}

impl From<ParityArg> for Parity {
    fn from(arg: ParityArg) -> Self {
        match arg {
            ParityArg::Even => Parity::Even,
            ParityArg::Odd => Parity::Odd,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum AlphabetArg {
    /// ASCII 32 through 125
    Printable,
    /// A-Z and a-z
    Alphabetic,
    /// 0-9
    Numeric,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Draw integers, optionally bounded and parity-constrained
    Int {
        /// Left bound (inclusive)
        #[arg(long, allow_negative_numbers = true, requires = "end")]
        start: Option<i32>,

        /// Right bound
        #[arg(long, allow_negative_numbers = true, requires = "start")]
        end: Option<i32>,

        /// Required parity
        #[arg(short, long, value_enum)]
        parity: Option<ParityArg>,

        /// Number of values to draw
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },

    /// Generate a single array of scalar values
    Array {
        /// Element kind (int, long, float, double, bool)
        #[arg(short, long, default_value = "int")]
        kind: ScalarKind,

        /// Number of elements
        #[arg(long)]
        size: usize,

        /// Probability of true (bool only)
        #[arg(short, long)]
        probability: Option<f64>,

        /// Render booleans as 1/0
        #[arg(long)]
        digits: bool,
    },

    /// Generate and print a matrix of scalar values
    Matrix {
        /// Element kind (int, long, float, double, bool)
        #[arg(short, long, default_value = "int")]
        kind: ScalarKind,

        /// Number of rows
        #[arg(short, long)]
        rows: usize,

        /// Number of columns
        #[arg(long)]
        cols: usize,

        /// Probability of true (bool only)
        #[arg(short, long)]
        probability: Option<f64>,

        /// Render booleans as 1/0
        #[arg(long)]
        digits: bool,
    },

    /// Draw strings from an alphabet
    String {
        /// String length
        #[arg(short, long)]
        len: usize,

        /// Predefined alphabet
        #[arg(
            short,
            long,
            value_enum,
            default_value = "alphabetic",
            conflicts_with = "chars"
        )]
        alphabet: AlphabetArg,

        /// Custom alphabet characters
        #[arg(long)]
        chars: Option<String>,

        /// Number of strings to draw
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },
}

fn bool_style(digits: bool) -> BoolStyle {
    if digits {
        BoolStyle::Digits
    } else {
        BoolStyle::Words
    }
}

fn resolve_alphabet(alphabet: AlphabetArg, chars: Option<String>) -> Result<Alphabet> {
    Ok(match chars {
        Some(chars) => Alphabet::new(chars.chars())?,
        None => match alphabet {
            AlphabetArg::Printable => Alphabet::printable(),
            AlphabetArg::Alphabetic => Alphabet::alphabetic(),
            AlphabetArg::Numeric => Alphabet::numeric(),
        },
    })
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    let overrides = ConfigOverrides {
        config_file: cli.config,
        seed: cli.seed,
        secure: cli.secure,
    };
    let config = build_config(&overrides)?;
    debug!(mode = %config.mode, seed = ?config.seed, "entropy configuration");

    let mut entropy = Entropy::from_config(&config)?;

    match cli.command {
        Commands::Int {
            start,
            end,
            parity,
            count,
        } => {
            let range = start.zip(end);
            commands::int::run(&mut entropy, out, range, parity.map(Parity::from), count)
        }
        Commands::Array {
            kind,
            size,
            probability,
            digits,
        } => commands::array::run(
            &mut CollectionGenerator::new(&mut entropy),
            out,
            kind,
            size,
            probability,
            bool_style(digits),
        ),
        Commands::Matrix {
            kind,
            rows,
            cols,
            probability,
            digits,
        } => commands::matrix::run(
            &mut CollectionGenerator::new(&mut entropy),
            out,
            kind,
            (rows, cols),
            probability,
            bool_style(digits),
        ),
        Commands::String {
            len,
            alphabet,
            chars,
            count,
        } => {
            let alphabet = resolve_alphabet(alphabet, chars)?;
            commands::string::run(
                &mut CollectionGenerator::new(&mut entropy),
                out,
                &alphabet,
                len,
                count,
            )
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli, &mut out)?;
    out.flush()?;
    Ok(())
}
