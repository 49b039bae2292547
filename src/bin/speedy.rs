//! `speedy` binary: command-line front end for the layer unwinder.
//!
//! # Usage
//!
//! ```bash
//! speedy generate --n 2 --k 16 --out test_set.csv
//! speedy search --n 2 --k 16 --csv test_set.csv
//! speedy search --n 2 --k 16 --csv test_set.csv --select max --mode ascending --format verbose
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;

use speedy::driver::{self, ReportFormat};
use speedy::{Selection, SpeedyConfig, SpeedyError, UnwindMode};

#[derive(Parser, Debug)]
#[command(
    name = "speedy",
    version,
    about = "Unwind layered encodings of a selected candidate into a mixed-radix digit sequence",
    long_about = None
)]
struct Cli {
    /// Path to a JSON configuration file. CLI flags override its values.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace). Overrides the config.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load candidates, select one and unwind it.
    Search {
        /// Total number of elements.
        #[arg(long)]
        n: i64,
        /// Number of elements in the permutation.
        #[arg(long)]
        k: i64,
        /// Path to the candidate CSV file.
        #[arg(long, value_name = "FILE")]
        csv: PathBuf,
        /// Which candidate to unwind.
        #[arg(long, value_enum)]
        select: Option<SelectArg>,
        /// How each step corrects the decoded value.
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = FormatArg::Text)]
        format: FormatArg,
    },
    /// Write every rank 1..=n^k in shuffled order, one per line.
    Generate {
        /// The base number n.
        #[arg(long)]
        n: i64,
        /// The exponent k.
        #[arg(long)]
        k: i64,
        /// Output CSV path.
        #[arg(long, value_name = "FILE", default_value = "test_set.csv")]
        out: PathBuf,
        /// Seed for a reproducible shuffle.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SelectArg {
    Min,
    Max,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    Double,
    Single,
    Ascending,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Text,
    Verbose,
    Json,
}

impl From<SelectArg> for Selection {
    fn from(arg: SelectArg) -> Self {
        match arg {
            SelectArg::Min => Selection::Minimum,
            SelectArg::Max => Selection::Maximum,
        }
    }
}

impl From<ModeArg> for UnwindMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Double => UnwindMode::DoubleSubtraction,
            ModeArg::Single => UnwindMode::SingleSubtraction,
            ModeArg::Ascending => UnwindMode::Ascending,
        }
    }
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Verbose => ReportFormat::Verbose,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

fn init_logging(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    // Custom formatter: just print the level and message
    builder.format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));
    let _ = builder.try_init();
}

/// Narrows CLI integers to the domain types, rejecting zero and negatives.
fn domain_args(n: i64, k: i64) -> Result<(u64, u32), SpeedyError> {
    let n = u64::try_from(n)
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| SpeedyError::InvalidArgument(format!("n must be a positive integer, got {}", n)))?;
    let k = u32::try_from(k)
        .ok()
        .filter(|&k| k > 0)
        .ok_or_else(|| SpeedyError::InvalidArgument(format!("k must be a positive integer, got {}", k)))?;
    Ok((n, k))
}

fn execute(cli: Cli) -> Result<(), SpeedyError> {
    let mut config = match &cli.config {
        Some(path) => SpeedyConfig::from_json_path(path)?,
        None => SpeedyConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    init_logging(config.log_filter()?);
    log::debug!("speedy {} with {:?}", speedy::VERSION, config);

    match cli.command {
        Command::Search {
            n,
            k,
            csv,
            select,
            mode,
            format,
        } => {
            let (n, k) = domain_args(n, k)?;
            if let Some(select) = select {
                config.selection = select.into();
            }
            if let Some(mode) = mode {
                config.unwind_mode = mode.into();
            }

            let values = driver::load_candidates_from_path(&csv)?;
            let report = driver::run(&values, n, k, &config)?;

            let stdout = io::stdout();
            let mut out = stdout.lock();
            driver::write_report(&mut out, &report, format.into(), config.record_telemetry)?;
        }
        Command::Generate { n, k, out, seed } => {
            let (n, k) = domain_args(n, k)?;
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let values = driver::generate_test_set(n, k, config.max_generated_values, &mut rng)?;
            driver::write_test_set_to_path(&out, &values)?;
            println!("File saved with {} values in '{}'", values.len(), out.display());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
