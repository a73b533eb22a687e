use crate::dedup::deduplicate_by_reversal;
use crate::permutations::iter_permutations;
use crate::replacement::{iter_replacement_tuples, Alphabet};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Permutrix - Enumerate permutations and replacement tuples of symbols
#[derive(Parser, Debug)]
#[command(name = "permutrix")]
#[command(about = "Enumerate permutations of a symbol list, with or without replacement")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print every arrangement of the symbols, each used exactly once
    Permutations {
        /// Comma-separated symbols, e.g. "a,b,c"
        symbols: String,

        /// Keep only one of each permutation and its reverse
        #[arg(long)]
        ignore_reversed: bool,
    },
    /// Print every fixed-length tuple over the symbols, repetition allowed
    Tuples {
        /// Comma-separated symbols, e.g. "a,b"; duplicates are dropped
        symbols: String,

        /// Number of positions in each tuple
        #[arg(short = 'n', long)]
        length: usize,
    },
}

/// Split a comma-separated symbol list into owned symbols
pub fn parse_symbols(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|symbol| !symbol.is_empty())
        .map(str::to_string)
        .collect()
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

fn print_batch(batch: &[Vec<String>]) {
    for row in batch {
        println!("{}", row.join(","));
    }
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    init_logging(&args.log_level)?;

    match args.command {
        Command::Permutations {
            symbols,
            ignore_reversed,
        } => {
            let symbols = parse_symbols(&symbols);
            info!("Enumerating permutations of {} symbols", symbols.len());

            let mut batch: Vec<Vec<String>> = iter_permutations(symbols).collect();
            if ignore_reversed {
                batch = deduplicate_by_reversal(batch);
            }
            print_batch(&batch);
        }
        Command::Tuples { symbols, length } => {
            let alphabet = Alphabet::new(parse_symbols(&symbols));
            info!(
                "Enumerating tuples of {} positions over {} symbols",
                length,
                alphabet.len()
            );

            let tuples = iter_replacement_tuples(alphabet, length)
                .context("Invalid tuple enumeration arguments")?;
            for tuple in tuples {
                println!("{}", tuple.join(","));
            }
        }
    }

    Ok(())
}
