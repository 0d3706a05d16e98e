//! Watchvault operator CLI
//!
//! Derives vault and share tokens, generates phrases, checks import files,
//! and inspects fractional positions. Secret phrases are read from stdin by
//! default so they do not end up in shell history.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use watchvault_core::WatchvaultConfig;

mod commands;

#[derive(Parser)]
#[command(name = "watchvault")]
#[command(about = "Watchvault - phrase-derived vault identity and list ordering tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path
    #[arg(short, long, global = true, default_value = "watchvault.toml")]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive the vault token for a secret phrase (read from stdin unless given)
    Hash {
        /// Phrase on the command line instead of stdin
        #[arg(long)]
        phrase: Option<String>,
    },

    /// Derive the share token for a vault token
    Share {
        /// 64-character lowercase hex vault token
        vault_token: String,
    },

    /// Generate a new 12-word phrase from the configured wordlist
    Generate {
        /// Wordlist file, overriding the configured one
        #[arg(long)]
        wordlist: Option<PathBuf>,
    },

    /// Compute the position for an item dropped at INDEX among POSITIONS
    Place {
        /// Target index (0 = before all, len = after all)
        index: usize,

        /// Positions of the other items in the container
        #[arg(allow_negative_numbers = true)]
        positions: Vec<f64>,
    },

    /// Print fresh evenly spaced positions for a container
    Renormalize {
        /// Current positions of the container's items
        #[arg(allow_negative_numbers = true, required = true)]
        positions: Vec<f64>,
    },

    /// Validate an exported vault JSON file
    CheckImport {
        /// File to check
        file: PathBuf,
    },
}

fn init_tracing(verbose: bool, default_level: &str) {
    let level = if verbose { "debug" } else { default_level };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_phrase(arg: Option<String>) -> Result<String> {
    if let Some(phrase) = arg {
        return Ok(phrase);
    }
    let mut phrase = String::new();
    io::stdin()
        .read_to_string(&mut phrase)
        .context("Failed to read phrase from stdin")?;
    Ok(phrase)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = WatchvaultConfig::load(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;
    init_tracing(cli.verbose, &config.log_level);

    let mut out = io::stdout().lock();

    match cli.command {
        Commands::Hash { phrase } => {
            let phrase = read_phrase(phrase)?;
            commands::identity::hash(&phrase, &mut out)?;
        }

        Commands::Share { vault_token } => {
            commands::identity::share(&vault_token, &mut out)?;
        }

        Commands::Generate { wordlist } => {
            let path = wordlist.or_else(|| config.wordlist_path.clone());
            commands::identity::generate(path.as_deref(), &mut out)?;
        }

        Commands::Place { index, positions } => {
            commands::positions::place(&positions, index, &config.ordering, &mut out)?;
        }

        Commands::Renormalize { positions } => {
            commands::positions::renormalize(&positions, &config.ordering, &mut out)?;
        }

        Commands::CheckImport { file } => {
            commands::import::check(&file, &mut out)?;
        }
    }

    Ok(())
}
