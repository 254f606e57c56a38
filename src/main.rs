//! Binary entrypoint for The Square.
//!
//! Commands:
//! - `play [--seed <n>] [--script <file>] [--json]` - play a session on the terminal or from a script
//! - `init` - write a starter `thesquare.toml`
//!
//! See the library crate docs for module-level details: `thesquare::`.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use thesquare::config::Config;
use thesquare::console;
use thesquare::square::{GameEngine, SessionSummary};

#[derive(Parser)]
#[command(name = "thesquare")]
#[command(about = "Escape The Square before the Bishop finds you")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "thesquare.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a session
    Play {
        /// RNG seed for item scatter and robot placement (overrides game.seed)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Read actions from this file, one per line, instead of stdin
        #[arg(long)]
        script: Option<String>,

        /// Print a JSON summary when the session ends
        #[arg(long)]
        json: bool,
    },
    /// Write a default configuration file
    Init,
}

/// `--json` output: the engine summary plus the seed that reproduces the game.
#[derive(Serialize)]
struct PlaySummary {
    seed: u64,
    #[serde(flatten)]
    summary: SessionSummary,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            init_logging(None, cli.verbose);
            if Path::new(&cli.config).exists() {
                warn!("Configuration file {} already exists; leaving it untouched", cli.config);
                println!("{} already exists.", cli.config);
                return Ok(());
            }
            Config::create_default(&cli.config)?;
            info!("Wrote default configuration to {}", cli.config);
            println!("Created {}", cli.config);
        }
        Commands::Play { seed, script, json } => {
            let config = if Path::new(&cli.config).exists() {
                Some(Config::load(&cli.config)?)
            } else {
                None
            };
            init_logging(config.as_ref(), cli.verbose);
            let config = config.unwrap_or_else(|| {
                warn!("Config file {} not found; using defaults", cli.config);
                Config::default()
            });

            let seed = seed.or(config.game.seed).unwrap_or_else(rand::random);
            info!("Starting The Square v{} with seed {}", env!("CARGO_PKG_VERSION"), seed);
            let mut engine = GameEngine::new(&mut StdRng::seed_from_u64(seed));

            let mut stdout = io::stdout();
            let status = match script {
                Some(path) => {
                    let file = File::open(&path)
                        .with_context(|| format!("Failed to open script {}", path))?;
                    console::run(&mut engine, BufReader::new(file), &mut stdout, &config)?
                }
                None => {
                    let stdin = io::stdin();
                    console::run(&mut engine, stdin.lock(), &mut stdout, &config)?
                }
            };
            info!("Session ended: {:?} after {} turns", status, engine.turns());

            if json {
                let out = PlaySummary {
                    seed,
                    summary: engine.summary(),
                };
                println!("{}", serde_json::to_string_pretty(&out)?);
            }
        }
    }

    Ok(())
}

fn init_logging(config: Option<&Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let level = match verbosity {
        0 => config
            .map(|c| c.logging.level_filter())
            .unwrap_or(log::LevelFilter::Warn),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(level);
    builder.format(|fmt, record| {
        writeln!(
            fmt,
            "{} [{}] {}",
            chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
            record.level(),
            record.args()
        )
    });
    if let Some(file) = config.and_then(|c| c.logging.file.as_ref()) {
        match std::fs::OpenOptions::new().create(true).append(true).open(file) {
            Ok(f) => {
                builder.target(env_logger::Target::Pipe(Box::new(f)));
            }
            Err(e) => eprintln!("Cannot open log file {}: {} (logging to stderr)", file, e),
        }
    }
    let _ = builder.try_init();
}
