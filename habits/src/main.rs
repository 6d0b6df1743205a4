//! Personal habit tracker.
//!
//! Runs an interactive menu over stdin/stdout. Habits live in a JSON file
//! (`habits.json` in the working directory unless configured otherwise).

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use habits::exit_codes;
use habits::io::clock::SystemClock;
use habits::io::config::{DEFAULT_CONFIG_PATH, load_config};
use habits::io::console::Console;
use habits::io::store::Store;
use habits::logging;
use habits::session::Session;

#[derive(Parser)]
#[command(name = "habits", version, about = "Track habits and their streaks")]
struct Cli {
    /// Configuration file (TOML). Missing file means defaults.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Habits file to use instead of the configured one.
    #[arg(long)]
    data_file: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::FATAL);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    let cfg = load_config(&cli.config).context("load configuration")?;
    let data_file = cli.data_file.unwrap_or(cfg.data_file);

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    let mut session = Session::new(Store::new(data_file), SystemClock, console);
    session.run()
}
