use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use cursive::{Cursive, CursiveExt};
use tracing::{debug, info};

use invest_ui::{AppConfig, AppState, ConfigOverrides, logging, views};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Interactive investment calculator for small food-service businesses.
///
/// Works out setup cost and break-even revenue for a new store, and daily
/// profit for an existing one, recalculating on every keystroke.
#[derive(Debug, Parser)]
#[command(name = "invest-calculator", version, about)]
struct Cli {
    /// TOML preferences file. Defaults to `invest-calculator.toml` in the
    /// working directory when present.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Currency symbol shown in front of money fields.
    #[arg(long)]
    currency: Option<String>,

    /// Log level or filter directive (ignored when RUST_LOG is set).
    #[arg(long)]
    log_level: Option<String>,

    /// File to write logs to while the calculator is on screen.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            currency: self.currency.clone(),
            log_level: self.log_level.clone(),
            log_file: self.log_file.clone(),
        }
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    logging::init_default_logging();

    let cli = Cli::parse();

    let config = AppConfig::load_or_default(cli.config.as_deref())
        .context("failed to load configuration")?
        .with_overrides(cli.overrides());

    if !logging::env_filter_active() {
        logging::set_log_level(&config.logging.level)?;
    }

    let log_path = config.logging.file_or_default();
    logging::enable_file_logging(&log_path)?;
    info!(path = %log_path.display(), "logging to file");
    debug!(?config, "configuration loaded");

    // The terminal UI owns stdout from here on.
    logging::set_stdout_enabled(false)?;

    let mut siv = Cursive::new();
    siv.set_user_data(AppState::new(config.display.currency));
    views::show_calculator(&mut siv);
    let outcome = siv.run_crossterm();

    logging::set_stdout_enabled(true)?;
    info!("calculator closed");
    logging::disable_file_logging();

    outcome.context("terminal UI failed")
}
