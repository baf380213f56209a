//! `qrlog` — scan QR codes and keep a bounded history of the decoded URLs.
//!
//! # Usage
//!
//! ```
//! qrlog scan                      # prompt for a payload, record it
//! qrlog scan --text http://a.test # non-interactive scan
//! qrlog history                   # show the recent history
//! qrlog --db scans.db --keep 5 scan
//! ```

mod scanner;
mod ui;

use std::{num::NonZeroU32, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use qrlog_core::{
  flow::ScanFlow,
  scan::ScanOptions,
  store::DEFAULT_RETENTION,
};
use qrlog_store_sqlite::SqliteStore;
use scanner::CliScanner;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use ui::{SystemNavigator, TerminalUi};

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
  name = "qrlog",
  about = "Scan QR codes and keep a bounded history of the decoded URLs"
)]
struct Args {
  /// Path to a TOML config file (db, keep, [scan] options).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Path to the history database (default: qrlog.db).
  #[arg(long, value_name = "FILE")]
  db: Option<PathBuf>,

  /// How many recent scans to retain (default: 15).
  #[arg(long, value_name = "N")]
  keep: Option<u32>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Scan a code and record the decoded URL.
  Scan {
    /// Use this value as the decoded payload instead of prompting.
    #[arg(long, value_name = "TEXT")]
    text: Option<String>,
  },
  /// Show the recently scanned URLs.
  History,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  db:   Option<PathBuf>,
  keep: Option<u32>,
  scan: Option<ScanOptions>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();

  // Load config file if provided.
  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flags override config file, which overrides defaults.
  let db = args
    .db
    .or(file_cfg.db)
    .unwrap_or_else(|| PathBuf::from("qrlog.db"));
  let keep = args
    .keep
    .or(file_cfg.keep)
    .map(|k| NonZeroU32::new(k).context("--keep must be at least 1"))
    .transpose()?
    .unwrap_or(DEFAULT_RETENTION);
  let options = file_cfg.scan.unwrap_or_default();

  tracing::debug!(db = %db.display(), keep = keep.get(), "opening history store");
  let store = SqliteStore::open(&db)
    .await
    .with_context(|| format!("opening history store {}", db.display()))?;

  let scanner = match &args.command {
    Command::Scan { text: Some(t) } => CliScanner::Fixed(Some(t.clone())),
    _ => CliScanner::Prompt,
  };

  let mut flow = ScanFlow::new(
    scanner,
    store,
    TerminalUi,
    SystemNavigator,
    options,
    keep,
  );

  // Both commands begin with the init flow: ensure the schema, then show
  // whatever history is already there. Errors have been alerted by the
  // flow; only the exit status remains to set.
  if flow.start_session().await.is_err() {
    std::process::exit(1);
  }

  if let Command::Scan { .. } = args.command {
    match flow.run_scan().await {
      Ok(()) => {}
      // Deliberate user abort is a clean exit.
      Err(e) if e.is_cancellation() => {}
      Err(_) => std::process::exit(1),
    }
  }

  Ok(())
}
