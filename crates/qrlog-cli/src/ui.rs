//! Terminal implementations of the render and navigation collaborators.

use std::process::Command;

use qrlog_core::ui::{EMPTY_HISTORY_MESSAGE, HistoryUi, Navigator};

use crate::scanner::read_stdin_line;

// ─── Rendering ───────────────────────────────────────────────────────────────

/// Format the history as a numbered list, most recent first, substituting
/// the fixed empty-state message for an empty history.
pub fn format_history(urls: &[String]) -> String {
  if urls.is_empty() {
    return EMPTY_HISTORY_MESSAGE.to_owned();
  }
  urls
    .iter()
    .enumerate()
    .map(|(i, url)| format!("{:>2}. {url}", i + 1))
    .collect::<Vec<_>>()
    .join("\n")
}

/// Render collaborator printing to stdout; alerts go to stderr.
pub struct TerminalUi;

impl HistoryUi for TerminalUi {
  fn render_history(&mut self, urls: &[String]) {
    println!("{}", format_history(urls));
  }

  fn show_alert(&mut self, message: &str) {
    eprintln!("{message}");
  }
}

// ─── Navigation ──────────────────────────────────────────────────────────────

/// Navigation prompt backed by the terminal and the platform URL opener.
pub struct SystemNavigator;

impl Navigator for SystemNavigator {
  async fn confirm_open(&mut self, url: &str) -> bool {
    println!("Open {url}? [y/N]");
    match read_stdin_line().await {
      Ok(Some(line)) => matches!(line.trim(), "y" | "Y" | "yes"),
      // EOF or a read error both count as "no input": a no-op.
      _ => false,
    }
  }

  fn open(&mut self, url: &str) {
    #[cfg(target_os = "macos")]
    let spawned = Command::new("open").arg(url).spawn();
    #[cfg(target_os = "windows")]
    let spawned = Command::new("cmd").args(["/C", "start", "", url]).spawn();
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let spawned = Command::new("xdg-open").arg(url).spawn();

    match spawned {
      Ok(_) => tracing::info!(url, "opening in external browser"),
      Err(e) => {
        tracing::warn!(error = %e, "could not launch a browser");
        eprintln!("Could not open {url}: {e}");
      }
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
