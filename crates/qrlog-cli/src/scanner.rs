//! Terminal stand-ins for the camera scan collaborator.
//!
//! There is no camera here; the interactive scanner asks for the decoded
//! payload on stdin, and the fixed scanner replays a value supplied on the
//! command line.

use std::io;

use qrlog_core::scan::{ScanOptions, ScanOutcome, Scanner};

/// Scan collaborator backed by the terminal.
pub enum CliScanner {
  /// Interactive: show the scan prompt and read the payload from stdin.
  /// An empty line or EOF is the user backing out — a cancellation, not
  /// an error.
  Prompt,
  /// Non-interactive: one payload from `--text`, then cancellation.
  Fixed(Option<String>),
}

impl Scanner for CliScanner {
  type Error = io::Error;

  async fn scan(&mut self, options: &ScanOptions) -> io::Result<ScanOutcome> {
    match self {
      CliScanner::Fixed(text) => Ok(match text.take() {
        Some(t) => ScanOutcome::Decoded(t),
        None => ScanOutcome::Cancelled,
      }),
      CliScanner::Prompt => {
        println!("{}", options.prompt);
        println!("(paste the decoded payload; empty line cancels)");
        Ok(match read_stdin_line().await? {
          Some(line) if !line.trim().is_empty() => {
            ScanOutcome::Decoded(line.trim().to_owned())
          }
          _ => ScanOutcome::Cancelled,
        })
      }
    }
  }
}

/// One line from stdin, off the async runtime. `None` on EOF.
///
/// A fresh blocking read per call, rather than a persistent buffered
/// reader, so no input is read ahead and lost between collaborators that
/// share the terminal.
pub(crate) async fn read_stdin_line() -> io::Result<Option<String>> {
  tokio::task::spawn_blocking(|| {
    let mut line = String::new();
    let n = io::stdin().read_line(&mut line)?;
    Ok(if n == 0 { None } else { Some(line) })
  })
  .await
  .map_err(io::Error::other)?
}
