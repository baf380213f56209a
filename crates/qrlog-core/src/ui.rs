//! Rendering and navigation collaborator interfaces.

use std::future::Future;

/// Fixed text the render collaborator substitutes for an empty history.
///
/// Rendering an empty list is never silent; the user always sees this
/// message instead.
pub const EMPTY_HISTORY_MESSAGE: &str = "No recently scanned URLs";

/// The display surface for scan history and error notices.
pub trait HistoryUi {
  /// Render `urls` as a user-visible list, most recent first. An empty
  /// slice must render as [`EMPTY_HISTORY_MESSAGE`], not as nothing.
  fn render_history(&mut self, urls: &[String]);

  /// Show `message` as a blocking notification. Used for every surfaced
  /// flow error, including cancellation notices.
  fn show_alert(&mut self, message: &str);
}

/// The yes/no navigation prompt offered after a successful scan.
pub trait Navigator {
  /// Ask whether to open `url`. "No" and no input both mean `false`.
  fn confirm_open(&mut self, url: &str) -> impl Future<Output = bool> + Send;

  /// Trigger the external open-in-new-context side effect. Failures are
  /// the implementation's to report (logged, not fatal to the flow).
  fn open(&mut self, url: &str);
}
