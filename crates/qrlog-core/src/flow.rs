//! [`ScanFlow`] — the orchestrator that sequences scan, write, read,
//! render, and the navigation prompt.
//!
//! The flow is an explicit state machine rather than a chain of
//! continuations so that partial-failure states (write committed, read
//! failed) are reproducible in tests. [`ScanFlow::step`] performs exactly
//! one transition; [`ScanFlow::run_scan`] drives a full pass.

use std::num::NonZeroU32;

use crate::{
  error::FlowError,
  scan::{ScanOptions, ScanOutcome, Scanner},
  store::HistoryStore,
  ui::{HistoryUi, Navigator},
};

// ─── State ───────────────────────────────────────────────────────────────────

/// Position of the flow within one scan pass.
///
/// Payload-carrying states own the data in flight: the decoded URL travels
/// from `Writing` through `PromptingNavigation`, the freshly read history
/// rides along in `Displaying`.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowState {
  /// No pass in progress.
  Idle,
  /// Waiting on the scan collaborator.
  Scanning,
  /// Scan decoded; the bounded write is next.
  Writing { url: String },
  /// Write committed; re-reading the history.
  Reading { url: String },
  /// History read; handing it to the render collaborator.
  Displaying { url: String, history: Vec<String> },
  /// History rendered; offering the scanned URL for navigation.
  PromptingNavigation { url: String },
  /// A step failed. The next transition alerts the user and returns to
  /// `Idle`; remaining steps of the pass are skipped.
  ErrorDisplay { error: FlowError },
}

// ─── Flow ────────────────────────────────────────────────────────────────────

/// Orchestrator owning the session's collaborators and the store handle.
///
/// One long-lived value per session; the store handle inside it is opened
/// once and passed to every operation. Stages never overlap: each awaits
/// the previous stage's completion.
pub struct ScanFlow<S, H, U, N> {
  scanner:   S,
  store:     H,
  ui:        U,
  navigator: N,
  options:   ScanOptions,
  retention: NonZeroU32,
  state:     FlowState,
}

impl<S, H, U, N> ScanFlow<S, H, U, N>
where
  S: Scanner,
  H: HistoryStore,
  U: HistoryUi,
  N: Navigator,
{
  pub fn new(
    scanner: S,
    store: H,
    ui: U,
    navigator: N,
    options: ScanOptions,
    retention: NonZeroU32,
  ) -> Self {
    Self {
      scanner,
      store,
      ui,
      navigator,
      options,
      retention,
      state: FlowState::Idle,
    }
  }

  /// Current state, for observation in tests and diagnostics.
  pub fn state(&self) -> &FlowState {
    &self.state
  }

  // ── Session start ─────────────────────────────────────────────────────────

  /// Initialisation flow: ensure the schema exists, then read and render
  /// whatever history the store already holds.
  ///
  /// Schema failure is fatal to the session's persistence and aborts
  /// before any read is attempted. Every failure is alerted before being
  /// returned.
  pub async fn start_session(&mut self) -> Result<(), FlowError> {
    let result = self.init_and_render().await;
    if let Err(error) = &result {
      self.ui.show_alert(&error.to_string());
    }
    result
  }

  async fn init_and_render(&mut self) -> Result<(), FlowError> {
    self
      .store
      .ensure_schema()
      .await
      .map_err(|e| FlowError::Schema(e.to_string()))?;
    let history = self
      .store
      .read_recent(self.retention)
      .await
      .map_err(|e| FlowError::Store(e.to_string()))?;
    self.ui.render_history(&history);
    Ok(())
  }

  // ── Scan pass ─────────────────────────────────────────────────────────────

  /// Perform one state transition.
  ///
  /// Failures never escape as `Err`: they become the `ErrorDisplay` state,
  /// whose own transition alerts the user and drains back to `Idle`.
  pub async fn step(&mut self) {
    self.state = match std::mem::replace(&mut self.state, FlowState::Idle) {
      FlowState::Idle => FlowState::Scanning,

      FlowState::Scanning => match self.scanner.scan(&self.options).await {
        Ok(ScanOutcome::Decoded(url)) => FlowState::Writing { url },
        Ok(ScanOutcome::Cancelled) => FlowState::ErrorDisplay {
          error: FlowError::ScanCancelled,
        },
        Err(e) => FlowState::ErrorDisplay {
          error: FlowError::Scan(e.to_string()),
        },
      },

      FlowState::Writing { url } => {
        match self.store.append_and_trim(&url, self.retention).await {
          Ok(()) => FlowState::Reading { url },
          Err(e) => FlowState::ErrorDisplay {
            error: FlowError::Store(e.to_string()),
          },
        }
      }

      // A failure here does not undo the write: the insert+trim has
      // already committed.
      FlowState::Reading { url } => {
        match self.store.read_recent(self.retention).await {
          Ok(history) => FlowState::Displaying { url, history },
          Err(e) => FlowState::ErrorDisplay {
            error: FlowError::Store(e.to_string()),
          },
        }
      }

      FlowState::Displaying { url, history } => {
        self.ui.render_history(&history);
        FlowState::PromptingNavigation { url }
      }

      FlowState::PromptingNavigation { url } => {
        if self.navigator.confirm_open(&url).await {
          self.navigator.open(&url);
        }
        FlowState::Idle
      }

      FlowState::ErrorDisplay { error } => {
        self.ui.show_alert(&error.to_string());
        FlowState::Idle
      }
    };
  }

  /// Drive a full scan pass: `Idle → Scanning → … → Idle`.
  ///
  /// Returns the classified failure if the pass went through
  /// `ErrorDisplay`; the user has already been alerted by then.
  pub async fn run_scan(&mut self) -> Result<(), FlowError> {
    self.state = FlowState::Idle;
    let mut failure = None;
    loop {
      self.step().await;
      if let FlowState::ErrorDisplay { error } = &self.state {
        failure = Some(error.clone());
      }
      if matches!(self.state, FlowState::Idle) {
        break;
      }
    }
    match failure {
      Some(error) => Err(error),
      None => Ok(()),
    }
  }
}
