//! Error taxonomy for the scan flow.
//!
//! Collaborator errors cross into the flow as display strings: the
//! orchestrator classifies where a failure happened and surfaces a
//! human-readable notice, it does not plumb three unrelated backend error
//! types through its own signature.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
  /// Creating the history table failed. Fatal to persistence for the
  /// session; never retried automatically.
  #[error("could not initialise scan history storage: {0}")]
  Schema(String),

  /// A read or write transaction against the history store failed.
  #[error("scan history storage error: {0}")]
  Store(String),

  /// The user backed out of the scan UI. Not a failure of the system.
  #[error("scan cancelled")]
  ScanCancelled,

  /// The scan collaborator reported a failure distinct from cancellation.
  #[error("scan failed: {0}")]
  Scan(String),
}

impl FlowError {
  /// `true` for the deliberate user-abort case, which callers typically
  /// treat as a clean exit rather than an error.
  pub fn is_cancellation(&self) -> bool {
    matches!(self, FlowError::ScanCancelled)
  }
}

pub type Result<T, E = FlowError> = std::result::Result<T, E>;
