//! The scan collaborator interface.
//!
//! The actual capture mechanism (device camera, test script, stdin prompt)
//! lives behind [`Scanner`]; the core only sees a decoded payload or a
//! cancellation signal.

use std::future::Future;

use serde::{Deserialize, Serialize};

// ─── Options ─────────────────────────────────────────────────────────────────

/// Symbology restriction passed to the scan collaborator.
///
/// Only the QR format is supported; the enum exists so the restriction is an
/// explicit part of the request rather than an implicit assumption.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BarcodeFormat {
  #[default]
  QrCode,
}

/// Configuration for a single scan request.
///
/// Mirrors the full option surface of the scan collaborator. Backends are
/// free to ignore options that do not apply to them (a stdin-based scanner
/// has no torch), but the request shape is fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
  pub prefer_front_camera:        bool,
  pub show_flip_camera_button:    bool,
  pub show_torch_button:          bool,
  pub torch_on:                   bool,
  pub save_history:               bool,
  /// Instruction text shown inside the scan UI.
  pub prompt:                     String,
  /// How long the decoded result stays on screen, in milliseconds.
  pub result_display_duration_ms: u32,
  pub disable_animations:         bool,
  pub disable_success_beep:       bool,
  pub formats:                    BarcodeFormat,
}

impl Default for ScanOptions {
  fn default() -> Self {
    Self {
      prefer_front_camera:        false,
      show_flip_camera_button:    true,
      show_torch_button:          true,
      torch_on:                   false,
      save_history:               true,
      prompt:                     "Place a QR code inside the scan area".into(),
      result_display_duration_ms: 500,
      disable_animations:         true,
      disable_success_beep:       false,
      formats:                    BarcodeFormat::QrCode,
    }
  }
}

// ─── Outcome & trait ─────────────────────────────────────────────────────────

/// What a completed scan request produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
  /// The collaborator decoded a payload. Opaque free text; the store does
  /// not validate that it is a well-formed URL.
  Decoded(String),
  /// The user backed out of the scan UI before anything was decoded.
  Cancelled,
}

/// Abstraction over the scan capability.
///
/// `scan` resolves once per request: with a decoded payload, a cancellation,
/// or a collaborator error (classified separately from cancellation by the
/// flow). The future is `Send` so the flow can run on multi-threaded tokio.
pub trait Scanner {
  type Error: std::error::Error + Send + Sync + 'static;

  fn scan(
    &mut self,
    options: &ScanOptions,
  ) -> impl Future<Output = Result<ScanOutcome, Self::Error>> + Send;
}
