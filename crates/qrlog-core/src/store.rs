//! The `HistoryStore` trait — the bounded-history persistence protocol.
//!
//! The trait is implemented by storage backends (e.g. `qrlog-store-sqlite`).
//! The flow depends on this abstraction, not on any concrete backend.

use std::{future::Future, num::NonZeroU32};

/// Default retention window: how many scans the store keeps.
///
/// The limit is always explicit at the call sites; this is only the value
/// the binary falls back to when neither flag nor config file sets one.
pub const DEFAULT_RETENTION: NonZeroU32 = NonZeroU32::new(15).unwrap();

/// Abstraction over the durable scan-history store.
///
/// Contract, independent of backend:
///
/// - `ensure_schema` is idempotent and must complete before any other
///   operation is attempted in a session.
/// - `append_and_trim` is atomic: the insert and the trim commit together
///   or not at all, and after it returns the store holds at most `keep`
///   records.
/// - `read_recent` is read-only and returns records most-recent-first,
///   reflecting the latest committed write (no caching).
///
/// All methods return `Send` futures so the trait can be used on
/// multi-threaded async runtimes.
pub trait HistoryStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Create the history table if it does not exist. Safe to call every
  /// session; never alters existing records.
  fn ensure_schema(
    &self,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Insert `url` as the newest record and delete everything outside the
  /// `keep` most recent, as a single transaction.
  ///
  /// `url` is opaque free text; duplicates are permitted and each call
  /// inserts a distinct record. On failure the prior store state is
  /// intact.
  fn append_and_trim(
    &self,
    url: &str,
    keep: NonZeroU32,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send;

  /// The `limit` most recently inserted URLs, most recent first. Possibly
  /// empty, never partial: a failure yields no results at all.
  fn read_recent(
    &self,
    limit: NonZeroU32,
  ) -> impl Future<Output = Result<Vec<String>, Self::Error>> + Send + '_;
}
