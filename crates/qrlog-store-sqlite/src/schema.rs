//! SQL schema for the qrlog SQLite store.
//!
//! Executed by `ensure_schema`, every session. Future migrations will be
//! gated on `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// `scan_seq` is the record's insertion order and the only ordering key.
/// AUTOINCREMENT keeps the sequence strictly monotonic even after trims
/// delete the low end, so a recycled rowid can never reorder history.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS scanned_urls (
    scan_seq  INTEGER PRIMARY KEY AUTOINCREMENT,
    url       TEXT NOT NULL    -- decoded payload, unvalidated free text
);

PRAGMA user_version = 1;
";
