//! [`SqliteStore`] — the SQLite implementation of [`HistoryStore`].

use std::{num::NonZeroU32, path::Path};

use qrlog_core::store::HistoryStore;

use crate::{Error, Result, schema::SCHEMA};

/// A scan-history store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. Opening
/// does not touch the schema; callers run
/// [`ensure_schema`](HistoryStore::ensure_schema) before any read or
/// write.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path`.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    Ok(Self { conn })
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    Ok(Self { conn })
  }

  /// Crate-internal access to the raw connection, used by the tests to
  /// inject faults into the trim step.
  #[cfg(test)]
  pub(crate) fn raw(&self) -> &tokio_rusqlite::Connection {
    &self.conn
  }
}

impl HistoryStore for SqliteStore {
  type Error = Error;

  async fn ensure_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn append_and_trim(&self, url: &str, keep: NonZeroU32) -> Result<()> {
    let url = url.to_owned();
    let keep = i64::from(keep.get());

    // Insert and trim commit together or not at all; a reader never sees
    // more than `keep` rows once this returns.
    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(
          "INSERT INTO scanned_urls (url) VALUES (?1)",
          rusqlite::params![url],
        )?;
        tx.execute(
          "DELETE FROM scanned_urls
           WHERE scan_seq NOT IN (
             SELECT scan_seq FROM scanned_urls
             ORDER BY scan_seq DESC
             LIMIT ?1
           )",
          rusqlite::params![keep],
        )?;
        tx.commit()?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn read_recent(&self, limit: NonZeroU32) -> Result<Vec<String>> {
    let limit = i64::from(limit.get());

    let urls = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT url FROM scanned_urls ORDER BY scan_seq DESC LIMIT ?1",
        )?;
        let urls = stmt
          .query_map(rusqlite::params![limit], |row| row.get::<_, String>(0))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(urls)
      })
      .await?;
    Ok(urls)
  }
}
