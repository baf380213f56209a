//! Core types and trait definitions for the qrlog scan-history utility.
//!
//! This crate is deliberately free of database and terminal dependencies.
//! The storage backend (`qrlog-store-sqlite`) and the binary (`qrlog-cli`)
//! both depend on it; it depends on nothing platform-specific.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod error;
pub mod flow;
pub mod scan;
pub mod store;
pub mod ui;

pub use error::{FlowError, Result};
