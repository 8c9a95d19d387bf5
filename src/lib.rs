#![doc(test(attr(deny(warnings))))]

//! Lifehub Core offers the file-backed record stores, derived analytics, and
//! lookup helpers behind a personal dashboard CLI.
//!
//! Every store is a plain read-modify-write repository over a single flat
//! file; the on-disk snapshot is the sole source of truth. The design assumes
//! one active user per data directory: there is no locking, so two
//! simultaneous writers can silently overwrite each other's changes.

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod net;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Lifehub Core tracing initialized.");
    });
}
