#![doc(test(attr(deny(warnings))))]

//! Moneybook is a snapshot-backed personal finance store: transactions,
//! categories, monthly budgets, and settings held in one in-memory state,
//! persisted as JSON to a durable key-value backend and rehydrated at startup.

pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Moneybook tracing initialized.");
    });
}
