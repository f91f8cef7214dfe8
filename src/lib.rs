#![doc(test(attr(deny(warnings))))]

//! Homebudget offers the budgeting core of a local-first personal finance
//! tracker: monthly budgets with per-category limits, spend evaluation
//! against those limits, and long-run spending recommendations.
//!
//! The planner functions are pure; persistence lives behind
//! [`storage::StorageBackend`] and the caller decides when to recompute.

pub mod config;
pub mod errors;
pub mod ledger;
pub mod planner;
pub mod stats;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Homebudget tracing initialized.");
    });
}
