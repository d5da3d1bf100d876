#![doc(test(attr(deny(warnings))))]

//! Kakeibo Core offers the transaction ledger, monthly aggregation, and
//! chart-segmentation primitives that power a household expense tracker.

pub mod chart;
pub mod errors;
pub mod format;
pub mod input;
pub mod ledger;
pub mod manager;
pub mod storage;
pub mod summary;
pub mod time;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Kakeibo Core tracing initialized.");
    });
}
