#![doc(test(attr(deny(warnings))))]

//! Shopping List is a small terminal shop: pick items from a fixed catalog
//! by name or number, then get a receipt sorted by price with the total and
//! the cheapest and dearest picks.

pub mod cart;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod currency;
pub mod errors;
pub mod report;
pub mod session;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Shopping List tracing initialized.");
    });
}
