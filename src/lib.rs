#![doc(test(attr(deny(warnings))))]

//! Interactive command that records a single transaction in a YNAB budget:
//! it loads the budget's accounts, payees and categories, walks the user
//! through a short form and posts the result to the YNAB API.

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod reference;
pub mod transaction;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("ynab-transaction tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
