#![doc(test(attr(deny(warnings))))]

//! Fintrack Core offers the billing-cycle calculator and domain primitives
//! that power a personal-finance tracker: credit cards, purchases,
//! categories, subscriptions, loans, and savings goals.

pub mod billing;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Fintrack Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
