//! User journeys, in suite declaration order
//!
//! Each journey is one ordered sequence of page-object calls and
//! assertions. The runner executes them after setup, one at a time.

pub mod account_creation;
pub mod bill_payment;
pub mod navigation_menu;
pub mod transactions_api;
pub mod transfer;

use crate::runner::Journey;

/// The full suite in execution order.
pub fn all() -> Vec<Journey> {
    vec![
        Journey { name: "open-savings-account", run: account_creation::run },
        Journey { name: "transfer-funds", run: transfer::run },
        Journey { name: "bill-pay", run: bill_payment::run },
        Journey { name: "navigation-menu", run: navigation_menu::run },
        Journey { name: "validate-transactions", run: transactions_api::run },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_order_is_setup_dependent_first() {
        // The API validation journey needs the snapshot the UI journeys
        // capture, so it must come last.
        let names: Vec<&str> = all().iter().map(|j| j.name).collect();
        assert_eq!(
            names,
            vec![
                "open-savings-account",
                "transfer-funds",
                "bill-pay",
                "navigation-menu",
                "validate-transactions",
            ]
        );
    }
}
