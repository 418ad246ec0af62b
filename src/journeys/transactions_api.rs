//! Validates the transfer recorded by earlier journeys through the REST
//! proxy instead of the UI.

use futures::FutureExt;
use serde_json::json;
use tracing::info;

use crate::api::{BankApiClient, TransactionRecord};
use crate::error::HarnessError;
use crate::runner::{JourneyEnv, JourneyFuture};

const EXPECTED_AMOUNT: f64 = 100.0;

/// The incoming side of the UI transfer. Earlier journeys put other
/// same-amount entries on this account (the bill-pay debit for one), so
/// the list must be searched rather than trusting backend ordering.
fn received_transfer(
    transactions: &[TransactionRecord],
    account_id: i64,
    amount: f64,
) -> Option<&TransactionRecord> {
    transactions.iter().find(|tx| {
        tx.account_id == account_id && (tx.amount - amount).abs() < 0.01 && tx.kind == "Credit"
    })
}

pub fn run(env: &mut JourneyEnv) -> JourneyFuture<'_> {
    async move {
        let account_id = match env.ctx.primary_account_id() {
            Ok(id) => id,
            // Running standalone: fall back to the snapshot saved by a
            // previous run.
            Err(_) => env.store.load_account_snapshot()?.account_id(0)?,
        };

        let client = BankApiClient::new(&env.config)?;
        let transactions = client
            .transactions_by_amount(account_id, EXPECTED_AMOUNT)
            .await?;
        info!(account_id, count = transactions.len(), "transactions fetched");

        let credit = received_transfer(&transactions, account_id, EXPECTED_AMOUNT).ok_or_else(
            || {
                HarnessError::AssertionFailed(format!(
                    "no Credit of amount {EXPECTED_AMOUNT} on account {account_id} among {} transaction(s)",
                    transactions.len()
                ))
            },
        )?;

        if credit.description.as_deref() != Some("Funds Transfer Received") {
            return Err(HarnessError::AssertionFailed(format!(
                "transaction description {:?}, expected Funds Transfer Received",
                credit.description
            )));
        }

        env.store
            .save_result("transactions-response.json", &json!(transactions))?;
        Ok(())
    }
    .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(id: i64, kind: &str, amount: f64, description: &str) -> TransactionRecord {
        TransactionRecord {
            id,
            account_id: 13344,
            kind: kind.to_string(),
            amount,
            description: Some(description.to_string()),
        }
    }

    #[test]
    fn test_received_transfer_skips_same_amount_debit() {
        // A bill payment of the same amount lands on the same account
        // before the validation runs; newest-first ordering would put it
        // first.
        let transactions = vec![
            tx(2, "Debit", 100.0, "Bill Payment to Rosa Novak"),
            tx(1, "Credit", 100.0, "Funds Transfer Received"),
        ];
        let found = received_transfer(&transactions, 13344, 100.0).unwrap();
        assert_eq!(found.id, 1);
        assert_eq!(found.kind, "Credit");
    }

    #[test]
    fn test_received_transfer_requires_matching_account_and_amount() {
        let transactions = vec![
            tx(1, "Credit", 50.0, "Funds Transfer Received"),
            TransactionRecord {
                id: 2,
                account_id: 99999,
                kind: "Credit".to_string(),
                amount: 100.0,
                description: None,
            },
        ];
        assert!(received_transfer(&transactions, 13344, 100.0).is_none());
    }
}
