//! REST proxy checks against a live ParaBank deployment
//!
//! These talk to the real backend and need an account snapshot produced
//! by the journey suite (test-data/accountBalance.json). They are gated
//! behind PARABANK_E2E=1 like the journeys.

use chrono::{Duration, Utc};
use serde_json::json;

use parabank_e2e::api::BankApiClient;
use parabank_e2e::config::SuiteConfig;
use parabank_e2e::fixtures::{AccountSnapshot, FixtureStore};

/// Skip unless the live-suite gate is set and a snapshot exists.
macro_rules! require_live_backend {
    () => {
        if std::env::var("PARABANK_E2E").as_deref() != Ok("1") {
            eprintln!("PARABANK_E2E not set, skipping live API test");
            return;
        }
        if !FixtureStore::in_workdir().account_snapshot_path().exists() {
            eprintln!("no account snapshot, run the journey suite first");
            return;
        }
    };
}

fn live_fixture() -> (BankApiClient, AccountSnapshot) {
    let config = SuiteConfig::load().expect("config");
    let client = BankApiClient::new(&config).expect("api client");
    let snapshot = FixtureStore::in_workdir()
        .load_account_snapshot()
        .expect("account snapshot");
    (client, snapshot)
}

#[tokio::test]
async fn test_transfer_then_query_by_amount() {
    require_live_backend!();
    let (client, snapshot) = live_fixture();
    let account_id = snapshot.account_id(0).expect("account id");

    let amount = 50.0;
    client
        .transfer(account_id, account_id, amount)
        .await
        .expect("transfer");
    // The proxy records the transaction asynchronously.
    tokio::time::sleep(std::time::Duration::from_secs(2)).await;

    let transactions = client
        .transactions_by_amount(account_id, amount)
        .await
        .expect("query by amount");
    assert!(!transactions.is_empty(), "transfer of {amount} not found");

    let first = &transactions[0];
    assert_eq!(first.account_id, account_id);
    assert!((first.amount - amount).abs() < 0.01);
    assert!(!first.kind.is_empty());

    FixtureStore::in_workdir()
        .save_result("transaction-by-amount.json", &json!(transactions))
        .expect("save result");
}

#[test_case::test_case(25.0)]
#[test_case::test_case(50.0)]
#[test_case::test_case(100.0)]
#[tokio::test]
async fn test_query_by_amount_returns_only_that_amount(amount: f64) {
    require_live_backend!();
    let (client, snapshot) = live_fixture();
    let account_id = snapshot.account_id(0).expect("account id");

    let transactions = client
        .transactions_by_amount(account_id, amount)
        .await
        .expect("query by amount");
    for tx in &transactions {
        assert!(
            (tx.amount - amount).abs() < 0.01,
            "transaction {} has amount {}, queried {}",
            tx.id,
            tx.amount,
            amount
        );
        assert_eq!(tx.account_id, account_id);
    }
}

#[tokio::test]
async fn test_query_by_date_range_covers_recent_activity() {
    require_live_backend!();
    let (client, snapshot) = live_fixture();
    let account_id = snapshot.account_id(0).expect("account id");

    let today = Utc::now().date_naive();
    let transactions = client
        .transactions_by_date_range(account_id, today - Duration::days(30), today)
        .await
        .expect("query by date range");
    for tx in &transactions {
        assert_eq!(tx.account_id, account_id);
    }

    FixtureStore::in_workdir()
        .save_result("transactions.json", &json!(transactions))
        .expect("save result");
}

#[tokio::test]
async fn test_account_details_match_snapshot() {
    require_live_backend!();
    let (client, snapshot) = live_fixture();
    let account_id = snapshot.account_id(0).expect("account id");

    let account = client.account(account_id).await.expect("account details");
    assert_eq!(account.id, account_id);
    assert!(!account.kind.is_empty());
    assert!(account.customer_id > 0);
}
