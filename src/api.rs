//! Direct client for the bank's REST surface
//!
//! Used by the API-only specs and the transaction-validation journey.
//! The routes and field expectations documented here are the contract the
//! suite asserts against, not something this crate owns.

use chrono::NaiveDate;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::config::SuiteConfig;
use crate::error::{HarnessError, HarnessResult};
use crate::fixtures::AccountRecord;

/// A transaction as the backend reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: i64,
    pub account_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
}

pub struct BankApiClient {
    http: Client,
    api_base_url: String,
}

impl BankApiClient {
    pub fn new(config: &SuiteConfig) -> HarnessResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { http, api_base_url: config.api_base_url.clone() })
    }

    /// `GET /bank/accounts/{id}`
    pub async fn account(&self, account_id: i64) -> HarnessResult<AccountRecord> {
        let url = format!("{}/bank/accounts/{}", self.api_base_url, account_id);
        self.get_json(&url).await
    }

    /// `GET /bank/accounts/{id}/transactions/amount/{amount}`
    pub async fn transactions_by_amount(
        &self,
        account_id: i64,
        amount: f64,
    ) -> HarnessResult<Vec<TransactionRecord>> {
        let url = format!(
            "{}/bank/accounts/{}/transactions/amount/{}",
            self.api_base_url,
            account_id,
            format_amount(amount)
        );
        self.get_json(&url).await
    }

    /// `GET /bank/accounts/{id}/transactions/fromDate/{d1}/toDate/{d2}`,
    /// dates in the backend's MM-DD-YYYY shape.
    pub async fn transactions_by_date_range(
        &self,
        account_id: i64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> HarnessResult<Vec<TransactionRecord>> {
        let url = format!(
            "{}/bank/accounts/{}/transactions/fromDate/{}/toDate/{}",
            self.api_base_url,
            account_id,
            format_api_date(from),
            format_api_date(to)
        );
        self.get_json(&url).await
    }

    /// `POST /bank/transfer` (form-encoded), used by API specs to seed a
    /// transaction with a known amount.
    pub async fn transfer(&self, from: i64, to: i64, amount: f64) -> HarnessResult<()> {
        let url = format!("{}/bank/transfer", self.api_base_url);
        debug!("POST {}", url);
        let response = self
            .http
            .post(&url)
            .form(&transfer_form(from, to, amount))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(HarnessError::Api { status: status.as_u16(), url });
        }
        Ok(())
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> HarnessResult<T> {
        debug!("GET {}", url);
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(HarnessError::Api { status: status.as_u16(), url: url.to_string() });
        }
        Ok(response.json().await?)
    }
}

/// Form fields for `POST /bank/transfer`. Amounts take the same shape in
/// form fields as in URLs.
fn transfer_form(from: i64, to: i64, amount: f64) -> [(&'static str, String); 3] {
    [
        ("fromAccountId", from.to_string()),
        ("toAccountId", to.to_string()),
        ("amount", format_amount(amount)),
    ]
}

/// MM-DD-YYYY, the only date shape the transaction routes accept.
pub fn format_api_date(date: NaiveDate) -> String {
    date.format("%m-%d-%Y").to_string()
}

/// Whole amounts appear without a decimal point in URLs and form fields.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        format!("{}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_api_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(format_api_date(date), "03-07-2026");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(100.0), "100");
        assert_eq!(format_amount(50.0), "50");
        assert_eq!(format_amount(50.25), "50.25");
    }

    #[test]
    fn test_transfer_form_uses_shared_amount_shape() {
        let form = transfer_form(13344, 13455, 50.0);
        assert_eq!(form[0], ("fromAccountId", "13344".to_string()));
        assert_eq!(form[1], ("toAccountId", "13455".to_string()));
        // Whole amounts go out without a decimal point, same as in URLs.
        assert_eq!(form[2].1, "50");
        assert_eq!(transfer_form(1, 2, 50.25)[2].1, "50.25");
    }

    #[test]
    fn test_transaction_record_parses_backend_shape() {
        let body = r#"{
            "id": 14476,
            "accountId": 13344,
            "type": "Credit",
            "amount": 100.0,
            "description": "Funds Transfer Received",
            "date": 1767139200000
        }"#;
        let tx: TransactionRecord = serde_json::from_str(body).unwrap();
        assert_eq!(tx.account_id, 13344);
        assert_eq!(tx.kind, "Credit");
        assert_eq!(tx.description.as_deref(), Some("Funds Transfer Received"));
    }

    #[test]
    fn test_transaction_description_is_optional() {
        let tx: TransactionRecord = serde_json::from_str(
            r#"{"id": 1, "accountId": 2, "type": "Debit", "amount": 25.0}"#,
        )
        .unwrap();
        assert!(tx.description.is_none());
    }
}
