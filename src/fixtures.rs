//! Fixture store: JSON artifacts shared between setup, UI journeys, and
//! the API-only specs
//!
//! Layout under the fixture root:
//! - `test-data/auth.json`: session snapshot
//! - `test-data/user-credentials.json`: generated registration identity
//! - `test-data/accountBalance.json`: captured account-listing response
//! - `test-data/navigation-menu.json`: static menu expectations
//! - `results/`: captured transaction/account dumps and suite results

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{HarnessError, HarnessResult};
use crate::pages::navigation::MenuItem;
use crate::session::SessionSnapshot;
use crate::testdata;

/// Identity created once per run by global setup, immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCredentials {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone: String,
    pub ssn: String,
}

impl UserCredentials {
    /// Generate a fresh random identity for registration.
    pub fn generate() -> Self {
        Self {
            username: testdata::username(),
            password: testdata::password(),
            first_name: testdata::first_name(),
            last_name: testdata::last_name(),
            address: testdata::street_address(),
            city: testdata::city(),
            state: testdata::state(),
            zip_code: testdata::zip_code(),
            phone: testdata::phone_number(),
            ssn: testdata::numeric_string(9),
        }
    }

    /// The "Welcome First Last" greeting the left panel shows after login.
    pub fn greeting(&self) -> String {
        format!("Welcome {} {}", self.first_name, self.last_name)
    }
}

/// One row of the captured account-listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    pub id: i64,
    pub customer_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub balance: f64,
}

/// Account-listing response body captured verbatim from the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountSnapshot(pub Vec<AccountRecord>);

impl AccountSnapshot {
    /// Account id at `index`, usually 0 for the primary account.
    pub fn account_id(&self, index: usize) -> HarnessResult<i64> {
        self.0
            .get(index)
            .map(|a| a.id)
            .ok_or_else(|| HarnessError::AssertionFailed(format!("no account at index {}", index)))
    }

    pub fn balance(&self, index: usize) -> HarnessResult<f64> {
        self.0
            .get(index)
            .map(|a| a.balance)
            .ok_or_else(|| HarnessError::AssertionFailed(format!("no account at index {}", index)))
    }
}

/// Static navigation-menu expectations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuFixture {
    #[serde(rename = "menuTests")]
    pub menu_tests: Vec<MenuTestCase>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuTestCase {
    pub name: MenuItem,
    pub url_path: String,
}

/// Directory-backed store for all cross-test JSON artifacts.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    root: PathBuf,
}

impl FixtureStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at the crate checkout, the default for the runner.
    pub fn in_workdir() -> Self {
        Self::new(".")
    }

    pub fn test_data_dir(&self) -> PathBuf {
        self.root.join("test-data")
    }

    pub fn results_dir(&self) -> PathBuf {
        self.root.join("results")
    }

    pub fn auth_path(&self) -> PathBuf {
        self.test_data_dir().join("auth.json")
    }

    pub fn credentials_path(&self) -> PathBuf {
        self.test_data_dir().join("user-credentials.json")
    }

    pub fn account_snapshot_path(&self) -> PathBuf {
        self.test_data_dir().join("accountBalance.json")
    }

    pub fn menu_path(&self) -> PathBuf {
        self.test_data_dir().join("navigation-menu.json")
    }

    pub fn save_credentials(&self, credentials: &UserCredentials) -> HarnessResult<()> {
        self.write_json(&self.credentials_path(), credentials)
    }

    /// Load previously generated credentials; a missing or unreadable file
    /// falls back to the deployment's stock demo login. This is the only
    /// fixture read with a fallback.
    pub fn load_credentials_or(&self, fallback: &crate::config::DefaultCredentials) -> UserCredentials {
        match self.read_json::<UserCredentials>(&self.credentials_path()) {
            Ok(credentials) => credentials,
            Err(e) => {
                warn!("no stored credentials ({}), using default login", e);
                UserCredentials {
                    username: fallback.username.clone(),
                    password: fallback.password.clone(),
                    first_name: "John".to_string(),
                    last_name: "Smith".to_string(),
                    address: String::new(),
                    city: String::new(),
                    state: String::new(),
                    zip_code: String::new(),
                    phone: String::new(),
                    ssn: String::new(),
                }
            }
        }
    }

    pub fn save_account_snapshot(&self, snapshot: &AccountSnapshot) -> HarnessResult<()> {
        self.write_json(&self.account_snapshot_path(), snapshot)
    }

    pub fn load_account_snapshot(&self) -> HarnessResult<AccountSnapshot> {
        self.read_json(&self.account_snapshot_path())
    }

    pub fn save_session(&self, session: &SessionSnapshot) -> HarnessResult<()> {
        self.write_json(&self.auth_path(), session)
    }

    pub fn load_session(&self) -> HarnessResult<SessionSnapshot> {
        self.read_json(&self.auth_path())
    }

    pub fn load_menu_cases(&self) -> HarnessResult<Vec<MenuTestCase>> {
        let fixture: MenuFixture = self.read_json(&self.menu_path())?;
        Ok(fixture.menu_tests)
    }

    /// Dump an arbitrary capture into `results/<name>`.
    pub fn save_result(&self, name: &str, data: &serde_json::Value) -> HarnessResult<PathBuf> {
        let path = self.results_dir().join(name);
        self.write_json(&path, data)?;
        Ok(path)
    }

    fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> HarnessResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(value)?;
        std::fs::write(path, json)?;
        debug!("wrote fixture {}", path.display());
        Ok(())
    }

    fn read_json<T: for<'de> Deserialize<'de>>(&self, path: &Path) -> HarnessResult<T> {
        if !path.exists() {
            return Err(HarnessError::MissingFixture(path.to_path_buf()));
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Per-run state passed to every journey.
///
/// Journeys share credentials, the live session, and the last captured
/// account snapshot through this struct instead of re-reading fixture
/// files; the store mirror exists only for API-only specs running in a
/// separate process.
#[derive(Debug)]
pub struct RunContext {
    pub credentials: UserCredentials,
    pub session: Option<SessionSnapshot>,
    pub accounts: Option<AccountSnapshot>,
}

impl RunContext {
    pub fn new(credentials: UserCredentials) -> Self {
        Self { credentials, session: None, accounts: None }
    }

    /// Account id to use for API lookups, from the last captured snapshot.
    pub fn primary_account_id(&self) -> HarnessResult<i64> {
        self.accounts
            .as_ref()
            .ok_or_else(|| {
                HarnessError::AssertionFailed("no account snapshot captured yet".to_string())
            })?
            .account_id(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, FixtureStore) {
        let dir = TempDir::new().unwrap();
        let store = FixtureStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_credentials_round_trip() {
        let (_dir, store) = store();
        let credentials = UserCredentials::generate();
        store.save_credentials(&credentials).unwrap();

        let loaded = store.load_credentials_or(&crate::config::DefaultCredentials {
            username: "john".to_string(),
            password: "demo".to_string(),
        });
        assert_eq!(loaded.username, credentials.username);
        assert_eq!(loaded.zip_code, credentials.zip_code);
    }

    #[test]
    fn test_missing_credentials_fall_back_to_default_login() {
        let (_dir, store) = store();
        let loaded = store.load_credentials_or(&crate::config::DefaultCredentials {
            username: "john".to_string(),
            password: "demo".to_string(),
        });
        assert_eq!(loaded.username, "john");
        assert_eq!(loaded.password, "demo");
    }

    #[test]
    fn test_credentials_serialize_camel_case() {
        let credentials = UserCredentials::generate();
        let json = serde_json::to_value(&credentials).unwrap();
        assert!(json.get("firstName").is_some());
        assert!(json.get("zipCode").is_some());
        assert!(json.get("first_name").is_none());
    }

    #[test]
    fn test_account_snapshot_parses_listing_body() {
        let body = r#"[
            {"id": 13344, "customerId": 12212, "type": "CHECKING", "balance": 515.5},
            {"id": 13455, "customerId": 12212, "type": "SAVINGS", "balance": 100.0}
        ]"#;
        let snapshot: AccountSnapshot = serde_json::from_str(body).unwrap();
        assert_eq!(snapshot.account_id(0).unwrap(), 13344);
        assert_eq!(snapshot.account_id(1).unwrap(), 13455);
        assert!((snapshot.balance(0).unwrap() - 515.5).abs() < f64::EPSILON);
        assert!(snapshot.account_id(2).is_err());
    }

    #[test]
    fn test_account_snapshot_round_trip_is_verbatim() {
        let (_dir, store) = store();
        let snapshot: AccountSnapshot = serde_json::from_str(
            r#"[{"id": 1, "customerId": 2, "type": "CHECKING", "balance": 0.0}]"#,
        )
        .unwrap();
        store.save_account_snapshot(&snapshot).unwrap();
        let loaded = store.load_account_snapshot().unwrap();
        assert_eq!(loaded.0.len(), 1);
        assert_eq!(loaded.0[0].kind, "CHECKING");
    }

    #[test]
    fn test_missing_snapshot_is_explicit() {
        let (_dir, store) = store();
        let err = store.load_account_snapshot().unwrap_err();
        assert!(matches!(err, HarnessError::MissingFixture(_)));
    }

    #[test]
    fn test_menu_fixture_parses() {
        let (_dir, store) = store();
        std::fs::create_dir_all(store.test_data_dir()).unwrap();
        std::fs::write(
            store.menu_path(),
            r#"{"menuTests": [
                {"name": "aboutUs", "urlPath": "about.htm"},
                {"name": "products", "urlPath": "parasoft.com/products"}
            ]}"#,
        )
        .unwrap();

        let cases = store.load_menu_cases().unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].name, MenuItem::AboutUs);
        assert_eq!(cases[1].name, MenuItem::Products);
    }

    #[test]
    fn test_greeting() {
        let mut credentials = UserCredentials::generate();
        credentials.first_name = "Ava".to_string();
        credentials.last_name = "Keller".to_string();
        assert_eq!(credentials.greeting(), "Welcome Ava Keller");
    }
}
