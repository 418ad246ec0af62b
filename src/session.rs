//! Browser session snapshots
//!
//! A snapshot is the cookies plus per-origin localStorage of an
//! authenticated page, persisted as `auth.json` and replayed into fresh
//! pages so journeys skip interactive login. The remote application's own
//! session expiry invalidates a snapshot; the suite does not detect that.

use chromiumoxide::cdp::browser_protocol::network::CookieParam;
use chromiumoxide::Page;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::browser::js_string;
use crate::error::HarnessResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// Verbatim CDP cookie array, replayed as cookie params on restore.
    pub cookies: serde_json::Value,
    pub origins: Vec<OriginState>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginState {
    pub origin: String,
    pub local_storage: Vec<StorageEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageEntry {
    pub name: String,
    pub value: String,
}

impl SessionSnapshot {
    /// Capture cookies and localStorage from a logged-in page.
    pub async fn capture(page: &Page, origin: &str) -> HarnessResult<Self> {
        let cookies = page.get_cookies().await?;
        let cookies = serde_json::to_value(&cookies)?;

        let raw: String = page
            .evaluate(
                r#"(function() {
                    const out = [];
                    for (let i = 0; i < localStorage.length; i++) {
                        const name = localStorage.key(i);
                        out.push({ name, value: localStorage.getItem(name) });
                    }
                    return JSON.stringify(out);
                })()"#,
            )
            .await?
            .into_value()?;
        let local_storage: Vec<StorageEntry> = serde_json::from_str(&raw)?;

        debug!("captured session snapshot for {}", origin);
        Ok(Self {
            cookies,
            origins: vec![OriginState { origin: origin.to_string(), local_storage }],
        })
    }

    /// Replay the snapshot into a fresh page. Cookies carry their domain so
    /// they are set before navigation; localStorage needs the origin loaded
    /// first.
    pub async fn restore(&self, page: &Page) -> HarnessResult<()> {
        let params: Vec<CookieParam> = serde_json::from_value(self.cookies.clone())?;
        if !params.is_empty() {
            page.set_cookies(params).await?;
        }

        for origin in &self.origins {
            if origin.local_storage.is_empty() {
                continue;
            }
            page.goto(origin.origin.as_str()).await?;
            for entry in &origin.local_storage {
                let script = format!(
                    "localStorage.setItem({}, {})",
                    js_string(&entry.name),
                    js_string(&entry.value)
                );
                page.evaluate(script).await?;
            }
        }

        debug!("restored session snapshot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_serde_shape() {
        let snapshot = SessionSnapshot {
            cookies: serde_json::json!([
                {"name": "JSESSIONID", "value": "abc123", "domain": "parabank.parasoft.com", "path": "/parabank"}
            ]),
            origins: vec![OriginState {
                origin: "https://parabank.parasoft.com".to_string(),
                local_storage: vec![StorageEntry {
                    name: "theme".to_string(),
                    value: "default".to_string(),
                }],
            }],
        };

        let json = serde_json::to_value(&snapshot).unwrap();
        // Same key shape as a storage-state file.
        assert!(json["cookies"].is_array());
        assert!(json["origins"][0].get("localStorage").is_some());

        let parsed: SessionSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.origins[0].local_storage[0].name, "theme");
    }

    #[test]
    fn test_cookie_array_deserializes_as_params() {
        let snapshot = SessionSnapshot {
            cookies: serde_json::json!([
                {"name": "JSESSIONID", "value": "abc123", "domain": "parabank.parasoft.com",
                 "path": "/parabank", "secure": true, "httpOnly": true}
            ]),
            origins: vec![],
        };
        let params: Vec<CookieParam> = serde_json::from_value(snapshot.cookies).unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].name, "JSESSIONID");
    }
}
