//! CLI Commands

pub mod config;
pub mod report;

use reqwest::header;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};
use crate::models::{LicenseUsage, Organization};

/// Dashboard API client. One request per call: no retry, no timeout, no pagination.
pub struct ApiClient {
    pub base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        let mut auth = header::HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|e| Error::Config(format!("invalid API key: {}", e)))?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(concat!("nac-usage/", env!("CARGO_PKG_VERSION"))),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// `GET /organizations`
    pub async fn list_organizations(&self) -> Result<Vec<Organization>> {
        self.get("/organizations", &[]).await
    }

    /// `GET /organizations/{org_id}/nac/license/usage`. Dates are passed through untouched.
    pub async fn get_license_usage(
        &self,
        org_id: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<LicenseUsage> {
        let raw: serde_json::Value = self
            .get(
                &format!("/organizations/{}/nac/license/usage", org_id),
                &[("startDate", start_date), ("endDate", end_date)],
            )
            .await?;
        Ok(LicenseUsage::from(raw))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, params: &[(&str, &str)]) -> Result<T> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))?;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        debug!(url = %url.as_str(), "GET");
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        let body = resp.bytes().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "response");

        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                message: error_message(status, &body),
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

/// The API reports failures as `{"errors": ["..."]}`; fall back to the raw body.
fn error_message(status: reqwest::StatusCode, body: &[u8]) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorResponse {
        errors: Vec<String>,
    }

    if let Ok(resp) = serde_json::from_slice::<ErrorResponse>(body) {
        if !resp.errors.is_empty() {
            return resp.errors.join("; ");
        }
    }
    let text = String::from_utf8_lossy(body).trim().to_string();
    if text.is_empty() {
        status.canonical_reason().unwrap_or("request failed").to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_error_message_from_errors_array() {
        let body = br#"{"errors":["Invalid API key"]}"#;
        assert_eq!(error_message(StatusCode::UNAUTHORIZED, body), "Invalid API key");
    }

    #[test]
    fn test_error_message_fallbacks() {
        assert_eq!(error_message(StatusCode::BAD_GATEWAY, b"upstream down\n"), "upstream down");
        assert_eq!(error_message(StatusCode::NOT_FOUND, b""), "Not Found");
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = ApiClient::new("https://api.meraki.com/api/v1/", "key").unwrap();
        assert_eq!(client.base_url, "https://api.meraki.com/api/v1");
    }

    #[test]
    fn test_rejects_unprintable_key() {
        assert!(matches!(ApiClient::new("http://localhost", "bad\nkey"), Err(Error::Config(_))));
    }
}
