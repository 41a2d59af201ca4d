//! HTTP client for the Home Assistant REST API.

use crate::config::Credentials;
use crate::state::HaState;
use anyhow::{bail, Context, Result};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use tracing::debug;

/// Client for fetching entity states from a Home Assistant server
pub struct HaClient {
    client: reqwest::Client,
    credentials: Credentials,
}

impl HaClient {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            credentials,
        }
    }

    /// Join the base url and the states endpoint with exactly one separator
    fn state_url(base: &str, entity: &str) -> String {
        let mut url = base.to_string();
        if !url.ends_with('/') {
            url.push('/');
        }
        url.push_str("api/states/");
        url.push_str(entity);
        url
    }

    /// Fetch the state record for a single entity.
    ///
    /// Transport failures and non-200 statuses are fatal; the body is parsed
    /// permissively (see [`HaState::from_body`]).
    pub async fn fetch_state(&self, entity: &str) -> Result<HaState> {
        let url = Self::state_url(&self.credentials.url, entity);
        debug!("requesting {}", url);

        let resp = self
            .client
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.credentials.token))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .with_context(|| format!("Failed to connect to {}", url))?;

        debug!("response status: {}", resp.status());
        for (name, value) in resp.headers() {
            debug!("  {}: {}", name, value.to_str().unwrap_or("<binary>"));
        }

        if resp.status() != StatusCode::OK {
            bail!("State not found: {}", resp.status());
        }

        let body = resp
            .text()
            .await
            .context("Failed to read response body")?;
        debug!("response: {}", body);

        Ok(HaState::from_body(&body))
    }
}
