//! HTTP client helpers (REST).

use admin_api_models::IssueCardRequest;
use gloo_net::http::Request;

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// One-shot gateway liveness probe.
    ///
    /// Non-success statuses are promoted to errors so the caller can collapse
    /// every failure into a single unreachable state.
    pub(crate) async fn fetch_health(&self) -> anyhow::Result<String> {
        let resp = Request::get(&format!("{}/api/health", self.base_url))
            .send()
            .await?;
        if !resp.ok() {
            anyhow::bail!("health endpoint returned {}", resp.status());
        }
        Ok(resp.text().await?)
    }

    /// Submit a card issuance request and capture the raw response body.
    ///
    /// The status code is deliberately ignored: error payloads from the
    /// gateway are surfaced verbatim, exactly like successes.
    pub(crate) async fn issue_card(&self, request: &IssueCardRequest) -> anyhow::Result<String> {
        let resp = Request::post(&format!("{}/api/v1/cards", self.base_url))
            .json(request)?
            .send()
            .await?;
        Ok(resp.text().await?)
    }
}
