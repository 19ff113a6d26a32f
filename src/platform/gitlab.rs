//! GitLab review API client

use crate::error::{Error, Result};
use crate::platform::ReviewApi;
use crate::types::{ApprovalStatus, MergeRequest};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use std::time::Instant;
use tracing::{debug, trace};

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// GitLab API client using reqwest.
///
/// Scoped to one project; every request carries a bearer token installed as a
/// sensitive default header so it never appears in logs or error output.
pub struct GitLabClient {
    client: Client,
    base_url: String,
    project_id: i64,
}

impl GitLabClient {
    /// Create a new client for one project.
    ///
    /// `base_url` is the API root without a trailing slash, e.g.
    /// `https://gitlab.com/api/v4`.
    pub fn new(base_url: &str, project_id: i64, api_token: &str) -> Result<Self> {
        let mut auth_value = HeaderValue::try_from(format!("Bearer {api_token}"))
            .map_err(|_| Error::Config("api_token contains characters not valid in a header".to_string()))?;
        auth_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth_value);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            project_id,
        })
    }

    /// GET `path` (relative to the API root) and decode the JSON body.
    ///
    /// Non-2xx responses become [`Error::Http`]; the body is read as text and
    /// decoded separately so malformed payloads surface as [`Error::Decode`].
    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        debug!(%path, "GET");
        let started = Instant::now();

        let url = format!("{}{path}", self.base_url);
        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        trace!(%path, body = %body, "API response");
        debug!(
            %path,
            bytes = body.len(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "GET complete"
        );

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ReviewApi for GitLabClient {
    async fn list_open_merge_requests(&self, target_branch: &str) -> Result<Vec<MergeRequest>> {
        let path = format!("/projects/{}/merge_requests", self.project_id);
        let query = [
            ("state", "opened"),
            ("scope", "all"),
            ("target_branch", target_branch),
        ];

        let mrs: Vec<MergeRequest> = self.get_json(&path, &query).await?;
        debug!(count = mrs.len(), "listed open merge requests");
        Ok(mrs)
    }

    async fn approval_status(&self, iid: i64) -> Result<ApprovalStatus> {
        let path = format!("/projects/{}/merge_requests/{iid}/approvals", self.project_id);

        let status: ApprovalStatus = self.get_json(&path, &[]).await?;
        debug!(
            mr_iid = iid,
            approvals_left = status.approvals_left,
            "fetched approval status"
        );
        Ok(status)
    }
}
