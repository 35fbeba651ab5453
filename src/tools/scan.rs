use crate::core::config::SnykConfig;
use crate::core::error::ScanError;
use crate::core::types::TestRequest;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, warn};

/// Remote URL handed to the test endpoint.
///
/// The branch is appended verbatim; neither segment is escaped or re-validated.
pub fn remote_url(url: &str, branch: Option<&str>) -> String {
    match branch.filter(|b| !b.is_empty()) {
        Some(branch) => format!("{}/tree/{}", url, branch),
        None => url.to_string(),
    }
}

/// Thin client for the two Snyk v1 endpoints the tools relay to.
#[derive(Clone, Debug)]
pub struct SnykClient {
    http: reqwest::Client,
    config: SnykConfig,
}

impl SnykClient {
    pub fn new(http: reqwest::Client, config: SnykConfig) -> Self {
        Self { http, config }
    }

    /// `POST /test` for a remote repository. Starts a new scan on every call.
    pub async fn test_repository(&self, remote_url: &str) -> Result<Value, ScanError> {
        let endpoint = format!("{}/test", self.config.api_base_url());
        debug!("snyk: POST {} remoteUrl={}", endpoint, remote_url);

        let request = self
            .request(Method::POST, &endpoint)
            .json(&TestRequest::remote(remote_url));
        self.send(request).await
    }

    /// `GET /project/<id>/issues`. The id is interpolated as given.
    pub async fn project_issues(&self, project_id: &str) -> Result<Value, ScanError> {
        let endpoint = format!(
            "{}/project/{}/issues",
            self.config.api_base_url(),
            project_id
        );
        debug!("snyk: GET {}", endpoint);

        self.send(self.request(Method::GET, &endpoint)).await
    }

    // Headers go on before any body so `.json()` keeps our Content-Type.
    fn request(&self, method: Method, endpoint: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, endpoint)
            .header(AUTHORIZATION, format!("token {}", self.config.api_key()))
            .header(CONTENT_TYPE, "application/json")
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Value, ScanError> {
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("snyk: upstream returned {}", status);
            return Err(ScanError::upstream(status));
        }

        Ok(response.json::<Value>().await?)
    }
}
