use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct ScanRepositoryArgs {
    pub url: String,
    #[serde(default)]
    pub branch: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanProjectArgs {
    pub project_id: String,
}

/// Body of `POST /test`.
#[derive(Debug, Serialize)]
pub struct TestRequest<'a> {
    pub target: TestTarget<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestTarget<'a> {
    pub remote_url: &'a str,
}

impl<'a> TestRequest<'a> {
    pub fn remote(remote_url: &'a str) -> Self {
        Self {
            target: TestTarget { remote_url },
        }
    }
}
