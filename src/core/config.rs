use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub const ENV_API_KEY: &str = "SNYK_API_KEY";
pub const ENV_API_BASE_URL: &str = "SNYK_API_BASE_URL";
pub const ENV_CONFIG_PATH: &str = "SNYK_MCP_CONFIG";
pub const DEFAULT_API_BASE_URL: &str = "https://snyk.io/api/v1";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SNYK_API_KEY environment variable is not set")]
    MissingApiKey,
}

// ---------------------------------------------------------------------------
// FileConfig: optional snyk-mcp.json with env-var fallback
// ---------------------------------------------------------------------------

/// Optional settings read from `snyk-mcp.json`. The credential is never read from disk.
#[derive(serde::Deserialize, Default, Clone, Debug)]
pub struct FileConfig {
    /// Upstream API root, e.g. `https://snyk.io/api/v1`.
    pub api_base_url: Option<String>,
}

impl FileConfig {
    /// Base URL: JSON field → `SNYK_API_BASE_URL` env var → `https://snyk.io/api/v1`.
    pub fn resolve_base_url(&self) -> String {
        let env = std::env::var(ENV_API_BASE_URL).ok();
        pick_base_url(self.api_base_url.as_deref(), env.as_deref())
    }
}

fn pick_base_url(file: Option<&str>, env: Option<&str>) -> String {
    [file, env]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|v| !v.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_string()
}

/// Load `snyk-mcp.json` from standard locations.
///
/// Search order (first found wins): `$SNYK_MCP_CONFIG`, `./snyk-mcp.json`,
/// `../snyk-mcp.json`. A missing file yields defaults; a parse error logs a
/// warning and yields defaults.
pub fn load_file_config() -> FileConfig {
    let mut candidates = vec![
        PathBuf::from("snyk-mcp.json"),
        PathBuf::from("../snyk-mcp.json"),
    ];
    if let Ok(env_path) = std::env::var(ENV_CONFIG_PATH) {
        candidates.insert(0, PathBuf::from(env_path));
    }

    for path in &candidates {
        let Ok(contents) = std::fs::read_to_string(path) else {
            continue;
        };
        return match serde_json::from_str::<FileConfig>(&contents) {
            Ok(cfg) => {
                tracing::info!("snyk-mcp.json loaded from {}", path.display());
                cfg
            }
            Err(e) => {
                tracing::warn!(
                    "snyk-mcp.json parse error at {}: {} (using defaults)",
                    path.display(),
                    e
                );
                FileConfig::default()
            }
        };
    }

    FileConfig::default()
}

// ---------------------------------------------------------------------------

/// Process-wide, read-only settings shared by every tool call.
#[derive(Clone)]
pub struct SnykConfig {
    api_key: String,
    api_base_url: String,
}

impl fmt::Debug for SnykConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnykConfig")
            .field("api_key", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

impl SnykConfig {
    pub fn new(api_key: impl Into<String>, api_base_url: impl AsRef<str>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base_url: pick_base_url(Some(api_base_url.as_ref()), None),
        }
    }

    /// Reads the credential from `SNYK_API_KEY` and the base URL from file/env.
    pub fn load() -> Result<Self, ConfigError> {
        let api_key = parse_api_key(std::env::var(ENV_API_KEY).ok())?;
        let api_base_url = load_file_config().resolve_base_url();
        Ok(Self {
            api_key,
            api_base_url,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

fn parse_api_key(raw: Option<String>) -> Result<String, ConfigError> {
    raw.map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingApiKey)
}
