use std::fmt;
use std::time::Duration;

use crate::error::GeminiError;

pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Connection settings for the Gemini REST API.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model_id: String,
    pub base_url: String,
    /// Upper bound on one `generateContent` call, connect through body.
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model_id: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

// Never print the key itself.
impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &redact_api_key(&self.api_key))
            .field("model_id", &self.model_id)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// A configured HTTP client bound to one model.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn model_id(&self) -> &str {
        &self.config.model_id
    }

    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.config.api_key
    }

    /// `{base}/models/{model}:generateContent`
    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model_id
        )
    }
}

/// Build a client from config. The timeout is applied to every request.
pub fn build_client(config: GeminiConfig) -> Result<GeminiClient, GeminiError> {
    if config.api_key.trim().is_empty() {
        return Err(GeminiError::Config("API key is empty".to_string()));
    }
    if config.model_id.trim().is_empty() {
        return Err(GeminiError::Config("model id is empty".to_string()));
    }
    if config.timeout.is_zero() {
        return Err(GeminiError::Config("timeout must be non-zero".to_string()));
    }

    let http = reqwest::Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(|e| GeminiError::Config(e.to_string()))?;

    Ok(GeminiClient { http, config })
}

/// Keep the first and last four characters of a key for log output.
pub fn redact_api_key(key: &str) -> String {
    if key.len() <= 8 || !key.is_ascii() {
        return "****".to_string();
    }
    let prefix = &key[..4];
    let suffix = &key[key.len() - 4..];
    format!("{prefix}...{suffix}")
}
