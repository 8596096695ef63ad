use std::net::SocketAddr;
use std::time::Duration;

use eyre::WrapErr;

use simillimum_gemini::client::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiConfig};

const DEFAULT_BIND: &str = "127.0.0.1:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Plain,
    Json,
}

/// Process configuration, read from the environment at startup.
///
/// The API key is only ever taken from the environment so it stays on the
/// server; it is never rendered into a page.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind: SocketAddr,
    pub gemini: GeminiConfig,
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup. `from_env` passes `std::env::var`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("GEMINI_API_KEY")
            .or_else(|| get("API_KEY"))
            .ok_or_else(|| eyre::eyre!("GEMINI_API_KEY (or API_KEY) must be set"))?;

        let timeout_secs = match get("SIMILLIMUM_ANALYSIS_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .wrap_err_with(|| format!("invalid SIMILLIMUM_ANALYSIS_TIMEOUT_SECS: {raw}"))?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(eyre::eyre!("SIMILLIMUM_ANALYSIS_TIMEOUT_SECS must be greater than 0"));
        }

        let bind_raw = get("SIMILLIMUM_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .wrap_err_with(|| format!("invalid SIMILLIMUM_BIND: {bind_raw}"))?;

        let log_format = match get("SIMILLIMUM_LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("plain") | Some("text") => LogFormat::Plain,
            Some("json") => LogFormat::Json,
            Some(other) => return Err(eyre::eyre!("invalid SIMILLIMUM_LOG_FORMAT: {other}")),
        };

        Ok(Self {
            bind,
            gemini: GeminiConfig {
                api_key: api_key.trim().to_string(),
                model_id: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                base_url: get("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                timeout: Duration::from_secs(timeout_secs),
            },
            log_format,
        })
    }
}
