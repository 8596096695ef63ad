use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("cannot build a prompt from an empty case totality")]
    EmptyCase,

    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("model invocation timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("provider returned {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("model returned no content: {0}")]
    EmptyResponse(String),

    #[error("response did not conform to expected schema: {0}")]
    SchemaViolation(String),

    #[error("client config error: {0}")]
    Config(String),
}

impl GeminiError {
    /// Short machine-friendly label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            GeminiError::EmptyCase => "empty_case",
            GeminiError::Invocation(_) => "transport",
            GeminiError::Timeout { .. } => "timeout",
            GeminiError::Provider { .. } => "provider",
            GeminiError::ResponseParse(_) => "response_parse",
            GeminiError::EmptyResponse(_) => "empty_response",
            GeminiError::SchemaViolation(_) => "schema_violation",
            GeminiError::Config(_) => "config",
        }
    }
}
