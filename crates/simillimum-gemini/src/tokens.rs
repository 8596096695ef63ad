use simillimum_core::models::token_count::{TokenCount, TokenUsage};

use crate::wire::UsageMetadata;

/// Extract token counts from a `generateContent` response.
pub fn extract_token_usage(usage: &UsageMetadata) -> TokenCount {
    TokenCount {
        input: usage.prompt_token_count,
        output: usage.candidates_token_count,
    }
}

pub fn usage_or_zero(usage: Option<&UsageMetadata>) -> TokenUsage {
    TokenUsage {
        tokens: usage.map(extract_token_usage).unwrap_or_default(),
    }
}
