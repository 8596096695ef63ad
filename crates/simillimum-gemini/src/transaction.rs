use tracing::{info, warn};
use uuid::Uuid;

use simillimum_core::models::analysis::AnalysisResult;
use simillimum_core::models::symptom::Symptom;
use simillimum_core::models::token_count::TokenUsage;
use simillimum_core::models::transaction::{RepertorizationTransaction, TransactionStatus};

use crate::client::GeminiClient;
use crate::error::GeminiError;
use crate::prompt;
use crate::tokens;
use crate::wire::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};

/// The result of one model call, before it is handed to the session.
#[derive(Debug)]
pub struct TransactionResult<T> {
    pub id: Uuid,
    pub model_id: String,
    pub usage: TokenUsage,
    pub status: TransactionStatus,
    pub output: T,
}

impl<T> TransactionResult<T> {
    /// Split into the output and its audit record.
    pub fn into_parts(self) -> (T, RepertorizationTransaction) {
        let record = RepertorizationTransaction {
            id: self.id,
            model_id: self.model_id,
            usage: self.usage,
            status: self.status,
            completed_at: jiff::Timestamp::now(),
        };
        (self.output, record)
    }
}

/// Invoke Gemini for a repertorization of the given case totality.
///
/// Builds the prompt, requests JSON constrained to the repertorization
/// schema, and validates the returned text into an [`AnalysisResult`].
/// One attempt only; every failure is returned, none is retried.
pub async fn repertorize(
    client: &GeminiClient,
    symptoms: &[Symptom],
) -> Result<TransactionResult<AnalysisResult>, GeminiError> {
    let request = prompt::build_request(symptoms)?;

    let transaction_id = Uuid::new_v4();
    info!(
        transaction_id = %transaction_id,
        model = client.model_id(),
        symptom_count = symptoms.len(),
        "starting repertorization"
    );

    let (response_text, usage) =
        invoke_generate_content(client, &request.prompt, request.schema).await?;

    let analysis = AnalysisResult::from_json(&response_text).map_err(|e| {
        GeminiError::SchemaViolation(format!(
            "failed to parse AnalysisResult: {e}. Response: {response_text}"
        ))
    })?;

    info!(
        transaction_id = %transaction_id,
        remedies = analysis.remedies.len(),
        rubrics = analysis.rubric_analysis.len(),
        input_tokens = usage.tokens.input,
        output_tokens = usage.tokens.output,
        "repertorization complete"
    );

    Ok(TransactionResult {
        id: transaction_id,
        model_id: client.model_id().to_string(),
        usage,
        status: TransactionStatus::Complete,
        output: analysis,
    })
}

/// Core invocation of `generateContent` in structured-output mode.
/// Returns the candidate text and token usage.
async fn invoke_generate_content(
    client: &GeminiClient,
    prompt: &str,
    schema: serde_json::Value,
) -> Result<(String, TokenUsage), GeminiError> {
    let body = GenerateContentRequest::structured(prompt, schema);

    let response = client
        .http()
        .post(client.generate_content_url())
        .header("x-goog-api-key", client.api_key())
        .json(&body)
        .send()
        .await
        .map_err(|e| transport_error(client, e))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| transport_error(client, e))?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorEnvelope>(&text)
            .map(|envelope| match envelope.error.status {
                Some(code) => format!("{code}: {}", envelope.error.message),
                None => envelope.error.message,
            })
            .unwrap_or(text);
        warn!(status = status.as_u16(), "provider rejected generateContent");
        return Err(GeminiError::Provider {
            status: status.as_u16(),
            message,
        });
    }

    let parsed: GenerateContentResponse = serde_json::from_str(&text)
        .map_err(|e| GeminiError::ResponseParse(format!("{e}. Body: {text}")))?;

    let usage = tokens::usage_or_zero(parsed.usage_metadata.as_ref());

    let response_text = parsed
        .first_candidate_text()
        .ok_or_else(|| GeminiError::EmptyResponse(parsed.no_content_reason()))?;

    Ok((response_text, usage))
}

fn transport_error(client: &GeminiClient, e: reqwest::Error) -> GeminiError {
    if e.is_timeout() {
        GeminiError::Timeout {
            timeout_ms: client.timeout().as_millis() as u64,
        }
    } else {
        GeminiError::Invocation(e.to_string())
    }
}
