use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::token_count::TokenUsage;

/// Metadata for a completed repertorization call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepertorizationTransaction {
    pub id: Uuid,
    pub model_id: String,
    pub usage: TokenUsage,
    pub status: TransactionStatus,
    pub completed_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Complete,
}
