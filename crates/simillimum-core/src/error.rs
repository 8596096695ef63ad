use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid symptom category: {0}")]
    InvalidCategory(String),

    #[error("invalid grade: {0} (expected 1, 2 or 3)")]
    InvalidGrade(String),

    #[error("symptom needs a location or a sensation")]
    IncompleteSymptom,
}
