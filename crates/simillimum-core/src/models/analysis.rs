//! The repertorization returned by the model.
//!
//! Deserialization is the validation step: every required field must be
//! present with the right JSON type and every grade must be 1, 2 or 3.
//! There is no lenient or partial parse.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Structured output of one repertorization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub summary: String,
    pub total_symptoms_analyzed: f64,
    pub rubric_analysis: Vec<RubricAnalysis>,
    pub remedies: Vec<RemedySuggestion>,
}

impl AnalysisResult {
    /// Parse and validate raw model output.
    pub fn from_json(text: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// One Kent rubric and the remedies listed under it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RubricAnalysis {
    pub kent_rubric: String,
    pub matches: Vec<RubricMatch>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RubricMatch {
    pub remedy_name: String,
    pub grade: Grade,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemedySuggestion {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,
    /// Intended range 1-100. Not enforced.
    pub relevance_score: f64,
    pub key_indications: Vec<String>,
    pub boericke_reference: String,
    #[serde(default)]
    pub kent_rubrics: Vec<String>,
    pub differentiation: String,
}

/// Classical salience of a remedy within a rubric.
///
/// Printed in the repertory as roman (1), italics (2) or bold (3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "u8")]
pub enum Grade {
    Roman = 1,
    Italic = 2,
    Bold = 3,
}

impl Grade {
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Grade {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Grade::Roman),
            2 => Ok(Grade::Italic),
            3 => Ok(Grade::Bold),
            other => Err(CoreError::InvalidGrade(other.to_string())),
        }
    }
}

// JSON numbers from the model may arrive as `3` or `3.0`; both are grade 3.
impl TryFrom<f64> for Grade {
    type Error = CoreError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.fract() != 0.0 || !(1.0..=3.0).contains(&value) {
            return Err(CoreError::InvalidGrade(value.to_string()));
        }
        Grade::try_from(value as u8)
    }
}

impl From<Grade> for u8 {
    fn from(grade: Grade) -> Self {
        grade.value()
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
