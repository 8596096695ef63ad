//! View model handed to the page templates.
//!
//! Everything the templates print is computed here so the templates stay
//! free of logic beyond loops and state switches.

use serde::Serialize;
use uuid::Uuid;

use simillimum_core::models::analysis::{AnalysisResult, Grade, RemedySuggestion};
use simillimum_core::models::session::{RenderState, Session};
use simillimum_core::models::symptom::{Symptom, SymptomCategory};
use simillimum_core::models::transaction::RepertorizationTransaction;

use crate::matrix::GradingMatrix;

/// Rubric tags shown on a remedy card.
pub const MAX_RUBRIC_TAGS: usize = 4;

#[derive(Debug, Serialize)]
pub struct PageView {
    pub state: RenderState,
    pub categories: Vec<CategoryOption>,
    pub draft: DraftView,
    pub symptoms: Vec<SymptomView>,
    pub can_analyze: bool,
    pub is_analyzing: bool,
    pub error: Option<&'static str>,
    pub result: Option<ResultView>,
}

#[derive(Debug, Serialize)]
pub struct CategoryOption {
    pub name: &'static str,
    pub selected: bool,
}

#[derive(Debug, Serialize)]
pub struct DraftView {
    pub location: String,
    pub sensation: String,
    pub timing: String,
}

#[derive(Debug, Serialize)]
pub struct SymptomView {
    pub id: Uuid,
    pub category: &'static str,
    pub location: String,
    pub sensation: String,
    pub timing: String,
    pub recorded_at: String,
}

#[derive(Debug, Serialize)]
pub struct ResultView {
    pub summary: String,
    pub total_symptoms_analyzed: String,
    pub columns: Vec<String>,
    pub rows: Vec<RowView>,
    pub remedies: Vec<RemedyCard>,
    pub transaction: Option<TransactionView>,
}

#[derive(Debug, Serialize)]
pub struct RowView {
    pub rubric: String,
    pub cells: Vec<CellView>,
}

#[derive(Debug, Serialize)]
pub struct CellView {
    pub grade: Option<u8>,
    /// CSS class carrying the typographic grade convention.
    pub class: &'static str,
}

#[derive(Debug, Serialize)]
pub struct RemedyCard {
    pub rank: usize,
    pub name: String,
    pub common_name: Option<String>,
    pub relevance: String,
    pub boericke_reference: String,
    pub key_indications: Vec<String>,
    pub kent_rubrics: Vec<String>,
    pub differentiation: String,
}

#[derive(Debug, Serialize)]
pub struct TransactionView {
    pub model_id: String,
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub completed_at: String,
}

impl PageView {
    pub fn from_session(session: &Session) -> Self {
        let draft = session.draft();

        Self {
            state: session.render_state(),
            categories: SymptomCategory::ALL
                .into_iter()
                .map(|c| CategoryOption {
                    name: c.as_str(),
                    selected: c == draft.category,
                })
                .collect(),
            draft: DraftView {
                location: draft.location.clone(),
                sensation: draft.sensation.clone(),
                timing: draft.timing.clone(),
            },
            symptoms: session.totality().iter().map(SymptomView::from).collect(),
            can_analyze: session.can_analyze(),
            is_analyzing: session.is_analyzing(),
            error: session.notice().map(|n| n.message()),
            result: session
                .result()
                .map(|r| ResultView::new(r, session.last_transaction())),
        }
    }
}

impl From<&Symptom> for SymptomView {
    fn from(s: &Symptom) -> Self {
        Self {
            id: s.id,
            category: s.category.as_str(),
            location: s.location.clone(),
            sensation: s.sensation.clone(),
            timing: s.timing.clone(),
            recorded_at: s.recorded_at.strftime("%H:%M UTC").to_string(),
        }
    }
}

impl ResultView {
    pub fn new(result: &AnalysisResult, transaction: Option<&RepertorizationTransaction>) -> Self {
        let matrix = GradingMatrix::build(result);

        Self {
            summary: result.summary.clone(),
            total_symptoms_analyzed: format_number(result.total_symptoms_analyzed),
            columns: matrix.columns.into_iter().map(|c| c.header).collect(),
            rows: matrix
                .rows
                .into_iter()
                .map(|row| RowView {
                    rubric: row.rubric,
                    cells: row.cells.into_iter().map(CellView::from).collect(),
                })
                .collect(),
            remedies: result
                .remedies
                .iter()
                .enumerate()
                .map(|(i, r)| RemedyCard::new(i + 1, r))
                .collect(),
            transaction: transaction.map(|t| TransactionView {
                model_id: t.model_id.clone(),
                input_tokens: t.usage.tokens.input,
                output_tokens: t.usage.tokens.output,
                completed_at: t.completed_at.strftime("%Y-%m-%d %H:%M UTC").to_string(),
            }),
        }
    }
}

impl From<Option<Grade>> for CellView {
    fn from(grade: Option<Grade>) -> Self {
        Self {
            grade: grade.map(Grade::value),
            class: match grade {
                Some(Grade::Bold) => "grade-bold",
                Some(Grade::Italic) => "grade-italic",
                Some(Grade::Roman) => "grade-roman",
                None => "grade-none",
            },
        }
    }
}

impl RemedyCard {
    fn new(rank: usize, remedy: &RemedySuggestion) -> Self {
        Self {
            rank,
            name: remedy.name.clone(),
            common_name: remedy.common_name.clone(),
            relevance: format_number(remedy.relevance_score),
            boericke_reference: remedy.boericke_reference.clone(),
            key_indications: remedy.key_indications.clone(),
            kent_rubrics: remedy
                .kent_rubrics
                .iter()
                .take(MAX_RUBRIC_TAGS)
                .map(|r| rubric_leaf(r).to_string())
                .collect(),
            differentiation: remedy.differentiation.clone(),
        }
    }
}

/// Whole numbers print without a fractional part; others as given.
pub fn format_number(value: f64) -> String {
    value.to_string()
}

/// Last segment of a `Chapter - Rubric - Sub-rubric` path.
pub fn rubric_leaf(rubric: &str) -> &str {
    rubric.rsplit(" - ").next().unwrap_or(rubric)
}
