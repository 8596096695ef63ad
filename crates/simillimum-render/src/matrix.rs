//! Kent's grading matrix: rubrics down, remedies across.
//!
//! A cell holds the grade of the first match in the rubric row whose remedy
//! name contains the column's remedy name, or is contained by it, compared
//! case-insensitively. This is a fuzzy heuristic: a short name such as
//! "Sulph" also matches "Sulphuricum acidum".

use serde::Serialize;

use simillimum_core::models::analysis::{AnalysisResult, Grade, RubricAnalysis, RubricMatch};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradingMatrix {
    pub columns: Vec<MatrixColumn>,
    pub rows: Vec<MatrixRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixColumn {
    pub remedy: String,
    /// First word of the remedy name, used as the column header.
    pub header: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixRow {
    pub rubric: String,
    pub cells: Vec<Option<Grade>>,
}

impl GradingMatrix {
    pub fn build(result: &AnalysisResult) -> Self {
        let columns = result
            .remedies
            .iter()
            .map(|remedy| MatrixColumn {
                remedy: remedy.name.clone(),
                header: column_header(&remedy.name).to_string(),
            })
            .collect();

        let rows = result
            .rubric_analysis
            .iter()
            .map(|row| MatrixRow {
                rubric: row.kent_rubric.clone(),
                cells: result
                    .remedies
                    .iter()
                    .map(|remedy| find_match(row, &remedy.name).map(|m| m.grade))
                    .collect(),
            })
            .collect();

        Self { columns, rows }
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<Grade> {
        self.rows.get(row)?.cells.get(column).copied().flatten()
    }
}

/// First match in `row` naming `remedy`, in either direction.
pub fn find_match<'a>(row: &'a RubricAnalysis, remedy: &str) -> Option<&'a RubricMatch> {
    row.matches
        .iter()
        .find(|m| names_match(&m.remedy_name, remedy))
}

/// Case-insensitive substring containment, tried both ways.
pub fn names_match(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

fn column_header(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}
