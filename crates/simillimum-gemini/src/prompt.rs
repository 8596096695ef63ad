//! Repertorization prompt builder.
//!
//! Serializes the case totality into one line per symptom and wraps it in a
//! fixed instruction block. The output is a pure function of the symptoms,
//! so an unchanged totality always produces byte-identical prompt text.

use serde_json::Value;

use simillimum_core::models::symptom::Symptom;
use simillimum_core::schema;

use crate::error::GeminiError;

const PREAMBLE: &str = "\
As a master Homeopathic Doctor, perform a professional repertorization using \
Kent's Repertory and Boericke's Materia Medica.";

const GUIDELINES: &str = "\
STRICT REPERTORIZATION GUIDELINES:
1. ANALYZE LOCATION: Pay special attention to side of body (Left/Right) and specific organs.
2. ANALYZE TIMING: Consider modalities (Worse/Better) and specific hours/periodicity.
3. KENT RUBRICS: Map these to the exact hierarchy of Kent's Repertory (Chapter - Rubric - Sub-rubric).
4. GRADING: Assign 3 (Bold), 2 (Italics), or 1 (Roman) based on classical data.
5. MATERIA MEDICA: Confirm using clinical pictures from Boericke.
6. DIFFERENTIATION: Explain why the top remedy is the 'Simillimum'.";

const CLOSING: &str = "Provide the output in JSON format matching the defined schema.";

/// Everything sent to the model for one repertorization.
#[derive(Debug, Clone, PartialEq)]
pub struct RepertorizationRequest {
    pub prompt: String,
    pub schema: Value,
}

/// Format one symptom as a case-data line.
pub fn format_symptom_line(symptom: &Symptom) -> String {
    format!(
        "[{}] Location: {} | Sensation: {} | Timing/Modality: {}",
        symptom.category, symptom.location, symptom.sensation, symptom.timing
    )
}

/// Build the instruction text for a non-empty case totality.
pub fn build_prompt(symptoms: &[Symptom]) -> Result<String, GeminiError> {
    if symptoms.is_empty() {
        return Err(GeminiError::EmptyCase);
    }

    let case_data = symptoms
        .iter()
        .map(format_symptom_line)
        .collect::<Vec<_>>()
        .join("\n");

    Ok(format!(
        "{PREAMBLE}\n\nTHE CASE DATA:\n{case_data}\n\n{GUIDELINES}\n\n{CLOSING}"
    ))
}

/// Build the prompt together with the output schema it must be decoded against.
pub fn build_request(symptoms: &[Symptom]) -> Result<RepertorizationRequest, GeminiError> {
    Ok(RepertorizationRequest {
        prompt: build_prompt(symptoms)?,
        schema: schema::build_schema(),
    })
}
