use serde_json::{Value, json};

/// Field names of the repertorization payload.
pub mod field {
    pub const SUMMARY: &str = "summary";
    pub const TOTAL_SYMPTOMS_ANALYZED: &str = "totalSymptomsAnalyzed";
    pub const RUBRIC_ANALYSIS: &str = "rubricAnalysis";
    pub const REMEDIES: &str = "remedies";

    pub const KENT_RUBRIC: &str = "kentRubric";
    pub const MATCHES: &str = "matches";
    pub const REMEDY_NAME: &str = "remedyName";
    pub const GRADE: &str = "grade";

    pub const NAME: &str = "name";
    pub const COMMON_NAME: &str = "commonName";
    pub const RELEVANCE_SCORE: &str = "relevanceScore";
    pub const KEY_INDICATIONS: &str = "keyIndications";
    pub const BOERICKE_REFERENCE: &str = "boerickeReference";
    pub const KENT_RUBRICS: &str = "kentRubrics";
    pub const DIFFERENTIATION: &str = "differentiation";
}

/// Type names of the model's structured-output dialect (an OpenAPI subset).
pub mod kind {
    pub const OBJECT: &str = "OBJECT";
    pub const ARRAY: &str = "ARRAY";
    pub const STRING: &str = "STRING";
    pub const NUMBER: &str = "NUMBER";
}

/// Build the response schema the model must decode against.
///
/// `commonName` and `kentRubrics` are declared but not required.
pub fn build_schema() -> Value {
    let string = json!({ "type": kind::STRING });
    let number = json!({ "type": kind::NUMBER });
    let string_list = json!({ "type": kind::ARRAY, "items": string });

    let rubric_match = json!({
        "type": kind::OBJECT,
        "properties": {
            (field::REMEDY_NAME): string,
            (field::GRADE): number,
        },
        "required": [field::REMEDY_NAME, field::GRADE],
    });

    let rubric_row = json!({
        "type": kind::OBJECT,
        "properties": {
            (field::KENT_RUBRIC): string,
            (field::MATCHES): { "type": kind::ARRAY, "items": rubric_match },
        },
        "required": [field::KENT_RUBRIC, field::MATCHES],
    });

    let remedy = json!({
        "type": kind::OBJECT,
        "properties": {
            (field::NAME): string,
            (field::COMMON_NAME): string,
            (field::RELEVANCE_SCORE): number,
            (field::KEY_INDICATIONS): string_list,
            (field::BOERICKE_REFERENCE): string,
            (field::KENT_RUBRICS): string_list,
            (field::DIFFERENTIATION): string,
        },
        "required": [
            field::NAME,
            field::RELEVANCE_SCORE,
            field::KEY_INDICATIONS,
            field::DIFFERENTIATION,
            field::BOERICKE_REFERENCE,
        ],
    });

    json!({
        "type": kind::OBJECT,
        "properties": {
            (field::SUMMARY): string,
            (field::TOTAL_SYMPTOMS_ANALYZED): number,
            (field::RUBRIC_ANALYSIS): { "type": kind::ARRAY, "items": rubric_row },
            (field::REMEDIES): { "type": kind::ARRAY, "items": remedy },
        },
        "required": [
            field::SUMMARY,
            field::REMEDIES,
            field::RUBRIC_ANALYSIS,
            field::TOTAL_SYMPTOMS_ANALYZED,
        ],
    })
}
