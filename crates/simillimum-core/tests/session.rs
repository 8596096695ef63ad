use simillimum_core::models::analysis::AnalysisResult;
use simillimum_core::models::session::{
    ANALYSIS_FAILED_MESSAGE, AnalysisRejected, EMPTY_TOTALITY_MESSAGE, Notice, RenderState, Session,
};
use simillimum_core::models::symptom::{SymptomCategory, SymptomDraft};
use simillimum_core::models::token_count::TokenUsage;
use simillimum_core::models::transaction::{RepertorizationTransaction, TransactionStatus};
use uuid::Uuid;

fn sample_result(summary: &str) -> AnalysisResult {
    AnalysisResult::from_json(&format!(
        r#"{{"summary":"{summary}","totalSymptomsAnalyzed":1,"rubricAnalysis":[],"remedies":[]}}"#
    ))
    .unwrap()
}

fn transaction() -> RepertorizationTransaction {
    RepertorizationTransaction {
        id: Uuid::new_v4(),
        model_id: "gemini-test".to_string(),
        usage: TokenUsage::default(),
        status: TransactionStatus::Complete,
        completed_at: jiff::Timestamp::now(),
    }
}

fn fear_of_death() -> SymptomDraft {
    SymptomDraft {
        category: SymptomCategory::Mental,
        location: String::new(),
        sensation: "Fear of death".to_string(),
        timing: "Worse at night".to_string(),
    }
}

#[test]
fn new_session_is_idle() {
    let session = Session::new();
    assert_eq!(session.render_state(), RenderState::Idle);
    assert!(!session.can_analyze());
    assert!(session.notice().is_none());
}

#[test]
fn empty_totality_trigger_sets_inline_error_and_stays_idle() {
    let mut session = Session::new();

    assert_eq!(session.begin_analysis(), Err(AnalysisRejected::EmptyTotality));
    assert_eq!(session.notice(), Some(Notice::EmptyTotality));
    assert_eq!(session.notice().unwrap().message(), EMPTY_TOTALITY_MESSAGE);
    assert_eq!(session.render_state(), RenderState::Idle);
    assert!(!session.is_analyzing());
}

#[test]
fn successful_add_clears_staging_text_but_keeps_category() {
    let mut session = Session::new();
    let added = session.add_symptom(fear_of_death()).expect("should be recorded");

    assert_eq!(added.location, "General");
    assert_eq!(session.draft().category, SymptomCategory::Mental);
    assert!(session.draft().sensation.is_empty());
    assert!(session.draft().timing.is_empty());
}

#[test]
fn rejected_add_keeps_the_draft_as_typed() {
    let mut session = Session::new();
    let draft = SymptomDraft {
        category: SymptomCategory::Modality,
        location: " ".to_string(),
        sensation: String::new(),
        timing: "Better from pressure".to_string(),
    };

    assert!(session.add_symptom(draft.clone()).is_none());
    assert_eq!(session.draft(), &draft);
    assert!(session.totality().is_empty());
}

#[test]
fn add_after_empty_trigger_drops_the_stale_hint() {
    let mut session = Session::new();
    let _ = session.begin_analysis();
    session.add_symptom(fear_of_death());

    assert!(session.notice().is_none());
    assert!(session.can_analyze());
}

#[test]
fn begin_analysis_snapshots_totality_and_blocks_a_second_request() {
    let mut session = Session::new();
    session.add_symptom(fear_of_death());

    let snapshot = session.begin_analysis().expect("analysis should start");
    assert_eq!(snapshot.len(), 1);
    assert_eq!(session.render_state(), RenderState::Analyzing);
    assert!(!session.can_analyze());

    assert_eq!(session.begin_analysis(), Err(AnalysisRejected::InFlight));
}

#[test]
fn totality_stays_editable_while_analyzing() {
    let mut session = Session::new();
    session.add_symptom(fear_of_death());
    session.begin_analysis().unwrap();

    let second = session
        .add_symptom(SymptomDraft {
            location: "Stomach".to_string(),
            ..SymptomDraft::default()
        })
        .unwrap();
    assert_eq!(session.totality().len(), 2);
    assert_eq!(session.render_state(), RenderState::Analyzing);

    assert!(session.remove_symptom(second.id));
    assert_eq!(session.render_state(), RenderState::Analyzing);
}

#[test]
fn completion_replaces_the_result_wholesale() {
    let mut session = Session::new();
    session.add_symptom(fear_of_death());

    session.begin_analysis().unwrap();
    session.complete_analysis(sample_result("first"), transaction());
    assert_eq!(session.render_state(), RenderState::Result);

    session.begin_analysis().unwrap();
    session.complete_analysis(sample_result("second"), transaction());
    assert_eq!(session.result().unwrap().summary, "second");
    assert_eq!(session.last_transaction().unwrap().status, TransactionStatus::Complete);
}

#[test]
fn failure_preserves_the_prior_result() {
    let mut session = Session::new();
    session.add_symptom(fear_of_death());
    session.begin_analysis().unwrap();
    session.complete_analysis(sample_result("kept"), transaction());

    session.begin_analysis().unwrap();
    session.fail_analysis();

    assert_eq!(session.render_state(), RenderState::Error);
    assert_eq!(session.notice().unwrap().message(), ANALYSIS_FAILED_MESSAGE);
    assert_eq!(session.result().unwrap().summary, "kept");
    assert!(session.can_analyze(), "the user may always re-submit");
}

#[test]
fn failure_without_prior_result_shows_error() {
    let mut session = Session::new();
    session.add_symptom(fear_of_death());
    session.begin_analysis().unwrap();
    session.fail_analysis();

    assert_eq!(session.render_state(), RenderState::Error);
    assert!(session.result().is_none());
}

#[test]
fn form_submission_does_not_leave_the_error_state() {
    let mut session = Session::new();
    session.add_symptom(fear_of_death());
    session.begin_analysis().unwrap();
    session.fail_analysis();

    session.add_symptom(fear_of_death());
    assert_eq!(session.render_state(), RenderState::Error);
}

#[test]
fn snapshot_serializes_state_and_error_message() {
    let mut session = Session::new();
    let _ = session.begin_analysis();

    let value = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(value["state"], "idle");
    assert_eq!(value["error"], EMPTY_TOTALITY_MESSAGE);
    assert_eq!(value["can_analyze"], false);
    assert!(value["result"].is_null());
}
