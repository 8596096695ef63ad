mod common;

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};

use common::*;
use simillimum_core::models::session::EMPTY_TOTALITY_MESSAGE;

async fn page(state: &simillimum_web::state::AppState) -> String {
    let (status, body) = send(state, Request::get("/").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    String::from_utf8(body).unwrap()
}

#[tokio::test]
async fn fresh_page_shows_empty_totality() {
    let mock = spawn_gemini(StatusCode::OK, envelope("{}"), Duration::ZERO).await;
    let state = state_for(&mock);

    let html = page(&state).await;
    assert!(html.contains("Totality is empty"));
    assert!(html.contains("0 Symptoms"));
    assert!(html.contains("Clinical Repertory Analysis"));
    assert!(!html.contains("test-key-0123456789"));
}

#[tokio::test]
async fn form_submission_records_and_redirects() {
    let mock = spawn_gemini(StatusCode::OK, envelope("{}"), Duration::ZERO).await;
    let state = state_for(&mock);

    let status = post_form(
        &state,
        "/symptoms",
        "category=Mental&location=&sensation=Fear+of+death&timing=",
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let html = page(&state).await;
    assert!(html.contains("1 Symptoms"));
    assert!(html.contains("Fear of death"));
    assert!(html.contains("Location: General"));
    assert!(html.contains("Timing: Unspecified"));
}

#[tokio::test]
async fn incomplete_form_keeps_the_draft() {
    let mock = spawn_gemini(StatusCode::OK, envelope("{}"), Duration::ZERO).await;
    let state = state_for(&mock);

    let status = post_form(
        &state,
        "/symptoms",
        "category=Modality&location=&sensation=&timing=After+eating",
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let html = page(&state).await;
    assert!(html.contains("Totality is empty"));
    assert!(html.contains(r#"value="After eating""#));
    assert!(html.contains(r#"value="Modality" checked"#));
}

#[tokio::test]
async fn empty_trigger_shows_inline_error() {
    let mock = spawn_gemini(StatusCode::OK, envelope("{}"), Duration::ZERO).await;
    let state = state_for(&mock);

    assert_eq!(post_form(&state, "/analysis", "").await, StatusCode::SEE_OTHER);

    let html = page(&state).await;
    assert!(html.contains(EMPTY_TOTALITY_MESSAGE));
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn form_delete_removes_symptom() {
    let mock = spawn_gemini(StatusCode::OK, envelope("{}"), Duration::ZERO).await;
    let state = state_for(&mock);
    post_form(&state, "/symptoms", "category=Physical&location=Head&sensation=Throbbing").await;

    let id = state.session.lock().await.totality().as_slice()[0].id;
    let status = post_form(&state, &format!("/symptoms/{id}/delete"), "").await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let html = page(&state).await;
    assert!(html.contains("Totality is empty"));
}

#[tokio::test]
async fn analysis_renders_grading_table() {
    let mock = spawn_gemini(
        StatusCode::OK,
        envelope(&analysis_json("Anguish with restlessness.").to_string()),
        Duration::ZERO,
    )
    .await;
    let state = state_for(&mock);
    post_form(&state, "/symptoms", "category=Mental&sensation=Fear+of+death").await;

    post_form(&state, "/analysis", "").await;
    wait_until_settled(&state).await;

    let html = page(&state).await;
    assert!(html.contains("MIND - FEAR - death, of"));
    assert!(html.contains("grade-bold"));
    assert!(html.contains("Anguish with restlessness."));
    assert!(html.contains("<h4>Arsenicum</h4>"));
    assert!(html.contains("90%"));
}

#[tokio::test]
async fn analyzing_page_refreshes_itself() {
    let mock = spawn_gemini(
        StatusCode::OK,
        envelope(&analysis_json("slow").to_string()),
        Duration::from_millis(500),
    )
    .await;
    let state = state_for(&mock);
    post_form(&state, "/symptoms", "category=Mental&sensation=Fear+of+death").await;
    post_form(&state, "/analysis", "").await;

    let html = page(&state).await;
    assert!(html.contains(r#"http-equiv="refresh""#));
    assert!(html.contains("Performing Repertorization..."));

    wait_until_settled(&state).await;
    assert!(!page(&state).await.contains(r#"http-equiv="refresh""#));
}
