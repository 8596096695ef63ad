use axum::Form;
use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use tracing::{debug, warn};
use uuid::Uuid;

use simillimum_core::models::session::AnalysisRejected;
use simillimum_core::models::symptom::SymptomDraft;

use crate::error::ApiError;
use crate::routes::analysis;
use crate::state::AppState;

pub async fn show_page(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let session = state.session.lock().await;
    let html = state.renderer.render_page(&session)?;
    Ok(Html(html))
}

/// Submit the entry form. A draft without a location or sensation is kept in
/// the staging area and nothing is recorded.
pub async fn add_symptom(
    State(state): State<AppState>,
    Form(draft): Form<SymptomDraft>,
) -> Redirect {
    let mut session = state.session.lock().await;
    match session.add_symptom(draft) {
        Some(symptom) => debug!(id = %symptom.id, category = %symptom.category, "symptom recorded"),
        None => debug!("incomplete symptom ignored"),
    }
    Redirect::to("/")
}

pub async fn remove_symptom(State(state): State<AppState>, Path(id): Path<Uuid>) -> Redirect {
    if !state.session.lock().await.remove_symptom(id) {
        debug!(%id, "remove of unknown symptom ignored");
    }
    Redirect::to("/")
}

pub async fn trigger_analysis(State(state): State<AppState>) -> Redirect {
    match analysis::start(&state).await {
        Ok(()) => {}
        Err(AnalysisRejected::EmptyTotality) => debug!("analysis requested with empty totality"),
        Err(AnalysisRejected::InFlight) => warn!("analysis already in flight"),
    }
    Redirect::to("/")
}
