use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::Value;
use uuid::Uuid;

use simillimum_core::error::CoreError;
use simillimum_core::models::session::{AnalysisRejected, EMPTY_TOTALITY_MESSAGE};
use simillimum_core::models::symptom::{Symptom, SymptomDraft};

use crate::error::ApiError;
use crate::routes::analysis;
use crate::state::AppState;

pub async fn get_session(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let session = state.session.lock().await;
    Ok(Json(serde_json::to_value(session.snapshot())?))
}

pub async fn add_symptom(
    State(state): State<AppState>,
    Json(draft): Json<SymptomDraft>,
) -> Result<(StatusCode, Json<Symptom>), ApiError> {
    let symptom = state
        .session
        .lock()
        .await
        .add_symptom(draft)
        .ok_or(CoreError::IncompleteSymptom)?;
    Ok((StatusCode::CREATED, Json(symptom)))
}

pub async fn remove_symptom(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.session.lock().await.remove_symptom(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("symptom not found: {id}")))
    }
}

pub async fn trigger_analysis(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    match analysis::start(&state).await {
        Ok(()) => Ok(StatusCode::ACCEPTED),
        Err(AnalysisRejected::EmptyTotality) => {
            Err(ApiError::BadRequest(EMPTY_TOTALITY_MESSAGE.to_string()))
        }
        Err(AnalysisRejected::InFlight) => {
            Err(ApiError::Conflict("analysis already in progress".to_string()))
        }
    }
}
