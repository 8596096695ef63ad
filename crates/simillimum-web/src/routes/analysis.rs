//! Running a repertorization off the request path.
//!
//! The trigger handlers flip the session into its analyzing state and return
//! immediately; the model call runs on a spawned task that reports back
//! through the session's completion transitions.

use tracing::{error, info};

use simillimum_core::models::session::AnalysisRejected;
use simillimum_gemini::transaction::repertorize;

use crate::state::AppState;

/// Start an analysis of the current totality, or say why it cannot start.
pub async fn start(state: &AppState) -> Result<(), AnalysisRejected> {
    let symptoms = state.session.lock().await.begin_analysis()?;

    let state = state.clone();
    tokio::spawn(async move {
        let outcome = repertorize(&state.gemini, &symptoms).await;

        let mut session = state.session.lock().await;
        match outcome {
            Ok(result) => {
                let (analysis, record) = result.into_parts();
                info!(transaction_id = %record.id, "analysis stored");
                session.complete_analysis(analysis, record);
            }
            Err(e) => {
                error!(kind = e.kind(), error = %e, "repertorization failed");
                session.fail_analysis();
            }
        }
    });

    Ok(())
}
