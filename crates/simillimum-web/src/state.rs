use std::sync::Arc;

use tokio::sync::Mutex;

use simillimum_core::models::session::Session;
use simillimum_gemini::client::GeminiClient;
use simillimum_render::render::PageRenderer;

/// Shared application state, injected into all route handlers via Axum state.
///
/// There is one session per process. The lock is only held for state
/// transitions and rendering, never across the model call.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<Session>>,
    pub gemini: GeminiClient,
    pub renderer: Arc<PageRenderer>,
}

impl AppState {
    pub fn new(gemini: GeminiClient, renderer: PageRenderer) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::new())),
            gemini,
            renderer: Arc::new(renderer),
        }
    }
}
