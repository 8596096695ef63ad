use eyre::WrapErr;
use tracing::info;
use tracing_subscriber::EnvFilter;

use simillimum_gemini::client::{build_client, redact_api_key};
use simillimum_render::render::PageRenderer;
use simillimum_web::config::{AppConfig, LogFormat};
use simillimum_web::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // A missing .env file is fine; the hosting environment may provide everything.
    let dotenv = dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    init_tracing(config.log_format);

    if let Some(path) = dotenv {
        info!(path = %path.display(), "loaded environment file");
    }

    let gemini = build_client(config.gemini.clone())?;
    let renderer = PageRenderer::new()?;
    let app = simillimum_web::app(AppState::new(gemini, renderer));

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .wrap_err_with(|| format!("failed to bind {}", config.bind))?;

    info!(
        addr = %listener.local_addr()?,
        model = %config.gemini.model_id,
        api_key = %redact_api_key(&config.gemini.api_key),
        timeout_secs = config.gemini.timeout.as_secs(),
        "simillimum listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("simillimum stopped");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        LogFormat::Plain => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
    }
}
