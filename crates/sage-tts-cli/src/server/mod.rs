//! HTTP inference server.
//!
//! Axum app exposing the hosting platform's invocation contract:
//! `GET /ping` (liveness) and `POST /invocations` (synthesis). The
//! engine is loaded exactly once, before the listener binds, and shared
//! read-only with every handler.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{info, warn};

use sage_tts::engine::EngineConfig;
use sage_tts::PiperEngine;

use crate::commands::serve::ServeArgs;

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

/// Text used to warm the model before the probe reports ready.
const WARMUP_TEXT: &str = "Server warm-up.";

pub async fn start_server(args: ServeArgs) -> Result<()> {
    let config = EngineConfig {
        repo_id: args.model_repo.clone(),
        voice: args.voice.clone(),
    };

    info!(repo = %config.repo_id, voice = %config.voice, "loading speech engine");
    let engine = PiperEngine::load(&config)
        .await
        .context("failed to load speech engine")?;

    let state = state::AppState::new(Arc::new(engine));
    warm_up(&state).await;
    state.mark_ready();

    let app = routes::create_router(state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// One synthesis pass so first-request latency is paid before the
/// platform starts routing traffic. A failure here is logged, not fatal:
/// the handle itself is loaded, and requests surface their own errors.
async fn warm_up(state: &state::AppState) {
    let engine = state.engine.clone();
    let speaker = state.speaker.clone();
    let language = state.language.clone();

    let result =
        tokio::task::spawn_blocking(move || engine.synthesize(WARMUP_TEXT, &speaker, &language))
            .await;

    match result {
        Ok(Ok(clip)) => info!(
            duration_ms = clip.duration_ms() as f64,
            "warm-up synthesis complete"
        ),
        Ok(Err(e)) => warn!(error = %e, "warm-up synthesis failed"),
        Err(e) => warn!(error = %e, "warm-up task failed"),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
