use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use sage_tts::audio;

use crate::server::error::ApiError;
use crate::server::state::AppState;

#[derive(Serialize)]
struct PingResponse {
    status: &'static str,
}

/// Liveness probe for the hosting platform.
///
/// Reports ready only once the engine handle is in place and warmed, so
/// the platform never routes traffic to a process that cannot serve it.
pub async fn ping(State(state): State<AppState>) -> Response {
    if state.is_ready() {
        Json(PingResponse { status: "ok" }).into_response()
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(PingResponse {
                status: "unavailable",
            }),
        )
            .into_response()
    }
}

/// Synthesis endpoint: JSON `{"text": ...}` in, WAV bytes out.
pub async fn invocations(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    // Parsed by hand so the rejection payloads stay on the platform
    // contract rather than axum's own rejection bodies.
    let payload: Value = serde_json::from_slice(&body).map_err(|_| ApiError::NotJson)?;

    let text = match payload.get("text").and_then(Value::as_str) {
        Some(text) if !text.is_empty() => text.to_owned(),
        _ => return Err(ApiError::MissingText),
    };

    info!(text_len = text.len(), "processing synthesis request");

    // Synthesis is CPU-bound; keep it off the async workers.
    let engine = state.engine.clone();
    let speaker = state.speaker.clone();
    let language = state.language.clone();
    let clip = tokio::task::spawn_blocking(move || engine.synthesize(&text, &speaker, &language))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    let wav_bytes = audio::encode_wav(&clip)?;

    Ok(([(header::CONTENT_TYPE, "audio/wav")], wav_bytes).into_response())
}
