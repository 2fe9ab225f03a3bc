use super::error_response::ErrorResponse;
use super::models::{HealthStatus, LightRequest, MessageResponse};
use super::state::AppState;
use crate::domain::camera::{MJPEG_CONTENT_TYPE, mjpeg_stream};
use crate::domain::light::{LightColor, UNRECOGNIZED_COLOR_MESSAGE};
use axum::{
    Json,
    body::Body,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};
use futures::StreamExt;
use std::convert::Infallible;
use std::sync::Arc;
use tracing::{info, warn};

/// Get service health
pub async fn get_health(State(state): State<Arc<AppState>>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        build_timestamp: env!("BUILD_TIMESTAMP").to_string(),
        light_driver: state.light.name().to_string(),
    })
}

/// MJPEG camera stream
///
/// The body never ends on its own; it is dropped when the client disconnects.
pub async fn video_feed(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let chunks = mjpeg_stream(state.frame_source.clone(), state.stream_retry_interval)
        .map(Ok::<_, Infallible>);

    (
        [
            (header::CONTENT_TYPE, MJPEG_CONTENT_TYPE),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        Body::from_stream(chunks),
    )
}

/// Switch the indicator light
pub async fn control_light(
    State(state): State<Arc<AppState>>,
    request: Result<Json<LightRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ErrorResponse> {
    let Json(request) = request.map_err(|e| {
        warn!("JSON parsing error: {:?}", e);
        ErrorResponse::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("Invalid JSON: {}", e.body_text()),
        )
    })?;

    let Some(color) = LightColor::parse(request.color_str()) else {
        info!("Unrecognized light color: {:?}", request.color);
        return Ok(Json(MessageResponse::new(UNRECOGNIZED_COLOR_MESSAGE)));
    };

    state.light.set_color(color).await.map_err(|e| {
        warn!(driver = state.light.name(), "Light driver failed: {}", e);
        ErrorResponse::new(StatusCode::SERVICE_UNAVAILABLE, e.to_string())
    })?;

    Ok(Json(MessageResponse::new(color.acknowledgement())))
}
