//! HTTP routes: the form page and the prediction relay.

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{StatusCode, header::CONTENT_TYPE},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};

use gate_model::{PREDICT_PATH, PredictionError};

use crate::relay::Upstream;
use crate::validate::check_request;

/// The prediction form page.
pub const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    upstream: Upstream,
}

impl AppState {
    pub fn new(upstream: Upstream) -> Self {
        Self { upstream }
    }
}

/// Build the gateway router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route(PREDICT_PATH, post(predict))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn predict(State(state): State<AppState>, body: Bytes) -> Response {
    if let Err(rejection) = check_request(&body) {
        tracing::warn!("Rejected prediction request: {}", rejection.error);
        return (StatusCode::BAD_REQUEST, Json(rejection)).into_response();
    }

    match state.upstream.forward(body).await {
        Ok(relayed) => {
            let status = StatusCode::from_u16(relayed.status).unwrap_or(StatusCode::BAD_GATEWAY);
            tracing::info!(status = relayed.status, "Prediction relayed");
            (status, [(CONTENT_TYPE, "application/json")], relayed.body).into_response()
        }
        Err(error) => {
            tracing::error!("Error in {}: {}", PREDICT_PATH, error);
            (
                StatusCode::BAD_GATEWAY,
                Json(PredictionError::new(error.to_string())),
            )
                .into_response()
        }
    }
}
