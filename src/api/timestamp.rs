use crate::SharedState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TimestampBody {
    pub timestamp: String,
}

pub async fn timestamp(State(state): State<SharedState>) -> impl IntoResponse {
    let body = TimestampBody {
        timestamp: state.clock.now_iso(),
    };
    (StatusCode::OK, Json(body))
}
