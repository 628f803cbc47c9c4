use crate::SharedState;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
};

pub const SEARCH_BASE: &str = "https://duckduckgo.com/?q=";

/// Build the search URL for a key and timestamp.
///
/// Both parts are percent-encoded on their own; the `+` joining them is
/// a literal separator.
pub fn search_url(short_key: &str, timestamp: &str) -> String {
    format!(
        "{}{}+{}",
        SEARCH_BASE,
        urlencoding::encode(short_key),
        urlencoding::encode(timestamp)
    )
}

pub async fn redirect(
    State(state): State<SharedState>,
    Path(short_key): Path<String>,
) -> impl IntoResponse {
    let location = search_url(&short_key, &state.clock.now_iso());
    tracing::debug!("Redirecting {:?} to {}", short_key, location);

    (StatusCode::FOUND, [(header::LOCATION, location)])
}
