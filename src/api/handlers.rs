use axum::{
    extract::{Path, State},
    http::{HeaderName, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};

use super::AppState;
use crate::lookup::{Dictionary, Query};
use crate::render::render;

/// Response header naming the outcome of a lookup.
pub const OUTCOME_HEADER: HeaderName = HeaderName::from_static("x-lookup-outcome");

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Look up a word and return the rendered result fragment.
///
/// Blank words answer `204 No Content` without contacting the dictionary.
/// The pronunciation URL, when any, rides in the fragment's play button.
pub async fn lookup(State(state): State<AppState>, Path(word): Path<String>) -> Response {
    let Some(query) = Query::parse(&word) else {
        return StatusCode::NO_CONTENT.into_response();
    };

    let outcome = state.dictionary.lookup(&query).await;
    let view = render(&outcome);

    ([(OUTCOME_HEADER, outcome.as_str())], Html(view.html)).into_response()
}
