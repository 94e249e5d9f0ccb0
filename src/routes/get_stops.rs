use crate::types::app_state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(test)]
use axum_macros::debug_handler;

/// Every stop loaded at startup, in file order.
#[cfg_attr(test, debug_handler)]
pub async fn get_stops(State(state): State<AppState>) -> Response {
    (StatusCode::OK, Json(state.stops.as_slice())).into_response()
}
