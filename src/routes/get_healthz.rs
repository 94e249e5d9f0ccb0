use axum::http::StatusCode;
#[cfg(test)]
use axum_macros::debug_handler;

/// Liveness probe. Answers 200 with an empty body no matter what was loaded.
#[cfg_attr(test, debug_handler)]
pub async fn get_healthz() -> StatusCode {
    StatusCode::OK
}
