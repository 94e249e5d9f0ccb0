use axum::{routing::get, Router};

use crate::types::app_state::AppState;

mod get_healthz;
mod get_stops;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route("/api/healthz", get(get_healthz::get_healthz))
        .route("/api/stops", get(get_stops::get_stops))
}
