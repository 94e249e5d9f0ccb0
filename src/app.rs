use crate::{routes::apply_routes, types::app_state::AppState, types::stop::Stop};
use axum::Router;
use tower_http::trace::TraceLayer;

pub fn gen_app(stops: Vec<Stop>) -> Router {
    let state = AppState::new(stops);

    apply_routes(Router::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let app = gen_app(Vec::new());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn answers_head_requests() {
        let app = gen_app(Vec::new());

        let response = app
            .oneshot(
                Request::builder()
                    .method("HEAD")
                    .uri("/api/stops")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
