//! Envdash HTTP API
//!
//! HTTP layer for the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - The dashboard page
//! - `GET /ws` - Page session (WebSocket)
//!
//! ## Widgets
//! - `GET /api/v1/columns` - Dataset schema
//! - `GET /api/v1/widgets` - Widgets with default selections
//! - `POST /api/v1/widgets/:widget` - Chart for a selection
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,no_run
//! use envdash::api::{serve, AppState};
//! use envdash::config::ServerConfig;
//! use envdash::dataset::Dataset;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Arc::new(Dataset::environmental()?);
//!     let config = ServerConfig::default();
//!
//!     let state = AppState::new(dataset, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::session::websocket_handler;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/columns", get(routes::columns::list_columns))
        .route("/widgets", get(routes::widgets::list_widgets))
        .route("/widgets/:widget", post(routes::widgets::update_widget));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config);

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::page::index))
        .route("/ws", get(websocket_handler))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// CORS for the configured origins; none configured means same-origin only
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if config.cors_origins.iter().any(|o| o == "*") {
        return base.allow_origin(AllowOrigin::any());
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    base.allow_origin(AllowOrigin::list(origins))
}

/// Start the server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Envdash listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Envdash shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let dataset = Arc::new(Dataset::environmental().unwrap());
        let state = AppState::new(dataset, ServerConfig::default());
        build_router(state)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_widget(widget: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(format!("/api/v1/widgets/{}", widget))
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/ready")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["sessions"], 0);
        assert_eq!(body["sessions_opened"], 0);
    }

    #[tokio::test]
    async fn test_index_page() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Environmental Dashboard"));
        assert!(html.contains("id=\"pie-chart\""));
    }

    #[tokio::test]
    async fn test_list_columns() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/columns")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["rows"], 6);
        assert_eq!(body["columns"].as_array().unwrap().len(), 9);
        assert_eq!(body["columns"][1]["name"], "Country");
        assert_eq!(body["columns"][1]["kind"], "categorical");
    }

    #[tokio::test]
    async fn test_list_widgets() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/widgets")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let widgets = body["widgets"].as_array().unwrap();
        assert_eq!(widgets.len(), 4);
        assert_eq!(widgets[3]["widget"], "pie");
        assert_eq!(widgets[3]["selection"]["pie-column"], "Country");
        assert_eq!(widgets[1]["roles"], serde_json::json!(["line-x", "line-y"]));
        assert_eq!(widgets[0]["state"], "rendered");
    }

    #[tokio::test]
    async fn test_update_bar_widget() {
        let app = create_test_app();

        let response = app
            .oneshot(post_widget(
                "bar",
                r#"{"selection": {"bar-column": "Air Quality Index (AQI)"}}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["widget"], "bar");
        assert_eq!(body["state"], "rendered");
        assert_eq!(
            body["figure"]["layout"]["title"]["text"],
            "Bar Plot of Air Quality Index (AQI)"
        );
        assert_eq!(
            body["figure"]["data"][0]["y"],
            serde_json::json!([178, 441, 418, 44, 224, 162])
        );
        assert_eq!(
            body["figure"]["data"][0]["x"],
            serde_json::json!([0, 1, 2, 3, 4, 5])
        );
    }

    #[tokio::test]
    async fn test_update_pie_widget() {
        let app = create_test_app();

        let response = app
            .oneshot(post_widget("pie", r#"{"selection": {"pie-column": "Country"}}"#))
            .await
            .unwrap();

        let body = body_json(response).await;
        assert_eq!(
            body["figure"]["data"][0]["labels"],
            serde_json::json!(["China", "Italy", "France", "India"])
        );
        assert_eq!(body["figure"]["data"][0]["values"], serde_json::json!([3, 1, 1, 1]));
    }

    #[tokio::test]
    async fn test_update_incomplete_selection_is_empty() {
        let app = create_test_app();

        let response = app
            .oneshot(post_widget("scatter", r#"{"selection": {"scatter-x": "Year"}}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["state"], "empty");
        assert_eq!(body["figure"], serde_json::json!({}));
    }

    #[tokio::test]
    async fn test_update_unknown_column_is_empty() {
        let app = create_test_app();

        let response = app
            .oneshot(post_widget("bar", r#"{"selection": {"bar-column": "GDP"}}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["state"], "empty");
    }

    #[tokio::test]
    async fn test_update_unknown_widget() {
        let app = create_test_app();

        let response = app
            .oneshot(post_widget("donut", r#"{"selection": {}}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "WIDGET_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_update_foreign_role() {
        let app = create_test_app();

        let response = app
            .oneshot(post_widget("bar", r#"{"selection": {"line-x": "Year"}}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_invalid_json() {
        let app = create_test_app();

        let response = app.oneshot(post_widget("bar", "not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_update_wrong_selection_shape() {
        let app = create_test_app();

        let response = app
            .oneshot(post_widget("bar", r#"{"selection": ["Year"]}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
