//! # cinelog-api
//!
//! HTTP server for movie notes and their tags.
//!
//! The binary in `main.rs` loads [`ApiConfig`], initializes logging, runs
//! migrations, and serves [`router`]. The router is exposed here so it can be
//! driven in-process by integration tests.

pub mod config;
pub mod error;
pub mod handlers;
pub mod openapi;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

use cinelog_db::Database;

pub use config::{ApiConfig, LogConfig, LogFormat};
pub use error::ApiError;
pub use openapi::ApiDoc;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

/// Request ID generator producing UUIDv7 values (time-ordered).
#[derive(Clone, Copy, Default)]
pub struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

/// Convert configured origins to header values, skipping invalid entries.
fn cors_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!(
                    subsystem = "api",
                    origin = %origin,
                    error = %e,
                    "Invalid CORS origin ignored"
                );
                None
            }
        })
        .collect()
}

/// Build the application router with all routes and middleware.
pub fn router(state: AppState, config: &ApiConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(cors_origins(&config.allowed_origins)))
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(std::time::Duration::from_secs(3600));

    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/api/v1/users/:user_id/movie_notes",
            axum::routing::post(handlers::create_movie_note),
        )
        .route("/api/v1/movie_notes", get(handlers::list_movie_notes))
        .route(
            "/api/v1/movie_notes/:id",
            get(handlers::get_movie_note).delete(handlers::delete_movie_note),
        )
        .route("/api/v1/movie_tags/:user_id", get(handlers::list_user_tags))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_origins_skips_invalid() {
        let origins = vec![
            "http://localhost:3000".to_string(),
            "bad\norigin".to_string(),
        ];
        let parsed = cors_origins(&origins);
        assert_eq!(parsed, vec![HeaderValue::from_static("http://localhost:3000")]);
    }

    #[test]
    fn test_request_ids_are_unique() {
        let mut make = MakeRequestUuidV7;
        let req = axum::http::Request::new(());
        let a = make.make_request_id(&req).unwrap();
        let b = make.make_request_id(&req).unwrap();
        assert_ne!(a.header_value(), b.header_value());
    }
}
