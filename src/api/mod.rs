//! API handlers for the circulation REST endpoints

pub mod auth;
pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::ToSchema;

use crate::{error::AppResult, AppState};

/// Outcome of a state-changing operation
#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Collapse ordinary rejections (bad login, unknown copy, no session) into
/// `{"success": false}`; faults still propagate as error responses.
pub(crate) fn outcome<T>(result: AppResult<T>) -> AppResult<Json<SuccessResponse>> {
    match result {
        Ok(_) => Ok(Json(SuccessResponse { success: true })),
        Err(e) if e.is_rejection() => {
            tracing::debug!("Operation rejected: {}", e);
            Ok(Json(SuccessResponse { success: false }))
        }
        Err(e) => Err(e),
    }
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Session
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/me", get(auth::me))
        // Catalog and circulation
        .route("/titles", get(books::list_all_titles))
        .route("/my-books", get(books::list_my_books))
        .route("/books/checkout", post(books::checkout_book))
        .route("/books/return", post(books::return_book))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
