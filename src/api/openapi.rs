//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, books, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stacks API",
        version = "0.1.0",
        description = "Library circulation REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Session
        auth::login,
        auth::logout,
        auth::me,
        // Books
        books::list_all_titles,
        books::list_my_books,
        books::checkout_book,
        books::return_book,
    ),
    components(
        schemas(
            auth::LoginRequest,
            crate::session::SessionView,
            books::SerialRequest,
            crate::models::TitleListing,
            crate::models::MyBook,
            crate::api::SuccessResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Patron session"),
        (name = "books", description = "Catalog and circulation")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
