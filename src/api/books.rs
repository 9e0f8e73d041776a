//! Catalog listing and circulation endpoints

use axum::{extract::State, Json};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{MyBook, TitleListing},
    AppState,
};

use super::{outcome, SuccessResponse};

/// Copy selection for checkout and return
#[derive(Debug, Deserialize, ToSchema)]
pub struct SerialRequest {
    /// Copy serial number
    pub serial: i32,
}

/// List every title with its copy and current holder
#[utoipa::path(
    get,
    path = "/titles",
    tag = "books",
    responses(
        (status = 200, description = "All known titles", body = Vec<TitleListing>)
    )
)]
pub async fn list_all_titles(State(state): State<AppState>) -> AppResult<Json<Vec<TitleListing>>> {
    let titles = state.services.circulation.list_all_titles().await?;
    Ok(Json(titles))
}

/// List books checked out by the logged-in patron
#[utoipa::path(
    get,
    path = "/my-books",
    tag = "books",
    responses(
        (status = 200, description = "Books on loan; empty when nobody is logged in", body = Vec<MyBook>)
    )
)]
pub async fn list_my_books(State(state): State<AppState>) -> AppResult<Json<Vec<MyBook>>> {
    match state.services.circulation.list_my_books(&state.session).await {
        Ok(books) => Ok(Json(books)),
        Err(AppError::Authentication(msg)) => {
            tracing::debug!("Listing own books without session: {}", msg);
            Ok(Json(Vec::new()))
        }
        Err(e) => Err(e),
    }
}

/// Check a copy out to the logged-in patron
#[utoipa::path(
    post,
    path = "/books/checkout",
    tag = "books",
    request_body = SerialRequest,
    responses(
        (status = 200, description = "`success` is false for unknown or already checked out copies", body = SuccessResponse)
    )
)]
pub async fn checkout_book(
    State(state): State<AppState>,
    Json(request): Json<SerialRequest>,
) -> AppResult<Json<SuccessResponse>> {
    let result = state
        .services
        .circulation
        .checkout_book(&state.session, request.serial)
        .await;
    outcome(result)
}

/// Return a copy held by the logged-in patron
#[utoipa::path(
    post,
    path = "/books/return",
    tag = "books",
    request_body = SerialRequest,
    responses(
        (status = 200, description = "`success` is false unless the patron holds the copy", body = SuccessResponse)
    )
)]
pub async fn return_book(
    State(state): State<AppState>,
    Json(request): Json<SerialRequest>,
) -> AppResult<Json<SuccessResponse>> {
    let result = state
        .services
        .circulation
        .return_book(&state.session, request.serial)
        .await;
    outcome(result)
}
