//! Session endpoints: login, logout and the current patron

use axum::{extract::State, Json};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{error::AppResult, session::SessionView, AppState};

use super::{outcome, SuccessResponse};

/// Login request
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Patron name, matched exactly
    pub name: String,
    /// Library card number
    #[serde(alias = "cardnum", alias = "cardNum")]
    pub card_num: i32,
}

/// Log a patron in
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "`success` is false when name and card do not match", body = SuccessResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<SuccessResponse>> {
    let result = state
        .services
        .circulation
        .login(&state.session, &request.name, request.card_num)
        .await;
    outcome(result)
}

/// Log the current patron out
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Always succeeds", body = SuccessResponse)
    )
)]
pub async fn logout(State(state): State<AppState>) -> Json<SuccessResponse> {
    state.services.circulation.logout(&state.session).await;
    Json(SuccessResponse { success: true })
}

/// Current session
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    responses(
        (status = 200, description = "Signed-in patron, or null card and empty name", body = SessionView)
    )
)]
pub async fn me(State(state): State<AppState>) -> Json<SessionView> {
    Json(state.session.current().await.into())
}
