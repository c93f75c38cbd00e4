use crate::accounts;
use crate::error::AppResult;
use crate::state::AppState;
use crate::web::api::middleware::{CurrentUser, JsonBody};
use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use std::sync::Arc;
use tickoff_common::models::auth::AuthResponse;
use tickoff_common::models::user::UserProfile;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/auth/signup
#[tracing::instrument(skip(state, req))]
pub async fn signup(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<SignupRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let response = accounts::signup(
        &state.pool,
        &state.config.auth,
        &req.name,
        &req.email,
        &req.password,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/auth/login
#[tracing::instrument(skip(state, req))]
pub async fn login(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let response =
        accounts::login(&state.pool, &state.config.auth, &req.email, &req.password).await?;
    Ok(Json(response))
}

/// GET /api/auth/profile
#[tracing::instrument(skip(state, user))]
pub async fn profile(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Json<UserProfile>> {
    let profile = accounts::profile(&state.pool, user).await?;
    Ok(Json(profile))
}
