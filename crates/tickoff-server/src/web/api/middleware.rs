use crate::error::AppError;
use crate::identity::resolve_bearer;
use crate::state::AppState;
use axum::{
    extract::{FromRequest, FromRequestParts, Request},
    http::{header, request::Parts},
    Json,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tickoff_db::UserRow;

/// Extractor that resolves the Bearer token to a stored user.
/// Handlers taking `CurrentUser` reject unauthenticated requests with 401.
#[derive(Debug)]
pub struct CurrentUser(pub UserRow);

impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        let user = resolve_bearer(&state.pool, &state.config.auth.jwt_secret, auth_header).await?;
        Ok(CurrentUser(user))
    }
}

/// `Json` with rejections reported as validation errors in the API's
/// `{"detail": ...}` shape.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(AppError::Validation(rejection.body_text())),
        }
    }
}
