use crate::auth::validate_access_token;
use crate::error::{AppError, AppResult};
use sqlx::PgPool;
use tickoff_db::{UserRepo, UserRow};

/// Extract the token from an `Authorization: Bearer <token>` header value.
/// The scheme is matched case-insensitively.
pub fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Resolve the caller of a protected request to a stored user.
///
/// A missing header, a bad token, a non-numeric subject and a subject that
/// no longer exists all produce the same `Unauthorized`. Runs on every
/// request; nothing is cached.
pub async fn resolve_bearer(
    pool: &PgPool,
    jwt_secret: &str,
    authorization: Option<&str>,
) -> AppResult<UserRow> {
    let token = match authorization.and_then(bearer_token) {
        Some(t) => t,
        None => {
            tracing::debug!("Missing or malformed authorization header");
            return Err(AppError::invalid_credentials());
        }
    };

    let claims = match validate_access_token(token, jwt_secret) {
        Some(c) => c,
        None => {
            tracing::debug!("Rejected invalid or expired token");
            return Err(AppError::invalid_credentials());
        }
    };

    let user_id: i64 = match claims.sub.parse() {
        Ok(id) => id,
        Err(_) => {
            tracing::debug!("Token subject '{}' is not a user id", claims.sub);
            return Err(AppError::invalid_credentials());
        }
    };

    match UserRepo::get_by_id(pool, user_id).await? {
        Some(user) => Ok(user),
        None => {
            tracing::debug!("Token subject {} has no matching user", user_id);
            Err(AppError::invalid_credentials())
        }
    }
}
