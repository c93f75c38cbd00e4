use crate::auth::{
    create_access_token, dummy_password_hash, hash_password_blocking, needs_rehash,
    verify_password_blocking,
};
use crate::config::AuthConfig;
use crate::error::{AppError, AppResult, EMAIL_TAKEN};
use anyhow::Context;
use sqlx::PgPool;
use tickoff_common::models::auth::AuthResponse;
use tickoff_common::models::user::{User, UserProfile};
use tickoff_common::validation;
use tickoff_db::{TodoRepo, UserRepo, UserRow};

fn issue(user: UserRow, auth: &AuthConfig) -> AppResult<AuthResponse> {
    let token = create_access_token(user.id, &auth.jwt_secret, auth.token_ttl())?;
    Ok(AuthResponse {
        user: User::from(user),
        token,
    })
}

/// Register a new user and sign them in.
pub async fn signup(
    pool: &PgPool,
    auth: &AuthConfig,
    name: &str,
    email: &str,
    password: &str,
) -> AppResult<AuthResponse> {
    let name = validation::validate_name(name).map_err(AppError::validation)?;
    let email = validation::normalize_email(email).map_err(AppError::validation)?;
    validation::validate_password(password).map_err(AppError::validation)?;

    if UserRepo::get_by_email(pool, &email).await?.is_some() {
        return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
    }

    let password_hash = hash_password_blocking(password.to_string()).await?;
    // A concurrent signup can still win the race; the unique constraint decides.
    let user = UserRepo::create(pool, &name, &email, &password_hash)
        .await?
        .ok_or_else(|| AppError::Conflict(EMAIL_TAKEN.to_string()))?;

    tracing::info!("Registered user {}", user.id);
    issue(user, auth)
}

/// Authenticate with email and password.
///
/// Unknown email and wrong password are indistinguishable to the caller.
pub async fn login(
    pool: &PgPool,
    auth: &AuthConfig,
    email: &str,
    password: &str,
) -> AppResult<AuthResponse> {
    let email = validation::normalize_email(email).map_err(AppError::validation)?;

    let user = UserRepo::get_by_email(pool, &email).await?;
    let stored_hash = match &user {
        Some(u) => u.password_hash.clone(),
        None => dummy_password_hash().to_string(),
    };
    let matched = verify_password_blocking(password.to_string(), stored_hash).await?;

    let user = match user {
        Some(u) if matched => u,
        _ => return Err(AppError::invalid_login()),
    };

    if needs_rehash(&user.password_hash) {
        upgrade_password_hash(pool, user.id, password).await;
    }

    tracing::info!("User {} logged in", user.id);
    issue(user, auth)
}

/// Replace a legacy hash with argon2id. Failures are logged and ignored.
async fn upgrade_password_hash(pool: &PgPool, user_id: i64, password: &str) {
    let result = async {
        let new_hash = hash_password_blocking(password.to_string()).await?;
        UserRepo::update_password_hash(pool, user_id, &new_hash)
            .await
            .context("Failed to store upgraded hash")
    }
    .await;

    match result {
        Ok(()) => tracing::info!("Upgraded password hash for user {}", user_id),
        Err(e) => tracing::warn!("Password hash upgrade failed for user {}: {:#}", user_id, e),
    }
}

/// Public profile of the authenticated user with their todo count.
pub async fn profile(pool: &PgPool, user: UserRow) -> AppResult<UserProfile> {
    let todo_count = TodoRepo::count_by_user(pool, user.id).await?;
    Ok(UserProfile::new(User::from(user), todo_count))
}
