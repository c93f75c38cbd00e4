use anyhow::{Context, Result};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::sync::OnceLock;
use tickoff_common::models::auth::Claims;

/// Hash a password using argon2id
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;
    Ok(hash.to_string())
}

fn is_bcrypt_hash(hash: &str) -> bool {
    ["$2a$", "$2b$", "$2x$", "$2y$"]
        .iter()
        .any(|prefix| hash.starts_with(prefix))
}

/// Verify a password against a stored hash.
///
/// Argon2 hashes are the primary scheme; bcrypt hashes written before the
/// switch still verify. Malformed or unknown hashes never match.
pub fn verify_password(password: &str, hash: &str) -> bool {
    if is_bcrypt_hash(hash) {
        return bcrypt::verify(password, hash).unwrap_or(false);
    }

    match PasswordHash::new(hash) {
        Ok(parsed) if parsed.algorithm.as_str().starts_with("argon2") => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        _ => false,
    }
}

/// Hash a password on the blocking thread pool
pub async fn hash_password_blocking(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .context("Password hashing task panicked")?
}

/// Verify a password on the blocking thread pool
pub async fn verify_password_blocking(password: String, hash: String) -> Result<bool> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .context("Password verification task panicked")
}

/// Argon2id hash of a throwaway password, verified against when a login
/// names an unknown email so both paths cost one full argon2 run.
pub fn dummy_password_hash() -> &'static str {
    static DUMMY: OnceLock<String> = OnceLock::new();
    DUMMY.get_or_init(|| {
        hash_password("tickoff-unknown-user").unwrap_or_else(|e| {
            tracing::warn!("Failed to build dummy password hash: {:#}", e);
            String::new()
        })
    })
}

/// True if the stored hash should be replaced with a fresh argon2id hash
/// the next time the plaintext is available.
pub fn needs_rehash(hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => parsed.algorithm != argon2::Algorithm::Argon2id.ident(),
        Err(_) => true,
    }
}

/// Create an access token (JWT) for `user_id`, valid for `ttl`
pub fn create_access_token(user_id: i64, jwt_secret: &str, ttl: Duration) -> Result<String> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: (now + ttl).timestamp(),
    };
    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .context("Failed to create access token")
}

/// Validate an access token and return its claims.
///
/// Expired, tampered, malformed and foreign-key tokens all come back as
/// `None`; callers treat that as "unauthenticated", not as an error.
pub fn validate_access_token(token: &str, jwt_secret: &str) -> Option<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .ok()
}
