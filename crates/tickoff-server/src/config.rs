use anyhow::{bail, Context};
use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};

fn default_listen() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_token_ttl_days() -> i64 {
    7
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DbConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// Auth configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC key for access tokens
    pub jwt_secret: String,
    /// Access token lifetime in days (default: 7)
    #[serde(default = "default_token_ttl_days")]
    pub token_ttl_days: i64,
}

impl AuthConfig {
    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::days(self.token_ttl_days)
    }
}

/// Browser origins allowed to call the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl CorsConfig {
    pub fn origin_headers(&self) -> anyhow::Result<Vec<HeaderValue>> {
        self.allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .with_context(|| format!("Invalid CORS origin: {}", origin))
            })
            .collect()
    }
}

/// Server configuration - loaded from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen")]
    pub listen: String, // "0.0.0.0:8000"
    pub db: DbConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Reject settings that deserialize fine but cannot run.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.auth.jwt_secret.trim().is_empty() {
            bail!("auth.jwt_secret must not be empty");
        }
        if self.auth.token_ttl_days <= 0 {
            bail!("auth.token_ttl_days must be positive");
        }
        if self.db.max_connections == 0 {
            bail!("db.max_connections must be at least 1");
        }
        self.cors.origin_headers()?;
        Ok(())
    }
}

/// Load server config from an optional YAML file with TICKOFF__ env var overrides.
pub fn load_config(path: &str) -> anyhow::Result<ServerConfig> {
    let config: ServerConfig = config::Config::builder()
        .add_source(config::File::new(path, config::FileFormat::Yaml).required(false))
        .add_source(
            config::Environment::with_prefix("TICKOFF")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()
        .with_context(|| format!("Failed to build config from: {}", path))?
        .try_deserialize()
        .with_context(|| format!("Failed to deserialize config from: {}", path))?;
    config.validate()?;
    Ok(config)
}
