use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User model (safe for client responses -- no password_hash)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// User plus derived statistics, returned by the profile endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub todo_count: i64,
}

impl UserProfile {
    pub fn new(user: User, todo_count: i64) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
            todo_count,
        }
    }
}
