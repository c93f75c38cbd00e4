use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Todo as exposed over the API. The owner is implied by the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}
