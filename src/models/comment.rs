//! Comment model matching the remote `comments` table.

use serde::{Deserialize, Serialize};

use super::User;

/// A comment on an idea. Append-only from this client's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub created_at: String,
    pub user_id: String,
    pub idea_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}
