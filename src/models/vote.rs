//! Vote model matching the remote `votes` table.

use serde::{Deserialize, Serialize};

/// Direction of a vote.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VoteKind {
    Up,
    Down,
}

impl VoteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteKind::Up => "up",
            VoteKind::Down => "down",
        }
    }
}

/// One persisted vote. One row per cast; uniqueness, if any, lives in the
/// remote schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vote {
    pub id: String,
    pub idea_id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: VoteKind,
    pub created_at: String,
}

/// Insert payload for a vote row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVote {
    pub idea_id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: VoteKind,
}
