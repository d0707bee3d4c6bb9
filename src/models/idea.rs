//! Idea model matching the remote `ideas` table.

use serde::{Deserialize, Serialize};

use super::{Attachment, Comment, User};

/// Moderation status of an idea.
///
/// Status transitions are performed by an external moderation process; this
/// client only reads the value. `Unknown` absorbs any status value a newer
/// moderation process may introduce, so one unexpected row cannot fail the
/// whole list decode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IdeaStatus {
    Pending,
    Approved,
    Rejected,
    Implemented,
    #[serde(other)]
    Unknown,
}

impl IdeaStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdeaStatus::Pending => "pending",
            IdeaStatus::Approved => "approved",
            IdeaStatus::Rejected => "rejected",
            IdeaStatus::Implemented => "implemented",
            IdeaStatus::Unknown => "unknown",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(IdeaStatus::Pending),
            "approved" => Some(IdeaStatus::Approved),
            "rejected" => Some(IdeaStatus::Rejected),
            "implemented" => Some(IdeaStatus::Implemented),
            _ => None,
        }
    }
}

/// An improvement idea with its denormalized relations.
///
/// The `votes` total reflects the associated vote rows; recomputing it is the
/// remote store's responsibility, never this client's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Idea {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub status: IdeaStatus,
    pub votes: i64,
    pub created_at: String,
    pub updated_at: String,
    pub user_id: String,
    pub user: User,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// Insert payload for a new idea row.
///
/// Produced by form validation; the remote store assigns id, status, votes,
/// and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewIdea {
    pub title: String,
    pub description: String,
    pub category: String,
    pub user_id: String,
}
