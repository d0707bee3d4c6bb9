//! View-models for the dashboard's idea cards.
//!
//! Pure mappings from model to presentation data: no remote calls, no state.
//! User actions surface as [`CardIntent`] values the orchestrator turns into
//! commands.

use chrono::DateTime;

use crate::models::{Idea, IdeaStatus, VoteKind};

/// Badge style for an idea's moderation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    Warning,
    Success,
    Danger,
    Info,
    Neutral,
}

impl BadgeStyle {
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeStyle::Warning => "badge-warning",
            BadgeStyle::Success => "badge-success",
            BadgeStyle::Danger => "badge-danger",
            BadgeStyle::Info => "badge-info",
            BadgeStyle::Neutral => "badge-neutral",
        }
    }
}

/// Total status-to-style mapping. `Unknown` gets an explicit neutral badge
/// instead of silently inheriting some default styling.
pub fn badge_for_status(status: IdeaStatus) -> BadgeStyle {
    match status {
        IdeaStatus::Pending => BadgeStyle::Warning,
        IdeaStatus::Approved => BadgeStyle::Success,
        IdeaStatus::Rejected => BadgeStyle::Danger,
        IdeaStatus::Implemented => BadgeStyle::Info,
        IdeaStatus::Unknown => BadgeStyle::Neutral,
    }
}

/// An attachment link on a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentLink {
    pub file_name: String,
    pub file_url: String,
}

/// Everything the idea card renders.
#[derive(Debug, Clone)]
pub struct IdeaCard {
    pub idea_id: String,
    pub title: String,
    pub author: String,
    pub submitted_on: String,
    pub status_label: &'static str,
    pub badge: BadgeStyle,
    pub description: String,
    pub attachments: Vec<AttachmentLink>,
    pub vote_count: i64,
    pub comment_count: usize,
}

impl IdeaCard {
    pub fn from_idea(idea: &Idea) -> Self {
        Self {
            idea_id: idea.id.clone(),
            title: idea.title.clone(),
            author: idea.user.full_name.clone(),
            submitted_on: format_date(&idea.created_at),
            status_label: idea.status.as_str(),
            badge: badge_for_status(idea.status),
            description: idea.description.clone(),
            attachments: idea
                .attachments
                .iter()
                .map(|a| AttachmentLink {
                    file_name: a.file_name.clone(),
                    file_url: a.file_url.clone(),
                })
                .collect(),
            vote_count: idea.votes,
            comment_count: idea.comments.len(),
        }
    }

    /// The intent emitted by the card's vote buttons.
    pub fn vote_intent(&self, direction: VoteKind) -> CardIntent {
        CardIntent::Vote {
            idea_id: self.idea_id.clone(),
            direction,
        }
    }

    /// The intent emitted by the card's comment button.
    pub fn comment_intent(&self) -> CardIntent {
        CardIntent::Comment {
            idea_id: self.idea_id.clone(),
        }
    }
}

/// A user action emitted by a card, handled by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardIntent {
    Vote { idea_id: String, direction: VoteKind },
    Comment { idea_id: String },
}

/// Render an RFC 3339 timestamp as e.g. `Aug 27, 2026`. Falls back to the
/// raw string when the timestamp does not parse.
fn format_date(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.format("%b %-d, %Y").to_string(),
        Err(_) => timestamp.to_string(),
    }
}
