//! Write-side workflow: idea creation and voting.
//!
//! Commands perform the remote insert, invalidate the idea list on success,
//! and log failures. Nothing here is optimistic: the UI only changes after
//! the subsequent re-fetch, so a failed command needs no rollback.

use serde_json::Value;

use crate::cache::QueryCache;
use crate::errors::{AppError, FieldError};
use crate::models::{FileRef, NewIdea, NewVote, VoteKind};
use crate::queries::IDEAS_QUERY_KEY;
use crate::store::RemoteStore;

/// Maximum idea title length, mirrored by form validation.
pub const MAX_TITLE_LEN: usize = 100;

/// Insert a new idea row, then one attachment row per collected file.
///
/// Returns the id of the created idea. The idea and its attachments are
/// independently-failing writes: if an attachment insert fails after the idea
/// insert succeeded, the failure is surfaced rather than silently dropped,
/// and the idea stays persisted without that attachment.
pub async fn create_idea(
    store: &dyn RemoteStore,
    cache: &QueryCache,
    new_idea: NewIdea,
    files: Vec<FileRef>,
) -> Result<String, AppError> {
    // The form validates before dispatch; this guard keeps direct callers honest
    if let Err(errors) = check_payload(&new_idea) {
        return Err(AppError::Validation(errors));
    }

    let row = serde_json::to_value(&new_idea)
        .map_err(|e| AppError::RemoteWrite(format!("Unserializable idea payload: {}", e)))?;

    let created = store.insert("ideas", row).await.inspect_err(|e| {
        tracing::error!("Error creating idea: {}", e);
    })?;

    let idea_id = row_id(&created)
        .ok_or_else(|| AppError::RemoteWrite("Created idea row has no id".to_string()))?;

    for file in files {
        let attachment = file.into_new_attachment(&idea_id);
        let row = serde_json::to_value(&attachment)
            .map_err(|e| AppError::RemoteWrite(format!("Unserializable attachment: {}", e)))?;
        store.insert("attachments", row).await.inspect_err(|e| {
            tracing::error!(idea_id = %idea_id, "Error attaching file: {}", e);
        })?;
    }

    cache.invalidate(IDEAS_QUERY_KEY);
    tracing::info!(idea_id = %idea_id, "Idea created");
    Ok(idea_id)
}

/// Insert one vote row. Every invocation inserts exactly one row; repeat
/// votes by the same user are not de-duplicated here, so any uniqueness
/// constraint must live in the remote schema.
pub async fn cast_vote(
    store: &dyn RemoteStore,
    cache: &QueryCache,
    idea_id: &str,
    user_id: &str,
    kind: VoteKind,
) -> Result<(), AppError> {
    let vote = NewVote {
        idea_id: idea_id.to_string(),
        user_id: user_id.to_string(),
        kind,
    };
    let row = serde_json::to_value(&vote)
        .map_err(|e| AppError::RemoteWrite(format!("Unserializable vote payload: {}", e)))?;

    store.insert("votes", row).await.inspect_err(|e| {
        tracing::error!(idea_id, "Error voting: {}", e);
    })?;

    cache.invalidate(IDEAS_QUERY_KEY);
    tracing::debug!(idea_id, kind = kind.as_str(), "Vote recorded");
    Ok(())
}

fn check_payload(new_idea: &NewIdea) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    if new_idea.title.trim().is_empty() {
        errors.push(FieldError::new("title", "Title is required"));
    } else if new_idea.title.chars().count() > MAX_TITLE_LEN {
        errors.push(FieldError::new("title", "Title must be 100 characters or fewer"));
    }
    if new_idea.description.trim().is_empty() {
        errors.push(FieldError::new("description", "Description is required"));
    }
    if new_idea.category.trim().is_empty() {
        errors.push(FieldError::new("category", "Category is required"));
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn row_id(row: &Value) -> Option<String> {
    row.get("id").and_then(Value::as_str).map(str::to_string)
}
