//! Read-side workflow: the idea list query.

use serde_json::Value;

use crate::cache::QueryCache;
use crate::errors::AppError;
use crate::models::Idea;
use crate::store::{RemoteStore, SelectQuery};

/// Cache identity of the idea list.
pub const IDEAS_QUERY_KEY: &str = "ideas";

fn idea_list_select() -> SelectQuery {
    SelectQuery::from_table("ideas")
        .embed_parent("user", "users", "user_id")
        .embed_children("comments", "comments", "idea_id")
        .embed_children("attachments", "attachments", "idea_id")
        .order_desc("created_at")
}

/// Fetch all ideas with their user, comments, and attachments, newest first.
///
/// Serves from the cache when a fresh entry exists; otherwise hits the remote
/// store and caches the raw payload. Fails closed: any remote or decode
/// failure yields an error and no partial list.
pub async fn fetch_ideas(
    store: &dyn RemoteStore,
    cache: &QueryCache,
) -> Result<Vec<Idea>, AppError> {
    let payload = match cache.get(IDEAS_QUERY_KEY) {
        Some(payload) => payload,
        None => {
            let rows = store.select(idea_list_select()).await.map_err(|e| match e {
                AppError::RemoteRead(msg) => AppError::RemoteRead(msg),
                other => AppError::RemoteRead(other.message()),
            })?;
            let payload = Value::Array(rows);
            cache.put(IDEAS_QUERY_KEY, payload.clone());
            payload
        }
    };

    let ideas: Vec<Idea> = serde_json::from_value(payload)?;
    tracing::debug!(count = ideas.len(), "Idea list loaded");
    Ok(ideas)
}
