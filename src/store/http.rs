//! HTTP implementation of the remote store.
//!
//! Speaks the hosted service's PostgREST-style dialect: embeds are expressed
//! in the `select` parameter, filters as `column=eq.value`, ordering as
//! `order=column.direction`, and inserts ask for the persisted representation
//! back.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::Value;

use super::{Embed, OrderDirection, RemoteStore, SelectQuery};
use crate::config::Config;
use crate::errors::AppError;

/// Remote store client for the hosted REST endpoint.
#[derive(Clone)]
pub struct HttpStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStore {
    /// Build a client from configuration. The API key, when present, is sent
    /// as both `apikey` and bearer token on every request.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let mut headers = HeaderMap::new();
        if let Some(key) = &config.api_key {
            let value = HeaderValue::from_str(key)
                .map_err(|_| AppError::Config("API key contains invalid characters".to_string()))?;
            headers.insert("apikey", value);
            let bearer = HeaderValue::from_str(&format!("Bearer {}", key))
                .map_err(|_| AppError::Config("API key contains invalid characters".to_string()))?;
            headers.insert(AUTHORIZATION, bearer);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.base_url, table)
    }

    /// Render the `select` parameter, e.g. `*,user:users(*),comments:comments(*)`.
    fn select_param(query: &SelectQuery) -> String {
        let mut parts = vec!["*".to_string()];
        for embed in &query.embeds {
            let (field, table) = match embed {
                Embed::Parent { field, table, .. } => (field, table),
                Embed::Children { field, table, .. } => (field, table),
            };
            parts.push(format!("{}:{}(*)", field, table));
        }
        parts.join(",")
    }
}

#[async_trait]
impl RemoteStore for HttpStore {
    async fn select(&self, query: SelectQuery) -> Result<Vec<Value>, AppError> {
        let mut params = vec![("select".to_string(), Self::select_param(&query))];
        if let Some((column, value)) = &query.filter {
            params.push((column.clone(), format!("eq.{}", value)));
        }
        if let Some((column, direction)) = &query.order {
            let dir = match direction {
                OrderDirection::Ascending => "asc",
                OrderDirection::Descending => "desc",
            };
            params.push(("order".to_string(), format!("{}.{}", column, dir)));
        }

        let response = self
            .client
            .get(self.table_url(&query.table))
            .query(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::RemoteRead(format!(
                "Select from {} failed with {}: {}",
                query.table, status, body
            )));
        }

        let rows: Vec<Value> = response.json().await?;
        Ok(rows)
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Value, AppError> {
        let response = self
            .client
            .post(self.table_url(table))
            .header("Prefer", "return=representation")
            .json(&row)
            .send()
            .await
            .map_err(|e| AppError::RemoteWrite(format!("Insert into {} failed: {}", table, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::RemoteWrite(format!(
                "Insert into {} failed with {}: {}",
                table, status, body
            )));
        }

        // The service returns the persisted representation as a one-row array
        let mut rows: Vec<Value> = response
            .json()
            .await
            .map_err(|e| AppError::RemoteWrite(format!("Insert into {} returned an unreadable body: {}", table, e)))?;

        rows.pop()
            .ok_or_else(|| AppError::RemoteWrite(format!("Insert into {} returned no row", table)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_param_renders_embeds() {
        let query = SelectQuery::from_table("ideas")
            .embed_parent("user", "users", "user_id")
            .embed_children("comments", "comments", "idea_id");

        assert_eq!(
            HttpStore::select_param(&query),
            "*,user:users(*),comments:comments(*)"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let config = Config {
            api_url: "https://example.test/rest/v1/".to_string(),
            api_key: None,
            log_level: "warn".to_string(),
        };
        let store = HttpStore::new(&config).unwrap();
        assert_eq!(store.table_url("ideas"), "https://example.test/rest/v1/ideas");
    }
}
