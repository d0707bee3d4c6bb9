//! Remote store abstraction.
//!
//! The hosted backend-as-a-service exposes table-style reads and single-row
//! inserts; everything this client needs fits behind the [`RemoteStore`]
//! trait. The HTTP implementation talks to the real service, the in-memory
//! implementation backs tests and local development.

mod http;
mod memory;

pub use http::HttpStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::AppError;

/// Sort direction for an ordered select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    Ascending,
    Descending,
}

/// A related table joined into each selected row.
#[derive(Debug, Clone)]
pub enum Embed {
    /// Single related row: `row[fk]` points at the related table's `id`.
    Parent {
        field: String,
        table: String,
        fk: String,
    },
    /// Related collection: child rows whose `fk` column points at `row.id`.
    Children {
        field: String,
        table: String,
        fk: String,
    },
}

/// A declarative read against one table, with optional embeds, an optional
/// equality filter, and optional ordering.
#[derive(Debug, Clone)]
pub struct SelectQuery {
    pub table: String,
    pub embeds: Vec<Embed>,
    pub filter: Option<(String, String)>,
    pub order: Option<(String, OrderDirection)>,
}

impl SelectQuery {
    pub fn from_table(table: &str) -> Self {
        Self {
            table: table.to_string(),
            embeds: Vec::new(),
            filter: None,
            order: None,
        }
    }

    /// Join the parent row referenced by `fk` under `field`.
    pub fn embed_parent(mut self, field: &str, table: &str, fk: &str) -> Self {
        self.embeds.push(Embed::Parent {
            field: field.to_string(),
            table: table.to_string(),
            fk: fk.to_string(),
        });
        self
    }

    /// Join the child rows whose `fk` references this row under `field`.
    pub fn embed_children(mut self, field: &str, table: &str, fk: &str) -> Self {
        self.embeds.push(Embed::Children {
            field: field.to_string(),
            table: table.to_string(),
            fk: fk.to_string(),
        });
        self
    }

    /// Keep only rows whose `column` equals `value`.
    pub fn filter_eq(mut self, column: &str, value: &str) -> Self {
        self.filter = Some((column.to_string(), value.to_string()));
        self
    }

    pub fn order_by(mut self, column: &str, direction: OrderDirection) -> Self {
        self.order = Some((column.to_string(), direction));
        self
    }

    pub fn order_desc(self, column: &str) -> Self {
        self.order_by(column, OrderDirection::Descending)
    }
}

/// Capability set this client requires of the hosted store.
///
/// No update, delete, or auth operations are exercised by the in-scope
/// workflow.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Read rows, optionally joined with related tables and ordered.
    ///
    /// Fails closed: an error means no rows, never a partial result.
    async fn select(&self, query: SelectQuery) -> Result<Vec<Value>, AppError>;

    /// Insert a single row, returning the persisted row.
    async fn insert(&self, table: &str, row: Value) -> Result<Value, AppError>;
}
