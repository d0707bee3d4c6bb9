//! In-memory implementation of the remote store.
//!
//! Backs tests and local development with the same observable behavior the
//! hosted service provides: generated ids and timestamps, embed resolution,
//! and the `votes` aggregate on idea rows (recomputed here because the
//! aggregation is the store's responsibility, not the client's).

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, SecondsFormat, Utc};
use serde_json::{json, Value};

use super::{Embed, OrderDirection, RemoteStore, SelectQuery};
use crate::errors::AppError;

/// Table-map store with injectable failures.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<HashMap<String, Vec<Value>>>,
    // (table filter, message); None matches any table
    fail_next_insert: Mutex<Option<(Option<String>, String)>>,
    fail_reads: AtomicBool,
    // Strictly increasing timestamp offset so insertion order survives sorting
    seq: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next insert fail with the given message.
    pub fn fail_next_insert(&self, message: &str) {
        *self.fail_next_insert.lock().unwrap() = Some((None, message.to_string()));
    }

    /// Make the next insert into `table` fail; other tables are unaffected.
    pub fn fail_next_insert_into(&self, table: &str, message: &str) {
        *self.fail_next_insert.lock().unwrap() =
            Some((Some(table.to_string()), message.to_string()));
    }

    /// Make every select fail until cleared.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of a table's rows, in insertion order.
    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.tables
            .lock()
            .unwrap()
            .get(table)
            .cloned()
            .unwrap_or_default()
    }

    fn next_timestamp(&self) -> String {
        let offset = self.seq.fetch_add(1, Ordering::SeqCst);
        (Utc::now() + Duration::microseconds(offset))
            .to_rfc3339_opts(SecondsFormat::Micros, true)
    }

    /// Fill in the columns the hosted service would generate.
    fn apply_row_defaults(&self, table: &str, row: &mut Value) {
        let now = self.next_timestamp();
        let obj = match row.as_object_mut() {
            Some(obj) => obj,
            None => return,
        };

        obj.entry("id")
            .or_insert_with(|| json!(uuid::Uuid::new_v4().to_string()));
        obj.entry("created_at").or_insert_with(|| json!(now));

        if table == "ideas" {
            obj.entry("status").or_insert_with(|| json!("pending"));
            obj.entry("votes").or_insert_with(|| json!(0));
            let created = obj.get("created_at").cloned().unwrap_or(json!(now));
            obj.entry("updated_at").or_insert(created);
        }
    }

    /// Recompute the `votes` aggregate of the idea a new vote row points at.
    fn recompute_votes(tables: &mut HashMap<String, Vec<Value>>, idea_id: &str) {
        let total: i64 = tables
            .get("votes")
            .map(|votes| {
                votes
                    .iter()
                    .filter(|v| v.get("idea_id").and_then(Value::as_str) == Some(idea_id))
                    .map(|v| match v.get("type").and_then(Value::as_str) {
                        Some("down") => -1,
                        _ => 1,
                    })
                    .sum()
            })
            .unwrap_or(0);

        if let Some(ideas) = tables.get_mut("ideas") {
            for idea in ideas.iter_mut() {
                if idea.get("id").and_then(Value::as_str) == Some(idea_id) {
                    idea["votes"] = json!(total);
                }
            }
        }
    }

    fn resolve_embeds(
        tables: &HashMap<String, Vec<Value>>,
        embeds: &[Embed],
        row: &mut Value,
    ) {
        for embed in embeds {
            match embed {
                Embed::Parent { field, table, fk } => {
                    let parent_id = row.get(fk).and_then(Value::as_str).map(str::to_string);
                    let parent = parent_id.and_then(|id| {
                        tables.get(table).and_then(|rows| {
                            rows.iter()
                                .find(|r| r.get("id").and_then(Value::as_str) == Some(id.as_str()))
                                .cloned()
                        })
                    });
                    row[field.as_str()] = parent.unwrap_or(Value::Null);
                }
                Embed::Children { field, table, fk } => {
                    let row_id = row.get("id").and_then(Value::as_str).map(str::to_string);
                    let children: Vec<Value> = match (row_id, tables.get(table)) {
                        (Some(id), Some(rows)) => rows
                            .iter()
                            .filter(|r| {
                                r.get(fk).and_then(Value::as_str) == Some(id.as_str())
                            })
                            .cloned()
                            .collect(),
                        _ => Vec::new(),
                    };
                    row[field.as_str()] = Value::Array(children);
                }
            }
        }
    }
}

#[async_trait]
impl RemoteStore for MemoryStore {
    async fn select(&self, query: SelectQuery) -> Result<Vec<Value>, AppError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(AppError::RemoteRead(format!(
                "Select from {} failed: connection refused",
                query.table
            )));
        }

        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<Value> = tables.get(&query.table).cloned().unwrap_or_default();

        if let Some((column, value)) = &query.filter {
            rows.retain(|r| r.get(column.as_str()).and_then(Value::as_str) == Some(value.as_str()));
        }

        for row in rows.iter_mut() {
            Self::resolve_embeds(&tables, &query.embeds, row);
        }

        if let Some((column, direction)) = &query.order {
            rows.sort_by(|a, b| {
                let left = a.get(column.as_str()).and_then(Value::as_str).unwrap_or("");
                let right = b.get(column.as_str()).and_then(Value::as_str).unwrap_or("");
                match direction {
                    OrderDirection::Ascending => left.cmp(right),
                    OrderDirection::Descending => right.cmp(left),
                }
            });
        }

        Ok(rows)
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Value, AppError> {
        {
            let mut pending = self.fail_next_insert.lock().unwrap();
            let matches = match pending.as_ref() {
                Some((Some(t), _)) => t == table,
                Some((None, _)) => true,
                None => false,
            };
            if matches {
                if let Some((_, message)) = pending.take() {
                    return Err(AppError::RemoteWrite(format!(
                        "Insert into {} failed: {}",
                        table, message
                    )));
                }
            }
        }

        let mut row = row;
        self.apply_row_defaults(table, &mut row);

        let mut tables = self.tables.lock().unwrap();
        tables
            .entry(table.to_string())
            .or_default()
            .push(row.clone());

        if table == "votes" {
            if let Some(idea_id) = row.get("idea_id").and_then(Value::as_str) {
                let idea_id = idea_id.to_string();
                Self::recompute_votes(&mut tables, &idea_id);
            }
        }

        Ok(row)
    }
}
