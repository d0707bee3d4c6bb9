//! Ideaboard client core
//!
//! The client-side workflow of the internal ideas management application:
//! employees submit improvement ideas, attach files, vote, and comment, with
//! persistence delegated to a hosted remote store. This crate owns the data
//! models, the remote store abstraction, the explicit query cache, the
//! submission/vote commands, form validation, and the dashboard orchestrator;
//! rendering and auth session handling live in the surrounding shell.

pub mod cache;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod form;
pub mod models;
pub mod notify;
pub mod queries;
pub mod store;
pub mod views;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging for the embedding shell.
///
/// Honors `RUST_LOG` when set, falling back to `default_level`. Safe to call
/// more than once; later calls are no-ops.
pub fn init_tracing(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests;
