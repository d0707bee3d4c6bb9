//! Data models for the Ideaboard application.
//!
//! These models match the remote store's row shapes exactly, so every struct
//! (de)serializes with the column names used by the hosted service.

mod attachment;
mod comment;
mod idea;
mod user;
mod vote;

pub use attachment::*;
pub use comment::*;
pub use idea::*;
pub use user::*;
pub use vote::*;
