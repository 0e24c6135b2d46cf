//! Companion features
//!
//! The scripted chat buddy and the mood journal.

#![warn(missing_docs)]

pub mod error;
pub mod chat;
pub mod mood;

pub use error::{CompanionError, Result};
pub use chat::{ChatCompanion, PendingReply, ReplyDelay};
pub use mood::MoodJournal;
