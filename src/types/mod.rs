//! Core type definitions for dotback

mod error;
mod outcome;

pub use error::DotbackError;
pub(crate) use outcome::emit_event;
pub use outcome::{
    BackupEvent, BackupSummary, CommitOutcome, CommitReport, CopyOutcome, EventCallback,
    PushOutcome,
};
