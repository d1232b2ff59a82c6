//! Executor module for the three backup stages

pub mod commit;
pub mod copy;
pub mod push;

pub use commit::commit_stage;
pub use copy::{copy_preserving_metadata, copy_stage, ensure_destination};
pub use push::push_stage;
