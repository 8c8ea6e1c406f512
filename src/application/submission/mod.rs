//! Guarded submissions - dedup of repeated user-triggered actions

pub mod guard;
pub mod join;

pub use guard::SubmissionGuard;
pub use join::JoinPrompt;
