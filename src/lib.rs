//! Client for a group broadcast API: list, post and recall broadcasts, plus a
//! guarded call-to-action for group prompts.

pub mod domain;
pub mod application;
pub mod infrastructure;

pub use application::errors::{ApiError, ApiResult, ConfigError, StorageError};
pub use application::services::{BroadcastClient, SessionService};
pub use application::submission::{JoinPrompt, SubmissionGuard};
pub use domain::entities::{Author, Broadcast, BroadcastStatus, GroupContext, GroupInfo};
pub use domain::traits::{ApiRequest, Method, SessionStore, Transport};
