//! Application services

pub mod broadcast_service;
pub mod session_service;

pub use broadcast_service::{BroadcastClient, decode_ack};
pub use session_service::{SessionService, GROUP_KEY, LOCALE_KEY};
