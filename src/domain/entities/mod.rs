//! Domain entities - Core business objects with no external dependencies

pub mod user;
pub mod group;
pub mod broadcast;

pub use user::Author;
pub use group::{GroupContext, GroupInfo};
pub use broadcast::{Broadcast, BroadcastStatus, NewBroadcast};
