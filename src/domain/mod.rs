//! Domain layer - Core business types with no external dependencies
//! 
//! This layer contains:
//! - Entities: Broadcasts, authors, group context
//! - Traits: Abstractions for infrastructure (Transport, SessionStore)

pub mod entities;
pub mod traits;
