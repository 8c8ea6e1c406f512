//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - Http: reqwest transport for the broadcast API
//! - Storage / Database: Session persistence

pub mod config;
pub mod database;
pub mod http;
pub mod storage;
