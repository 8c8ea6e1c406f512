//! Application layer - Use cases
//! 
//! This layer contains:
//! - Services: Broadcast API client, session access
//! - Submission: Guarded call-to-action handling
//! - Locale: Display locale selection
//! - Errors: Domain-specific errors

pub mod errors;
pub mod locale;
pub mod services;
pub mod submission;
