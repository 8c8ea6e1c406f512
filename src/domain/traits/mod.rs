//! Domain traits - Abstractions for infrastructure implementations

pub mod transport;
pub mod store;

pub use transport::{ApiRequest, Method, Transport};
pub use store::SessionStore;
