//! Core abstractions and types
//!
//! Error definitions and the upstream port shared by the client, the
//! services and the HTTP layer.

pub mod error;
pub mod traits;

// Re-export commonly used items
pub use error::{AdapterError, AdapterResult, MappingError, UpstreamError, Violation};
pub use traits::SubgraphPort;
