//! Postprobe Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod diagnostics;
pub mod serialization;

pub use adapters::{BlockingHttpTransport, BlockingResponse, ClientConfig};
pub use diagnostics::{ConsoleDiagnostics, PrintSink};
pub use serialization::{SerializationError, to_json_stable};
