//! Port adapters backed by third-party libraries.

mod blocking_client;
mod config;

pub use blocking_client::{BlockingHttpTransport, BlockingResponse};
pub use config::ClientConfig;
