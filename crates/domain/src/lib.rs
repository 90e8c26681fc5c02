//! Postprobe Domain - Core types
//!
//! This crate defines the domain model for the Postprobe verification harness.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod post;
pub mod request;
pub mod response;

pub use error::{DomainError, DomainResult};
pub use post::Post;
pub use request::{GetRequest, HttpMethod, QueryParam, QueryParams, RequestTarget, TargetBuilder};
pub use response::{BodyShape, DecodedBody, StatusCode};
