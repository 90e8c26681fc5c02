//! HTTP Request domain types

mod get;
mod method;
mod query;
mod target;

pub use get::GetRequest;
pub use method::HttpMethod;
pub use query::{QueryParam, QueryParams};
pub use target::{RequestTarget, TargetBuilder};
