//! HTTP Response domain types

mod body;
mod status;

pub use body::{BodyShape, DecodedBody};
pub use status::StatusCode;
