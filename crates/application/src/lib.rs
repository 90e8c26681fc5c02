//! Postprobe Application - Use cases and ports
//!
//! The application layer executes requests through the `HttpTransport` port,
//! decodes bodies and checks status codes. Concrete transports live in the
//! infrastructure crate.

pub mod decode;
mod error;
pub mod guard;
pub mod ports;
pub mod verify_response;

pub use decode::{Charset, DecodeError};
pub use error::{VerifyError, VerifyResult};
pub use guard::ResponseGuard;
pub use verify_response::{Verification, VerifyResponse};
