//! Postprobe Suite - the jsonplaceholder `/posts` fixture
//!
//! Builds the requests the suite issues and wires the verifier to a fresh
//! blocking client for every test case. The test cases themselves live in
//! `tests/`.

pub mod config;
pub mod endpoints;
pub mod harness;

pub use config::FixtureConfig;
pub use endpoints::PostsEndpoint;
pub use harness::{Verifier, init_tracing, verifier};
