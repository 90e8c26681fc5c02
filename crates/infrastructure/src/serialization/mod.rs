//! Deterministic JSON rendering for diagnostics.
//!
//! Output is stable across runs:
//! - Fields in declaration order
//! - 2-space indentation
//! - Trailing newline

mod json;

pub use json::*;
