//! Diagnostics port

use postprobe_domain::{DecodedBody, GetRequest, StatusCode};

/// Receives the human-readable trace of a verification.
///
/// Output is observational only: implementations must not fail the
/// verification.
pub trait Diagnostics {
    /// Called before the request is sent.
    fn executing(&mut self, request: &GetRequest);

    /// Called once the response status is known.
    fn received(&mut self, status: StatusCode);

    /// Called with the decoded body.
    fn body(&mut self, body: &DecodedBody);
}

/// Diagnostics sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDiagnostics;

impl Diagnostics for NoDiagnostics {
    fn executing(&mut self, _request: &GetRequest) {}

    fn received(&mut self, _status: StatusCode) {}

    fn body(&mut self, _body: &DecodedBody) {}
}
