//! Verify Response Use Case
//!
//! Executes a GET request, decodes its body into posts, reports what it saw,
//! and checks the status code against the expected one.

use postprobe_domain::{BodyShape, DecodedBody, GetRequest, StatusCode};

use crate::decode;
use crate::error::{VerifyError, VerifyResult};
use crate::guard::ResponseGuard;
use crate::ports::{Diagnostics, HttpTransport, ResponseResource};

/// Outcome of a passing verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    /// Status returned by the server.
    pub status: StatusCode,
    /// Decoded body, `Absent` for status-only checks.
    pub body: DecodedBody,
}

/// Use case for verifying a response.
///
/// Each call is independent: nothing is kept between verifications apart
/// from the transport itself and the diagnostics sink.
///
/// # Example
///
/// ```ignore
/// let transport = BlockingHttpTransport::new()?;
/// let mut verifier = VerifyResponse::new(transport, ConsoleDiagnostics::stdout());
///
/// let request = GetRequest::parse("https://jsonplaceholder.typicode.com/posts/1")?;
/// let outcome = verifier.verify(&request, BodyShape::Single, StatusCode::OK)?;
/// ```
pub struct VerifyResponse<T: HttpTransport, D: Diagnostics> {
    transport: T,
    diagnostics: D,
}

impl<T: HttpTransport, D: Diagnostics> VerifyResponse<T, D> {
    /// Creates the use case from a transport and a diagnostics sink.
    pub const fn new(transport: T, diagnostics: D) -> Self {
        Self {
            transport,
            diagnostics,
        }
    }

    /// Returns the diagnostics sink.
    pub const fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// Returns the transport.
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Executes `request`, decodes the body as `shape`, and checks that the
    /// status equals `expected`.
    ///
    /// The response is released before the status is compared, and on every
    /// error path.
    ///
    /// # Errors
    ///
    /// - `VerifyError::Transport` if the request fails or the body cannot be read
    /// - `VerifyError::Decode` if the body is not the expected JSON shape
    /// - `VerifyError::StatusMismatch` if the status differs from `expected`
    pub fn verify(
        &mut self,
        request: &GetRequest,
        shape: BodyShape,
        expected: StatusCode,
    ) -> VerifyResult<Verification> {
        let mut response = self.send(request)?;
        let status = response.status();

        let content_type = response.content_type();
        let bytes = response.read_body()?;
        let body = decode::decode_body(bytes.as_deref(), content_type.as_deref(), shape)
            .inspect_err(|e| {
                tracing::warn!(uri = %request.target, error = %e, "failed to decode response body");
            })?;
        self.diagnostics.body(&body);
        response.release();

        Self::check_status(expected, status)?;
        Ok(Verification { status, body })
    }

    /// Executes `request` and checks only its status; the body is not read.
    ///
    /// # Errors
    ///
    /// - `VerifyError::Transport` if the request fails
    /// - `VerifyError::StatusMismatch` if the status differs from `expected`
    pub fn status_only(
        &mut self,
        request: &GetRequest,
        expected: StatusCode,
    ) -> VerifyResult<Verification> {
        let mut response = self.send(request)?;
        let status = response.status();
        response.release();

        Self::check_status(expected, status)?;
        Ok(Verification {
            status,
            body: DecodedBody::Absent,
        })
    }

    fn send(&mut self, request: &GetRequest) -> VerifyResult<ResponseGuard<T::Response>> {
        self.diagnostics.executing(request);
        tracing::debug!(request = %request.request_line(), "executing request");

        let response = ResponseGuard::new(self.transport.execute(request)?);
        let status = response.status();
        self.diagnostics.received(status);
        tracing::debug!(status = %status, "response received");

        Ok(response)
    }

    fn check_status(expected: StatusCode, actual: StatusCode) -> VerifyResult<()> {
        if actual == expected {
            Ok(())
        } else {
            Err(VerifyError::StatusMismatch { expected, actual })
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use postprobe_domain::Post;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::decode::DecodeError;
    use crate::ports::TransportError;

    /// What the fake server answers with.
    #[derive(Clone)]
    struct Canned {
        status: u16,
        content_type: Option<&'static str>,
        body: Option<Vec<u8>>,
        body_error: bool,
    }

    impl Canned {
        fn json(status: u16, body: &str) -> Self {
            Self {
                status,
                content_type: Some("application/json; charset=utf-8"),
                body: Some(body.as_bytes().to_vec()),
                body_error: false,
            }
        }
    }

    /// Shared log of everything the fake transport observed.
    #[derive(Default)]
    struct Ledger {
        requests: Vec<String>,
        releases: usize,
    }

    struct FakeResponse {
        canned: Canned,
        ledger: Rc<RefCell<Ledger>>,
        released: bool,
    }

    impl ResponseResource for FakeResponse {
        fn status(&self) -> StatusCode {
            StatusCode::new(self.canned.status)
        }

        fn content_type(&self) -> Option<String> {
            self.canned.content_type.map(str::to_string)
        }

        fn read_body(&mut self) -> Result<Option<Vec<u8>>, TransportError> {
            if self.released {
                return Err(TransportError::Released);
            }
            if self.canned.body_error {
                return Err(TransportError::Body("connection reset".to_string()));
            }
            Ok(self.canned.body.take())
        }

        fn release(&mut self) {
            if !self.released {
                self.released = true;
                self.ledger.borrow_mut().releases += 1;
            }
        }
    }

    struct FakeTransport {
        answers: RefCell<VecDeque<Result<Canned, TransportError>>>,
        ledger: Rc<RefCell<Ledger>>,
    }

    impl FakeTransport {
        fn answering(answers: Vec<Result<Canned, TransportError>>) -> Self {
            Self {
                answers: RefCell::new(answers.into()),
                ledger: Rc::default(),
            }
        }

        fn releases(&self) -> usize {
            self.ledger.borrow().releases
        }
    }

    impl HttpTransport for FakeTransport {
        type Response = FakeResponse;

        fn execute(&self, request: &GetRequest) -> Result<FakeResponse, TransportError> {
            self.ledger
                .borrow_mut()
                .requests
                .push(request.target.to_string());
            let canned = self
                .answers
                .borrow_mut()
                .pop_front()
                .expect("unexpected request")?;
            Ok(FakeResponse {
                canned,
                ledger: Rc::clone(&self.ledger),
                released: false,
            })
        }
    }

    #[derive(Default)]
    struct RecordingDiagnostics {
        lines: Vec<String>,
    }

    impl Diagnostics for RecordingDiagnostics {
        fn executing(&mut self, request: &GetRequest) {
            self.lines.push(format!("executing {}", request.request_line()));
        }

        fn received(&mut self, status: StatusCode) {
            self.lines.push(format!("received {}", status.status_line()));
        }

        fn body(&mut self, body: &DecodedBody) {
            self.lines
                .push(format!("body {:?}", body.first().map(|p| p.id)));
        }
    }

    fn verifier(
        answers: Vec<Result<Canned, TransportError>>,
    ) -> VerifyResponse<FakeTransport, RecordingDiagnostics> {
        VerifyResponse::new(
            FakeTransport::answering(answers),
            RecordingDiagnostics::default(),
        )
    }

    fn request(uri: &str) -> GetRequest {
        GetRequest::parse(uri).unwrap()
    }

    const POST_1: &str = r#"{"userId": 1, "id": 1, "title": "sunt", "body": "quia"}"#;

    #[test]
    fn test_verify_single_post() {
        let mut verifier = verifier(vec![Ok(Canned::json(200, POST_1))]);

        let outcome = verifier
            .verify(&request("https://fixture.test/posts/1"), BodyShape::Single, StatusCode::OK)
            .unwrap();

        assert_eq!(outcome.status, StatusCode::OK);
        assert_eq!(outcome.body, DecodedBody::Single(Post::new(1, 1, "sunt", "quia")));
        assert_eq!(verifier.transport().releases(), 1);
        assert_eq!(
            verifier.diagnostics().lines,
            vec![
                "executing GET https://fixture.test/posts/1 HTTP/1.1".to_string(),
                "received HTTP/1.1 200 OK".to_string(),
                "body Some(1)".to_string(),
            ]
        );
    }

    #[test]
    fn test_verify_sequence() {
        let body = format!("[{POST_1}, {POST_1}]");
        let mut verifier = verifier(vec![Ok(Canned::json(200, &body))]);

        let outcome = verifier
            .verify(&request("https://fixture.test/posts"), BodyShape::Sequence, StatusCode::OK)
            .unwrap();

        assert_eq!(outcome.body.posts().len(), 2);
        assert_eq!(verifier.transport().releases(), 1);
    }

    #[test]
    fn test_decode_error_still_releases() {
        let mut verifier = verifier(vec![Ok(Canned::json(200, "{not json"))]);

        let result = verifier.verify(
            &request("https://fixture.test/posts/1"),
            BodyShape::Single,
            StatusCode::OK,
        );

        assert!(matches!(result, Err(VerifyError::Decode(DecodeError::Json(_)))));
        assert_eq!(verifier.transport().releases(), 1);
    }

    #[test]
    fn test_shape_mismatch_still_releases() {
        let mut verifier = verifier(vec![Ok(Canned::json(200, POST_1))]);

        let result = verifier.verify(
            &request("https://fixture.test/posts"),
            BodyShape::Sequence,
            StatusCode::OK,
        );

        assert!(matches!(result, Err(VerifyError::Decode(_))));
        assert_eq!(verifier.transport().releases(), 1);
    }

    #[test]
    fn test_unsupported_charset_still_releases() {
        let mut canned = Canned::json(200, POST_1);
        canned.content_type = Some("application/json; charset=x-klingon");
        let mut verifier = verifier(vec![Ok(canned)]);

        let result = verifier.verify(
            &request("https://fixture.test/posts/1"),
            BodyShape::Single,
            StatusCode::OK,
        );

        assert!(matches!(
            result,
            Err(VerifyError::Decode(DecodeError::UnsupportedCharset(_)))
        ));
        assert_eq!(verifier.transport().releases(), 1);
    }

    #[test]
    fn test_body_read_error_still_releases() {
        let mut canned = Canned::json(200, POST_1);
        canned.body_error = true;
        let mut verifier = verifier(vec![Ok(canned)]);

        let result = verifier.verify(
            &request("https://fixture.test/posts/1"),
            BodyShape::Single,
            StatusCode::OK,
        );

        assert!(matches!(result, Err(VerifyError::Transport(TransportError::Body(_)))));
        assert_eq!(verifier.transport().releases(), 1);
    }

    #[test]
    fn test_status_mismatch_reports_both_codes() {
        let mut verifier = verifier(vec![Ok(Canned::json(404, "{}"))]);

        let result = verifier.verify(
            &request("https://fixture.test/posts"),
            BodyShape::Sequence,
            StatusCode::OK,
        );

        // `{}` is not a sequence, so decoding fails before the status check.
        assert!(matches!(result, Err(VerifyError::Decode(_))));

        let mut verifier = self::verifier(vec![Ok(Canned::json(500, "[]"))]);
        let result = verifier.verify(
            &request("https://fixture.test/posts"),
            BodyShape::Sequence,
            StatusCode::OK,
        );
        match result {
            Err(VerifyError::StatusMismatch { expected, actual }) => {
                assert_eq!(expected, StatusCode::OK);
                assert_eq!(actual, StatusCode::new(500));
            }
            other => panic!("expected status mismatch, got {other:?}"),
        }
        assert_eq!(verifier.transport().releases(), 1);
    }

    #[test]
    fn test_absent_body_is_reported() {
        let canned = Canned {
            status: 204,
            content_type: None,
            body: None,
            body_error: false,
        };
        let mut verifier = verifier(vec![Ok(canned)]);

        let outcome = verifier
            .verify(
                &request("https://fixture.test/posts/1"),
                BodyShape::Single,
                StatusCode::new(204),
            )
            .unwrap();

        assert!(outcome.body.is_absent());
        assert_eq!(verifier.diagnostics().lines.last().unwrap(), "body None");
    }

    #[test]
    fn test_transport_error_propagates_without_response() {
        let mut verifier = verifier(vec![Err(TransportError::ConnectionRefused {
            host: "fixture.test".to_string(),
            port: 443,
        })]);

        let result = verifier.verify(
            &request("https://fixture.test/posts"),
            BodyShape::Sequence,
            StatusCode::OK,
        );

        assert!(matches!(
            result,
            Err(VerifyError::Transport(TransportError::ConnectionRefused { .. }))
        ));
        assert_eq!(verifier.transport().releases(), 0);
    }

    #[test]
    fn test_status_only_skips_body() {
        let mut verifier = verifier(vec![Ok(Canned::json(404, "{}"))]);

        let outcome = verifier
            .status_only(&request("https://fixture.test/posts/101"), StatusCode::NOT_FOUND)
            .unwrap();

        assert_eq!(outcome.status, StatusCode::NOT_FOUND);
        assert!(outcome.body.is_absent());
        assert_eq!(verifier.transport().releases(), 1);
        assert_eq!(verifier.diagnostics().lines.len(), 2);
    }

    #[test]
    fn test_cases_are_independent() {
        let mut verifier = verifier(vec![
            Ok(Canned::json(200, "{bad")),
            Ok(Canned::json(200, POST_1)),
        ]);

        assert!(
            verifier
                .verify(&request("https://fixture.test/posts/1"), BodyShape::Single, StatusCode::OK)
                .is_err()
        );
        assert!(
            verifier
                .verify(&request("https://fixture.test/posts/1"), BodyShape::Single, StatusCode::OK)
                .is_ok()
        );
        assert_eq!(verifier.transport().releases(), 2);
        assert_eq!(verifier.transport().ledger.borrow().requests.len(), 2);
    }
}
