//! Human-readable diagnostics written while verifying responses.

use std::io::{self, Write};

use postprobe_application::ports::Diagnostics;
use postprobe_domain::{DecodedBody, GetRequest, Post, StatusCode};

use crate::serialization::to_json_stable;

/// Writer that forwards to `print!`, so the test harness captures it.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintSink;

impl Write for PrintSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        print!("{}", String::from_utf8_lossy(buf));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}

/// Diagnostics sink rendering the request line, the status line and the
/// decoded body as pretty JSON.
///
/// Write failures are logged and otherwise ignored.
#[derive(Debug, Default)]
pub struct ConsoleDiagnostics<W: Write = PrintSink> {
    out: W,
}

impl ConsoleDiagnostics<PrintSink> {
    /// Writes to standard output through `print!`.
    #[must_use]
    pub const fn stdout() -> Self {
        Self { out: PrintSink }
    }
}

impl<W: Write> ConsoleDiagnostics<W> {
    /// Writes to an arbitrary writer.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = self.out.write_all(text.as_bytes()) {
            tracing::warn!(error = %e, "failed to write diagnostics");
        }
    }
}

impl<W: Write> Diagnostics for ConsoleDiagnostics<W> {
    fn executing(&mut self, request: &GetRequest) {
        self.emit(&format!("Executing request: {}\n", request.request_line()));
    }

    fn received(&mut self, status: StatusCode) {
        self.emit(&format!("Response is: {}\n", status.status_line()));
    }

    fn body(&mut self, body: &DecodedBody) {
        let (heading, post) = match body {
            DecodedBody::Absent => {
                self.emit("Response got no entity.\n");
                return;
            }
            DecodedBody::Single(post) => ("The body is:", Some(post)),
            DecodedBody::Sequence(posts) => ("The first part of body is:", posts.first()),
        };

        let rendered = match post.map(to_json_stable::<Post>).transpose() {
            Ok(Some(json)) => json,
            Ok(None) => "[]\n".to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to render body");
                return;
            }
        };
        self.emit(&format!("{heading}\n{rendered}"));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(f: impl FnOnce(&mut ConsoleDiagnostics<Vec<u8>>)) -> String {
        let mut diagnostics = ConsoleDiagnostics::new(Vec::new());
        f(&mut diagnostics);
        String::from_utf8(diagnostics.into_inner()).unwrap()
    }

    #[test]
    fn test_request_and_status_lines() {
        let request = GetRequest::parse("https://jsonplaceholder.typicode.com/posts/1").unwrap();
        let output = render(|d| {
            d.executing(&request);
            d.received(StatusCode::OK);
        });
        assert_eq!(
            output,
            "Executing request: GET https://jsonplaceholder.typicode.com/posts/1 HTTP/1.1\n\
             Response is: HTTP/1.1 200 OK\n"
        );
    }

    #[test]
    fn test_single_body() {
        let output = render(|d| d.body(&DecodedBody::Single(Post::new(1, 1, "t", "b"))));
        assert_eq!(
            output,
            "The body is:\n{\n  \"userId\": 1,\n  \"id\": 1,\n  \"title\": \"t\",\n  \"body\": \"b\"\n}\n"
        );
    }

    #[test]
    fn test_sequence_prints_first_only() {
        let body = DecodedBody::Sequence(vec![Post::new(1, 1, "first", "b"), Post::new(1, 2, "second", "b")]);
        let output = render(|d| d.body(&body));
        assert!(output.starts_with("The first part of body is:\n"));
        assert!(output.contains("first"));
        assert!(!output.contains("second"));
    }

    #[test]
    fn test_empty_sequence() {
        let output = render(|d| d.body(&DecodedBody::Sequence(Vec::new())));
        assert_eq!(output, "The first part of body is:\n[]\n");
    }

    #[test]
    fn test_absent_body() {
        let output = render(|d| d.body(&DecodedBody::Absent));
        assert_eq!(output, "Response got no entity.\n");
    }
}
