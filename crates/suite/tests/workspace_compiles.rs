//! Integration test to verify the workspace layers fit together.

#![allow(clippy::no_effect_underscore_binding, clippy::unwrap_used)]

#[test]
fn domain_crate_compiles() {
    let _method = postprobe_domain::HttpMethod::Get;
    let _target = postprobe_domain::TargetBuilder::new().host("example.com").build().unwrap();
    let _status = postprobe_domain::StatusCode::OK;
}

#[test]
fn application_crate_compiles() {
    let _error = postprobe_application::ports::TransportError::Timeout;
    let _charset = postprobe_application::Charset::default();
}

#[test]
fn infrastructure_crate_compiles() {
    let _transport = postprobe_infrastructure::BlockingHttpTransport::new().unwrap();
    let _diagnostics = postprobe_infrastructure::ConsoleDiagnostics::new(Vec::new());
}
