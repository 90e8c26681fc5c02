//! Per-test wiring of transport, diagnostics and logging.

use postprobe_application::VerifyResponse;
use postprobe_application::ports::TransportError;
use postprobe_infrastructure::{BlockingHttpTransport, ConsoleDiagnostics};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Verifier printing to captured stdout through a blocking reqwest client.
pub type Verifier = VerifyResponse<BlockingHttpTransport, ConsoleDiagnostics>;

/// Builds a verifier around a brand-new client. Test cases share nothing.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be created.
pub fn verifier() -> Result<Verifier, TransportError> {
    let transport = BlockingHttpTransport::new()?;
    tracing::debug!(user_agent = %transport.config().user_agent, "created verifier");
    Ok(VerifyResponse::new(transport, ConsoleDiagnostics::stdout()))
}

/// Installs a `tracing` subscriber writing through the test harness.
///
/// Honors `RUST_LOG` and defaults to `warn`. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}
