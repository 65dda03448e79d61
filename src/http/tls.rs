use reqwest::ClientBuilder;
use tracing::warn;

use super::TransportOptions;

/// Applies TLS options to the probe's own client. Nothing here touches
/// process-wide state.
pub(super) fn apply_tls_settings(
    mut builder: ClientBuilder,
    options: &TransportOptions,
) -> ClientBuilder {
    if options.insecure {
        warn!("TLS certificate and hostname validation is disabled for this run (insecure=true).");
        builder = builder
            .danger_accept_invalid_certs(true)
            .danger_accept_invalid_hostnames(true);
    }
    builder
}
