//! HTTP client construction for outbound provider traffic.
//!
//! One client is built at process start and handed to each provider by value;
//! reqwest clients share a connection pool internally, so clones are cheap
//! and safe for concurrent reuse. Keeping construction explicit (instead of a
//! global static) lets tests substitute stub adapters and keeps the timeouts
//! configurable.

use std::time::Duration;

use crate::config::SmsConfig;

/// Builds the pooled HTTP client used for provider gateway calls.
///
/// Timeouts come from configuration; a slow or unreachable gateway otherwise
/// inflates save-request latency directly, since dispatch is synchronous.
pub fn build_http_client(config: &SmsConfig) -> anyhow::Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout))
        .connect_timeout(Duration::from_secs(config.connect_timeout))
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(90))
        .use_rustls_tls()
        .build()?;
    Ok(client)
}
