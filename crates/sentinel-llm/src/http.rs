//! Shared HTTP client construction for consistent timeout and TLS configuration.

use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the HTTP client shared by every provider adapter in the process.
///
/// Config: 30s connect timeout, rustls TLS, `sentinel/{version}` user-agent,
/// redirect limit 10. `request_timeout` bounds the whole request; `None`
/// leaves it unbounded.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn build_client(request_timeout: Option<Duration>) -> reqwest::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .user_agent(concat!("sentinel/", env!("CARGO_PKG_VERSION")))
        .redirect(reqwest::redirect::Policy::limited(10));
    if let Some(timeout) = request_timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}
