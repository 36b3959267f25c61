use reqwest::blocking::{Client, ClientBuilder};
use std::time::Duration;

/// Build the long-lived blocking HTTP client reused across all calls.
/// The client holds no per-request state, so one instance serves the
/// process lifetime.
pub fn build_client(timeout_secs: u64, user_agent: &str) -> Client {
    ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(user_agent)
        .tcp_nodelay(true)
        .use_rustls_tls()
        .build()
        .expect("Failed to create HTTP client")
}
