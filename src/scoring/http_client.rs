use reqwest::Client;
use std::time::Duration;

/// `None` leaves both connecting and the request itself unbounded; a stalled
/// scoring call then stalls the caller.
pub fn build_scoring_client_with_timeout(timeout: Option<Duration>) -> Client {
    let builder = Client::builder()
        .pool_max_idle_per_host(2)
        .pool_idle_timeout(Duration::from_secs(90))
        .user_agent(concat!("aesthetics-preview/", env!("CARGO_PKG_VERSION")));

    let builder = match timeout {
        Some(timeout) => builder.connect_timeout(timeout).timeout(timeout),
        None => builder,
    };

    builder.build().unwrap_or_else(|_| Client::new())
}
