use std::time::Duration;

use reqwest::{
    Client,
    header::{CONNECTION, HeaderMap, HeaderValue},
};

/// Shared outbound client so both adapters reuse one connection pool.
pub fn http_client(timeout: Duration) -> reqwest::Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));

    Client::builder()
        .timeout(timeout)
        .pool_idle_timeout(Some(Duration::from_secs(30)))
        .tcp_keepalive(Some(Duration::from_secs(60)))
        .default_headers(headers)
        .build()
}
