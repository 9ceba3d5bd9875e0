// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};

use crate::error::Result;
use crate::models::HttpConfig;

/// Identity sent on requests that do not set their own User-Agent.
const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Create a configured asynchronous HTTP client.
pub fn create_async_client(config: &HttpConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(DEFAULT_USER_AGENT)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Send a request and fail on any non-2xx status.
pub async fn send_checked(request: RequestBuilder) -> Result<Response> {
    let response = request.send().await?.error_for_status()?;
    Ok(response)
}
