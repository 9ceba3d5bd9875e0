//! AWS Lambda entry point for the kym slash command
//!
//! Deploy with `cargo lambda build --release --features lambda`
//! behind an API Gateway proxy integration.
//!
//! ## Environment Variables
//!
//! - `KYM_CONFIG`: Optional path to a TOML config bundled with the function
//! - `SEARCH_URL`: Search page URL
//! - `USER_AGENTS_URL`: User agent catalog URL
//! - `USER_AGENT`: Pin a User-Agent instead of using the catalog
//! - `HTTP_TIMEOUT_SECS`: HTTP request timeout
//! - `RUST_LOG`: Log level (e.g., `info`, `debug`)

use kym::lambda::{handler, load_lambda_config};
use kym::services::SearchClient;
use lambda_runtime::{Error as LambdaError, LambdaEvent, service_fn};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the AWS Lambda function.
#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!("kym Lambda starting...");

    // One client per process so the selected User-Agent survives warm starts.
    let config = load_lambda_config()?;
    let search = SearchClient::new(&config)?;
    let search = &search;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(event, search).await
    }))
    .await
}
