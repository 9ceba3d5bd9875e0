// src/lambda/mod.rs

//! AWS Lambda handler for the slash command.
//!
//! Each invocation:
//! 1. Extracts the query from the API Gateway proxy event
//! 2. Searches for the first result image (fetching the User-Agent on first use)
//! 3. Returns a 200 proxy response with the chat message
//!
//! Search failures fail the invocation instead of producing a message.

use lambda_runtime::{Error as LambdaError, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, instrument};

use crate::dispatch;
use crate::error::Result;
use crate::models::{Config, ProxyResponse};
use crate::services::SearchClient;

/// Main Lambda handler function.
#[instrument(skip_all, fields(request_id = %event.context.request_id))]
pub async fn handler(
    event: LambdaEvent<Value>,
    search: &SearchClient,
) -> std::result::Result<ProxyResponse, LambdaError> {
    let (payload, _context) = event.into_parts();

    match dispatch::respond(&payload, search).await {
        Ok(response) => {
            info!("Responded with status {}", response.status_code);
            Ok(response)
        }
        Err(e) => {
            error!("Search failed: {}", e);
            Err(e.into())
        }
    }
}

/// Load configuration suitable for the Lambda environment.
///
/// Starts from `KYM_CONFIG` when set (defaults otherwise), then applies
/// environment overrides and validates.
pub fn load_lambda_config() -> Result<Config> {
    let mut config = match std::env::var("KYM_CONFIG") {
        Ok(path) => {
            info!("Loading config from {}", path);
            Config::load(&path)?
        }
        Err(_) => Config::default(),
    };

    config.apply_env_overrides();
    config.validate()?;
    Ok(config)
}
