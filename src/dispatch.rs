// src/dispatch.rs

//! Slash command request dispatch.
//!
//! Pulls the query text out of an API Gateway proxy event, runs the search
//! and wraps the outcome in a chat message. Extraction never fails: any
//! unexpected event shape is treated as "no query" and answered with a
//! message instead of an error.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::Value;

use crate::error::Result;
use crate::models::{ProxyResponse, ResponseBlock, SlashResponse};
use crate::services::SearchClient;

pub const NO_QUERY_MESSAGE: &str = "No query provided :(";
pub const NO_IMAGES_MESSAGE: &str = "No images found :(";

const QUERY_PARAM: &str = "text";

/// Extract the query text from a proxy event.
///
/// GET reads the last `text` value of the multi-value query string; POST
/// reads the last `text` field of the (optionally base64) form body.
/// Empty queries count as missing.
pub fn extract_query(event: &Value) -> Option<String> {
    let query = match event.get("httpMethod")?.as_str()? {
        "GET" => event
            .get("multiValueQueryStringParameters")?
            .get(QUERY_PARAM)?
            .as_array()?
            .last()?
            .as_str()
            .map(str::to_owned),
        "POST" => {
            let body = event.get("body")?.as_str()?;
            let form = if event.get("isBase64Encoded")?.as_bool()? {
                String::from_utf8(BASE64.decode(body).ok()?).ok()?
            } else {
                body.to_owned()
            };
            url::form_urlencoded::parse(form.as_bytes())
                .filter(|(key, value)| key == QUERY_PARAM && !value.is_empty())
                .map(|(_, value)| value.into_owned())
                .last()
        }
        _ => None,
    };
    query.filter(|q| !q.is_empty())
}

/// Choose the chat block for a query and its search outcome.
pub fn build_block(query: Option<&str>, image_url: Option<String>) -> ResponseBlock {
    match (query, image_url) {
        (Some(query), Some(url)) => ResponseBlock::image(url, query),
        (Some(_), None) => ResponseBlock::section(NO_IMAGES_MESSAGE),
        (None, _) => ResponseBlock::section(NO_QUERY_MESSAGE),
    }
}

/// Answer one proxy event.
///
/// No search is issued without a query. Search failures propagate so the
/// invocation itself fails.
pub async fn respond(event: &Value, search: &SearchClient) -> Result<ProxyResponse> {
    let query = extract_query(event);

    let image_url = match query.as_deref() {
        Some(query) => search.search_image(query).await?,
        None => {
            log::info!("No query in request");
            None
        }
    };

    let block = build_block(query.as_deref(), image_url);
    ProxyResponse::json(&SlashResponse::in_channel(vec![block]))
}
