// src/models/response.rs

//! Chat message and HTTP proxy response payloads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single chat message block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResponseBlock {
    /// Inline image with the query as alt text
    Image { image_url: String, alt_text: String },

    /// Plain text section
    Section { text: TextObject },
}

impl ResponseBlock {
    pub fn image(image_url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self::Image {
            image_url: image_url.into(),
            alt_text: alt_text.into(),
        }
    }

    pub fn section(text: impl Into<String>) -> Self {
        Self::Section {
            text: TextObject::mrkdwn(text),
        }
    }
}

/// Formatted text inside a section block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextObject {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl TextObject {
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self {
            kind: "mrkdwn".to_string(),
            text: text.into(),
        }
    }
}

/// Slash command answer posted back to the channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlashResponse {
    pub response_type: String,
    pub blocks: Vec<ResponseBlock>,
}

impl SlashResponse {
    /// Response visible to everyone in the channel.
    pub fn in_channel(blocks: Vec<ResponseBlock>) -> Self {
        Self {
            response_type: "in_channel".to_string(),
            blocks,
        }
    }
}

/// API Gateway proxy integration response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl ProxyResponse {
    /// 200 response carrying `payload` as a JSON string body.
    pub fn json<T: Serialize>(payload: &T) -> Result<Self> {
        let mut headers = BTreeMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());

        Ok(Self {
            status_code: 200,
            headers,
            body: serde_json::to_string(payload)?,
        })
    }
}
