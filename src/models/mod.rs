// src/models/mod.rs

//! Domain models for the slash command.

mod config;
mod response;
mod user_agent;

// Re-export all public types
pub use config::{Config, HttpConfig, SearchConfig, UserAgentConfig};
pub use response::{ProxyResponse, ResponseBlock, SlashResponse, TextObject};
pub use user_agent::{UserAgentRecord, select_user_agent};
