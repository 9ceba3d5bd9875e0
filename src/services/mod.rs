//! Service layer for the slash command.
//!
//! This module contains the search pipeline:
//! - Browser identity selection (`UserAgentProvider`)
//! - Result page scanning (`extract_images`)
//! - The outbound search itself (`SearchClient`)

pub mod extractor;
pub mod search;
pub mod user_agent;

pub use extractor::{PhotoTracker, extract_images};
pub use search::SearchClient;
pub use user_agent::{CatalogSource, FixedCatalog, HttpCatalog, UserAgentProvider};
