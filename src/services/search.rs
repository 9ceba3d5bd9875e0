// src/services/search.rs

//! Image search client.

use reqwest::Client;
use reqwest::header::USER_AGENT;
use url::Url;

use crate::error::Result;
use crate::models::Config;
use crate::services::extractor::extract_images;
use crate::services::user_agent::UserAgentProvider;
use crate::utils::http::{create_async_client, send_checked};
use crate::utils::url::build_search_url;

/// Single-attempt client for the meme image search.
pub struct SearchClient {
    client: Client,
    search_url: Url,
    user_agents: UserAgentProvider,
}

impl SearchClient {
    /// Create a search client from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let client = create_async_client(&config.http)?;
        let search_url = Url::parse(&config.search.url)?;
        let user_agents = UserAgentProvider::from_config(&config.user_agent, client.clone());
        Ok(Self::with_provider(client, search_url, user_agents))
    }

    pub fn with_provider(client: Client, search_url: Url, user_agents: UserAgentProvider) -> Self {
        Self {
            client,
            search_url,
            user_agents,
        }
    }

    pub fn user_agents(&self) -> &UserAgentProvider {
        &self.user_agents
    }

    /// Search for `query` and return the first full-size result image.
    ///
    /// `Ok(None)` means the page had no result images. Transport failures,
    /// non-2xx responses and non-UTF-8 bodies are errors; nothing is retried.
    pub async fn search_image(&self, query: &str) -> Result<Option<String>> {
        let url = build_search_url(&self.search_url, query);
        let user_agent = self.user_agents.current_user_agent().await?;

        log::debug!("Searching {}", url);
        let response = send_checked(self.client.get(url).header(USER_AGENT, user_agent)).await?;
        let body = response.bytes().await?;
        let html = std::str::from_utf8(&body)?;

        let images = extract_images(html)?;
        log::info!("Found {} images for query {:?}", images.len(), query);
        Ok(images.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::error::AppError;
    use crate::services::user_agent::FixedCatalog;

    const AGENT: &str = "Mozilla/5.0 (Test) Firefox/120.0";

    fn client_for(server: &MockServer) -> SearchClient {
        SearchClient::with_provider(
            Client::new(),
            Url::parse(&format!("{}/search", server.uri())).unwrap(),
            UserAgentProvider::new(Arc::new(FixedCatalog::new(AGENT))),
        )
    }

    fn results_page(images: &[&str]) -> String {
        let items: String = images
            .iter()
            .map(|src| format!(r#"<a class="photo" href="/photos/1"><img data-src="{src}"></a>"#))
            .collect();
        format!(r#"<html><body><div id="photo_gallery">{items}</div></body></html>"#)
    }

    #[tokio::test]
    async fn test_returns_first_match() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("context", "images"))
            .and(query_param("sort", "relevance"))
            .and(query_param("q", "doge"))
            .and(header("user-agent", AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_string(results_page(&[
                "https://i.kym-cdn.com/photos/images/masonry/000/doge1.jpg",
                "https://i.kym-cdn.com/photos/images/masonry/000/doge2.jpg",
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let found = client_for(&server).search_image("doge").await.unwrap();
        assert_eq!(
            found.as_deref(),
            Some("https://i.kym-cdn.com/photos/images/original/000/doge1.jpg")
        );
    }

    #[tokio::test]
    async fn test_no_results_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<html><body><p>No results</p></body></html>"),
            )
            .mount(&server)
            .await;

        let found = client_for(&server).search_image("zzzznotfound").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_query_with_spaces() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "grumpy cat"))
            .respond_with(ResponseTemplate::new(200).set_body_string(results_page(&[
                "https://cdn.example/masonry/grumpy.png",
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let found = client_for(&server).search_image("grumpy cat").await.unwrap();
        assert_eq!(found.as_deref(), Some("https://cdn.example/original/grumpy.png"));
    }

    #[tokio::test]
    async fn test_server_error_propagates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server).search_image("doge").await;
        assert!(matches!(result, Err(AppError::Http(_))));
    }

    #[tokio::test]
    async fn test_invalid_utf8_body_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0x3c, 0xff, 0xfe, 0x3e]))
            .mount(&server)
            .await;

        let result = client_for(&server).search_image("doge").await;
        assert!(matches!(result, Err(AppError::Decode(_))));
    }

    #[tokio::test]
    async fn test_connection_refused_propagates() {
        let server = MockServer::start().await;
        let client = client_for(&server);
        drop(server);

        assert!(client.search_image("doge").await.is_err());
    }
}
