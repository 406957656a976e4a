use async_trait::async_trait;
use reqwest::Client;
use scout_core::{ScoutError, SearchResult};
use serde::{Deserialize, Serialize};
use tracing::instrument;

const TAVILY_API_BASE: &str = "https://api.tavily.com";

/// Seam over web search so agents can run against canned results in tests
#[async_trait]
pub trait SearchApi: Send + Sync {
    async fn search(&self, query: &str, max_results: u32) -> Result<Vec<SearchResult>, ScoutError>;
}

#[derive(Debug, Clone)]
pub struct TavilyClient {
    client: Client,
    api_key: String,
}

#[derive(Debug, Serialize)]
pub struct TavilySearchRequest {
    pub query: String,
    pub max_results: u32,
    pub search_depth: String, // "basic", "advanced"
}

#[derive(Debug, Deserialize)]
pub struct TavilySearchResponse {
    pub results: Vec<TavilySearchResult>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TavilySearchResult {
    pub title: String,
    pub url: String,
    pub content: String,
    #[serde(default)]
    pub score: Option<f64>,
}

impl TavilyClient {
    pub fn new() -> Result<Self, ScoutError> {
        let api_key = std::env::var("TAVILY_API_KEY")
            .map_err(|_| ScoutError::config("TAVILY_API_KEY environment variable not set"))?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .map_err(|e| ScoutError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, api_key })
    }

    #[instrument(skip(self))]
    pub async fn search_raw(
        &self,
        request: TavilySearchRequest,
    ) -> Result<TavilySearchResponse, ScoutError> {
        let url = format!("{}/search", TAVILY_API_BASE);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| ScoutError::network(format!("Tavily API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ScoutError::api(format!(
                "Tavily API error ({}): {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| ScoutError::parse(format!("Failed to parse Tavily response: {}", e)))
    }
}

#[async_trait]
impl SearchApi for TavilyClient {
    async fn search(&self, query: &str, max_results: u32) -> Result<Vec<SearchResult>, ScoutError> {
        let response = self
            .search_raw(TavilySearchRequest {
                query: query.to_string(),
                max_results,
                search_depth: "basic".to_string(),
            })
            .await?;

        Ok(response
            .results
            .into_iter()
            .map(|r| SearchResult {
                title: r.title,
                url: r.url,
                content: r.content,
            })
            .collect())
    }
}
