//! KIPRIS (Korean patent office) open API client

use async_trait::async_trait;
use reqwest::Client;
use scout_core::ScoutError;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

const KIPRIS_API_BASE: &str = "http://plus.kipris.or.kr/kipo-api/kipi/patUtiModInfoSearchSevice";

/// Seam over patent lookup so the technology agent can run against canned
/// filings in tests
#[async_trait]
pub trait PatentApi: Send + Sync {
    async fn patents_by_applicant(&self, applicant: &str) -> Result<Vec<Patent>, ScoutError>;
}

#[derive(Debug, Clone)]
pub struct KiprisClient {
    client: Client,
    service_key: String,
}

/// One patent filing as returned by the advanced-search endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Patent {
    #[serde(rename = "applicantName", default)]
    pub applicant: String,
    #[serde(rename = "applicationDate", default)]
    pub application_date: String,
    #[serde(rename = "applicationNumber", default)]
    pub application_number: String,
    #[serde(rename = "astrtCont", default)]
    pub abstract_text: String,
    #[serde(rename = "inventionTitle", default)]
    pub title: String,
    #[serde(rename = "ipcNumber", default)]
    pub ipc_number: String,
    #[serde(rename = "openDate", default)]
    pub open_date: String,
    #[serde(rename = "openNumber", default)]
    pub open_number: String,
    #[serde(rename = "registerStatus", default)]
    pub register_status: String,
}

#[derive(Debug, Deserialize)]
struct KiprisResponse {
    #[serde(default)]
    body: KiprisBody,
}

#[derive(Debug, Default, Deserialize)]
struct KiprisBody {
    #[serde(default)]
    items: KiprisItems,
}

#[derive(Debug, Default, Deserialize)]
struct KiprisItems {
    #[serde(default)]
    item: Vec<Patent>,
}

impl KiprisClient {
    pub fn new() -> Result<Self, ScoutError> {
        let service_key = std::env::var("KIPRIS_API_KEY")
            .map_err(|_| ScoutError::config("KIPRIS_API_KEY environment variable not set"))?;
        Self::with_key(service_key)
    }

    pub fn with_key(service_key: impl Into<String>) -> Result<Self, ScoutError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .map_err(|e| ScoutError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            service_key: service_key.into(),
        })
    }

    /// Fetch up to 100 filings for an applicant, oldest publication first
    #[instrument(skip(self))]
    pub async fn fetch_patents(&self, applicant: &str) -> Result<Vec<Patent>, ScoutError> {
        let url = format!("{}/getAdvancedSearch", KIPRIS_API_BASE);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("ServiceKey", self.service_key.as_str()),
                ("applicant", applicant),
                ("pageNo", "1"),
                ("numOfRows", "100"),
                ("sortSpec", "PD"),
                ("descSort", "false"),
            ])
            .send()
            .await
            .map_err(|e| ScoutError::network(format!("KIPRIS API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ScoutError::api(format!(
                "KIPRIS API error ({}): {}",
                status, body
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| ScoutError::network(format!("Failed to read KIPRIS response: {}", e)))?;

        let parsed: KiprisResponse = quick_xml::de::from_str(&text)
            .map_err(|e| ScoutError::parse(format!("Failed to parse KIPRIS response: {}", e)))?;

        let patents = parsed.body.items.item;
        debug!("Fetched {} patents for {}", patents.len(), applicant);
        Ok(patents)
    }
}

#[async_trait]
impl PatentApi for KiprisClient {
    async fn patents_by_applicant(&self, applicant: &str) -> Result<Vec<Patent>, ScoutError> {
        self.fetch_patents(applicant).await
    }
}
