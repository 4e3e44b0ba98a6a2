//! Filing document retrieval from the EDGAR archive

use crate::config::EdgarConfig;
use reqwest::Client;
use std::time::Duration;

/// Client for raw filing documents
pub struct ArchiveClient {
    config: EdgarConfig,
    client: Client,
}

impl ArchiveClient {
    pub fn new(config: EdgarConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Fetch the raw text of one filing by its archive-relative path
    pub async fn fetch_document(&self, path: &str) -> anyhow::Result<String> {
        let url = format!("{}/{}", self.config.base_url, path);
        tracing::debug!(url = %url, "Fetching filing document");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, &self.config.user_agent)
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("EDGAR archive error for {}: {}", path, response.status());
        }

        Ok(response.text().await?)
    }

    /// Configured delay between consecutive archive requests
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.config.request_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EdgarConfig {
        EdgarConfig {
            base_url: "https://www.sec.gov/Archives".to_string(),
            index_base_url: "https://www.sec.gov/Archives/edgar/full-index".to_string(),
            user_agent: "edgar-tone/0.1 (test@example.com)".to_string(),
            request_delay_ms: 250,
        }
    }

    #[test]
    fn test_archive_client_creation() {
        let client = ArchiveClient::new(config());
        assert_eq!(client.config.base_url, "https://www.sec.gov/Archives");
    }

    #[test]
    fn test_request_delay() {
        let client = ArchiveClient::new(config());
        assert_eq!(client.request_delay(), Duration::from_millis(250));
    }
}
