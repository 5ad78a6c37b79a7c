use jsscope_http::models::{AnalysisResponse, AnalyzeRequest, SystemInfo};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{CliError, CliResult};

/// Client for a running jsscope HTTP server.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn analyze(&self, code: &str) -> CliResult<AnalysisResponse> {
        let url = format!("{}/analyze", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&AnalyzeRequest {
                code: code.to_string(),
            })
            .send()
            .await?;

        Self::parse(response).await
    }

    pub async fn system_info(&self) -> CliResult<SystemInfo> {
        let url = format!("{}/api/v1/system/info", self.base_url);
        let response = self.client.get(&url).send().await?;

        Self::parse(response).await
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> CliResult<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        // Error bodies are `{"error": "..."}`; fall back to the raw text.
        let text = response.text().await?;
        let message = serde_json::from_str::<Value>(&text)
            .ok()
            .and_then(|body| body["error"].as_str().map(str::to_string))
            .unwrap_or(text);
        Err(CliError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
