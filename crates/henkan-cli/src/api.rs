//! Henkan API Client

use anyhow::{bail, Context, Result};
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};

use henkan::{Conversion, Domain};

/// API Client for Henkan
pub struct HenkanClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

// ============================================
// API Request/Response Types
// ============================================

#[derive(Debug, Serialize)]
pub struct ConvertRequest<'a> {
    pub value: f64,
    pub from_unit: &'a str,
    pub to_unit: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ConvertResponse {
    pub domain: Domain,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub result: f64,
}

impl From<ConvertResponse> for Conversion {
    fn from(resp: ConvertResponse) -> Self {
        Conversion {
            domain: resp.domain,
            value: resp.value,
            from_unit: resp.from_unit,
            to_unit: resp.to_unit,
            result: resp.result,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UnitsResponse {
    pub domain: Domain,
    pub base_unit: Option<String>,
    pub units: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    reply: String,
}

impl HenkanClient {
    /// Create a new API client
    pub fn new(base_url: &str, api_key: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(|k| k.to_string()),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Convert within `domain`, or let the server detect it when `None`
    pub async fn convert(
        &self,
        domain: Option<Domain>,
        value: f64,
        from_unit: &str,
        to_unit: &str,
    ) -> Result<Conversion> {
        let url = match domain {
            Some(d) => format!(
                "{}/henkan/convert/{}",
                self.base_url,
                urlencoding::encode(&d.to_string())
            ),
            None => format!("{}/henkan/convert", self.base_url),
        };

        let request = ConvertRequest {
            value,
            from_unit,
            to_unit,
        };

        let resp = self.send(self.client.post(&url).json(&request)).await?;
        let conversion: ConvertResponse = resp.json().await.context("Failed to parse response")?;

        Ok(conversion.into())
    }

    /// List units of one domain, or of all domains
    pub async fn units(&self, domain: Option<Domain>) -> Result<Vec<UnitsResponse>> {
        match domain {
            Some(d) => {
                let url = format!(
                    "{}/henkan/units/{}",
                    self.base_url,
                    urlencoding::encode(&d.to_string())
                );
                let resp = self.send(self.client.get(&url)).await?;
                let units: UnitsResponse = resp.json().await.context("Failed to parse response")?;
                Ok(vec![units])
            }
            None => {
                let url = format!("{}/henkan/units", self.base_url);
                let resp = self.send(self.client.get(&url)).await?;
                resp.json().await.context("Failed to parse response")
            }
        }
    }

    /// Ask the assistant
    pub async fn chat(&self, query: &str) -> Result<String> {
        let url = format!("{}/henkan/chat", self.base_url);
        let resp = self
            .send(self.client.post(&url).json(&ChatRequest { query }))
            .await?;
        let chat: ChatResponse = resp.json().await.context("Failed to parse response")?;
        Ok(chat.reply)
    }

    /// Attach auth, send, and turn non-2xx responses into errors
    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let request = match &self.api_key {
            Some(key) => request.header("Authorization", format!("Bearer {}", key)),
            None => request,
        };

        let resp = request
            .send()
            .await
            .context("Failed to connect to Henkan API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        Ok(resp)
    }
}
