//! Inference Gateway: the single point of entry for hosted model calls.
//!
//! Failures never reach callers as errors: `query` maps every
//! `GatewayError` to a display string. No retries are attempted.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

use prompts::{build_prompt, extract_reply};

pub const DEFAULT_API_URL: &str =
    "https://api-inference.huggingface.co/models/HuggingFaceH4/zephyr-7b-beta";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const MALFORMED_REPLY_TEXT: &str = "Sorry, I couldn't process that. Please try again.";

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Connection failure, timeout, or a body that could not be read.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("unexpected response shape: {0}")]
    Malformed(String),
}

impl GatewayError {
    /// User-facing placeholder for a failed query.
    pub fn display_text(&self) -> String {
        match self {
            GatewayError::Transport(_) | GatewayError::Status { .. } => format!("Error: {self}"),
            GatewayError::Malformed(_) => MALFORMED_REPLY_TEXT.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Deserialize)]
struct GeneratedText {
    generated_text: String,
}

/// Anything that can answer a free-text question. Carried in `AppState` as
/// `Arc<dyn Assistant>`.
#[async_trait]
pub trait Assistant: Send + Sync {
    /// Always returns displayable text; failures become placeholders.
    async fn query(&self, user_text: &str) -> String;
}

/// Client for the hosted text-generation endpoint.
#[derive(Clone)]
pub struct HfInferenceClient {
    client: Client,
    api_url: String,
    token: String,
}

impl HfInferenceClient {
    pub fn new(api_url: String, token: String) -> Result<Self, GatewayError> {
        Self::with_timeout(api_url, token, REQUEST_TIMEOUT)
    }

    fn with_timeout(
        api_url: String,
        token: String,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_url,
            token,
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Sends the templated question and returns the model's reply.
    pub async fn try_query(&self, user_text: &str) -> Result<String, GatewayError> {
        let prompt = build_prompt(user_text);

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.token)
            .json(&InferenceRequest { inputs: &prompt })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let generated = parse_generated_text(&body)?;
        debug!("Inference succeeded: {} chars generated", generated.len());

        Ok(extract_reply(&generated).to_string())
    }
}

#[async_trait]
impl Assistant for HfInferenceClient {
    async fn query(&self, user_text: &str) -> String {
        match self.try_query(user_text).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Inference call failed: {e}");
                e.display_text()
            }
        }
    }
}

/// Expects `[{"generated_text": "..."}, ...]` and takes the first element.
fn parse_generated_text(body: &str) -> Result<String, GatewayError> {
    let mut items: Vec<GeneratedText> =
        serde_json::from_str(body).map_err(|e| GatewayError::Malformed(e.to_string()))?;
    if items.is_empty() {
        return Err(GatewayError::Malformed("empty result list".to_string()));
    }
    Ok(items.swap_remove(0).generated_text)
}
