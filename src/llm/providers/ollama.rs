//! Ollama `/api/generate` provider.
//!
//! Sends a streaming generate request and returns the raw newline-delimited
//! body. Wire types are private to this module.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use tracing::{debug, error, trace};

use crate::llm::{GenerateRequest, ProviderError};

/// Constructed once at startup, then cheaply cloned (`reqwest::Client` is
/// an `Arc` internally).
#[derive(Debug, Clone)]
pub struct OllamaProvider {
    client: Client,
    api_base_url: String,
    model: String,
    temperature: f32,
}

impl OllamaProvider {
    pub fn new(
        api_base_url: String,
        model: String,
        temperature: f32,
        timeout_seconds: u64,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| ProviderError::Request(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, api_base_url, model, temperature })
    }

    pub async fn generate(&self, req: &GenerateRequest) -> Result<String, ProviderError> {
        let payload = self.payload(req);

        debug!(
            model = %payload.model,
            num_predict = payload.options.num_predict,
            prompt_len = req.prompt.len(),
            "sending generate request"
        );

        let response = self
            .client
            .post(&self.api_base_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!(url = %self.api_base_url, error = %e, "generate request failed (transport)");
                ProviderError::Request(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Request(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            error!(%status, "generate request returned HTTP error");
            return Err(ProviderError::Status(format!("HTTP {status}: {}", body.trim())));
        }

        debug!(body_len = body.len(), "received generate response");
        trace!(%body, "raw generate response");
        Ok(body)
    }

    fn payload<'a>(&'a self, req: &'a GenerateRequest) -> GeneratePayload<'a> {
        GeneratePayload {
            model: &self.model,
            prompt: &req.prompt,
            stream: true,
            options: GenerateOptions { temperature: self.temperature, num_predict: req.max_tokens },
        }
    }
}

// ── Private wire types ────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GeneratePayload<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
    num_predict: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_shape() {
        let p = OllamaProvider::new("http://localhost:11434/api/generate".into(), "llama3.2:1b".into(), 0.1, 5)
            .unwrap();
        let req = GenerateRequest { prompt: "Pregunta".into(), max_tokens: 800 };
        let json = serde_json::to_value(p.payload(&req)).unwrap();
        assert_eq!(json["model"], "llama3.2:1b");
        assert_eq!(json["prompt"], "Pregunta");
        assert_eq!(json["stream"], true);
        assert_eq!(json["options"]["num_predict"], 800);
        assert!((json["options"]["temperature"].as_f64().unwrap() - 0.1).abs() < 1e-6);
    }

    #[tokio::test]
    async fn unreachable_server_is_request_error() {
        // port 9 (discard) on localhost is closed in test environments
        let p = OllamaProvider::new("http://127.0.0.1:9/api/generate".into(), "m".into(), 0.1, 2).unwrap();
        let req = GenerateRequest { prompt: "x".into(), max_tokens: 1 };
        assert!(matches!(p.generate(&req).await, Err(ProviderError::Request(_))));
    }
}
