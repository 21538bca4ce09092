//! Completion backend abstraction.
//!
//! `LlmProvider` is an enum over concrete backends. Add a new variant and a
//! module in `providers/` for each additional backend.
//!
//! Providers return the raw streamed body; [`stream::collect_fragments`]
//! turns it into text. Clone providers freely, they share their client.

pub mod providers;
pub mod stream;

use thiserror::Error;

// ── Error ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("unknown provider: {0}")]
    UnknownProvider(String),
    #[error("provider request failed: {0}")]
    Request(String),
    #[error("provider returned error status: {0}")]
    Status(String),
}

// ── Request ───────────────────────────────────────────────────────────────────

/// One completion call. Model and temperature are provider configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub prompt: String,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
}

// ── Provider enum ─────────────────────────────────────────────────────────────

/// All available completion backends.
///
/// Enum dispatch keeps `dyn` trait objects and `async-trait` out of the
/// call path.
#[derive(Debug, Clone)]
pub enum LlmProvider {
    Dummy(providers::dummy::DummyProvider),
    Ollama(providers::ollama::OllamaProvider),
    Scripted(providers::scripted::ScriptedProvider),
}

impl LlmProvider {
    /// Send `req` and return the raw newline-delimited response body.
    pub async fn generate(&self, req: &GenerateRequest) -> Result<String, ProviderError> {
        match self {
            LlmProvider::Dummy(p) => p.generate(req).await,
            LlmProvider::Ollama(p) => p.generate(req).await,
            LlmProvider::Scripted(p) => p.generate(req).await,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LlmProvider::Dummy(_) => "dummy",
            LlmProvider::Ollama(_) => "ollama",
            LlmProvider::Scripted(_) => "scripted",
        }
    }
}
