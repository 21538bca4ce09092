//! Completion backend implementations.
//!
//! `build(config)` is the factory, called at startup. Adding a new backend
//! means a new module and a new match arm.

pub mod dummy;
pub mod ollama;
pub mod scripted;

use crate::config::LlmConfig;
use crate::llm::{LlmProvider, ProviderError};

/// Construct a `LlmProvider` from config. The scripted provider is built
/// directly by callers, never from config.
pub fn build(config: &LlmConfig) -> Result<LlmProvider, ProviderError> {
    match config.provider.as_str() {
        "dummy" => Ok(LlmProvider::Dummy(dummy::DummyProvider)),
        "ollama" => {
            let o = &config.ollama;
            let p = ollama::OllamaProvider::new(
                o.api_base_url.clone(),
                o.model.clone(),
                o.temperature,
                o.timeout_seconds,
            )?;
            Ok(LlmProvider::Ollama(p))
        }
        _ => Err(ProviderError::UnknownProvider(config.provider.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn builds_known_providers() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut cfg = Config::test_default(tmp.path());
        assert_eq!(build(&cfg.llm).unwrap().name(), "dummy");

        cfg.llm.provider = "ollama".into();
        assert_eq!(build(&cfg.llm).unwrap().name(), "ollama");
    }

    #[test]
    fn unknown_provider_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut cfg = Config::test_default(tmp.path());
        cfg.llm.provider = "gpt-9".into();
        let err = build(&cfg.llm).unwrap_err();
        assert!(matches!(err, ProviderError::UnknownProvider(name) if name == "gpt-9"));
    }
}
