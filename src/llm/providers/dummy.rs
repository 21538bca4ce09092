//! Dummy provider. Echoes the prompt back as a single streamed fragment
//! prefixed with `[echo]`, for running the pipeline without a model server.

use crate::llm::stream::encode_fragments;
use crate::llm::{GenerateRequest, ProviderError};

#[derive(Debug, Clone)]
pub struct DummyProvider;

impl DummyProvider {
    pub async fn generate(&self, req: &GenerateRequest) -> Result<String, ProviderError> {
        Ok(encode_fragments(&[&format!("[echo] {}", req.prompt)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::stream::collect_fragments;

    #[tokio::test]
    async fn generate_prefixes_echo() {
        let p = DummyProvider;
        let req = GenerateRequest { prompt: "hello".into(), max_tokens: 10 };
        let body = p.generate(&req).await.unwrap();
        assert_eq!(body.lines().count(), 1);
        assert_eq!(collect_fragments(&body), "[echo] hello");
    }
}
