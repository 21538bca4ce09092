//! Scripted provider: replays a queue of canned replies and records every
//! request it receives. Clones share the same script and log.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::llm::stream::encode_fragments;
use crate::llm::{GenerateRequest, ProviderError};

/// A canned reply: a raw streamed body, or a transport failure message.
pub type ScriptedReply = Result<String, String>;

#[derive(Debug, Default)]
struct Script {
    replies: VecDeque<ScriptedReply>,
    requests: Vec<GenerateRequest>,
}

#[derive(Debug, Clone, Default)]
pub struct ScriptedProvider {
    script: Arc<Mutex<Script>>,
}

impl ScriptedProvider {
    pub fn new(replies: impl IntoIterator<Item = ScriptedReply>) -> Self {
        Self {
            script: Arc::new(Mutex::new(Script {
                replies: replies.into_iter().collect(),
                requests: Vec::new(),
            })),
        }
    }

    /// A reply streaming `text` as a single fragment.
    pub fn text(text: &str) -> ScriptedReply {
        Ok(encode_fragments(&[text]))
    }

    /// A transport failure.
    pub fn failure(message: &str) -> ScriptedReply {
        Err(message.to_string())
    }

    pub fn push(&self, reply: ScriptedReply) {
        if let Ok(mut s) = self.script.lock() {
            s.replies.push_back(reply);
        }
    }

    /// Number of `generate` calls so far.
    pub fn calls(&self) -> usize {
        self.script.lock().map(|s| s.requests.len()).unwrap_or(0)
    }

    /// Every request received, oldest first.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.script.lock().map(|s| s.requests.clone()).unwrap_or_default()
    }

    pub async fn generate(&self, req: &GenerateRequest) -> Result<String, ProviderError> {
        let mut script = self
            .script
            .lock()
            .map_err(|_| ProviderError::Request("scripted provider lock poisoned".into()))?;
        script.requests.push(req.clone());
        match script.replies.pop_front() {
            Some(Ok(body)) => Ok(body),
            Some(Err(message)) => Err(ProviderError::Request(message)),
            None => Err(ProviderError::Request("script exhausted".into())),
        }
    }
}
