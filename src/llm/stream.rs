//! Newline-delimited streaming body handling.
//!
//! Each line of a streamed generate response is a JSON object that may carry
//! a `response` text fragment. Lines that fail to parse are skipped.

use serde::Deserialize;
use tracing::debug;

#[derive(Deserialize)]
struct Fragment {
    #[serde(default)]
    response: Option<String>,
}

/// Concatenate the `response` field of every parseable line in `body`.
pub fn collect_fragments(body: &str) -> String {
    let mut out = String::new();
    for line in body.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match serde_json::from_str::<Fragment>(line) {
            Ok(Fragment { response: Some(text) }) => out.push_str(&text),
            Ok(_) => {}
            Err(e) => debug!(error = %e, line_len = line.len(), "skipping unparseable fragment"),
        }
    }
    out
}

/// Build a streamed body from text fragments, one JSON line each.
pub fn encode_fragments(fragments: &[&str]) -> String {
    let mut body = String::new();
    for (i, text) in fragments.iter().enumerate() {
        let line = serde_json::json!({ "response": text, "done": i + 1 == fragments.len() });
        body.push_str(&line.to_string());
        body.push('\n');
    }
    body
}
