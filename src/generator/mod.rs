//! Generative fallback for questions nothing else could answer.
//!
//! One completion call, validated for tone and language, with at most one
//! retry using a terse language-forcing prompt. Every path ends in text:
//! the model's answer, a curated answer for the B2/TPS/EB1 case, or a
//! fixed apology. Errors are logged here and never reach the caller.

pub mod prompt;

use tracing::{debug, error, warn};

use crate::config::OllamaConfig;
use crate::lang::{self, Language, Localized};
use crate::llm::stream::collect_fragments;
use crate::llm::{GenerateRequest, LlmProvider};
use crate::special_case::{self, Variant};
use crate::text::{contains_any, normalize};

/// Phrases (normalised) that mark a reply as a refusal.
const REFUSAL_PHRASES: &[&str] = &[
    "i cannot",
    "i'm sorry",
    "no tengo",
    "no puedo",
    "lo siento",
    "manipulacion",
];

/// Replies shorter than this many characters are suspect.
const MIN_REPLY_CHARS: usize = 200;

pub const TRANSPORT_APOLOGY: Localized = Localized {
    es: "Lo siento, hubo un error al procesar tu pregunta con el modelo avanzado. Por favor, intenta nuevamente más tarde.",
    en: "I'm sorry, there was an error processing your question with the advanced model. Please try again later.",
};

pub const EMPTY_REPLY_APOLOGY: Localized = Localized {
    es: "No se pudo obtener una respuesta válida del modelo. Por favor, intenta reformular tu pregunta.",
    en: "Could not get a valid response from the model. Please try rephrasing your question.",
};

pub const LANGUAGE_APOLOGY: Localized = Localized {
    es: "Lo siento, no pude generar una respuesta en español. Por favor, consulte con un abogado de inmigración para obtener asesoramiento específico.",
    en: "Sorry, I couldn't generate a response in English. Please consult with an immigration attorney for specific advice.",
};

/// How a [`Generation`] was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    AcceptedOnRetry,
    Curated,
    Apology,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub text: String,
    pub outcome: Outcome,
}

impl Generation {
    fn new(text: impl Into<String>, outcome: Outcome) -> Self {
        Self { text: text.into(), outcome }
    }
}

enum Verdict {
    Pass(String),
    Empty,
    Unfit,
    WrongLanguage,
}

pub struct Generator {
    provider: LlmProvider,
    max_tokens: u32,
    retry_max_tokens: u32,
}

impl Generator {
    pub fn new(provider: LlmProvider, max_tokens: u32, retry_max_tokens: u32) -> Self {
        Self { provider, max_tokens, retry_max_tokens }
    }

    pub fn from_config(provider: LlmProvider, config: &OllamaConfig) -> Self {
        Self::new(provider, config.max_tokens, config.retry_max_tokens)
    }

    /// Produce an answer for `question` in `language`. Never fails.
    pub async fn generate(&self, question: &str, language: Language) -> Generation {
        let special = special_case::classify(question);
        let fallback = |apology: Localized| match special {
            Some(variant) => curated(language, variant),
            None => Generation::new(apology.get(language), Outcome::Apology),
        };

        let first = GenerateRequest {
            prompt: prompt::initial(question, language, special),
            max_tokens: self.max_tokens,
        };
        let body = match self.provider.generate(&first).await {
            Ok(body) => body,
            Err(e) => {
                error!(provider = self.provider.name(), error = %e, "generation failed");
                return fallback(TRANSPORT_APOLOGY);
            }
        };

        match judge(&collect_fragments(&body), language, special) {
            Verdict::Pass(text) => return Generation::new(text, Outcome::Accepted),
            Verdict::Empty => {
                warn!("model returned no text");
                return fallback(EMPTY_REPLY_APOLOGY);
            }
            Verdict::Unfit => {
                debug!("model reply unfit for curated case");
                return fallback(LANGUAGE_APOLOGY);
            }
            Verdict::WrongLanguage => {
                warn!(expected = %language, "model replied in the wrong language, retrying");
            }
        }

        let retry = GenerateRequest {
            prompt: prompt::retry(question, language),
            max_tokens: self.retry_max_tokens,
        };
        match self.provider.generate(&retry).await {
            Ok(body) => match judge(&collect_fragments(&body), language, special) {
                Verdict::Pass(text) => Generation::new(text, Outcome::AcceptedOnRetry),
                _ => {
                    warn!(expected = %language, "retry did not produce a usable reply");
                    fallback(LANGUAGE_APOLOGY)
                }
            },
            Err(e) => {
                error!(provider = self.provider.name(), error = %e, "retry generation failed");
                fallback(LANGUAGE_APOLOGY)
            }
        }
    }
}

fn curated(language: Language, variant: Variant) -> Generation {
    debug!(?variant, "using curated answer");
    Generation::new(special_case::curated_answer(language, variant), Outcome::Curated)
}

/// Validate one reply. Short or refusing replies are only rejected for the
/// curated case, where a better answer is on hand.
fn judge(text: &str, language: Language, special: Option<Variant>) -> Verdict {
    if text.trim().is_empty() {
        return Verdict::Empty;
    }
    if special.is_some() && (is_short(text) || is_refusal(text)) {
        return Verdict::Unfit;
    }
    if lang::detect(text) != language {
        return Verdict::WrongLanguage;
    }
    Verdict::Pass(text.to_string())
}

fn is_short(text: &str) -> bool {
    text.chars().count() < MIN_REPLY_CHARS
}

fn is_refusal(text: &str) -> bool {
    contains_any(&normalize(text), REFUSAL_PHRASES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::providers::scripted::ScriptedProvider;
    use crate::special_case::{CURATED_EN_DEFAULT, CURATED_EN_LONG};

    const EN_REPLY: &str = "The applicant should file the form with the agency and wait for the notice.";
    const ES_REPLY: &str = "El solicitante debe presentar el formulario ante la agencia y esperar la notificación.";

    fn generator(replies: Vec<Result<String, String>>) -> (Generator, ScriptedProvider) {
        let script = ScriptedProvider::new(replies);
        (Generator::new(LlmProvider::Scripted(script.clone()), 1000, 800), script)
    }

    fn long_en_reply() -> String {
        format!("{EN_REPLY} {}", "It is the case that the process has many steps to follow. ".repeat(5))
    }

    #[tokio::test]
    async fn accepts_reply_in_requested_language() {
        let (g, script) = generator(vec![ScriptedProvider::text(EN_REPLY)]);
        let out = g.generate("What are the daca and vawa rules?", Language::En).await;
        assert_eq!(out, Generation::new(EN_REPLY, Outcome::Accepted));
        assert_eq!(script.calls(), 1);
        assert_eq!(script.requests()[0].max_tokens, 1000);
    }

    #[tokio::test]
    async fn wrong_language_retries_once_with_terse_prompt() {
        let (g, script) = generator(vec![ScriptedProvider::text(ES_REPLY), ScriptedProvider::text(EN_REPLY)]);
        let out = g.generate("What are the daca and vawa rules?", Language::En).await;
        assert_eq!(out.outcome, Outcome::AcceptedOnRetry);
        assert_eq!(out.text, EN_REPLY);

        let requests = script.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].max_tokens, 800);
        assert!(requests[1].prompt.starts_with("RESPOND EXCLUSIVELY IN ENGLISH."));
    }

    #[tokio::test]
    async fn failed_retry_gives_language_apology() {
        let (g, script) = generator(vec![ScriptedProvider::text(EN_REPLY), ScriptedProvider::text(EN_REPLY)]);
        let out = g.generate("¿Qué pasa con daca y vawa?", Language::Es).await;
        assert_eq!(out, Generation::new(LANGUAGE_APOLOGY.es, Outcome::Apology));
        assert_eq!(script.calls(), 2);
    }

    #[tokio::test]
    async fn retry_transport_failure_gives_language_apology() {
        let (g, _) = generator(vec![ScriptedProvider::text(ES_REPLY), ScriptedProvider::failure("down")]);
        let out = g.generate("What about daca and vawa?", Language::En).await;
        assert_eq!(out, Generation::new(LANGUAGE_APOLOGY.en, Outcome::Apology));
    }

    #[tokio::test]
    async fn transport_failure_gives_apology() {
        let (g, script) = generator(vec![ScriptedProvider::failure("connection refused")]);
        let out = g.generate("What about daca and vawa?", Language::En).await;
        assert_eq!(out, Generation::new(TRANSPORT_APOLOGY.en, Outcome::Apology));
        assert_eq!(script.calls(), 1);
    }

    #[tokio::test]
    async fn empty_reply_gives_apology() {
        let (g, _) = generator(vec![Ok("not json\n{\"done\":true}\n".into())]);
        let out = g.generate("¿Qué pasa con daca y vawa?", Language::Es).await;
        assert_eq!(out, Generation::new(EMPTY_REPLY_APOLOGY.es, Outcome::Apology));
    }

    #[tokio::test]
    async fn short_reply_accepted_outside_curated_case() {
        let (g, _) = generator(vec![ScriptedProvider::text("I'm sorry, it is complicated.")]);
        let out = g.generate("What about daca and vawa?", Language::En).await;
        assert_eq!(out.outcome, Outcome::Accepted);
    }

    #[tokio::test]
    async fn curated_case_replaces_short_reply() {
        let (g, script) = generator(vec![ScriptedProvider::text(EN_REPLY)]);
        let out = g.generate("B2 entry, then TPS; can I adjust as an EB1 derivative?", Language::En).await;
        assert_eq!(out, Generation::new(CURATED_EN_DEFAULT, Outcome::Curated));
        assert_eq!(script.calls(), 1);
        assert!(script.requests()[0].prompt.starts_with("As a U.S. immigration attorney"));
    }

    #[tokio::test]
    async fn curated_case_replaces_refusal() {
        let refusal = format!("I cannot help with that. {}", long_en_reply());
        let (g, _) = generator(vec![ScriptedProvider::text(&refusal)]);
        let out = g.generate("B2, out of status for years, TPS, EB1?", Language::En).await;
        assert_eq!(out, Generation::new(CURATED_EN_LONG, Outcome::Curated));
    }

    #[tokio::test]
    async fn curated_case_wrong_language_then_failed_retry() {
        let spanish = format!("{ES_REPLY} {}", "El trámite tiene varios pasos y la persona debe reunir todas las pruebas. ".repeat(4));
        let (g, script) = generator(vec![ScriptedProvider::text(&spanish), ScriptedProvider::failure("down")]);
        let out = g.generate("B2 entry, then TPS; EB1 derivative?", Language::En).await;
        assert_eq!(out, Generation::new(CURATED_EN_DEFAULT, Outcome::Curated));
        assert_eq!(script.calls(), 2);
    }

    #[tokio::test]
    async fn curated_case_on_transport_failure() {
        let (g, _) = generator(vec![ScriptedProvider::failure("down")]);
        let out = g.generate("B2 entry, then TPS; EB1 derivative?", Language::En).await;
        assert_eq!(out.outcome, Outcome::Curated);
    }

    #[tokio::test]
    async fn curated_case_accepts_good_reply() {
        let reply = long_en_reply();
        let (g, _) = generator(vec![ScriptedProvider::text(&reply)]);
        let out = g.generate("B2 entry, then TPS; EB1 derivative?", Language::En).await;
        assert_eq!(out, Generation::new(reply, Outcome::Accepted));
    }
}
