//! Answer resolution pipeline.
//!
//! Resolution order for a question:
//!
//! 1. Spanish B2/TPS/EB1 questions get the curated answer at once.
//! 2. Unless forced to regenerate: cache, then history store, then the
//!    knowledge base. A store hit refills the cache; a knowledge-base hit
//!    is written through to both.
//! 3. Complex questions go to the generator, the rest to the keyword
//!    responder, which falls back to the assistant disclaimer. Either way
//!    the result is written through to store and cache.
//!
//! Cache and store writes are independent; a concurrent reader may see
//! one before the other.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, info, warn};

use crate::cache::AnswerCache;
use crate::complexity;
use crate::config::Config;
use crate::error::AppError;
use crate::generator::{Generator, Outcome};
use crate::history::{self, HistoryStore, Upsert};
use crate::keywords::{ASSISTANT_DISCLAIMER, KeywordResponder};
use crate::knowledge::{self, KnowledgeBase, MatchThreshold};
use crate::lang::{self, Language};
use crate::llm::providers;
use crate::special_case;
use crate::text::normalize;

/// Where an [`Answer`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Curated,
    Cache,
    History,
    Knowledge,
    Generated(Outcome),
    Keyword,
    Disclaimer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    pub language: Language,
    pub source: Source,
}

/// Everything the pipeline needs, constructed by the caller.
pub struct PipelineParts {
    pub cache: AnswerCache,
    pub history: Arc<dyn HistoryStore>,
    pub knowledge: KnowledgeBase,
    pub keywords: KeywordResponder,
    pub generator: Generator,
    /// Skip cache, store and knowledge-base lookups.
    pub force_regenerate: bool,
}

pub struct Pipeline {
    cache: AnswerCache,
    history: Arc<dyn HistoryStore>,
    knowledge: KnowledgeBase,
    keywords: KeywordResponder,
    generator: Generator,
    force_regenerate: bool,
    stats: PipelineStats,
}

impl Pipeline {
    pub fn new(parts: PipelineParts) -> Self {
        Self {
            cache: parts.cache,
            history: parts.history,
            knowledge: parts.knowledge,
            keywords: parts.keywords,
            generator: parts.generator,
            force_regenerate: parts.force_regenerate,
            stats: PipelineStats::default(),
        }
    }

    /// Production wiring from config. `reset` wipes the history database.
    pub fn from_config(config: &Config, reset: bool) -> Result<Self, AppError> {
        let provider = providers::build(&config.llm)
            .map_err(|e| AppError::Config(format!("llm provider: {e}")))?;
        let history = history::open(&config.db_path, reset);
        let knowledge = knowledge::load(&config.knowledge_paths);

        info!(
            provider = provider.name(),
            history = history.backend(),
            knowledge_entries = knowledge.len(),
            force_regenerate = config.force_regenerate,
            "pipeline ready"
        );

        Ok(Self::new(PipelineParts {
            cache: AnswerCache::new(config.cache.ttl, config.cache.capacity),
            history,
            knowledge,
            keywords: KeywordResponder::builtin(),
            generator: Generator::from_config(provider, &config.llm.ollama),
            force_regenerate: config.force_regenerate,
        }))
    }

    /// Answer text for `question`. Never empty.
    pub async fn answer(&self, question: &str) -> String {
        self.resolve(question).await.text
    }

    /// Resolve `question`, reporting where the answer came from.
    pub async fn resolve(&self, question: &str) -> Answer {
        let language = lang::detect(question);
        let answer = self.resolve_in(question, language).await;
        self.stats.record(answer.source);
        answer
    }

    async fn resolve_in(&self, question: &str, language: Language) -> Answer {
        let reply = |text: String, source: Source| Answer { text, language, source };

        if question.trim().is_empty() {
            return reply(ASSISTANT_DISCLAIMER.get(language).to_string(), Source::Disclaimer);
        }

        let normalized = normalize(question);
        debug!(%language, "resolving question");

        if language == Language::Es {
            if let Some(variant) = special_case::classify_normalized(&normalized) {
                debug!(?variant, "curated special case");
                let text = special_case::curated_answer(language, variant);
                return reply(text.to_string(), Source::Curated);
            }
        }

        if self.force_regenerate {
            debug!("forced regeneration, skipping lookups");
        } else {
            if let Some(text) = self.cache.get(question) {
                debug!("cache hit");
                return reply(text, Source::Cache);
            }

            if let Some(text) = self.find_history(question, language) {
                debug!("history hit");
                self.cache.put(question, &text);
                return reply(text, Source::History);
            }

            if let Some(text) = self.knowledge.search(question, language, MatchThreshold::Pipeline) {
                debug!("knowledge base hit");
                let text = text.to_string();
                self.write_through(question, &text, language);
                return reply(text, Source::Knowledge);
            }
        }

        let (text, source) = if complexity::is_complex(question) {
            debug!("complex question, generating");
            let generation = self.generator.generate(question, language).await;
            (generation.text, Source::Generated(generation.outcome))
        } else {
            let keyword = self.keywords.respond(question, language);
            debug!(trigger = ?keyword.trigger, "keyword responder");
            let source = if keyword.trigger.is_some() { Source::Keyword } else { Source::Disclaimer };
            (keyword.text.to_string(), source)
        };

        self.write_through(question, &text, language);
        reply(text, source)
    }

    fn find_history(&self, question: &str, language: Language) -> Option<String> {
        match self.history.find(question, language) {
            Ok(found) => found,
            Err(e) => {
                self.stats.store_errors.fetch_add(1, Ordering::Relaxed);
                warn!(error = %e, "history lookup failed, continuing without it");
                None
            }
        }
    }

    fn write_through(&self, question: &str, answer: &str, language: Language) {
        match self.history.upsert(question, answer, language) {
            Ok(Upsert::Inserted) => debug!("history record stored"),
            Ok(Upsert::AlreadyPresent) => debug!("history record already present"),
            Err(e) => {
                self.stats.store_errors.fetch_add(1, Ordering::Relaxed);
                warn!(error = %e, "history write failed, answer not persisted");
            }
        }
        self.cache.put(question, answer);
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Strict knowledge-base lookup that bypasses every other stage.
    pub fn lookup(&self, question: &str) -> Option<&str> {
        self.knowledge.search(question, lang::detect(question), MatchThreshold::Strict)
    }
}

// ── Stats ─────────────────────────────────────────────────────────────────────

/// Per-source answer counters.
#[derive(Default)]
pub struct PipelineStats {
    curated: AtomicU64,
    cache: AtomicU64,
    history: AtomicU64,
    knowledge: AtomicU64,
    generated: AtomicU64,
    keyword: AtomicU64,
    disclaimer: AtomicU64,
    store_errors: AtomicU64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub curated: u64,
    pub cache: u64,
    pub history: u64,
    pub knowledge: u64,
    pub generated: u64,
    pub keyword: u64,
    pub disclaimer: u64,
    pub store_errors: u64,
}

impl PipelineStats {
    fn record(&self, source: Source) {
        let counter = match source {
            Source::Curated => &self.curated,
            Source::Cache => &self.cache,
            Source::History => &self.history,
            Source::Knowledge => &self.knowledge,
            Source::Generated(_) => &self.generated,
            Source::Keyword => &self.keyword,
            Source::Disclaimer => &self.disclaimer,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            curated: self.curated.load(Ordering::Relaxed),
            cache: self.cache.load(Ordering::Relaxed),
            history: self.history.load(Ordering::Relaxed),
            knowledge: self.knowledge.load(Ordering::Relaxed),
            generated: self.generated.load(Ordering::Relaxed),
            keyword: self.keyword.load(Ordering::Relaxed),
            disclaimer: self.disclaimer.load(Ordering::Relaxed),
            store_errors: self.store_errors.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::history::MemoryHistory;
    use crate::llm::LlmProvider;
    use crate::llm::providers::scripted::ScriptedProvider;

    /// Store that fails every call.
    struct BrokenStore;

    impl HistoryStore for BrokenStore {
        fn backend(&self) -> &str {
            "broken"
        }
        fn find(&self, _: &str, _: Language) -> Result<Option<String>, AppError> {
            Err(AppError::Store("unavailable".into()))
        }
        fn upsert(&self, _: &str, _: &str, _: Language) -> Result<Upsert, AppError> {
            Err(AppError::Store("unavailable".into()))
        }
        fn len(&self) -> Result<usize, AppError> {
            Err(AppError::Store("unavailable".into()))
        }
    }

    fn pipeline(history: Arc<dyn HistoryStore>, force: bool) -> (Pipeline, ScriptedProvider) {
        let script = ScriptedProvider::default();
        let pipeline = Pipeline::new(PipelineParts {
            cache: AnswerCache::new(Duration::from_secs(3600), 1000),
            history,
            knowledge: KnowledgeBase::builtin(),
            keywords: KeywordResponder::builtin(),
            generator: Generator::new(LlmProvider::Scripted(script.clone()), 1000, 800),
            force_regenerate: force,
        });
        (pipeline, script)
    }

    #[tokio::test]
    async fn blank_question_gets_disclaimer() {
        let (p, _) = pipeline(Arc::new(MemoryHistory::new()), false);
        let answer = p.resolve("   ").await;
        assert_eq!(answer.source, Source::Disclaimer);
        assert_eq!(answer.text, ASSISTANT_DISCLAIMER.en);
    }

    #[tokio::test]
    async fn unmatched_simple_question_gets_assistant_disclaimer() {
        let store = Arc::new(MemoryHistory::new());
        let (p, _) = pipeline(store.clone(), false);
        let answer = p.resolve("¿Dónde está el consulado más cercano?").await;
        assert_eq!(answer.language, Language::Es);
        assert_eq!(answer.source, Source::Disclaimer);
        assert_eq!(answer.text, ASSISTANT_DISCLAIMER.es);
        assert_eq!(store.len().unwrap(), 1);
    }

    #[tokio::test]
    async fn store_failure_is_not_fatal() {
        let (p, _) = pipeline(Arc::new(BrokenStore), false);
        let answer = p.resolve("¿Qué es una visa de trabajo?").await;
        assert_eq!(answer.source, Source::Knowledge);
        assert_eq!(p.stats().store_errors, 2);

        // the cache still serves the repeat
        assert_eq!(p.resolve("¿Qué es una visa de trabajo?").await.source, Source::Cache);
    }

    #[tokio::test]
    async fn history_hit_refills_cache_only() {
        let store = Arc::new(MemoryHistory::new());
        store.upsert("hello there", "stored answer", Language::En).unwrap();
        let (p, _) = pipeline(store.clone(), false);

        let first = p.resolve("hello there").await;
        assert_eq!(first.source, Source::History);
        assert_eq!(first.text, "stored answer");
        assert_eq!(store.len().unwrap(), 1);

        assert_eq!(p.resolve("hello there").await.source, Source::Cache);
    }

    #[tokio::test]
    async fn force_skips_lookups() {
        let store = Arc::new(MemoryHistory::new());
        store.upsert("¿Qué es una visa de trabajo?", "stale", Language::Es).unwrap();
        let (p, script) = pipeline(store, true);

        let answer = p.resolve("¿Qué es una visa de trabajo?").await;
        // not complex, so the keyword responder answers
        assert_eq!(answer.source, Source::Keyword);
        assert_ne!(answer.text, "stale");
        assert_eq!(script.calls(), 0);
    }

    #[tokio::test]
    async fn spanish_special_case_is_curated_even_when_forced() {
        let (p, script) = pipeline(Arc::new(MemoryHistory::new()), true);
        let answer = p.resolve("Entré con visa B2, tengo TPS y soy derivado de EB1, ¿puedo ajustar?").await;
        assert_eq!(answer.source, Source::Curated);
        assert_eq!(script.calls(), 0);
    }

    #[tokio::test]
    async fn stats_count_sources() {
        let (p, _) = pipeline(Arc::new(MemoryHistory::new()), false);
        p.resolve("¿Qué es una visa de trabajo?").await;
        p.resolve("¿Qué es una visa de trabajo?").await;
        p.resolve("hello, tell me about green card").await;
        let s = p.stats();
        assert_eq!((s.knowledge, s.cache, s.keyword), (1, 1, 1));
    }

    #[test]
    fn lookup_uses_strict_threshold() {
        let (p, _) = pipeline(Arc::new(MemoryHistory::new()), false);
        assert!(p.lookup("¿Cómo solicitar asilo?").is_some());
        assert!(p.lookup("nada que ver aquí").is_none());
    }
}
