//! Static knowledge base of curated question/answer pairs.
//!
//! Loaded once at startup (see [`load`]) and read-only afterwards, so it is
//! shared without locking. Search runs three stages in order and returns
//! the first hit:
//!
//! 1. the B2/TPS/EB1 special case, which picks a curated entry by variant;
//! 2. exact match on the normalised question, same language;
//! 3. token-overlap match against entries in the same language or
//!    unlabeled ones.

pub mod load;

use tracing::debug;

use crate::lang::Language;
use crate::special_case::{self, Variant};
use crate::text::{contains_all, contains_any, normalize, words};

pub use load::load;

/// Markers identifying the curated long-duration entry's question.
const LONG_ENTRY_MARKERS: &[&str] = &["anos sin estatus", "out of status for years"];
/// Markers identifying the curated default entry's question.
const DEFAULT_ENTRY_MARKERS: &[&str] = &["visa de turista", "b2 visa"];
/// Looser duration markers for the second special-case pass.
const RELAXED_LONG_MARKERS: &[&str] = &["anos", "years"];

/// Minimum share of query tokens that must hit an entry question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchThreshold {
    /// 30 %, used by the answer pipeline.
    Pipeline,
    /// 50 %, used for direct lookups.
    Strict,
}

impl MatchThreshold {
    pub fn percent(self) -> usize {
        match self {
            MatchThreshold::Pipeline => 30,
            MatchThreshold::Strict => 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeEntry {
    pub question: String,
    pub answer: String,
    /// `None` for entries whose source named an unsupported language.
    pub language: Option<Language>,
}

impl KnowledgeEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>, language: Option<Language>) -> Self {
        Self { question: question.into(), answer: answer.into(), language }
    }
}

struct Indexed {
    entry: KnowledgeEntry,
    normalized_question: String,
}

pub struct KnowledgeBase {
    entries: Vec<Indexed>,
}

impl KnowledgeBase {
    /// Build from an explicit entry list. Entries with an empty question or
    /// answer are dropped.
    pub fn new(entries: Vec<KnowledgeEntry>) -> Self {
        let entries = entries
            .into_iter()
            .filter(|e| !e.question.trim().is_empty() && !e.answer.trim().is_empty())
            .map(|entry| Indexed { normalized_question: normalize(&entry.question), entry })
            .collect();
        Self { entries }
    }

    /// The built-in set used when no source can be loaded.
    pub fn builtin() -> Self {
        let mut entries = load::default_entries();
        entries.extend(load::curated_entries());
        Self::new(entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &KnowledgeEntry> {
        self.entries.iter().map(|i| &i.entry)
    }

    /// Find an answer for `question` in `language`.
    pub fn search(&self, question: &str, language: Language, threshold: MatchThreshold) -> Option<&str> {
        let normalized = normalize(question);

        if let Some(variant) = special_case::classify_normalized(&normalized) {
            if let Some(answer) = self.special_case(variant, language) {
                return Some(answer);
            }
        }

        if let Some(hit) = self
            .entries
            .iter()
            .find(|i| i.entry.language == Some(language) && i.normalized_question == normalized)
        {
            debug!("knowledge base exact match");
            return Some(&hit.entry.answer);
        }

        self.fuzzy(&normalized, language, threshold)
    }

    fn special_case(&self, variant: Variant, language: Language) -> Option<&str> {
        let same_language = || self.entries.iter().filter(move |i| i.entry.language == Some(language));

        let strict = same_language().find(|i| {
            let q = i.normalized_question.as_str();
            if !contains_all(q, &["tps", "eb1"]) {
                return false;
            }
            match variant {
                Variant::LongDuration => contains_any(q, LONG_ENTRY_MARKERS),
                Variant::Default => {
                    contains_any(q, DEFAULT_ENTRY_MARKERS) && !contains_any(q, LONG_ENTRY_MARKERS)
                }
            }
        });
        if let Some(hit) = strict {
            debug!(?variant, "knowledge base special-case entry");
            return Some(&hit.entry.answer);
        }

        let relaxed = same_language().find(|i| {
            let q = i.normalized_question.as_str();
            contains_all(q, &["tps", "eb1"])
                && (variant == Variant::Default || contains_any(q, RELAXED_LONG_MARKERS))
        });
        if relaxed.is_some() {
            debug!(?variant, "knowledge base relaxed special-case entry");
        }
        relaxed.map(|i| i.entry.answer.as_str())
    }

    fn fuzzy(&self, normalized: &str, language: Language, threshold: MatchThreshold) -> Option<&str> {
        let tokens: Vec<&str> = words(normalized).collect();
        if tokens.is_empty() {
            return None;
        }
        let pct = threshold.percent();

        self.entries
            .iter()
            .filter(|i| i.entry.language.is_none_or(|l| l == language))
            .find(|i| {
                let matches = tokens
                    .iter()
                    .filter(|t| t.chars().count() > 3 && i.normalized_question.contains(*t))
                    .count();
                matches > 0 && matches * 100 > pct * tokens.len()
            })
            .map(|i| {
                debug!(entry = %i.entry.question, "knowledge base fuzzy match");
                i.entry.answer.as_str()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::special_case::{
        CURATED_EN_DEFAULT, CURATED_EN_LONG, CURATED_ES_DEFAULT, CURATED_ES_LONG,
    };

    fn kb() -> KnowledgeBase {
        KnowledgeBase::builtin()
    }

    #[test]
    fn builtin_has_defaults_and_curated() {
        assert_eq!(kb().len(), 6);
    }

    #[test]
    fn exact_match_ignores_case_and_accents() {
        let kb = kb();
        let answer = kb.search("¿que es una VISA de trabajo?", Language::Es, MatchThreshold::Pipeline);
        assert!(answer.unwrap().starts_with("Una visa de trabajo es un documento oficial"));
    }

    #[test]
    fn exact_match_is_language_filtered() {
        let base = KnowledgeBase::new(vec![KnowledgeEntry::new("ping", "pong", Some(Language::Es))]);
        assert_eq!(base.search("ping", Language::En, MatchThreshold::Pipeline), None);
        assert_eq!(base.search("ping", Language::Es, MatchThreshold::Pipeline), Some("pong"));
    }

    #[test]
    fn special_case_picks_variant_per_language() {
        let base = kb();
        let es = "Entré con visa B2, luego TPS, ¿puedo ajustar como derivado EB1?";
        assert_eq!(base.search(es, Language::Es, MatchThreshold::Pipeline), Some(CURATED_ES_DEFAULT));

        let es_long = "Entré con B2, estuve 4 años sin estatus, luego TPS, ¿EB1?";
        assert_eq!(base.search(es_long, Language::Es, MatchThreshold::Pipeline), Some(CURATED_ES_LONG));

        let en = "I came on a B2, now have TPS, can I adjust via my spouse's EB1?";
        assert_eq!(base.search(en, Language::En, MatchThreshold::Pipeline), Some(CURATED_EN_DEFAULT));

        let en_long = "B2 entry, out of status for years, then TPS. EB1 derivative?";
        assert_eq!(base.search(en_long, Language::En, MatchThreshold::Pipeline), Some(CURATED_EN_LONG));
    }

    #[test]
    fn special_case_falls_back_to_relaxed_pass() {
        let base = KnowledgeBase::new(vec![
            KnowledgeEntry::new("tps y eb1: resumen", "relaxed default", Some(Language::Es)),
            KnowledgeEntry::new("tps, eb1 y años fuera", "relaxed long", Some(Language::Es)),
        ]);
        assert_eq!(
            base.search("b2 tps eb1", Language::Es, MatchThreshold::Pipeline),
            Some("relaxed default")
        );
        assert_eq!(
            base.search("b2 tps eb1 mucho tiempo", Language::Es, MatchThreshold::Pipeline),
            Some("relaxed long")
        );
    }

    #[test]
    fn fuzzy_threshold_is_strictly_greater() {
        // 3 of 10 tokens hit: 30 % is not > 30 %
        let base = KnowledgeBase::new(vec![KnowledgeEntry::new(
            "requisitos permiso asilo",
            "fuzzy",
            Some(Language::Es),
        )]);
        let q = "requisitos permiso asilo a b c d e f g";
        assert_eq!(base.search(q, Language::Es, MatchThreshold::Pipeline), None);

        // 3 of 9: 33 % clears the pipeline threshold but not the strict one
        let q = "requisitos permiso asilo a b c d e f";
        assert_eq!(base.search(q, Language::Es, MatchThreshold::Pipeline), Some("fuzzy"));
        assert_eq!(base.search(q, Language::Es, MatchThreshold::Strict), None);
    }

    #[test]
    fn fuzzy_ignores_short_tokens() {
        let base = KnowledgeBase::new(vec![KnowledgeEntry::new("la visa", "x", Some(Language::Es))]);
        assert_eq!(base.search("la", Language::Es, MatchThreshold::Pipeline), None);
    }

    #[test]
    fn fuzzy_includes_unlabeled_entries() {
        let base = KnowledgeBase::new(vec![
            KnowledgeEntry::new("asylum interview preparation", "other", Some(Language::Es)),
            KnowledgeEntry::new("asylum interview preparation", "unlabeled", None),
        ]);
        assert_eq!(
            base.search("asylum interview", Language::En, MatchThreshold::Strict),
            Some("unlabeled")
        );
    }

    #[test]
    fn empty_entries_are_dropped() {
        let base = KnowledgeBase::new(vec![
            KnowledgeEntry::new("", "a", Some(Language::Es)),
            KnowledgeEntry::new("q", "  ", Some(Language::Es)),
        ]);
        assert!(base.is_empty());
    }
}
