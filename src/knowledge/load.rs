//! Knowledge-base loading.
//!
//! Source files are JSON objects mapping a category name to an array of
//! items:
//!
//! ```json
//! { "visas": [ { "question": "...", "answer": "...", "language": "es" } ] }
//! ```
//!
//! `question` defaults to `¿<category>?`, `language` defaults to `es`.
//! Non-array categories and items without a usable `answer` are skipped.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::error::AppError;
use crate::lang::Language;
use crate::special_case::{
    CURATED_EN_DEFAULT, CURATED_EN_LONG, CURATED_ES_DEFAULT, CURATED_ES_LONG,
    ENTRY_QUESTION_EN_DEFAULT, ENTRY_QUESTION_EN_LONG, ENTRY_QUESTION_ES_DEFAULT,
    ENTRY_QUESTION_ES_LONG,
};

use super::{KnowledgeBase, KnowledgeEntry};

/// Load from the first candidate path that parses, falling back to the
/// built-in set. Never fails.
pub fn load(paths: &[PathBuf]) -> KnowledgeBase {
    for path in paths {
        match load_file(path) {
            Ok(mut entries) => {
                entries.extend(curated_entries());
                let kb = KnowledgeBase::new(entries);
                info!(path = %path.display(), entries = kb.len(), "knowledge base loaded");
                return kb;
            }
            Err(e) => warn!(error = %e, "knowledge base candidate rejected"),
        }
    }

    error!(candidates = paths.len(), "no knowledge base source could be loaded, using built-in entries");
    KnowledgeBase::builtin()
}

/// Read and parse one source file.
pub fn load_file(path: &Path) -> Result<Vec<KnowledgeEntry>, AppError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::Knowledge(format!("cannot read {}: {e}", path.display())))?;
    parse(&raw).map_err(|e| match e {
        AppError::Knowledge(msg) => AppError::Knowledge(format!("{}: {msg}", path.display())),
        other => other,
    })
}

/// Parse source text into entries.
pub fn parse(raw: &str) -> Result<Vec<KnowledgeEntry>, AppError> {
    let root: Value = serde_json::from_str(raw)
        .map_err(|e| AppError::Knowledge(format!("invalid JSON: {e}")))?;
    let Value::Object(categories) = root else {
        return Err(AppError::Knowledge("top level must be an object".into()));
    };

    let mut entries = Vec::new();
    for (category, items) in categories {
        let Value::Array(items) = items else {
            debug!(%category, "skipping non-array category");
            continue;
        };
        for item in items {
            match parse_item(&category, &item) {
                Some(entry) => entries.push(entry),
                None => debug!(%category, "skipping unusable item"),
            }
        }
    }
    Ok(entries)
}

fn parse_item(category: &str, item: &Value) -> Option<KnowledgeEntry> {
    let answer = item.get("answer")?.as_str()?.trim();
    if answer.is_empty() {
        return None;
    }

    let question = match item.get("question").and_then(Value::as_str) {
        Some(q) if !q.trim().is_empty() => q.to_string(),
        Some(_) => return None,
        None => format!("¿{category}?"),
    };

    let language = match item.get("language").and_then(Value::as_str) {
        None => Some(Language::Es),
        Some(code) => code.parse::<Language>().ok(),
    };

    Some(KnowledgeEntry::new(question, answer, language))
}

/// The general entries used when no source loads.
pub fn default_entries() -> Vec<KnowledgeEntry> {
    vec![
        KnowledgeEntry::new(
            "¿Qué es una visa de trabajo?",
            "Una visa de trabajo es un documento oficial que permite a un extranjero trabajar legalmente en un país durante un período determinado. Los requisitos y procesos varían según el país emisor y el tipo de trabajo.",
            Some(Language::Es),
        ),
        KnowledgeEntry::new(
            "¿Cómo solicitar asilo?",
            "El proceso de solicitud de asilo generalmente implica presentarse ante las autoridades migratorias y expresar temor de regresar al país de origen debido a persecución por motivos de raza, religión, nacionalidad, opinión política o pertenencia a un grupo social específico. Es recomendable buscar asesoría legal especializada.",
            Some(Language::Es),
        ),
    ]
}

/// The four special-case entries, always appended after a load.
pub fn curated_entries() -> Vec<KnowledgeEntry> {
    vec![
        KnowledgeEntry::new(ENTRY_QUESTION_ES_DEFAULT, CURATED_ES_DEFAULT, Some(Language::Es)),
        KnowledgeEntry::new(ENTRY_QUESTION_ES_LONG, CURATED_ES_LONG, Some(Language::Es)),
        KnowledgeEntry::new(ENTRY_QUESTION_EN_DEFAULT, CURATED_EN_DEFAULT, Some(Language::En)),
        KnowledgeEntry::new(ENTRY_QUESTION_EN_LONG, CURATED_EN_LONG, Some(Language::En)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SOURCE: &str = r#"{
        "asilo": [
            { "question": "¿Qué es el asilo afirmativo?", "answer": "Es una solicitud presentada ante USCIS." },
            { "answer": "Respuesta sin pregunta." },
            { "question": "What is affirmative asylum?", "answer": "A filing with USCIS.", "language": "en" },
            { "question": "Qu'est-ce que l'asile ?", "answer": "Une demande.", "language": "fr" },
            { "question": "sin respuesta" },
            { "question": "vacía", "answer": "   " }
        ],
        "meta": { "version": 2 }
    }"#;

    fn write(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn parse_category_format() {
        let entries = parse(SOURCE).unwrap();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].language, Some(Language::Es));
        assert_eq!(entries[1].question, "¿asilo?");
        assert_eq!(entries[2].language, Some(Language::En));
        assert_eq!(entries[3].language, None);
    }

    #[test]
    fn data_array_wrapper_is_accepted() {
        let entries = parse(r#"{"data": [{"question": "q", "answer": "a", "language": "en"}]}"#).unwrap();
        assert_eq!(entries, vec![KnowledgeEntry::new("q", "a", Some(Language::En))]);
    }

    #[test]
    fn non_object_is_rejected() {
        assert!(parse("[1, 2]").is_err());
        assert!(parse("not json").is_err());
    }

    #[test]
    fn load_appends_curated_entries() {
        let f = write(SOURCE);
        let kb = load(&[f.path().to_path_buf()]);
        assert_eq!(kb.len(), 8);
    }

    #[test]
    fn load_tries_candidates_in_order() {
        let f = write(SOURCE);
        let kb = load(&[PathBuf::from("/nonexistent/kb.json"), f.path().to_path_buf()]);
        assert_eq!(kb.len(), 8);
    }

    #[test]
    fn load_falls_back_to_builtin() {
        let bad = write("{ broken");
        let kb = load(&[bad.path().to_path_buf(), PathBuf::from("/nonexistent/kb.json")]);
        assert_eq!(kb.len(), 6);
        assert!(kb.entries().any(|e| e.question == "¿Cómo solicitar asilo?"));
    }

    #[test]
    fn load_file_error_names_path() {
        let err = load_file(Path::new("/nonexistent/kb.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/kb.json"));
    }
}
