//! Language detection by stop-word voting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Supported answer languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Es,
    En,
}

impl Language {
    /// Two-letter code, as persisted in the history store.
    pub fn code(self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" => Ok(Language::Es),
            "en" => Ok(Language::En),
            other => Err(format!("unsupported language code: '{other}'")),
        }
    }
}

/// A fixed string available in both supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized {
    pub es: &'static str,
    pub en: &'static str,
}

impl Localized {
    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::Es => self.es,
            Language::En => self.en,
        }
    }
}

const SPANISH_STOP_WORDS: &[&str] = &[
    "el", "la", "los", "las", "un", "una", "unos", "unas", "y", "o", "pero", "porque",
    "como", "cuando", "donde", "cual", "quien", "que", "esto", "esta", "estos", "estas",
    "ese", "esa", "esos", "esas", "para", "por", "con", "sin", "sobre", "bajo", "ante",
    "entre", "desde", "hacia", "hasta", "según", "durante", "mediante", "excepto",
    "salvo", "menos", "más", "muy", "mucho", "poco", "bastante", "demasiado", "casi",
    "aproximadamente", "todo", "nada", "algo", "alguien", "nadie", "ninguno", "alguno",
];

const ENGLISH_STOP_WORDS: &[&str] = &[
    "the", "of", "and", "a", "to", "in", "is", "you", "that", "it", "he", "was", "for",
    "on", "are", "as", "with", "his", "they", "i", "at", "be", "this", "have", "from",
    "or", "one", "had", "by", "word", "but", "not", "what", "all", "were", "we", "when",
    "your", "can", "said", "there", "use", "an", "each", "which", "she", "do", "how",
    "their", "if", "will", "up", "other", "about", "out", "many", "then", "them", "these",
    "so", "some", "her", "would", "make", "like", "him", "into", "time", "has", "look",
];

/// Classify `text` as Spanish or English.
///
/// Spanish wins only with strictly more stop-word hits; ties and texts with
/// no hits at all resolve to English.
pub fn detect(text: &str) -> Language {
    let lower = text.to_lowercase();
    let (mut spanish, mut english) = (0usize, 0usize);

    for token in lower
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty())
    {
        if SPANISH_STOP_WORDS.contains(&token) {
            spanish += 1;
        }
        if ENGLISH_STOP_WORDS.contains(&token) {
            english += 1;
        }
    }

    if spanish > english { Language::Es } else { Language::En }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanish_question() {
        assert_eq!(detect("¿Cuál es el proceso para pedir asilo en los Estados Unidos?"), Language::Es);
        assert_eq!(detect("¿Qué es una visa de trabajo?"), Language::Es);
    }

    #[test]
    fn english_question() {
        assert_eq!(detect("What is the process to apply for asylum in the United States?"), Language::En);
        assert_eq!(detect("hello, tell me about green card"), Language::En);
    }

    #[test]
    fn empty_and_unknown_default_to_english() {
        assert_eq!(detect(""), Language::En);
        assert_eq!(detect("tps eb1 b2"), Language::En);
    }

    #[test]
    fn tie_resolves_to_english() {
        // one hit each: "la" and "the"
        assert_eq!(detect("la the"), Language::En);
    }

    #[test]
    fn accented_stop_words_count() {
        assert_eq!(detect("más según"), Language::Es);
    }

    #[test]
    fn uppercase_i_counts_as_english() {
        assert_eq!(detect("I"), Language::En);
        assert_eq!(detect("I y"), Language::En);
    }

    #[test]
    fn code_round_trip() {
        assert_eq!("es".parse::<Language>().unwrap(), Language::Es);
        assert_eq!(" EN ".parse::<Language>().unwrap(), Language::En);
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::Es.to_string(), "es");
    }
}
