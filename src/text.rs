//! Text normalisation shared by every matcher.
//!
//! Lowercases, then folds the fixed set of Spanish/Romance accented vowels
//! and `ñ`. Every other character passes through unchanged.

/// Lowercase `text` and substitute the diacritic table.
pub fn normalize(text: &str) -> String {
    text.to_lowercase().chars().map(fold_accent).collect()
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' => 'a',
        'é' | 'è' => 'e',
        'í' | 'ì' => 'i',
        'ó' | 'ò' => 'o',
        'ú' | 'ù' | 'ü' => 'u',
        'ñ' => 'n',
        other => other,
    }
}

/// Whitespace-separated tokens, punctuation left attached.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// True when `haystack` contains every needle.
pub fn contains_all(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().all(|n| haystack.contains(n))
}

/// True when `haystack` contains at least one needle.
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}
