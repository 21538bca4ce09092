//! Decides whether a question is worth a generative call.

use crate::text::normalize;

/// Immigration terms counted against the normalised question.
pub const KEYWORDS: &[&str] = &[
    "tps", "eb1", "eb2", "eb3", "ajust", "estatus", "status", "green card", "deportacion",
    "asilo", "visa", "i-485", "i-130", "i-140", "waiver", "perdon", "inadmisible",
    "overstay", "daca", "vawa", "u visa", "t visa", "245(i)", "245(k)", "asylum",
    "citizenship", "ciudadania", "naturalizacion", "naturalization", "parole",
    "adjustment", "removal", "deportation", "appeal", "apelacion", "h1b", "h2a", "h2b",
    "refugee", "refugiado", "credible fear", "miedo creible", "priority date",
    "fecha prioritaria",
];

/// Questions longer than this many characters are always complex.
pub const MAX_SIMPLE_CHARS: usize = 100;

/// Number of distinct keywords occurring in `question`.
pub fn keyword_count(question: &str) -> usize {
    let normalized = normalize(question);
    KEYWORDS.iter().filter(|k| normalized.contains(*k)).count()
}

/// Two or more keywords, or a long question.
pub fn is_complex(question: &str) -> bool {
    keyword_count(question) >= 2 || question.chars().count() > MAX_SIMPLE_CHARS
}
