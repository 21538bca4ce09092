//! IA MIGRANTE: layered answer resolution for immigration questions.
//!
//! The [`pipeline`] module ties everything together; the rest are the
//! stages it consults, roughly cheapest first.

pub mod cache;
pub mod complexity;
pub mod config;
pub mod error;
pub mod generator;
pub mod history;
pub mod keywords;
pub mod knowledge;
pub mod lang;
pub mod llm;
pub mod logger;
pub mod pipeline;
pub mod special_case;
pub mod text;
