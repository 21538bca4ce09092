//! Configuration loading with env-var overrides.
//!
//! Reads `config/default.toml` relative to the current working directory
//! (or an explicit path), then applies `MIGRANTE_WORK_DIR`, `MIGRANTE_LOG_LEVEL` and
//! `FORCE_NEW_RESPONSE` env overrides.

use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;

use crate::error::AppError;
use crate::logger;

/// Ephemeral answer cache configuration.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Lifetime of a cached answer.
    pub ttl: Duration,
    /// Maximum number of cached answers before eviction kicks in.
    pub capacity: usize,
}

/// Ollama `/api/generate` provider configuration.
/// Populated from `[llm.ollama]` in the TOML.
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Full generate endpoint URL.
    pub api_base_url: String,
    /// Model name passed in the request body.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Output length bound for the first attempt.
    pub max_tokens: u32,
    /// Output length bound for the language-forcing retry.
    pub retry_max_tokens: u32,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
}

/// LLM configuration.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Which provider is active (`"ollama"` or `"dummy"`).
    /// Maps to `default` in `[llm]`.
    pub provider: String,
    pub ollama: OllamaConfig,
}

/// Fully-resolved assistant configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub name: String,
    /// Working directory for persistent data (already expanded, no `~`).
    pub work_dir: PathBuf,
    pub log_level: String,
    /// History database path (already joined onto `work_dir` when relative).
    pub db_path: PathBuf,
    pub cache: CacheConfig,
    /// Candidate knowledge-base sources, tried in order.
    pub knowledge_paths: Vec<PathBuf>,
    /// Skip cache, store and knowledge-base lookups and always regenerate.
    pub force_regenerate: bool,
    pub llm: LlmConfig,
}

/// Raw TOML shape, the `serde` target before resolution.
#[derive(Deserialize)]
struct RawConfig {
    assistant: RawAssistant,
    #[serde(default)]
    store: RawStore,
    #[serde(default)]
    cache: RawCache,
    #[serde(default)]
    knowledge: RawKnowledge,
    #[serde(default)]
    pipeline: RawPipeline,
    #[serde(default)]
    llm: RawLlm,
}

#[derive(Deserialize)]
struct RawAssistant {
    #[serde(default = "default_name")]
    name: String,
    work_dir: String,
    #[serde(default = "default_log_level")]
    log_level: String,
}

#[derive(Deserialize)]
struct RawStore {
    #[serde(default = "default_db_file")]
    db_file: String,
}

impl Default for RawStore {
    fn default() -> Self {
        Self { db_file: default_db_file() }
    }
}

#[derive(Deserialize)]
struct RawCache {
    #[serde(default = "default_cache_ttl")]
    ttl_seconds: u64,
    #[serde(default = "default_cache_capacity")]
    capacity: usize,
}

impl Default for RawCache {
    fn default() -> Self {
        Self { ttl_seconds: default_cache_ttl(), capacity: default_cache_capacity() }
    }
}

#[derive(Deserialize, Default)]
struct RawKnowledge {
    #[serde(default)]
    paths: Vec<String>,
}

#[derive(Deserialize, Default)]
struct RawPipeline {
    #[serde(default)]
    force_regenerate: bool,
}

#[derive(Deserialize)]
struct RawLlm {
    /// Maps to `default = "..."` in `[llm]`.
    #[serde(rename = "default", default = "default_llm_provider")]
    provider: String,
    #[serde(default)]
    ollama: RawOllamaConfig,
}

impl Default for RawLlm {
    fn default() -> Self {
        Self { provider: default_llm_provider(), ollama: RawOllamaConfig::default() }
    }
}

#[derive(Deserialize)]
struct RawOllamaConfig {
    #[serde(default = "default_ollama_api_base_url")]
    api_base_url: String,
    #[serde(default = "default_ollama_model")]
    model: String,
    #[serde(default = "default_ollama_temperature")]
    temperature: f32,
    #[serde(default = "default_ollama_max_tokens")]
    max_tokens: u32,
    #[serde(default = "default_ollama_retry_max_tokens")]
    retry_max_tokens: u32,
    #[serde(default = "default_ollama_timeout_seconds")]
    timeout_seconds: u64,
}

impl Default for RawOllamaConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_ollama_api_base_url(),
            model: default_ollama_model(),
            temperature: default_ollama_temperature(),
            max_tokens: default_ollama_max_tokens(),
            retry_max_tokens: default_ollama_retry_max_tokens(),
            timeout_seconds: default_ollama_timeout_seconds(),
        }
    }
}

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

fn default_name() -> String { "IA MIGRANTE".to_string() }
fn default_log_level() -> String { "info".to_string() }
fn default_db_file() -> String { "ia_migrante.db".to_string() }
fn default_cache_ttl() -> u64 { 3600 }
fn default_cache_capacity() -> usize { 1000 }
fn default_llm_provider() -> String { "ollama".to_string() }
fn default_ollama_api_base_url() -> String { "http://localhost:11434/api/generate".to_string() }
fn default_ollama_model() -> String { "llama3.2:1b".to_string() }
fn default_ollama_temperature() -> f32 { 0.1 }
fn default_ollama_max_tokens() -> u32 { 1000 }
fn default_ollama_retry_max_tokens() -> u32 { 800 }
fn default_ollama_timeout_seconds() -> u64 { 120 }

/// Load config from `path` (default `config/default.toml`), then apply
/// env-var overrides.
pub fn load(path: Option<&str>) -> Result<Config, AppError> {
    let work_dir_override = env::var("MIGRANTE_WORK_DIR").ok();
    let log_level_override = env::var("MIGRANTE_LOG_LEVEL").ok();
    let force_override = env::var("FORCE_NEW_RESPONSE").ok();
    load_from(
        Path::new(path.unwrap_or(DEFAULT_CONFIG_PATH)),
        work_dir_override.as_deref(),
        log_level_override.as_deref(),
        force_override.as_deref(),
    )
}

/// Loader with an explicit path and optional overrides.
/// Tests pass overrides directly instead of mutating env vars.
pub fn load_from(
    path: &Path,
    work_dir_override: Option<&str>,
    log_level_override: Option<&str>,
    force_override: Option<&str>,
) -> Result<Config, AppError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

    let parsed: RawConfig = toml::from_str(&raw)
        .map_err(|e| AppError::Config(format!("parse error in {}: {e}", path.display())))?;

    let a = parsed.assistant;

    let work_dir = expand_home(work_dir_override.unwrap_or(&a.work_dir));
    let log_level = log_level_override.unwrap_or(&a.log_level).trim().to_string();
    logger::parse_level(&log_level).map_err(|e| AppError::Config(format!("[assistant].log_level: {e}")))?;

    let db_file = expand_home(&parsed.store.db_file);
    let db_path = if db_file.is_absolute() { db_file } else { work_dir.join(db_file) };

    let force_regenerate = match force_override {
        Some(value) => is_truthy(value),
        None => parsed.pipeline.force_regenerate,
    };

    Ok(Config {
        name: a.name,
        work_dir,
        log_level,
        db_path,
        cache: CacheConfig {
            ttl: Duration::from_secs(parsed.cache.ttl_seconds),
            capacity: parsed.cache.capacity,
        },
        knowledge_paths: parsed.knowledge.paths.iter().map(|p| expand_home(p)).collect(),
        force_regenerate,
        llm: LlmConfig {
            provider: parsed.llm.provider,
            ollama: OllamaConfig {
                api_base_url: parsed.llm.ollama.api_base_url,
                model: parsed.llm.ollama.model,
                temperature: parsed.llm.ollama.temperature,
                max_tokens: parsed.llm.ollama.max_tokens,
                retry_max_tokens: parsed.llm.ollama.retry_max_tokens,
                timeout_seconds: parsed.llm.ollama.timeout_seconds,
            },
        },
    })
}

/// `1`, `true`, `yes` and `on` (any case) are truthy; everything else is not.
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Expand a leading `~` to the user's home directory.
/// Absolute or relative paths without `~` are returned unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}

// ── test helpers ──────────────────────────────────────────────────────────────

/// `Config` for unit tests: dummy LLM, paths under `work_dir`, no env lookups.
#[cfg(test)]
impl Config {
    pub fn test_default(work_dir: &Path) -> Self {
        Self {
            name: "test".into(),
            work_dir: work_dir.to_path_buf(),
            log_level: "info".into(),
            db_path: work_dir.join("test.db"),
            cache: CacheConfig { ttl: Duration::from_secs(3600), capacity: 1000 },
            knowledge_paths: Vec::new(),
            force_regenerate: false,
            llm: LlmConfig {
                provider: "dummy".into(),
                ollama: OllamaConfig {
                    api_base_url: "http://localhost:0/api/generate".into(),
                    model: "test-model".into(),
                    temperature: 0.0,
                    max_tokens: 16,
                    retry_max_tokens: 16,
                    timeout_seconds: 1,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MINIMAL_TOML: &str = r#"
[assistant]
work_dir = "~/.ia-migrante"
"#;

    const FULL_TOML: &str = r#"
[assistant]
name = "Asistente"
work_dir = "/srv/migrante"
log_level = "debug"

[store]
db_file = "history.db"

[cache]
ttl_seconds = 60
capacity = 5

[knowledge]
paths = ["dataset/a.json", "/abs/b.json"]

[pipeline]
force_regenerate = true

[llm]
default = "dummy"

[llm.ollama]
model = "llama3.2:3b"
max_tokens = 512
"#;

    fn write_toml(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn parse_minimal_config_uses_defaults() {
        let f = write_toml(MINIMAL_TOML);
        let cfg = load_from(f.path(), None, None, None).unwrap();
        assert_eq!(cfg.name, "IA MIGRANTE");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.cache.ttl, Duration::from_secs(3600));
        assert_eq!(cfg.cache.capacity, 1000);
        assert!(!cfg.force_regenerate);
        assert_eq!(cfg.llm.provider, "ollama");
        assert_eq!(cfg.llm.ollama.model, "llama3.2:1b");
        assert_eq!(cfg.llm.ollama.max_tokens, 1000);
        assert_eq!(cfg.llm.ollama.retry_max_tokens, 800);
        assert!(cfg.db_path.ends_with("ia_migrante.db"));
        assert!(cfg.knowledge_paths.is_empty());
    }

    #[test]
    fn parse_full_config() {
        let f = write_toml(FULL_TOML);
        let cfg = load_from(f.path(), None, None, None).unwrap();
        assert_eq!(cfg.name, "Asistente");
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.db_path, PathBuf::from("/srv/migrante/history.db"));
        assert_eq!(cfg.cache.ttl, Duration::from_secs(60));
        assert_eq!(cfg.cache.capacity, 5);
        assert_eq!(cfg.knowledge_paths.len(), 2);
        assert_eq!(cfg.knowledge_paths[1], PathBuf::from("/abs/b.json"));
        assert!(cfg.force_regenerate);
        assert_eq!(cfg.llm.provider, "dummy");
        assert_eq!(cfg.llm.ollama.model, "llama3.2:3b");
        assert_eq!(cfg.llm.ollama.max_tokens, 512);
        assert_eq!(cfg.llm.ollama.retry_max_tokens, 800);
    }

    #[test]
    fn force_env_overrides_toml() {
        let f = write_toml(FULL_TOML);
        let cfg = load_from(f.path(), None, None, Some("0")).unwrap();
        assert!(!cfg.force_regenerate);

        let f = write_toml(MINIMAL_TOML);
        let cfg = load_from(f.path(), None, None, Some("1")).unwrap();
        assert!(cfg.force_regenerate);
    }

    #[test]
    fn truthy_values() {
        for v in ["1", "true", "TRUE", "yes", "On", " 1 "] {
            assert!(is_truthy(v), "expected '{v}' to be truthy");
        }
        for v in ["0", "false", "", "no", "2"] {
            assert!(!is_truthy(v), "expected '{v}' to be falsy");
        }
    }

    #[test]
    fn tilde_expands_to_home() {
        let home = dirs::home_dir().expect("home dir must exist in test env");
        let expanded = expand_home("~/.ia-migrante");
        assert!(expanded.starts_with(&home));
        assert!(expanded.ends_with(".ia-migrante"));
    }

    #[test]
    fn absolute_path_unchanged() {
        assert_eq!(expand_home("/absolute/path"), PathBuf::from("/absolute/path"));
    }

    #[test]
    fn missing_file_errors() {
        let result = load_from(Path::new("/nonexistent/config.toml"), None, None, None);
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("config error"));
    }

    #[test]
    fn missing_assistant_section_errors() {
        let f = write_toml("[cache]\ncapacity = 3\n");
        assert!(load_from(f.path(), None, None, None).is_err());
    }

    #[test]
    fn env_work_dir_override() {
        let f = write_toml(MINIMAL_TOML);
        let cfg = load_from(f.path(), Some("/tmp/test-override"), None, None).unwrap();
        assert_eq!(cfg.work_dir, PathBuf::from("/tmp/test-override"));
        assert_eq!(cfg.db_path, PathBuf::from("/tmp/test-override/ia_migrante.db"));
    }

    #[test]
    fn env_log_level_override() {
        let f = write_toml(MINIMAL_TOML);
        let cfg = load_from(f.path(), None, Some("debug"), None).unwrap();
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn unrecognised_log_level_is_rejected() {
        let f = write_toml("[assistant]\nwork_dir = \"/tmp\"\nlog_level = \"chatty\"\n");
        let err = load_from(f.path(), None, None, None).unwrap_err();
        assert!(matches!(&err, AppError::Config(msg) if msg.contains("log_level")));

        let f = write_toml(MINIMAL_TOML);
        assert!(load_from(f.path(), None, Some("verbose"), None).is_err());
    }
}
