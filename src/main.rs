//! IA MIGRANTE: command-line entry point.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Load config
//!   3. Init logger at the configured (or CLI-forced) level
//!   4. Build the answer pipeline
//!   5. Answer the question on the command line and exit

use ia_migrante::{config, error::AppError, logger, pipeline::Pipeline};
use tracing::info;

#[tokio::main]
async fn main() {
    match run().await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

/// Returns `false` when nothing could be printed for the question.
async fn run() -> Result<bool, AppError> {
    // .env is optional.
    let _ = dotenvy::dotenv();

    let args = parse_cli_args();
    if args.question.trim().is_empty() {
        print_usage();
        return Ok(false);
    }

    let config = config::load(args.config_path.as_deref())?;

    let effective_log_level = args.log_level.unwrap_or(config.log_level.as_str());
    logger::init(effective_log_level, args.log_level.is_some())?;

    info!(
        name = %config.name,
        work_dir = %config.work_dir.display(),
        db_path = %config.db_path.display(),
        effective_log_level = %effective_log_level,
        force_regenerate = config.force_regenerate,
        "config loaded"
    );

    let pipeline = Pipeline::from_config(&config, args.reset)?;

    if args.lookup {
        return Ok(match pipeline.lookup(&args.question) {
            Some(answer) => {
                println!("{answer}");
                true
            }
            None => {
                eprintln!("no knowledge base entry matches");
                false
            }
        });
    }

    let answer = pipeline.resolve(&args.question).await;
    info!(language = %answer.language, source = ?answer.source, "answered");
    println!("{}", answer.text);
    Ok(true)
}

// ── CLI arg parsing ────────────────────────────────────────────────────────

struct CliArgs {
    log_level: Option<&'static str>,
    config_path: Option<String>,
    reset: bool,
    lookup: bool,
    question: String,
}

fn parse_cli_args() -> CliArgs {
    let mut verbosity = 0u8;
    let mut config_path = None;
    let mut reset = false;
    let mut lookup = false;
    let mut words = Vec::new();

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                std::process::exit(0);
            }
            "--" => {
                words.extend(iter.by_ref());
                break;
            }
            "-f" | "--config" => {
                if let Some(path) = iter.next() {
                    config_path = Some(path);
                } else {
                    eprintln!("error: -f/--config requires a path argument");
                    std::process::exit(1);
                }
            }
            "--reset" => reset = true,
            "--lookup" => lookup = true,
            "--verbose" => verbosity = verbosity.saturating_add(1),
            a if a.starts_with('-') && a.len() > 1 && a.chars().skip(1).all(|c| c == 'v') => {
                verbosity = verbosity.saturating_add((a.len() - 1) as u8);
            }
            _ => words.push(arg),
        }
    }

    let log_level = match verbosity {
        0 => None,
        1 => Some("warn"),
        2 => Some("info"),
        3 => Some("debug"),
        _ => Some("trace"),
    };

    CliArgs { log_level, config_path, reset, lookup, question: words.join(" ") }
}

fn print_usage() {
    eprintln!("Usage: ia-migrante [OPTIONS] \"<question>\"");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -h, --help             Print help");
    eprintln!("  -f, --config <PATH>    Path to configuration file (default: config/default.toml)");
    eprintln!("  --reset                Delete the answer history database before answering");
    eprintln!("  --lookup               Only search the knowledge base (strict match)");
    eprintln!("  -v, -vv, -vvv, -vvvv   Increase logging verbosity");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  FORCE_NEW_RESPONSE=1   Skip cache, history and knowledge base");
    eprintln!("  MIGRANTE_WORK_DIR      Override [assistant].work_dir");
    eprintln!("  MIGRANTE_LOG_LEVEL     Override [assistant].log_level");
}
