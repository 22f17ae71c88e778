// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};

use linguaweave::app_config::{Config, ExecutorKind, LogLevel};
use linguaweave::errors::ErrorKind;
use linguaweave::executors;
use linguaweave::pipeline::Pipeline;
use linguaweave::request::RawRequest;
use linguaweave::TranslationResult;

/// CLI Wrapper for ExecutorKind to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliExecutorKind {
    Gemini,
    Mock,
}

impl From<CliExecutorKind> for ExecutorKind {
    fn from(cli_kind: CliExecutorKind) -> Self {
        match cli_kind {
            CliExecutorKind::Gemini => ExecutorKind::Gemini,
            CliExecutorKind::Mock => ExecutorKind::Mock,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Style-adaptive translation with sentiment analysis",
    long_about = "Translate text with stylistic preferences (target audience, desired tone) \
and read the sentiment of both the original and translated text.

If no config file exists at the configured path, a default one is created.

SUPPORTED EXECUTORS:
    gemini - Google Gemini API (requires API key)
    mock   - In-process deterministic executor, for offline dry runs")]
struct CommandLineOptions {
    /// Text to translate (reads --file when omitted)
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Read the text to translate from a file
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Target language for the translation
    #[arg(short = 't', long)]
    target_language: String,

    /// Source language of the text (defaults to the configured source language)
    #[arg(short = 's', long)]
    source_language: Option<String>,

    /// Target audience for the translation (e.g. children, professionals)
    #[arg(short = 'a', long, default_value = "a general audience")]
    audience: String,

    /// Desired tone of the translation (e.g. formal, informal, friendly)
    #[arg(long, default_value = "neutral")]
    tone: String,

    /// Prompt executor to use
    #[arg(short, long, value_enum)]
    executor: Option<CliExecutorKind>,

    /// Model name to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// API key for the executor
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

/// Custom logger writing colored, timestamped lines to stderr
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    /// Install as the global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    /// ANSI color code for a log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[0m",
            Level::Debug => "\x1B[0;36m",
            Level::Trace => "\x1B[0;90m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} [{}] {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let options = CommandLineOptions::parse();

    // Initialize logging as early as possible; the level may be adjusted once the
    // config is loaded.
    let initial_level = options
        .log_level
        .clone()
        .map(|l| LogLevel::from(l).to_level_filter())
        .unwrap_or(LevelFilter::Info);
    CustomLogger::init(initial_level).context("Failed to initialize logger")?;

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        Config::from_file(config_path)?
    } else {
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );
        let config = Config::default();
        config.save_to_file(config_path)?;
        config
    };

    // Override config with CLI options if provided
    if let Some(executor) = options.executor {
        config.executor.kind = executor.into();
    }
    if let Some(model) = options.model {
        config.executor.model = model;
    }
    if let Some(api_key) = options.api_key {
        config.executor.api_key = api_key;
    }
    if let Some(log_level) = options.log_level {
        config.log_level = log_level.into();
        log::set_max_level(config.log_level.to_level_filter());
    } else {
        log::set_max_level(config.log_level.to_level_filter());
    }

    config
        .validate()
        .context("Configuration validation failed")?;

    // Resolve the text to translate
    let text = match (options.text, &options.file) {
        (Some(text), _) => Some(text),
        (None, Some(path)) => Some(
            std::fs::read_to_string(path)
                .context(format!("Failed to read input file: {:?}", path))?,
        ),
        (None, None) => None,
    };

    let raw = RawRequest {
        text,
        source_language: options
            .source_language
            .or(Some(config.source_language.clone())),
        target_language: Some(options.target_language),
        target_audience: Some(options.audience),
        desired_tone: Some(options.tone),
    };

    let executor = executors::from_config(&config.executor)?;

    // Background connection probe; a failed probe only warns, the run itself
    // surfaces the real error.
    let probe = executor.clone();
    tokio::spawn(async move {
        if let Err(e) = probe.test_connection().await {
            warn!("Executor connection probe failed: {}", e);
        }
    });

    let pipeline = Pipeline::new(executor)
        .with_call_timeout(std::time::Duration::from_secs(config.executor.timeout_secs));

    match pipeline.run(raw).await {
        Ok(result) => {
            print_result(&result, options.json)?;
            Ok(())
        }
        Err(e) => {
            eprintln!("{:?}: {}", e.kind(), e);
            let code = match e.kind() {
                ErrorKind::Validation => 2,
                _ => 1,
            };
            std::process::exit(code);
        }
    }
}

/// Print the assembled result, either human-readable or as JSON
fn print_result(result: &TranslationResult, as_json: bool) -> Result<()> {
    if as_json {
        let json =
            serde_json::to_string_pretty(result).context("Failed to serialize result to JSON")?;
        println!("{}", json);
        return Ok(());
    }

    println!("{}", result.translation);
    println!();
    println!(
        "Original sentiment:   {} ({:.2})",
        result.original_sentiment.label, result.original_sentiment.score
    );
    println!(
        "Translated sentiment: {} ({:.2})",
        result.translated_sentiment.label, result.translated_sentiment.score
    );
    if let Some(adaptation) = &result.audience_adaptation {
        println!(
            "Audience fit:         {:.2} - {}",
            adaptation.score, adaptation.justification
        );
    }
    if let Some(adaptation) = &result.tone_adaptation {
        println!(
            "Tone fit:             {:.2} - {}",
            adaptation.score, adaptation.justification
        );
    }
    Ok(())
}
