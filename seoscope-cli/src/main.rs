//! Seoscope CLI - Command-line interface for seoscope
//!
//! Reads an article, prints its text metrics and asks a language model (or the
//! offline mock) for SEO improvement suggestions

mod report;

use clap::Parser;
use seoscope_analysis::TextAnalyzer;
use seoscope_core::{
    init_logging, log_operation_error, log_operation_start, log_operation_success,
    not_found_error, performance, ErrorContext, LoggingConfig, SeoscopeConfig, SeoscopeError,
    SeoscopeResult,
};
use seoscope_llm::{build_prompt, build_summary, SuggestionGateway};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::report::{render_metrics, render_suggestions, JsonReport};

#[derive(Parser, Debug)]
#[command(name = "seoscope")]
#[command(about = "Text metrics and AI-assisted SEO suggestions for an article")]
#[command(version)]
struct Cli {
    /// Path to the text file to analyze
    #[arg(short, long, default_value = "sample_content.txt")]
    file: PathBuf,

    /// Use mock suggestions (no API key needed)
    #[arg(long)]
    mock: bool,

    /// Number of top keywords to show
    #[arg(long)]
    top: Option<usize>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Model to ask for suggestions
    #[arg(long)]
    model: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Only print metrics, skip the suggestions request
    #[arg(long)]
    no_suggestions: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let logging_config = if cli.verbose {
        LoggingConfig::verbose()
    } else {
        LoggingConfig::default()
    };
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    info!("Starting seoscope v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli).await {
        e.log();
        eprintln!("Error: {}", e);
        if let Some(context) = e.context() {
            for suggestion in &context.recovery_suggestions {
                eprintln!("  hint: {}", suggestion);
            }
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> SeoscopeResult<()> {
    let config = load_config(&cli)?;
    let file_label = cli.file.display().to_string();

    if !cli.json {
        println!("Reading content from: {}", file_label);
    }
    let text = read_document(&cli.file)?;

    log_operation_start!("analyze", file = %file_label, bytes = text.len());
    let analyzer = TextAnalyzer::new(config.analysis.clone());
    let record = performance::measure_sync("analyze", || analyzer.analyze(&text));
    log_operation_success!("analyze", words = record.word_count);

    let top_n = config.analysis.top_keywords;
    if !cli.json {
        println!();
        print!(
            "{}",
            render_metrics(&record, top_n, config.analysis.long_sentence_words)
        );
    }

    let suggestions = if cli.no_suggestions {
        None
    } else {
        let gateway = SuggestionGateway::from_config(&config.llm, cli.mock).await;
        let summary = build_summary(&record, config.analysis.summary_keywords);
        let prompt = build_prompt(&summary);

        if !cli.json {
            println!(
                "\nSending summary to LLM (mock mode = {})...",
                gateway.is_mock()
            );
        }

        log_operation_start!("suggest", provider = gateway.provider_name());
        let suggestions = gateway.suggest(&prompt).await;
        log_operation_success!("suggest", source = ?suggestions.source);
        Some(suggestions)
    };

    if cli.json {
        let report = JsonReport::new(&file_label, &record, top_n, suggestions.as_ref());
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if let Some(suggestions) = &suggestions {
        println!();
        print!("{}", render_suggestions(suggestions));
    }

    Ok(())
}

/// Load the config file and apply command-line and environment overrides
fn load_config(cli: &Cli) -> SeoscopeResult<SeoscopeConfig> {
    let mut config = SeoscopeConfig::load(cli.config.as_deref()).map_err(|e| {
        log_operation_error!("load_config", e);
        e
    })?;

    if let Some(top) = cli.top {
        config.analysis.top_keywords = top;
    }

    if config.llm.provider == "openai" {
        if let Ok(model) = std::env::var("OPENAI_MODEL") {
            if !model.trim().is_empty() {
                config.llm.model = model;
            }
        }
    }
    if let Some(model) = &cli.model {
        config.llm.model = model.clone();
    }

    config.validate()?;
    Ok(config)
}

fn read_document(path: &Path) -> SeoscopeResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        log_operation_error!("read_document", e, path = %path.display());
        match e.kind() {
            std::io::ErrorKind::NotFound => not_found_error!(path.display(), "cli"),
            _ => SeoscopeError::Internal {
                message: format!("Failed to read {}: {}", path.display(), e),
                source: Some(Box::new(e)),
                context: ErrorContext::new("cli")
                    .with_operation("read_document")
                    .with_suggestion("Check that the file is readable UTF-8 text"),
            },
        }
    })
}
