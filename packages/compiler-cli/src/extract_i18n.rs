//! Extract i18n
//!
//! Reads program ASTs (ESTree/Babel JSON) from disk, extracts the messages of
//! every file and renders them as a JSON array or one message per line.

use crate::config::extractor::load_or_default;
use anyhow::{anyhow, Context};
use jsx_i18n::i18n::scan_json;
use jsx_i18n::logging::Logger;
use jsx_i18n::{ExtractedMessage, MessageExtractor};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed array of extracted messages with their locations
    #[default]
    Json,
    /// One message per line, newlines escaped as `\n`
    Lines,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "lines" | "text" => Ok(OutputFormat::Lines),
            other => Err(format!("unknown output format `{}`", other)),
        }
    }
}

/// Options for i18n extraction.
#[derive(Debug, Clone, Default)]
pub struct ExtractI18nOptions {
    /// AST JSON files or glob patterns.
    pub inputs: Vec<String>,
    /// Extractor configuration file.
    pub config: Option<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Output file path; stdout when absent.
    pub out_file: Option<PathBuf>,
}

/// Result of i18n extraction.
#[derive(Debug, Clone)]
pub struct ExtractI18nResult {
    pub messages: Vec<ExtractedMessage>,
    pub output: String,
}

/// Expands `patterns` into existing files, keeping first-seen order.
pub fn discover_inputs(patterns: &[String], logger: &dyn Logger) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = Vec::new();

    for pattern in patterns {
        let mut matched = 0;
        match glob::glob(pattern) {
            Ok(paths) => {
                for path in paths.filter_map(Result::ok).filter(|p| p.is_file()) {
                    matched += 1;
                    if !files.contains(&path) {
                        files.push(path);
                    }
                }
            }
            Err(e) => {
                logger.warn(&format!("Invalid pattern {}: {}", pattern, e));
                continue;
            }
        }
        if matched == 0 {
            logger.warn(&format!("No input files matched {}", pattern));
        }
    }

    files
}

fn extract_file(path: &Path, extractor: &MessageExtractor) -> anyhow::Result<Vec<ExtractedMessage>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let source_file = path.to_string_lossy();
    scan_json(&content, extractor, Some(&*source_file))
        .with_context(|| format!("Failed to extract messages from {}", path.display()))
}

/// Renders extracted messages.
pub fn render(messages: &[ExtractedMessage], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(messages)?),
        OutputFormat::Lines => Ok(messages
            .iter()
            .map(|m| m.message.replace('\\', "\\\\").replace('\n', "\\n"))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// Extracts the messages of every input file.
pub fn extract_i18n(options: &ExtractI18nOptions, logger: Arc<dyn Logger>) -> anyhow::Result<ExtractI18nResult> {
    let config = load_or_default(options.config.as_deref())?;
    let extractor = MessageExtractor::new(config, logger.clone())?;

    let files = discover_inputs(&options.inputs, logger.as_ref());
    if files.is_empty() {
        return Err(anyhow!("No input files"));
    }
    logger.info(&format!("Extracting messages from {} file(s)", files.len()));

    let per_file: Vec<anyhow::Result<Vec<ExtractedMessage>>> = files
        .par_iter()
        .map(|path| extract_file(path, &extractor))
        .collect();

    let mut messages = Vec::new();
    for result in per_file {
        messages.extend(result?);
    }
    logger.info(&format!("Extracted {} message(s)", messages.len()));

    let output = render(&messages, options.format)?;
    if let Some(out_file) = &options.out_file {
        fs::write(out_file, &output)
            .with_context(|| format!("Failed to write {}", out_file.display()))?;
    }

    Ok(ExtractI18nResult { messages, output })
}

/// Main entry point for xi18n command.
pub fn main_xi18n(options: &ExtractI18nOptions, logger: Arc<dyn Logger>) -> i32 {
    match extract_i18n(options, logger) {
        Ok(result) => {
            if options.out_file.is_none() {
                println!("{}", result.output);
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}
