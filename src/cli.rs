//! CLI interface for the CV analyzer

use crate::config::OutputFormat;
use crate::locale::Locale;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cv-analyzer")]
#[command(about = "ATS compatibility analyzer for resumes and job descriptions")]
#[command(
    long_about = "Score a resume against a job description using keyword matching and AI-generated improvement suggestions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume against an optional job description
    Analyze {
        /// Path to resume text file (TXT, MD)
        #[arg(short, long)]
        cv: PathBuf,

        /// Path to job description file (TXT, MD)
        #[arg(short, long)]
        job: Option<PathBuf>,

        /// Report language: tr, en
        #[arg(short, long, default_value = "tr")]
        lang: String,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save the JSON report to a file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Skip the AI advice call (keyword analysis only)
        #[arg(long)]
        no_llm: bool,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate report locale
pub fn parse_locale(lang: &str) -> Result<Locale, String> {
    match lang.to_lowercase().as_str() {
        "tr" => Ok(Locale::Tr),
        "en" => Ok(Locale::En),
        _ => Err(format!("Invalid language: {}. Supported: tr, en", lang)),
    }
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}. Supported: console, json", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
