//! CV analyzer: ATS compatibility scoring for resumes and job descriptions

use clap::Parser;
use cv_analyzer::cli::{self, Cli, Commands, ConfigAction};
use cv_analyzer::config::{Config, OutputFormat};
use cv_analyzer::error::{CvAnalyzerError, Result};
use cv_analyzer::llm::advisor::LlmAdvisor;
use cv_analyzer::llm::client::OpenAiChatClient;
use cv_analyzer::output::formatter::{ConsoleFormatter, JsonFormatter};
use cv_analyzer::AnalysisEngine;
use log::{error, info, warn};
use std::process;
use std::sync::Arc;
use tokio::fs;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            cv,
            job,
            lang,
            output,
            save,
            no_llm,
        } => {
            info!("Starting CV analysis");

            cli::validate_file_extension(&cv, &["txt", "md"])
                .map_err(|e| CvAnalyzerError::InvalidInput(format!("CV file: {}", e)))?;
            if let Some(job_path) = &job {
                cli::validate_file_extension(job_path, &["txt", "md"])
                    .map_err(|e| CvAnalyzerError::InvalidInput(format!("Job description file: {}", e)))?;
            }

            let locale = cli::parse_locale(&lang).map_err(CvAnalyzerError::InvalidInput)?;
            let output_format = cli::parse_output_format(&output).map_err(CvAnalyzerError::InvalidInput)?;

            println!("🚀 CV compatibility analysis");
            println!("📄 CV: {}", cv.display());
            match &job {
                Some(job_path) => println!("💼 Job description: {}", job_path.display()),
                None => println!("💼 Job description: none (using default keyword set)"),
            }

            let cv_text = fs::read_to_string(&cv).await?;
            let job_text = match &job {
                Some(job_path) => fs::read_to_string(job_path).await?,
                None => String::new(),
            };

            let engine = if no_llm {
                println!("⚠️  AI suggestions disabled");
                AnalysisEngine::new()
            } else {
                match std::env::var(&config.llm.api_key_env) {
                    Ok(api_key) => {
                        println!("🤖 AI model: {}", config.llm.model);
                        let client = OpenAiChatClient::new(
                            config.llm.endpoint.clone(),
                            config.llm.model.clone(),
                            api_key,
                        );
                        AnalysisEngine::with_advisor(LlmAdvisor::new(
                            Arc::new(client),
                            config.completion_params(),
                        ))
                    }
                    Err(_) => {
                        warn!("{} not set, proceeding without AI suggestions", config.llm.api_key_env);
                        println!("⚠️  {} not set, keyword analysis only", config.llm.api_key_env);
                        AnalysisEngine::new()
                    }
                }
            };

            println!("\n🔍 Analyzing...");
            let report = engine.analyze(&cv_text, &job_text, locale).await?;

            match output_format {
                OutputFormat::Console => {
                    let formatter = ConsoleFormatter::new(config.output.color_output);
                    println!("{}", formatter.format_report(&report));
                }
                OutputFormat::Json => {
                    let formatter = JsonFormatter::new(true);
                    println!("{}", formatter.format_report(&report)?);
                }
            }

            if let Some(save_path) = save {
                let json = JsonFormatter::new(true).format_report(&report)?;
                fs::write(&save_path, json).await?;
                println!("💾 Report saved to {}", save_path.display());
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Chat endpoint: {}", config.llm.endpoint);
                println!("Model: {}", config.llm.model);
                println!("API key env var: {}", config.llm.api_key_env);
                println!("Max tokens: {}", config.llm.max_tokens);
                println!("Temperature: {}", config.llm.temperature);
                println!("Top-p: {}", config.llm.top_p);
                println!("Timeout: {}s", config.llm.timeout_secs);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}
