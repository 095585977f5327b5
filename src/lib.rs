//! CV analyzer library

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod locale;
pub mod output;
pub mod report;

pub use analysis::engine::AnalysisEngine;
pub use config::Config;
pub use error::{CvAnalyzerError, Result};
pub use locale::Locale;
pub use report::AnalysisReport;
