//! Console and JSON formatters for analysis reports

use crate::error::Result;
use crate::report::AnalysisReport;
use colored::Colorize;

/// Console formatter with optional colors.
pub struct ConsoleFormatter {
    use_colors: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn format_report(&self, report: &AnalysisReport) -> String {
        let mut out = String::new();

        let score_line = format!("ATS Score: {:.0}/100", report.ats_score);
        out.push_str(&format!("\n📊 {}\n", self.colorize_score(&score_line, report.ats_score)));

        if !report.found_keywords.is_empty() {
            out.push_str(&format!(
                "\n✅ Found keywords: {}\n",
                report.found_keywords.join(", ")
            ));
        }
        if !report.missing_keywords.is_empty() {
            out.push_str(&format!(
                "⚠️  Missing keywords: {}\n",
                report.missing_keywords.join(", ")
            ));
        }

        if !report.positive_feedback.is_empty() {
            out.push_str("\n💪 Feedback:\n");
            for item in &report.positive_feedback {
                out.push_str(&format!("  • {}\n", item));
            }
        }

        if !report.suggestions.is_empty() {
            out.push_str("\n💡 Suggestions:\n");
            for (i, suggestion) in report.suggestions.iter().enumerate() {
                out.push_str(&format!("  {}. {}\n", i + 1, suggestion));
            }
        }

        if !report.ats_improvement_tips.is_empty() {
            out.push_str("\n📋 ATS improvement tips:\n");
            for tip in &report.ats_improvement_tips {
                out.push_str(&format!("  • {}\n", tip));
            }
        }

        out
    }

    fn colorize_score(&self, text: &str, score: f64) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        if score >= 70.0 {
            text.green().bold().to_string()
        } else if score >= 50.0 {
            text.yellow().bold().to_string()
        } else {
            text.red().bold().to_string()
        }
    }
}

/// JSON formatter for structured output and saved reports.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }
}
