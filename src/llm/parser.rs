//! Line-oriented parsing of the model advice response
//!
//! Grammar, line by line after trimming: a line starting with the locale's
//! score label yields the integer score (first such line wins; non-numeric
//! content after the label leaves the score at 0); a line starting with `-`
//! yields one suggestion with the dash and surrounding whitespace stripped;
//! everything else is ignored. This intentionally mirrors the exact format
//! the prompt templates request.

use log::debug;

/// Score and bullet suggestions recovered from a model response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedAdvice {
    pub score: u32,
    pub suggestions: Vec<String>,
}

pub fn parse_model_response(response: &str, score_label: &str) -> ParsedAdvice {
    let mut advice = ParsedAdvice::default();
    let mut score_seen = false;

    for line in response.lines() {
        let line = line.trim();

        if !score_seen && line.starts_with(score_label) {
            score_seen = true;
            let rest = line[score_label.len()..].trim_start();
            let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
            match digits.parse::<u32>() {
                Ok(value) => advice.score = value.min(100),
                Err(_) => debug!("score label present but no numeric value: '{}'", line),
            }
            continue;
        }

        if let Some(rest) = line.strip_prefix('-') {
            let suggestion = rest.trim();
            if !suggestion.is_empty() {
                advice.suggestions.push(suggestion.to_string());
            }
        }
    }

    advice
}
