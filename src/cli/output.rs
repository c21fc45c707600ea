use anyhow::{Result, Context};
use serde::Serialize;

use storefront_validation::config::OutputFormat;

/// Result of a single command-line check
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    /// Name of the check that ran
    pub check: String,
    /// Input as it may be displayed
    pub input: String,
    /// Whether the input was accepted
    pub valid: bool,
    /// Check-specific structured details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Human-readable feedback lines
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<String>,
}

impl Outcome {
    pub fn new(check: &str, input: &str, valid: bool) -> Self {
        Self {
            check: check.to_string(),
            input: input.to_string(),
            valid,
            details: None,
            messages: Vec::new(),
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn with_messages(mut self, messages: Vec<String>) -> Self {
        self.messages = messages;
        self
    }
}

/// Hide all but the last four characters
pub fn mask_tail(value: &str) -> String {
    let count = value.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let tail: String = value.chars().skip(count - 4).collect();
    format!("{}{}", "*".repeat(count - 4), tail)
}

/// Hide every character
pub fn mask_all(value: &str) -> String {
    "*".repeat(value.chars().count())
}

/// Render an outcome for the terminal
pub fn render(outcome: &Outcome, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(outcome).context("Failed to serialize check result")
        }
        OutputFormat::Text => {
            let mark = if outcome.valid { "✅" } else { "❌" };
            let verdict = if outcome.valid { "valid" } else { "invalid" };
            let mut out = format!("{} {} ({}): {}", mark, outcome.check, outcome.input, verdict);
            for message in &outcome.messages {
                out.push_str("\n   - ");
                out.push_str(message);
            }
            Ok(out)
        }
    }
}
