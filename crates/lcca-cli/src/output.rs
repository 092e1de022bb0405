//! Terminal output helpers shared by the commands.

use colored::Colorize;
use serde::Serialize;
use std::time::Duration;

/// How a command renders its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text.
    Text,
    /// Machine-readable JSON.
    Json,
}

impl OutputFormat {
    /// Map the global `--json` flag to a format.
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Green check line on stdout.
pub fn success(message: &str) {
    println!("{} {message}", "✓".green().bold());
}

/// Red cross line on stderr.
pub fn error(message: &str) {
    eprintln!("{} {message}", "✗".red().bold());
}

/// Indented `key: value` line with a bold key.
pub fn key_value(key: &str, value: &str) {
    println!("  {}: {value}", key.bold());
}

/// Underlined section header preceded by a blank line.
pub fn section(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// Pretty-printed JSON on stdout.
pub fn json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Rounded-border table on stdout; prints a placeholder for empty input.
pub fn table<T: tabled::Tabled>(rows: &[T]) {
    use tabled::{settings::Style, Table};

    if rows.is_empty() {
        println!("  (no data)");
        return;
    }
    println!("{}", Table::new(rows).with(Style::rounded()));
}

/// Steady-tick spinner for network waits.
pub fn spinner(message: &str) -> indicatif::ProgressBar {
    let bar = indicatif::ProgressBar::new_spinner();
    if let Ok(style) =
        indicatif::ProgressStyle::default_spinner().template("{spinner:.blue} {msg}")
    {
        bar.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

/// Envelope for command results so `--json` callers get a stable shape.
#[derive(Debug, Serialize)]
pub struct CommandResult<T: Serialize> {
    /// Whether the command succeeded.
    pub success: bool,
    /// Payload, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Failure description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Optional human-facing note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> CommandResult<T> {
    /// Successful result wrapping a payload.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    /// Failed result with a description.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }

    /// Attach a payload, e.g. failure details for `--json` callers.
    #[must_use]
    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    /// Emit the result in the chosen format.
    pub fn print(&self, format: OutputFormat) -> anyhow::Result<()> {
        match format {
            OutputFormat::Json => json(self),
            OutputFormat::Text => {
                if let Some(ref err) = self.error {
                    error(err);
                }
                if let Some(ref msg) = self.message {
                    if self.success {
                        success(msg);
                    } else {
                        error(msg);
                    }
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_result_success() {
        let result: CommandResult<u32> = CommandResult::success(7);
        assert!(result.success);
        assert_eq!(result.data, Some(7));
        assert!(result.error.is_none());
    }

    #[test]
    fn test_command_result_failure_omits_data() {
        let result: CommandResult<()> = CommandResult::failure("boom");
        assert!(!result.success);
        let rendered = serde_json::to_string(&result).unwrap();
        assert!(!rendered.contains("data"));
        assert!(rendered.contains("boom"));
    }

    #[test]
    fn test_failure_with_data_keeps_payload() {
        let result = CommandResult::failure("invalid").with_data(vec!["detail"]);
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("invalid"));
        assert_eq!(result.data, Some(vec!["detail"]));
    }

    #[test]
    fn test_format_from_flag() {
        assert_eq!(OutputFormat::from_json_flag(true), OutputFormat::Json);
        assert_eq!(OutputFormat::from_json_flag(false), OutputFormat::Text);
    }
}
