//! Error types for configuration loading and validation

pub mod format;

use crate::loader::ConfigFormat;
use std::path::PathBuf;
use thiserror::Error;

pub use format::ErrorFormatter;

/// Result type for config operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur during configuration loading and validation
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Unknown configuration format
    #[error("Unknown configuration format for file: {path}\nSupported formats: .yml, .yaml, .toml, .json")]
    UnknownFormat { path: PathBuf },

    /// Syntax or type error in a configuration file
    #[error("Failed to parse {format} configuration{location}:\n{message}\n{context}")]
    Parse {
        format: ConfigFormat,
        location: String,
        message: String,
        context: String,
    },

    /// IO error
    #[error("Failed to read configuration file: {path}\n{source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid enum value
    #[error("Invalid value '{value}' for {field}\n  Valid options: {options}\n  Hint: {hint}")]
    InvalidEnum {
        field: String,
        value: String,
        options: String,
        hint: String,
    },

    /// Value out of valid range
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        value: f32,
        min: f32,
        max: f32,
    },

    /// Invalid integer value
    #[error("{field} must be > {min}, got {value}")]
    InvalidInteger { field: String, value: u64, min: u64 },

    /// Environment variable parsing error
    #[error("Failed to parse environment variable {var}: {message}")]
    EnvVarError { var: String, message: String },

    /// Generic validation error
    #[error("Validation error: {field}: {message}")]
    ValidationError { field: String, message: String },
}

impl ConfigError {
    /// Create an invalid enum error with a suggestion
    pub fn invalid_enum(
        field: impl Into<String>,
        value: impl Into<String>,
        options: &[&str],
    ) -> Self {
        let value = value.into();
        let hint = Self::suggest_option(&value, options);
        Self::InvalidEnum {
            field: field.into(),
            value,
            options: options.join(", "),
            hint,
        }
    }

    /// Build a parse error quoting `content` around `position` (1-based line, optional column).
    pub(crate) fn parse_failure(
        format: ConfigFormat,
        message: impl Into<String>,
        content: &str,
        position: Option<(usize, Option<usize>)>,
        path: Option<&str>,
    ) -> Self {
        Self::Parse {
            format,
            location: path.map(|p| format!(" in {}", p)).unwrap_or_default(),
            message: message.into(),
            context: position
                .map(|(line, column)| excerpt(content, line, column))
                .unwrap_or_default(),
        }
    }

    /// Simple string distance for option suggestions (Levenshtein-like)
    fn suggest_option(input: &str, options: &[&str]) -> String {
        let input_lower = input.to_lowercase();
        let closest = options
            .iter()
            .min_by_key(|opt| Self::distance(&input_lower, &opt.to_lowercase()));

        match closest {
            Some(opt) if Self::distance(&input_lower, &opt.to_lowercase()) <= 3 => {
                format!("Did you mean '{}'?", opt)
            }
            _ => "Check your configuration file".to_string(),
        }
    }

    fn distance(a: &str, b: &str) -> usize {
        let a_chars: Vec<char> = a.chars().collect();
        let b_chars: Vec<char> = b.chars().collect();
        let mut prev_row: Vec<usize> = (0..=b_chars.len()).collect();

        for (i, a_char) in a_chars.iter().enumerate() {
            let mut curr_row = vec![i + 1];
            for (j, b_char) in b_chars.iter().enumerate() {
                let cost = usize::from(a_char != b_char);
                let best = (curr_row[j] + 1) // insertion
                    .min(prev_row[j + 1] + 1) // deletion
                    .min(prev_row[j] + cost); // substitution
                curr_row.push(best);
            }
            prev_row = curr_row;
        }

        *prev_row.last().unwrap_or(&0)
    }
}

/// Render the lines around `line_num` (1-based), marking the offending one.
fn excerpt(content: &str, line_num: usize, column: Option<usize>) -> String {
    let lines: Vec<&str> = content.lines().collect();
    if line_num == 0 || line_num > lines.len() {
        return String::new();
    }

    let start = line_num.saturating_sub(2);
    let end = (line_num + 1).min(lines.len());

    lines[start..end]
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let num = start + i + 1;
            if num != line_num {
                return format!("  {:3} | {}", num, line);
            }
            let mut marked = format!("→ {:3} | {}", num, line);
            if let Some(col) = column.filter(|c| *c > 0) {
                marked.push_str(&format!("\n      {}^", " ".repeat(col - 1)));
            }
            marked
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_enum_suggests_close_option() {
        let err = ConfigError::invalid_enum("log.level", "wrn", &["trace", "debug", "info", "warn", "error"]);
        match err {
            ConfigError::InvalidEnum { hint, .. } => assert_eq!(hint, "Did you mean 'warn'?"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_enum_without_close_option() {
        let err = ConfigError::invalid_enum("log.level", "verbose-ish", &["info", "warn"]);
        assert!(err.to_string().contains("Check your configuration file"));
    }

    #[test]
    fn test_excerpt_marks_line_and_column() {
        let content = "a = 1\nb = oops\nc = 3";
        let ctx = excerpt(content, 2, Some(5));
        assert!(ctx.contains("→   2 | b = oops"));
        assert!(ctx.contains("    ^"));
        assert!(ctx.contains("    1 | a = 1"));
    }

    #[test]
    fn test_excerpt_out_of_bounds() {
        assert!(excerpt("one line", 7, None).is_empty());
    }
}
