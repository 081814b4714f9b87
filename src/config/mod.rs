// Expansion settings shared by every entry point

pub mod yml_settings;

use serde::{Deserialize, Serialize};

use crate::error::{ExpandError, Result};

pub const DEFAULT_DELIMITER_START: &str = "{";
pub const DEFAULT_DELIMITER_END: &str = "}";
pub const DEFAULT_RANGE_SEPARATOR: char = ',';
pub const DEFAULT_CHOICE_SEPARATOR: char = '|';
pub const DEFAULT_BACKREF_MARKER: char = '$';

/// Delimiters and separators used to recognize placeholders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpandConfig {
    pub delimiter_start: String,
    pub delimiter_end: String,
    pub range_separator: char,
    pub choice_separator: char,
    pub backref_marker: char,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        Self {
            delimiter_start: DEFAULT_DELIMITER_START.to_string(),
            delimiter_end: DEFAULT_DELIMITER_END.to_string(),
            range_separator: DEFAULT_RANGE_SEPARATOR,
            choice_separator: DEFAULT_CHOICE_SEPARATOR,
            backref_marker: DEFAULT_BACKREF_MARKER,
        }
    }
}

impl ExpandConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiters(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.delimiter_start = start.into();
        self.delimiter_end = end.into();
        self
    }

    pub fn with_range_separator(mut self, separator: char) -> Self {
        self.range_separator = separator;
        self
    }

    pub fn with_choice_separator(mut self, separator: char) -> Self {
        self.choice_separator = separator;
        self
    }

    pub fn with_backref_marker(mut self, marker: char) -> Self {
        self.backref_marker = marker;
        self
    }

    /// Reject settings that would make placeholder syntax ambiguous
    pub fn validate(&self) -> Result<()> {
        if self.delimiter_start.is_empty() || self.delimiter_end.is_empty() {
            return Err(conflict("delimiters must not be empty".to_string()));
        }
        if self.delimiter_start == self.delimiter_end {
            return Err(conflict(format!(
                "start and end delimiters are both '{}'",
                self.delimiter_start
            )));
        }

        let specials = [
            ("range separator", self.range_separator),
            ("choice separator", self.choice_separator),
            ("back-reference marker", self.backref_marker),
        ];

        // these belong to the number grammar of range parts
        if matches!(self.range_separator, '.' | '+' | '-') {
            return Err(conflict(format!(
                "range separator '{}' is part of numeric syntax",
                self.range_separator
            )));
        }

        for (i, (name, ch)) in specials.iter().enumerate() {
            if ch.is_whitespace() {
                return Err(conflict(format!("{} must not be whitespace", name)));
            }
            if ch.is_ascii_digit() {
                return Err(conflict(format!("{} must not be a digit", name)));
            }
            if self.delimiter_start.contains(*ch) || self.delimiter_end.contains(*ch) {
                return Err(conflict(format!(
                    "{} '{}' collides with a delimiter",
                    name, ch
                )));
            }
            for (other_name, other) in &specials[i + 1..] {
                if ch == other {
                    return Err(conflict(format!(
                        "{} and {} are both '{}'",
                        name, other_name, ch
                    )));
                }
            }
        }

        Ok(())
    }
}

fn conflict(msg: String) -> ExpandError {
    ExpandError::ConfigurationConflict(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ExpandConfig::default();
        assert_eq!(config.delimiter_start, "{");
        assert_eq!(config.delimiter_end, "}");
        assert_eq!(config.range_separator, ',');
        assert_eq!(config.choice_separator, '|');
        assert_eq!(config.backref_marker, '$');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_multi_char_delimiters_are_valid() {
        let config = ExpandConfig::new().with_delimiters("<<", ">>");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_equal_delimiters_rejected() {
        let err = ExpandConfig::new().with_delimiters("%", "%").validate().unwrap_err();
        assert!(err.to_string().contains("start and end delimiters"));
    }

    #[test]
    fn test_empty_delimiter_rejected() {
        let err = ExpandConfig::new().with_delimiters("", "}").validate().unwrap_err();
        assert!(matches!(err, ExpandError::ConfigurationConflict(_)));
    }

    #[test]
    fn test_separator_colliding_with_delimiter_rejected() {
        let err = ExpandConfig::new()
            .with_delimiters("[", "]")
            .with_choice_separator(']')
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("collides with a delimiter"));
    }

    #[test]
    fn test_duplicate_special_chars_rejected() {
        let err = ExpandConfig::new()
            .with_range_separator('|')
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("range separator and choice separator"));

        let err = ExpandConfig::new()
            .with_backref_marker(',')
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("back-reference marker"));
    }

    #[test]
    fn test_digit_backref_marker_rejected() {
        let err = ExpandConfig::new()
            .with_backref_marker('1')
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("back-reference marker must not be a digit"));
    }

    #[test]
    fn test_digit_separators_rejected() {
        let err = ExpandConfig::new()
            .with_range_separator('0')
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("range separator must not be a digit"));

        let err = ExpandConfig::new()
            .with_choice_separator('7')
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("choice separator must not be a digit"));
    }

    #[test]
    fn test_numeric_syntax_range_separator_rejected() {
        for sep in ['.', '+', '-'] {
            let err = ExpandConfig::new()
                .with_range_separator(sep)
                .validate()
                .unwrap_err();
            assert!(err.to_string().contains("is part of numeric syntax"));
        }
    }

    #[test]
    fn test_sign_and_dot_allowed_for_other_specials() {
        let config = ExpandConfig::new()
            .with_choice_separator('-')
            .with_backref_marker('+');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_whitespace_separator_rejected() {
        let err = ExpandConfig::new()
            .with_range_separator(' ')
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("must not be whitespace"));
    }
}
