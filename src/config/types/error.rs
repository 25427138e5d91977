//! Configuration error types.

use super::FieldPath;
use owo_colors::{OwoColorize, Stream, Style};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading `yalinker.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("malformed config file")]
    Toml(#[from] toml::de::Error),

    // no #[from]: the list is the whole message, a source would repeat it
    #[error("{0}")]
    Invalid(ValidationErrors),
}

/// A config value rejected by validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidValue {
    pub field: FieldPath,
    /// The value as written in the file.
    pub value: String,
    /// What the field accepts, e.g. "an absolute URL".
    pub expected: &'static str,
    /// A corrected value to suggest.
    pub suggestion: String,
}

impl fmt::Display for InvalidValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {:?}: expected {}, try {}",
            self.field.if_supports_color(Stream::Stderr, |s| s.cyan()),
            self.value,
            self.expected,
            self.suggestion.if_supports_color(Stream::Stderr, |s| s.green())
        )
    }
}

/// Every rejected value of one validation pass.
#[derive(Debug, Default)]
pub struct ValidationErrors(Vec<InvalidValue>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject(
        &mut self,
        field: FieldPath,
        value: &str,
        expected: &'static str,
        suggestion: impl Into<String>,
    ) {
        self.0.push(InvalidValue {
            field,
            value: value.to_string(),
            expected,
            suggestion: suggestion.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> &[InvalidValue] {
        &self.0
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.0.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = "invalid yalinker.toml";
        let style = Style::new().bright_red().bold();
        write!(f, "{}", header.if_supports_color(Stream::Stderr, |s| s.style(style)))?;
        for value in &self.0 {
            write!(f, "\n  {value}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
