//! Output formatting options
//!
//! Controls how the writer lays out the expanded document. Options can be
//! loaded from a TOML file:
//!
//! ```toml
//! indent = 2
//! blank_line_between_cases = true
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing an options file
#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("Failed to read options file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse options TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Formatting options for the document writer
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Spaces per indent level
    pub indent: usize,
    /// Separate cases with a blank line
    pub blank_line_between_cases: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: 4,
            blank_line_between_cases: false,
        }
    }
}

impl FormatOptions {
    /// Load options from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, OptionsError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}
