//! Orthocase - orthogonal expansion of parameterized test cases
//!
//! This library parses test-case definitions containing `$${NAME}`
//! placeholders, multiplies each case over the Cartesian product of the
//! declared factors it references, and writes the expanded document back
//! out as source text.
//!
//! # Example
//!
//! ```rust
//! use orthocase::expand;
//!
//! let out = expand(r#"
//!     factors { ANIMAL: ["cat", "dog"] }
//!     cases { case "feed" { do "feed the $${ANIMAL}" } }
//! "#).unwrap();
//!
//! assert!(out.contains("[1].feed-cat"));
//! assert!(out.contains("feed the dog"));
//! ```

pub mod config;
pub mod error;
pub mod expand;
pub mod parser;
pub mod writer;

pub use config::{FormatOptions, OptionsError};
pub use error::ParseError;
pub use expand::{expand_document, Combination, ExpandError, FactorStore};
pub use parser::{parse, Document};
pub use writer::write_document;

use thiserror::Error;

/// Errors that can occur during the expansion pipeline
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Error during parsing
    #[error("parse errors: {}", format_parse_errors(.0))]
    Parse(Vec<ParseError>),

    /// Error during expansion
    #[error("expansion error: {0}")]
    Expand(#[from] ExpandError),
}

impl From<Vec<ParseError>> for PipelineError {
    fn from(errors: Vec<ParseError>) -> Self {
        PipelineError::Parse(errors)
    }
}

fn format_parse_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Expand source text with default formatting
///
/// This is the main entry point for the library. It parses the source,
/// expands every template case, and renders the result as source text.
pub fn expand(source: &str) -> Result<String, PipelineError> {
    expand_with_options(source, &FormatOptions::default())
}

/// Expand source text with custom formatting options
pub fn expand_with_options(
    source: &str,
    options: &FormatOptions,
) -> Result<String, PipelineError> {
    let doc = parse(source)?;
    let doc = expand_document(doc)?;
    Ok(write_document(&doc, options))
}
