//! Exception class generator for S3 error code tables
//!
//! Reads the HTML table of S3 error codes and emits one exception class per
//! error name, each extending a synthetic class for its HTTP status code.

pub mod config;
pub mod emitter;
pub mod error;
pub mod extractor;
pub mod formatter;
pub mod status;
pub mod types;
pub mod utils;

pub use config::GeneratorConfig;
pub use emitter::Generator;
pub use error::GeneratorError;
pub use extractor::RowExtractor;
pub use formatter::{ClassFormatter, JavaClassFormatter};
pub use status::{ReasonPhrases, StandardReasonPhrases};
pub use types::{ClassDefinition, ErrorKind, ErrorRow, GenerationSummary, Result};
pub use utils::{normalize_name, normalize_reason};

use std::io::Write;

/// Generates the default S3 hierarchy for `input` into `out`.
///
/// # Errors
/// See [`Generator::generate`].
pub fn generate_exceptions<W: Write>(input: &str, out: &mut W) -> Result<GenerationSummary> {
    Generator::default().generate(input, out)
}
