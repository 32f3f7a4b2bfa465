//! Import extraction errors.

use super::error_code::{self, WeftErrorCode};

/// Errors from the import extractor.
///
/// Extraction is heuristic and never fatal for a file: a malformed
/// specifier degrades to an unresolved edge instead of failing the
/// scan. The variants exist so the degradation is typed and loggable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    /// A relative specifier resolved to an empty path (e.g., `"./."`
    /// at the root). The edge is kept with `resolved: None`.
    #[error("specifier {specifier:?} in {path} (line {line}) resolves to nothing")]
    MalformedSpecifier {
        path: String,
        specifier: String,
        line: usize,
    },
}

impl WeftErrorCode for ExtractError {
    fn error_code(&self) -> &'static str {
        error_code::EXTRACT_ERROR
    }
}
