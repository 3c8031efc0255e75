//! Diagnostics for documents that are not valid JSON.

use std::fmt;

/// Why a document was rejected as JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The validator rejected the text and no position is available.
    Invalid,
    /// The text is malformed at a known position (1-based line and column).
    Syntax {
        reason: String,
        line: usize,
        column: usize,
    },
    /// Arrays and objects nest deeper than `limit` levels.
    TooDeep { limit: usize },
}

impl DocumentError {
    /// Builds a diagnostic for text the query backend rejected.
    ///
    /// `serde_json` is consulted only to recover a position. When it happens
    /// to accept the text the bare [`DocumentError::Invalid`] is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use queryquill::query::DocumentError;
    ///
    /// let err = DocumentError::diagnose("{bad json");
    /// assert!(err.to_string().starts_with("Invalid JSON"));
    /// assert!(err.to_string().contains("line 1"));
    /// ```
    pub fn diagnose(text: &str) -> Self {
        match serde_json::from_str::<serde::de::IgnoredAny>(text) {
            Ok(_) => DocumentError::Invalid,
            Err(err) => DocumentError::Syntax {
                reason: syntax_reason(&err),
                line: err.line(),
                column: err.column(),
            },
        }
    }
}

/// Strips serde_json's trailing " at line L column C" so it isn't printed twice.
fn syntax_reason(err: &serde_json::Error) -> String {
    let full = err.to_string();
    match full.rfind(" at line ") {
        Some(idx) => full[..idx].to_string(),
        None => full,
    }
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::Invalid => write!(f, "Invalid JSON"),
            DocumentError::TooDeep { limit } => write!(
                f,
                "Invalid JSON: nesting too deep (more than {} levels)",
                limit
            ),
            DocumentError::Syntax {
                reason,
                line,
                column,
            } => write!(
                f,
                "Invalid JSON: {} at line {} column {}",
                reason, line, column
            ),
        }
    }
}

impl std::error::Error for DocumentError {}
