//! The pure evaluation function behind every keystroke.

use super::backend::{GjsonBackend, QueryBackend};
use super::error::DocumentError;
use serde::Serialize;

/// Result of evaluating one query against one document.
///
/// Exactly one of the following holds:
/// - `document_error` is non-empty: the document is not JSON, `value` is empty
///   and `found` is false.
/// - the query is empty: `value` is empty and `found` is true.
/// - otherwise `found` says whether a node matched and `value` holds its
///   string form when it did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub value: String,
    pub found: bool,
    pub document_error: String,
}

/// Deepest array/object nesting handed to the backend.
///
/// Validation and lookup recurse once per level, so anything deeper is
/// rejected up front to keep the stack bounded on every thread.
pub const MAX_NESTING_DEPTH: usize = 512;

/// Returns true if `text` opens more than `limit` arrays or objects at once.
///
/// Brackets inside string literals are ignored. Malformed text is scanned the
/// same way; only the depth matters here.
pub fn nesting_exceeds(text: &str, limit: usize) -> bool {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for byte in text.bytes() {
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                if depth > limit {
                    return true;
                }
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    false
}

impl Evaluation {
    fn invalid(err: DocumentError) -> Self {
        Self {
            value: String::new(),
            found: false,
            document_error: err.to_string(),
        }
    }

    fn empty_query() -> Self {
        Self {
            value: String::new(),
            found: true,
            document_error: String::new(),
        }
    }

    fn matched(value: String) -> Self {
        Self {
            value,
            found: true,
            document_error: String::new(),
        }
    }

    fn missed() -> Self {
        Self {
            value: String::new(),
            found: false,
            document_error: String::new(),
        }
    }
}

/// Evaluates `query` against `document` with the GJSON backend.
///
/// Total and side-effect free: malformed documents and queries are reported
/// through the returned [`Evaluation`], never as errors or panics.
///
/// # Examples
///
/// ```
/// use queryquill::query::evaluate;
///
/// let hit = evaluate(r#"{"key": "value"}"#, "key");
/// assert_eq!(hit.value, "value");
/// assert!(hit.found);
///
/// let blank = evaluate(r#"{"key": "value"}"#, "");
/// assert!(blank.found);
/// assert!(blank.value.is_empty());
///
/// let broken = evaluate("{bad json", "key");
/// assert!(!broken.found);
/// assert!(!broken.document_error.is_empty());
/// ```
pub fn evaluate(document: &str, query: &str) -> Evaluation {
    evaluate_with(&GjsonBackend, document, query)
}

/// Evaluates `query` against `document` using an arbitrary [`QueryBackend`].
pub fn evaluate_with<B: QueryBackend + ?Sized>(
    backend: &B,
    document: &str,
    query: &str,
) -> Evaluation {
    if nesting_exceeds(document, MAX_NESTING_DEPTH) {
        return Evaluation::invalid(DocumentError::TooDeep {
            limit: MAX_NESTING_DEPTH,
        });
    }

    if !backend.validate(document) {
        return Evaluation::invalid(DocumentError::diagnose(document));
    }

    // An empty query counts as found so the UI never flags a blank query box
    if query.is_empty() {
        return Evaluation::empty_query();
    }

    match backend.get(document, query) {
        Some(value) => Evaluation::matched(value),
        None => Evaluation::missed(),
    }
}
