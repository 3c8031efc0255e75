//! The boundary between the playground and the path-query library.

/// A JSON path-query capability.
///
/// The playground needs exactly two things from a query library: a validity
/// check for raw text and a lookup that reports whether a node exists and,
/// if so, its string form. Stringification rules belong to the library.
pub trait QueryBackend {
    /// Returns true if `text` is well-formed JSON.
    fn validate(&self, text: &str) -> bool;

    /// Looks up `path` in `text`.
    ///
    /// Returns `Some` with the node's string form if a node exists at `path`,
    /// `None` otherwise. Callers only pass text that `validate` accepted.
    fn get(&self, text: &str, path: &str) -> Option<String>;
}

/// [`QueryBackend`] backed by the `gjson` crate.
///
/// # Example
///
/// ```
/// use queryquill::query::{GjsonBackend, QueryBackend};
///
/// let backend = GjsonBackend;
/// assert!(backend.validate(r#"{"age": 37}"#));
/// assert_eq!(backend.get(r#"{"age": 37}"#, "age"), Some("37".to_string()));
/// assert_eq!(backend.get(r#"{"age": 37}"#, "name"), None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GjsonBackend;

impl QueryBackend for GjsonBackend {
    fn validate(&self, text: &str) -> bool {
        gjson::valid(text)
    }

    fn get(&self, text: &str, path: &str) -> Option<String> {
        let value = gjson::get(text, path);
        if !value.exists() {
            return None;
        }

        // str() already yields raw JSON for objects, arrays and numbers
        Some(value.str().to_string())
    }
}
