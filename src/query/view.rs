//! Render-ready description of an evaluation.

use super::state::EvaluationState;
use serde::Serialize;

/// Everything a front end needs to draw the result area.
///
/// Built from an [`EvaluationState`] and nothing else, so the terminal UI and
/// the web page agree on when to show each marker.
///
/// # Example
///
/// ```
/// use queryquill::query::{EvaluationState, PlaygroundView};
///
/// let state = EvaluationState::new(r#"{"a": 1}"#.to_string(), "b".to_string());
/// let view = PlaygroundView::from_state(&state);
/// assert!(view.show_not_found);
/// assert!(!view.document_invalid);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaygroundView<'a> {
    /// Mark the document field as invalid.
    pub document_invalid: bool,
    /// Diagnostic shown under the document field.
    pub error_text: Option<&'a str>,
    /// Show the "Value not found" banner.
    pub show_not_found: bool,
    /// Read-only result text.
    pub result_text: &'a str,
}

impl<'a> PlaygroundView<'a> {
    pub fn from_state(state: &'a EvaluationState) -> Self {
        let document_invalid = !state.document_error().is_empty();
        Self {
            document_invalid,
            error_text: document_invalid.then(|| state.document_error()),
            show_not_found: !state.found() && !document_invalid && !state.query().is_empty(),
            result_text: state.value(),
        }
    }
}
