//! Session state for the playground's evaluation.
//!
//! [`EvaluationState`] holds the two user inputs and the derived result of
//! evaluating one against the other. Every mutation re-evaluates, so the
//! derived fields always describe the current inputs.
//!
//! # Example
//!
//! ```
//! use queryquill::query::{EvaluationState, Outcome};
//!
//! let mut state = EvaluationState::example();
//! assert_eq!(state.outcome(), Outcome::Found);
//! assert_eq!(state.value(), "Anderson");
//!
//! state.set_query("name.middle".to_string());
//! assert_eq!(state.outcome(), Outcome::NotFound);
//!
//! state.set_document("{bad json".to_string());
//! assert_eq!(state.outcome(), Outcome::Invalid);
//! ```

use super::evaluator::{evaluate, Evaluation};
use std::fmt;

/// The document loaded when no other input is given.
pub const EXAMPLE_DOCUMENT: &str = r#"{
  "name": {"first": "Tom", "last": "Anderson"},
  "age": 37,
  "children": ["Sara","Alex","Jack"],
  "fav.movie": "Deer Hunter",
  "friends": [
    {"first": "Dale", "last": "Murphy", "age": 44, "nets": ["ig", "fb", "tw"]},
    {"first": "Roger", "last": "Craig", "age": 68, "nets": ["fb", "tw"]},
    {"first": "Jane", "last": "Murphy", "age": 47, "nets": ["ig", "tw"]}
  ]
}"#;

/// The query paired with [`EXAMPLE_DOCUMENT`].
pub const EXAMPLE_QUERY: &str = "name.last";

/// Which of the four evaluation states the inputs are in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    /// The document is not valid JSON.
    Invalid,
    /// Valid JSON, empty query.
    Empty,
    /// Valid JSON, the query matched a node.
    Found,
    /// Valid JSON, the query matched nothing.
    NotFound,
}

impl fmt::Display for Outcome {
    /// Formats the outcome as a short label for the status line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Invalid => write!(f, "INVALID"),
            Outcome::Empty => write!(f, "EMPTY"),
            Outcome::Found => write!(f, "FOUND"),
            Outcome::NotFound => write!(f, "NOT FOUND"),
        }
    }
}

/// Raw inputs plus the evaluation derived from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationState {
    document: String,
    query: String,
    result: Evaluation,
}

impl EvaluationState {
    /// Creates a state for the given inputs and evaluates it.
    pub fn new(document: String, query: String) -> Self {
        let result = evaluate(&document, &query);
        Self {
            document,
            query,
            result,
        }
    }

    /// Creates the seeded state shown when the playground opens.
    pub fn example() -> Self {
        Self::new(EXAMPLE_DOCUMENT.to_string(), EXAMPLE_QUERY.to_string())
    }

    /// Replaces the document text and re-evaluates.
    pub fn set_document(&mut self, document: String) {
        self.document = document;
        self.refresh();
    }

    /// Replaces the query text and re-evaluates.
    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.refresh();
    }

    /// Re-runs the evaluation against the current inputs.
    pub fn refresh(&mut self) {
        self.result = evaluate(&self.document, &self.query);
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn value(&self) -> &str {
        &self.result.value
    }

    pub fn found(&self) -> bool {
        self.result.found
    }

    pub fn document_error(&self) -> &str {
        &self.result.document_error
    }

    /// Returns the full evaluation tuple.
    pub fn evaluation(&self) -> &Evaluation {
        &self.result
    }

    /// Classifies the current inputs.
    pub fn outcome(&self) -> Outcome {
        if !self.result.document_error.is_empty() {
            Outcome::Invalid
        } else if self.query.is_empty() {
            Outcome::Empty
        } else if self.result.found {
            Outcome::Found
        } else {
            Outcome::NotFound
        }
    }
}

impl Default for EvaluationState {
    fn default() -> Self {
        Self::example()
    }
}
