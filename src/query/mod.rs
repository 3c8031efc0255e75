//! GJSON query evaluation for the playground.
//!
//! This module owns the one piece of real logic in QueryQuill: classifying a
//! (document, query) pair as invalid JSON, an empty query, a match, or a miss.
//! The path language itself belongs to the [`gjson`] crate and is reached only
//! through the [`QueryBackend`] trait.
//!
//! # Supported Syntax
//!
//! Anything GJSON understands, for example:
//!
//! - `name.last` - Nested property access
//! - `children.1` - Array index
//! - `children.#` - Array length
//! - `fav\.movie` - Escaped dot in a key
//! - `friends.#.first` - Field of every element
//! - `friends.#(last=="Murphy").first` - First element matching a condition
//!
//! # Examples
//!
//! ```
//! use queryquill::query::evaluate;
//!
//! let result = evaluate(r#"{"name": {"first": "Tom", "last": "Anderson"}}"#, "name.last");
//! assert!(result.found);
//! assert_eq!(result.value, "Anderson");
//! ```

pub mod backend;
pub mod error;
pub mod evaluator;
pub mod state;
pub mod view;

pub use backend::{GjsonBackend, QueryBackend};
pub use error::DocumentError;
pub use evaluator::{evaluate, evaluate_with, nesting_exceeds, Evaluation, MAX_NESTING_DEPTH};
pub use state::{EvaluationState, Outcome, EXAMPLE_DOCUMENT, EXAMPLE_QUERY};
pub use view::PlaygroundView;
