//! Input focus for the playground.
//!
//! Exactly one of the two input fields receives typed characters at a time.
//! Tab moves focus from one to the other.
//!
//! # Example
//!
//! ```
//! use queryquill::playground::focus::Focus;
//!
//! let focus = Focus::default();
//! assert_eq!(format!("{}", focus), "QUERY");
//! assert_eq!(focus.toggled(), Focus::Document);
//! ```

use std::fmt;

/// Which input field has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The single-line GJSON path field.
    #[default]
    Query,
    /// The multi-line JSON document field.
    Document,
}

impl Focus {
    /// Returns the other field.
    pub fn toggled(self) -> Self {
        match self {
            Focus::Query => Focus::Document,
            Focus::Document => Focus::Query,
        }
    }
}

impl fmt::Display for Focus {
    /// Formats the focus as an uppercase label for the status line.
    ///
    /// # Examples
    ///
    /// ```
    /// use queryquill::playground::focus::Focus;
    ///
    /// assert_eq!(format!("{}", Focus::Query), "QUERY");
    /// assert_eq!(format!("{}", Focus::Document), "DOCUMENT");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Focus::Query => write!(f, "QUERY"),
            Focus::Document => write!(f, "DOCUMENT"),
        }
    }
}
