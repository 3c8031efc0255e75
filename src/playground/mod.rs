//! Terminal playground session state.
//!
//! This module holds everything the terminal front end needs between
//! keystrokes: the two text buffers, which one has focus, scroll position,
//! messages, and overlay flags. Evaluation itself lives in [`crate::query`].
//!
//! # Modules
//!
//! - `focus`: Which input field receives keystrokes
//! - `buffer`: Editable text with a cursor
//! - `state`: The playground state container
//!
//! # Example
//!
//! ```
//! use queryquill::playground::focus::Focus;
//!
//! // The query bar has focus when the playground opens
//! assert_eq!(Focus::default(), Focus::Query);
//! ```

pub mod buffer;
pub mod focus;
pub mod state;
