//! Document input for the playground.
//!
//! This module loads raw document text from files or stdin. Nothing here
//! parses the text: a malformed document is still a valid playground input.

pub mod loader;
