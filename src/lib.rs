//! queryquill: a GJSON path playground for the terminal and the browser.
//!
//! Type a GJSON path, edit a JSON document, and see the matched value update
//! on every keystroke. The same evaluation core backs the terminal UI, the
//! HTTP playground, and the one-shot `eval` command.

pub mod config;
pub mod file;
pub mod input;
pub mod logging;
pub mod playground;
pub mod query;
pub mod theme;
pub mod ui;
pub mod web;
