//! The browser-facing side of the playground.
//!
//! [`serve`] runs an axum server that hosts the playground page and answers
//! evaluation requests with the same [`crate::query::evaluate`] used by the
//! terminal UI. [`dist`] writes the page and its assets to a directory for
//! static hosting.

pub mod dist;
pub mod page;
pub mod serve;

use std::path::PathBuf;

/// Resolved options for `queryquill serve`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeOptions {
    pub host: String,
    pub port: u16,
    pub assets_dir: PathBuf,
}

impl ServeOptions {
    /// The `host:port` string handed to the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Resolved options for `queryquill dist`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistOptions {
    pub out_dir: PathBuf,
    pub assets_dir: PathBuf,
}
