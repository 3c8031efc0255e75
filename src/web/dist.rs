//! Static export: the playground page plus a copy of the assets directory.

use super::page::{render_page, PageMode};
use super::serve::assets_prefix;
use super::DistOptions;
use crate::query::EvaluationState;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// Writes `<out>/index.html` and copies the assets tree to `<out>/<assets name>`.
///
/// Returns the number of asset files copied.
///
/// # Errors
///
/// Fails if the assets directory is missing or any read, write, or directory
/// creation fails. The export stops at the first failure.
pub fn export(options: &DistOptions) -> Result<usize> {
    if !options.assets_dir.is_dir() {
        bail!(
            "Assets directory {} does not exist",
            options.assets_dir.display()
        );
    }

    fs::create_dir_all(&options.out_dir)
        .with_context(|| format!("Failed to create {}", options.out_dir.display()))?;

    let prefix = assets_prefix(&options.assets_dir);
    let index = options.out_dir.join("index.html");
    fs::write(&index, render_page(&EvaluationState::example(), &prefix, PageMode::Static))
        .with_context(|| format!("Failed to write {}", index.display()))?;
    tracing::info!("Wrote {}", index.display());

    let target = options.out_dir.join(&prefix);
    let copied = copy_dir_recursive(&options.assets_dir, &target)?;
    tracing::info!(
        "Copied {} asset file(s) from {} to {}",
        copied,
        options.assets_dir.display(),
        target.display()
    );

    Ok(copied)
}

/// Copies every file under `src` into `dst`, recreating subdirectories.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<usize> {
    fs::create_dir_all(dst).with_context(|| format!("Failed to create {}", dst.display()))?;

    let mut copied = 0;
    let entries = fs::read_dir(src).with_context(|| format!("Failed to read {}", src.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read {}", src.display()))?;
        let from = entry.path();
        let to = dst.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            copied += copy_dir_recursive(&from, &to)?;
        } else {
            fs::copy(&from, &to).with_context(|| {
                format!("Failed to copy {} to {}", from.display(), to.display())
            })?;
            tracing::debug!("copied {}", to.display());
            copied += 1;
        }
    }

    Ok(copied)
}
