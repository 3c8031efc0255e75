//! Document loading functionality.
//!
//! This module reads the raw text of a document from a file (optionally
//! gzip-compressed) or from stdin. The text is returned as-is, since the
//! playground's job is to report whether it is valid JSON.

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Gzip magic bytes.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Reads a document from the filesystem.
///
/// Files ending in `.gz` are decompressed first.
///
/// # Examples
///
/// ```no_run
/// use queryquill::file::loader::load_document_file;
///
/// let text = load_document_file("data.json").unwrap();
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file path does not exist or cannot be read
/// - A `.gz` file is not valid gzip
/// - The content is not valid UTF-8
pub fn load_document_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path_ref = path.as_ref();
    tracing::debug!("loading document from {}", path_ref.display());

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    if is_gzipped {
        read_gzipped_file(path_ref)
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read {}", path_ref.display()))
    }
}

/// Reads a document from standard input until EOF.
///
/// Gzip input is detected by its magic bytes and decompressed.
///
/// # Examples
///
/// ```no_run
/// use queryquill::file::loader::load_document_from_stdin;
///
/// // Usage: curl -s https://example.com/data.json | queryquill
/// let text = load_document_from_stdin().unwrap();
/// ```
pub fn load_document_from_stdin() -> Result<String> {
    let mut buffer = Vec::new();
    std::io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;
    tracing::debug!("read {} bytes from stdin", buffer.len());
    decode_document_bytes(buffer)
}

/// Turns raw bytes into document text, decompressing gzip when detected.
pub fn decode_document_bytes(bytes: Vec<u8>) -> Result<String> {
    if bytes.starts_with(&GZIP_MAGIC) {
        decompress_gzip_bytes(&bytes)
    } else {
        String::from_utf8(bytes).context("Invalid UTF-8 in document")
    }
}

/// Reads and decompresses a gzipped file.
fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    use flate2::read::GzDecoder;

    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

/// Decompresses gzip-encoded bytes to a UTF-8 string.
fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped input")?;
    Ok(content)
}
