use flate2::write::GzEncoder;
use flate2::Compression;
use queryquill::file::loader::{decode_document_bytes, load_document_file};
use queryquill::query::evaluate;
use std::fs;
use std::io::Write;
use tempfile::TempDir;

fn gzip(text: &str) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(text.as_bytes()).unwrap();
    encoder.finish().unwrap()
}

#[test]
fn test_load_plain_file_verbatim() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.json");
    let text = "{\n  \"key\": \"value\"\n}\n";
    fs::write(&path, text).unwrap();

    assert_eq!(load_document_file(&path).unwrap(), text);
}

#[test]
fn test_load_invalid_json_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{bad json").unwrap();

    let text = load_document_file(&path).unwrap();
    assert!(!evaluate(&text, "key").document_error.is_empty());
}

#[test]
fn test_load_gzip_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.json.gz");
    fs::write(&path, gzip(r#"{"name":{"last":"Anderson"}}"#)).unwrap();

    let text = load_document_file(&path).unwrap();
    assert_eq!(evaluate(&text, "name.last").value, "Anderson");
}

#[test]
fn test_corrupt_gzip_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.json.gz");
    fs::write(&path, b"not gzip at all").unwrap();

    assert!(load_document_file(&path).is_err());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = load_document_file(dir.path().join("missing.json")).unwrap_err();
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn test_piped_bytes_detect_gzip() {
    assert_eq!(decode_document_bytes(gzip("[1,2]")).unwrap(), "[1,2]");
    assert_eq!(decode_document_bytes(b"[3]".to_vec()).unwrap(), "[3]");
}
