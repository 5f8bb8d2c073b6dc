//! Integration tests for tagfold CLI
//!
//! Each test writes real files to a temporary directory and runs the
//! command functions the binary dispatches to.

use std::fs;
use std::path::PathBuf;

use serde_json::Value;
use tagfold_cli::{load_settings, ranges_output, regions_output, OutputFormat};
use tempfile::TempDir;

const PAGE: &str = r#"<html>
<head>
  <style>
    h1 {
      color: red;
    }
  </style>
</head>
<body>
  <!--
    Main content
  -->
  <main>
    <h1>Title</h1>
  </main>
</body>
</html>
"#;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_ranges_text_output() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "index.html", PAGE);

    let output = ranges_output(&input, None, OutputFormat::Text, None).unwrap();
    assert_eq!(
        output,
        "0-15 tag\n1-6 tag\n2-5 tag\n3-4 tag\n8-14 tag\n9-11 comment\n12-13 tag\n"
    );
}

#[test]
fn test_ranges_json_output() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "index.html", PAGE);

    let output = ranges_output(&input, Some(3), OutputFormat::Json, None).unwrap();
    let json: Value = serde_json::from_str(&output).unwrap();

    // Depth 0 and 1 fit in the limit, depth 2 does not
    assert_eq!(
        json,
        serde_json::json!([
            {"start_line": 0, "end_line": 15, "kind": "tag"},
            {"start_line": 1, "end_line": 6, "kind": "tag"},
            {"start_line": 8, "end_line": 14, "kind": "tag"},
        ])
    );
}

#[test]
fn test_regions_output() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "index.html", PAGE);

    let text = regions_output(&input, OutputFormat::Text, None).unwrap();
    assert_eq!(text, "3-5 css\n");

    let json: Value =
        serde_json::from_str(&regions_output(&input, OutputFormat::Json, None).unwrap()).unwrap();
    assert_eq!(json[0]["language_id"], "css");
    assert_eq!(json[0]["start_line"], 3);
    assert_eq!(json[0]["end_line"], 5);
}

#[test]
fn test_config_file() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "index.html", PAGE);
    let config = write(
        &dir,
        "tagfold.toml",
        "[folding]\nrange_limit = 1\n\n[embedded]\nenabled = false\n",
    );

    let output = ranges_output(&input, None, OutputFormat::Text, Some(config.as_path())).unwrap();
    assert_eq!(output, "0-15 tag\n");

    let regions = regions_output(&input, OutputFormat::Text, Some(config.as_path())).unwrap();
    assert!(regions.starts_with("No embedded regions"));
}

#[test]
fn test_empty_document() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "empty.html", "");

    let output = ranges_output(&input, None, OutputFormat::Text, None).unwrap();
    assert!(output.starts_with("No folding ranges in"));

    let json = ranges_output(&input, None, OutputFormat::Json, None).unwrap();
    assert_eq!(json.trim(), "[]");
}

#[test]
fn test_missing_input() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.html");

    let err = ranges_output(&missing, None, OutputFormat::Text, None).unwrap_err();
    assert!(err.to_string().contains("Input file not found"));
}

#[test]
fn test_missing_config() {
    let dir = TempDir::new().unwrap();
    let err = load_settings(Some(dir.path().join("nope.toml").as_path())).unwrap_err();
    assert!(err.to_string().contains("Config file not found"));
}

#[test]
fn test_invalid_config() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "index.html", PAGE);

    let bad_toml = write(&dir, "bad.toml", "[folding\n");
    let err = ranges_output(&input, None, OutputFormat::Text, Some(bad_toml.as_path())).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));

    let bad_marker = write(&dir, "marker.toml", "[folding]\nregion_start = '['\n");
    let err = ranges_output(&input, None, OutputFormat::Text, Some(bad_marker.as_path())).unwrap_err();
    assert!(err.to_string().contains("Invalid region marker pattern"));
}
