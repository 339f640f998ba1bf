//! Integration tests for etree


use harness::{TestDir, line_for, run_etree};
use serde_json::Value;

#[test]
fn test_help() {
    let dir = TestDir::new();
    let (stdout, _stderr, code) = run_etree(dir.path(), &["-h"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Usage:"), "{}", stdout);
}

#[test]
fn test_missing_dir() {
    let dir = TestDir::new();
    let (stdout, stderr, code) = run_etree(dir.path(), &["/foobar/does/not/exist"]);
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(
        stderr.contains("Error: Directory does not exist"),
        "{}",
        stderr
    );
}

#[test]
fn test_traverse_file() {
    let dir = TestDir::sample();
    let (_stdout, stderr, code) = run_etree(dir.path(), &["foo/a.txt"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Error: Not a valid directory"), "{}", stderr);
}

#[test]
fn test_default() {
    let dir = TestDir::sample();
    let (stdout, _stderr, code) = run_etree(dir.path(), &[]);
    assert_eq!(code, 0);

    assert_eq!(stdout.lines().next(), Some("./ [ 27.00 B, 100.00%, 9 ]"));
    assert_eq!(
        line_for(&stdout, "foo/"),
        Some("└── foo/ [ 9.00 B, 33.33%, 3 ]")
    );
    assert_eq!(
        line_for(&stdout, "a.txt"),
        Some("│   ├── a.txt [ 3.00 B, 33.33% ]")
    );
    assert!(stdout.ends_with("\n3 directories, 9 files, 27.00 B total\n"));
}

#[test]
fn test_explicit_path() {
    let dir = TestDir::sample();
    let target = dir.path().join("bar");
    let arg = format!("{}/", target.display());
    let (stdout, _stderr, code) = run_etree(dir.path(), &[&arg]);
    assert_eq!(code, 0);
    assert_eq!(
        stdout.lines().next().map(String::from),
        Some(format!("{}/ [ 9.00 B, 100.00%, 3 ]", target.display()))
    );
}

#[test]
fn test_print_bytes() {
    let dir = TestDir::sample();
    let (stdout, _stderr, code) = run_etree(dir.path(), &["-b"]);
    assert_eq!(code, 0);
    for name in ["foo/", "bar/", "baz/"] {
        let line = line_for(&stdout, name).unwrap();
        assert!(line.ends_with(" [ 9 B, 33.33%, 3 ]"), "{}", line);
    }
    assert!(stdout.contains("c.txt [ 3 B, 33.33% ]"));
}

#[test]
fn test_exclude() {
    let dir = TestDir::sample();
    let (stdout, _stderr, code) = run_etree(dir.path(), &["-Ifoo"]);
    assert_eq!(code, 0);
    assert!(!stdout.contains("foo"), "{}", stdout);
    assert_eq!(stdout.lines().next(), Some("./ [ 18.00 B, 100.00%, 6 ]"));
    assert_eq!(
        line_for(&stdout, "bar/"),
        Some("├── bar/ [ 9.00 B, 50.00%, 3 ]")
    );
    assert_eq!(
        line_for(&stdout, "baz/"),
        Some("└── baz/ [ 9.00 B, 50.00%, 3 ]")
    );
    assert!(stdout.contains("a.txt [ 3.00 B, 33.33% ]"));
}

#[test]
fn test_exclude_multiple() {
    let dir = TestDir::sample();
    let (stdout, _stderr, code) = run_etree(dir.path(), &["-Ifoo", "-Ibar", "-I", "baz"]);
    assert_eq!(code, 0);
    assert!(!stdout.contains("foo"));
    assert!(!stdout.contains("bar"));
    assert!(!stdout.contains("baz"));
    assert_eq!(stdout.lines().next(), Some("./ [ 0.00 B, 100.00%, 0 ]"));
}

#[test]
fn test_dirs_only() {
    let dir = TestDir::sample();
    let (stdout, _stderr, code) = run_etree(dir.path(), &["-d"]);
    assert_eq!(code, 0);
    assert!(!stdout.contains(".txt"), "{}", stdout);
    for name in ["foo/", "bar/", "baz/"] {
        assert!(line_for(&stdout, name).unwrap().ends_with(" [ 9.00 B, 33.33%, 3 ]"));
    }
    assert!(stdout.ends_with("3 directories, 9 files, 27.00 B total\n"));
}

#[test]
fn test_dirs_only_exclude_print_bytes() {
    let dir = TestDir::sample();
    let (stdout, _stderr, code) = run_etree(dir.path(), &["-db", "-Ifoo"]);
    assert_eq!(code, 0);
    assert!(!stdout.contains("foo"));
    assert!(!stdout.contains(".txt"));
    assert!(line_for(&stdout, "bar/").unwrap().ends_with(" [ 9 B, 50.00%, 3 ]"));
    assert!(line_for(&stdout, "baz/").unwrap().ends_with(" [ 9 B, 50.00%, 3 ]"));
}

#[test]
fn test_level() {
    let dir = TestDir::sample();
    let (stdout, _stderr, code) = run_etree(dir.path(), &["-L1"]);
    assert_eq!(code, 0);
    assert!(!stdout.contains(".txt"), "{}", stdout);
    for name in ["foo/", "bar/", "baz/"] {
        assert!(line_for(&stdout, name).unwrap().ends_with(" [ 9.00 B, 33.33%, 3 ]"));
    }
}

#[test]
fn test_level_keeps_deep_sizes() {
    let dir = TestDir::new();
    dir.add_file("a/b/c/d/deep.bin", &"x".repeat(2048));
    dir.add_file("a/top.bin", &"x".repeat(2048));

    let (stdout, _stderr, code) = run_etree(dir.path(), &["-L", "1", "-b"]);
    assert_eq!(code, 0);
    assert_eq!(
        line_for(&stdout, "a/"),
        Some("└── a/ [ 4096 B, 100.00%, 2 ]")
    );
    assert!(!stdout.contains("deep.bin"));
    assert!(!stdout.contains("top.bin"));
}

#[test]
fn test_level_print_bytes_exclude() {
    let dir = TestDir::sample();
    let (stdout, _stderr, code) = run_etree(dir.path(), &["-L1", "-b", "-Ifoo"]);
    assert_eq!(code, 0);
    assert!(!stdout.contains("foo"));
    assert!(!stdout.contains(".txt"));
    assert!(line_for(&stdout, "bar/").unwrap().ends_with(" [ 9 B, 50.00%, 3 ]"));
}

#[test]
fn test_absolute() {
    let dir = TestDir::sample();
    let (stdout, _stderr, code) = run_etree(dir.path(), &["-a", "-b"]);
    assert_eq!(code, 0);
    assert!(line_for(&stdout, "foo/").unwrap().ends_with(" [ 9 B, 33.33%, 3 ]"));
    assert!(stdout.contains("a.txt [ 3 B, 11.11% ]"), "{}", stdout);
}

// ============================================================================
// JSON Output
// ============================================================================

fn parse(stdout: &str) -> Value {
    serde_json::from_str(stdout).expect("stdout should be valid JSON")
}

#[test]
fn test_json() {
    let dir = TestDir::sample();
    let (stdout, _stderr, code) = run_etree(dir.path(), &["-j -1"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.lines().count(), 1);

    let json = parse(&stdout);
    assert_eq!(json["dirname"], ".");
    assert_eq!(json["filesize"], 27);
    assert_eq!(json["usage"], 100.0);
    assert_eq!(json["filecount"], 9);

    let children = json["children"].as_array().unwrap();
    let names: Vec<&str> = children
        .iter()
        .map(|c| c["dirname"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["bar", "baz", "foo"]);
    for child in children {
        assert_eq!(child["filesize"], 9);
        assert_eq!(child["filecount"], 3);
        for file in child["children"].as_array().unwrap() {
            assert_eq!(file["filesize"], 3);
            assert!(file.get("children").is_none());
            assert!(file.get("filecount").is_none());
        }
    }
}

#[test]
fn test_json_with_excludes() {
    let dir = TestDir::sample();
    let (stdout, _stderr, code) = run_etree(dir.path(), &["-j", "-1", "-Ifoo", "-Ibar"]);
    assert_eq!(code, 0);

    let json = parse(&stdout);
    assert_eq!(json["filesize"], 9);
    let children = json["children"].as_array().unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0]["dirname"], "baz");
    assert_eq!(children[0]["usage"], 100.0);
}

#[test]
fn test_json_with_level() {
    let dir = TestDir::sample();
    let (stdout, _stderr, code) = run_etree(dir.path(), &["-j", "2", "-L1"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("\n  \"dirname\": \".\","), "{}", stdout);

    let json = parse(&stdout);
    for child in json["children"].as_array().unwrap() {
        assert_eq!(child["filesize"], 9);
        assert_eq!(child["filecount"], 3);
        assert_eq!(child["children"], Value::Array(vec![]));
    }
}

#[test]
fn test_json_dirs_only() {
    let dir = TestDir::sample();
    let (stdout, _stderr, code) = run_etree(dir.path(), &["--json=-1", "-d"]);
    assert_eq!(code, 0);
    assert!(!stdout.contains("filename"));
    let json = parse(&stdout);
    assert_eq!(json["children"].as_array().unwrap().len(), 3);
}

#[test]
fn test_json_and_text_agree() {
    let dir = TestDir::sample();
    dir.add_file("foo/inner/deep.txt", "0123456789");

    let (text, _, _) = run_etree(dir.path(), &["-b"]);
    let (json, _, _) = run_etree(dir.path(), &["-j", "-1"]);

    fn sizes(value: &Value, out: &mut Vec<u64>) {
        out.push(value["filesize"].as_u64().unwrap());
        if let Some(children) = value["children"].as_array() {
            children.iter().for_each(|c| sizes(c, out));
        }
    }
    let mut from_json = Vec::new();
    sizes(&parse(&json), &mut from_json);

    let from_text: Vec<u64> = text
        .lines()
        .filter_map(|line| line.split(" [ ").nth(1))
        .map(|stats| stats.split(" B").next().unwrap().parse().unwrap())
        .collect();

    assert_eq!(from_json, from_text);
}
