//! Tests for `entry_point::run_with_args_to` with captured output.
#![allow(clippy::unwrap_used)]

use charstrip::entry_point::run_with_args_to;
use std::ffi::OsString;
use std::fs;
use tempfile::TempDir;

fn args(items: &[&str]) -> Vec<OsString> {
    items.iter().map(OsString::from).collect()
}

#[test]
fn test_success_returns_zero() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("in.txt");
    fs::write(&file, "tab\tseparated\tvalues").unwrap();

    let mut out = Vec::new();
    let code = run_with_args_to(
        vec![file.clone().into_os_string(), OsString::from("\t")],
        &mut out,
    )
    .unwrap();

    assert_eq!(code, 0);
    assert!(out.is_empty());
    assert_eq!(fs::read_to_string(&file).unwrap(), "tabseparatedvalues");
}

#[test]
fn test_usage_errors_return_one() {
    let mut out = Vec::new();
    assert_eq!(run_with_args_to(args(&[]), &mut out).unwrap(), 1);
    assert_eq!(run_with_args_to(args(&["only-one"]), &mut out).unwrap(), 1);
    assert_eq!(run_with_args_to(args(&["a", "b", "c"]), &mut out).unwrap(), 1);
    assert!(out.is_empty());
}

#[test]
fn test_help_and_version_are_written_to_writer() {
    let mut out = Vec::new();
    assert_eq!(run_with_args_to(args(&["--version"]), &mut out).unwrap(), 0);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains(env!("CARGO_PKG_VERSION")));

    let mut out = Vec::new();
    assert_eq!(run_with_args_to(args(&["--help"]), &mut out).unwrap(), 0);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains(".charstrip.toml"));
}

#[test]
fn test_missing_file_returns_one() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("missing.txt");
    let mut out = Vec::new();
    let code = run_with_args_to(
        vec![file.clone().into_os_string(), OsString::from("x")],
        &mut out,
    )
    .unwrap();
    assert_eq!(code, 1);
    assert!(!file.exists());
}

#[cfg(unix)]
#[test]
fn test_non_utf8_deletion_set() {
    use std::os::unix::ffi::OsStringExt;

    let dir = TempDir::new().unwrap();
    let file = dir.path().join("latin1.bin");
    fs::write(&file, [b'c', b'a', b'f', 0xE9, b'!']).unwrap();

    let mut out = Vec::new();
    let code = run_with_args_to(
        vec![file.clone().into_os_string(), OsString::from_vec(vec![0xE9])],
        &mut out,
    )
    .unwrap();

    assert_eq!(code, 0);
    assert_eq!(fs::read(&file).unwrap(), b"caf!");
}

#[test]
fn test_cli_chunk_size_overrides_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".charstrip.toml"),
        "[charstrip]\nchunk_size = 0\n",
    )
    .unwrap();
    let file = dir.path().join("in.txt");
    fs::write(&file, "1,2,3").unwrap();

    let mut out = Vec::new();
    let code = run_with_args_to(
        vec![
            OsString::from("--chunk-size"),
            OsString::from("1"),
            OsString::from("--json"),
            file.clone().into_os_string(),
            OsString::from(","),
        ],
        &mut out,
    )
    .unwrap();

    assert_eq!(code, 0);
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["removed"], 2);
    assert_eq!(fs::read_to_string(&file).unwrap(), "123");
}

#[test]
fn test_option_names_as_deletion_sets() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("opts.txt");

    for (chars, expected) in [
        ("--json", "ahelpvxummary"),
        ("--", "ajsonhelpvxsummary"),
        ("--help", "ajsonvxsummary"),
        ("-v", "ajsonhelpxsummary"),
        ("--summary", "jonhelpvx"),
        ("-x", "ajsonhelpvsummary"),
    ] {
        fs::write(&file, "a--json-help-v-x-summary").unwrap();
        let mut out = Vec::new();
        let code = run_with_args_to(
            vec![file.clone().into_os_string(), OsString::from(chars)],
            &mut out,
        )
        .unwrap();

        assert_eq!(code, 0, "deletion set {chars:?}");
        assert!(out.is_empty(), "deletion set {chars:?}");
        assert_eq!(fs::read_to_string(&file).unwrap(), expected, "deletion set {chars:?}");
    }
}

