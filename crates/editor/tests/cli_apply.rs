// Chunk: docs/chunks/edit_cli - Integration tests for the command-line front end
//!
//! Integration tests for the `lineedit` command.
//!
//! Each test:
//! 1. Writes a file and an edit script into a temp directory
//! 2. Parses a command line with `Cli::parse_from`
//! 3. Runs it and checks the files and output it leaves behind

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use tempfile::TempDir;

use lineedit::cli::{apply_script, run, Cli};
use lineedit::config::{load_config, Config, ConfigSource};
use lineedit::RangeEdit;

const SCRIPT: &str = r#"[
  {"range": {"start_line_number": 2, "line_count": 1}, "new_lines": ["X", "Y"]}
]"#;

/// Writes `contents` to `name` inside `dir` and returns the path.
fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn run_args(args: &[&str], config: &Config) -> anyhow::Result<String> {
    let cli = Cli::parse_from(args.iter().copied());
    let mut out = Vec::new();
    run(&cli, config, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_apply_script_returns_edited_content() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "doc.txt", "A\nB\nC");
    let script = write_file(&dir, "edits.json", SCRIPT);

    assert_eq!(apply_script(&file, &script).unwrap(), "A\nX\nY\nC");
    // The file itself is untouched.
    assert_eq!(fs::read_to_string(&file).unwrap(), "A\nB\nC");
}

#[test]
fn test_apply_in_place() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "doc.txt", "A\nB\nC");
    let script = write_file(&dir, "edits.json", SCRIPT);

    let out = run_args(
        &["lineedit", "apply", arg(&file), "--edits", arg(&script)],
        &Config::default(),
    )
    .unwrap();

    assert_eq!(out, "");
    assert_eq!(fs::read_to_string(&file).unwrap(), "A\nX\nY\nC");
    assert!(!dir.path().join("doc.txt.orig").exists());
    assert!(!dir.path().join("doc.txt.tmp").exists());
}

#[test]
fn test_apply_dry_run_prints_and_leaves_file() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "doc.txt", "A\nB\nC");
    let script = write_file(&dir, "edits.json", SCRIPT);

    let out = run_args(
        &["lineedit", "apply", arg(&file), "-e", arg(&script), "--dry-run"],
        &Config::default(),
    )
    .unwrap();

    assert_eq!(out, "A\nX\nY\nC");
    assert_eq!(fs::read_to_string(&file).unwrap(), "A\nB\nC");
}

#[test]
fn test_apply_to_output_path() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "doc.txt", "A\nB\nC");
    let script = write_file(&dir, "edits.json", SCRIPT);
    let output = dir.path().join("edited.txt");

    let config = Config {
        backup: true,
        ..Config::default()
    };
    run_args(
        &["lineedit", "apply", arg(&file), "-e", arg(&script), "-o", arg(&output)],
        &config,
    )
    .unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "A\nX\nY\nC");
    assert_eq!(fs::read_to_string(&file).unwrap(), "A\nB\nC");
    // Nothing was overwritten, so nothing was backed up.
    assert!(!dir.path().join("doc.txt.orig").exists());
}

#[test]
fn test_apply_in_place_keeps_backup_when_configured() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "doc.txt", "A\nB\nC");
    let script = write_file(&dir, "edits.json", SCRIPT);

    let config = Config {
        backup: true,
        ..Config::default()
    };
    run_args(&["lineedit", "apply", arg(&file), "-e", arg(&script)], &config).unwrap();

    assert_eq!(fs::read_to_string(&file).unwrap(), "A\nX\nY\nC");
    assert_eq!(
        fs::read_to_string(dir.path().join("doc.txt.orig")).unwrap(),
        "A\nB\nC"
    );
}

#[test]
fn test_apply_rejects_unsorted_script_and_leaves_file() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "doc.txt", "A\nB\nC");
    let script = write_file(
        &dir,
        "edits.json",
        r#"[
          {"range": {"start_line_number": 3, "line_count": 1}, "new_lines": []},
          {"range": {"start_line_number": 1, "line_count": 1}, "new_lines": []}
        ]"#,
    );

    let err = run_args(&["lineedit", "apply", arg(&file), "-e", arg(&script)], &Config::default())
        .unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("must be sorted"), "{chain}");
    assert_eq!(fs::read_to_string(&file).unwrap(), "A\nB\nC");
}

#[test]
fn test_apply_rejects_zero_line_number() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "doc.txt", "A");
    let script = write_file(
        &dir,
        "edits.json",
        r#"[{"range": {"start_line_number": 0, "line_count": 1}, "new_lines": []}]"#,
    );

    let err = apply_script(&file, &script).unwrap_err();
    assert!(format!("{err:#}").contains("line numbers start at 1"));
}

#[test]
fn test_apply_reports_missing_file() {
    let dir = TempDir::new().unwrap();
    let script = write_file(&dir, "edits.json", SCRIPT);
    let missing = dir.path().join("missing.txt");

    let err = apply_script(&missing, &script).unwrap_err();
    assert!(format!("{err:#}").contains("failed to read"));
}

#[test]
fn test_translate_prints_splices() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "doc.txt", "A\nB\nC");
    let script = write_file(
        &dir,
        "edits.json",
        r#"[
          {"range": {"start_line_number": 1, "line_count": 1}, "new_lines": ["a"]},
          {"range": {"start_line_number": 3, "line_count": 1}, "new_lines": ["c"]}
        ]"#,
    );

    let out = run_args(
        &["lineedit", "translate", arg(&file), "--edits", arg(&script)],
        &Config::default(),
    )
    .unwrap();

    let splices: Vec<RangeEdit> = serde_json::from_str(&out).unwrap();
    assert_eq!(splices.len(), 2);
    assert_eq!(splices[0].new_text, "a\n");
    assert_eq!(splices[1].new_text, "\nc");
    // Translating never writes the file.
    assert_eq!(fs::read_to_string(&file).unwrap(), "A\nB\nC");
}

#[test]
fn test_config_write_then_load() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("nested").join("config.json");
    let config = Config {
        log_level: "lineedit=debug".into(),
        backup: true,
        ..Config::default()
    };

    let out = run_args(
        &["lineedit", "--config", arg(&config_path), "config", "--write"],
        &config,
    )
    .unwrap();
    assert_eq!(out.trim(), config_path.display().to_string());

    let (loaded, source) = load_config(Some(&config_path)).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(source, ConfigSource::File(config_path));
}

#[test]
fn test_config_prints_effective_settings() {
    let out = run_args(&["lineedit", "config"], &Config::default()).unwrap();
    let printed: Config = serde_json::from_str(&out).unwrap();
    assert_eq!(printed, Config::default());
}
