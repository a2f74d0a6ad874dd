//! Tests for the CLI front end
//!
//! These tests verify:
//! - Subcommands map to the matching `Command`
//! - `--replace` / `--scan-to-eof` select the store policies
//! - What `get`, `sections` and `list` print
//! - Exit status 1 (and no stdout) on errors, in-process and via the binary

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use inistore::cli::{self, Args, EXIT_FAILURE, EXIT_SUCCESS};
use inistore::{Command, DuplicateKeys, ScanScope};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_file(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("store.ini");
    fs::write(&path, contents).unwrap();
    (temp_dir, path)
}

fn parse(path: &Path, rest: &[&str]) -> Args {
    let mut argv = vec!["inistore-cli", "--file", path.to_str().unwrap()];
    argv.extend_from_slice(rest);
    Args::try_parse_from(argv).unwrap()
}

/// Run in-process, returning (exit status, stdout)
fn run(path: &Path, rest: &[&str]) -> (u8, String) {
    let mut out = Vec::new();
    let status = cli::run(parse(path, rest), &mut out);
    (status, String::from_utf8(out).unwrap())
}

// =============================================================================
// Argument Mapping Tests
// =============================================================================

#[test]
fn test_subcommands_map_to_commands() {
    let path = Path::new("store.ini");

    assert_eq!(
        Command::from(parse(path, &["add-section", "db"]).command),
        Command::AddSection {
            section: "db".to_string()
        }
    );
    assert_eq!(
        Command::from(parse(path, &["set", "db", "host", "localhost"]).command),
        Command::Write {
            section: "db".to_string(),
            key: "host".to_string(),
            value: "localhost".to_string()
        }
    );
    assert_eq!(
        Command::from(parse(path, &["get", "db", "host"]).command),
        Command::Read {
            section: "db".to_string(),
            key: "host".to_string()
        }
    );
    assert_eq!(
        Command::from(parse(path, &["del", "db", "host"]).command),
        Command::Delete {
            section: "db".to_string(),
            key: "host".to_string()
        }
    );
    assert_eq!(
        Command::from(parse(path, &["sections"]).command),
        Command::Sections
    );
    assert_eq!(
        Command::from(parse(path, &["list", "db"]).command),
        Command::Entries {
            section: "db".to_string()
        }
    );
}

#[test]
fn test_default_flags_map_to_default_policies() {
    let config = parse(Path::new("a.ini"), &["sections"]).config();

    assert_eq!(config.path, PathBuf::from("a.ini"));
    assert_eq!(config.duplicate_keys, DuplicateKeys::Append);
    assert_eq!(config.scan_scope, ScanScope::Section);
}

#[test]
fn test_policy_flags_map_to_config() {
    let config = parse(Path::new("a.ini"), &["--replace", "--scan-to-eof", "sections"]).config();

    assert_eq!(config.duplicate_keys, DuplicateKeys::Replace);
    assert_eq!(config.scan_scope, ScanScope::ToEndOfFile);
}

#[test]
fn test_missing_subcommand_is_parse_error() {
    assert!(Args::try_parse_from(["inistore-cli", "--file", "a.ini"]).is_err());
}

// =============================================================================
// Output Tests
// =============================================================================

#[test]
fn test_get_prints_value() {
    let (_temp, path) = setup_file("[db]\nhost = localhost\n");

    let (status, out) = run(&path, &["get", "db", "host"]);

    assert_eq!(status, EXIT_SUCCESS);
    assert_eq!(out, "localhost\n");
}

#[test]
fn test_sections_prints_one_per_line() {
    let (_temp, path) = setup_file("[db]\nhost = h\n\n[cache]\nttl = 60\n");

    let (status, out) = run(&path, &["sections"]);

    assert_eq!(status, EXIT_SUCCESS);
    assert_eq!(out, "db\ncache\n");
}

#[test]
fn test_list_prints_entries() {
    let (_temp, path) = setup_file("[db]\nhost=h\nport =  5432\n");

    let (status, out) = run(&path, &["list", "db"]);

    assert_eq!(status, EXIT_SUCCESS);
    assert_eq!(out, "host = h\nport = 5432\n");
}

#[test]
fn test_mutations_print_nothing() {
    let (_temp, path) = setup_file("");

    assert_eq!(run(&path, &["add-section", "db"]), (EXIT_SUCCESS, String::new()));
    assert_eq!(
        run(&path, &["set", "db", "host", "h"]),
        (EXIT_SUCCESS, String::new())
    );
    assert_eq!(run(&path, &["del", "db", "host"]), (EXIT_SUCCESS, String::new()));
    assert_eq!(fs::read_to_string(&path).unwrap(), "\n[db]\n");
}

#[test]
fn test_replace_flag_overwrites() {
    let (_temp, path) = setup_file("[db]\nhost = old\n");

    let (status, _) = run(&path, &["--replace", "set", "db", "host", "new"]);

    assert_eq!(status, EXIT_SUCCESS);
    assert_eq!(fs::read_to_string(&path).unwrap(), "[db]\nhost = new\n");
}

#[test]
fn test_scan_to_eof_flag_reads_later_section() {
    let (_temp, path) = setup_file("[a]\nx = 1\n\n[b]\ny = 2\n");

    assert_eq!(run(&path, &["get", "a", "y"]).0, EXIT_FAILURE);
    assert_eq!(
        run(&path, &["--scan-to-eof", "get", "a", "y"]),
        (EXIT_SUCCESS, "2\n".to_string())
    );
}

#[test]
fn test_missing_section_fails() {
    let (_temp, path) = setup_file("[db]\nhost = h\n");

    let (status, out) = run(&path, &["get", "cache", "host"]);

    assert_eq!(status, EXIT_FAILURE);
    assert!(out.is_empty());
}

// =============================================================================
// Binary Tests
// =============================================================================

fn run_binary(path: &Path, rest: &[&str]) -> process::Output {
    process::Command::new(env!("CARGO_BIN_EXE_inistore-cli"))
        .arg("--file")
        .arg(path)
        .args(rest)
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

#[test]
fn test_binary_get_prints_to_stdout() {
    let (_temp, path) = setup_file("[db]\nhost = localhost\n");

    let output = run_binary(&path, &["get", "db", "host"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "localhost\n");
}

#[test]
fn test_binary_missing_section_exits_with_one() {
    let (_temp, path) = setup_file("[db]\nhost = h\n");

    let output = run_binary(&path, &["get", "cache", "host"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}
