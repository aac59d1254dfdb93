//! Integration tests for the init and check commands
//!
//! NOTE: These tests change the current directory and use the serial_test attribute
//! to ensure they run sequentially and don't interfere with each other.

use fieldtags::cli::common::{EXIT_ERROR, EXIT_INVALID, EXIT_PARSE_ERROR, EXIT_SUCCESS};
use fieldtags::cli::{ColorChoice, OutputFormat, check, init};
use serial_test::serial;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Run `f` with the current directory set to a fresh temp dir
fn in_temp_dir<F>(f: F)
where
    F: FnOnce(&Path),
{
    let temp_dir = TempDir::new().unwrap();
    let original_dir = std::env::current_dir().unwrap();

    std::env::set_current_dir(temp_dir.path()).unwrap();
    f(temp_dir.path());
    std::env::set_current_dir(original_dir).unwrap();
}

fn run(records: &[&str]) -> i32 {
    let records: Vec<String> = records.iter().map(|r| r.to_string()).collect();
    check::run_check(
        &records,
        Path::new("fieldtags.toml"),
        OutputFormat::Jsonl,
        ColorChoice::Never,
    )
}

#[test]
#[serial]
fn test_init_then_check_valid_records() {
    in_temp_dir(|dir| {
        let result = init::run_init(false).unwrap();
        assert_eq!(result.created, vec!["fieldtags.toml".to_string()]);

        fs::write(
            dir.join("users.jsonl"),
            "{\"Name\":\"Alice\",\"Email\":\"alice@example.com\"}\n\
             {\"Name\":\"Bob\",\"Email\":\"bob@example.org\"}\n",
        )
        .unwrap();

        assert_eq!(run(&["users.jsonl"]), EXIT_SUCCESS);
    });
}

#[test]
#[serial]
fn test_check_invalid_record() {
    in_temp_dir(|dir| {
        init::run_init(false).unwrap();
        fs::write(
            dir.join("users.jsonl"),
            "{\"Name\":\"A\",\"Email\":\"aliceexample.com\"}\n",
        )
        .unwrap();

        assert_eq!(run(&["users.jsonl"]), EXIT_INVALID);

        let result = check::check(&["users.jsonl".to_string()], Path::new("fieldtags.toml"))
            .unwrap();
        let outcome = result.reports[0].outcome.as_ref().unwrap();
        assert_eq!(
            outcome.message(),
            Some("Name must be at least 2 characters long")
        );
    });
}

#[test]
#[serial]
fn test_check_multiple_sources_keep_order() {
    in_temp_dir(|dir| {
        init::run_init(false).unwrap();
        fs::write(
            dir.join("a.jsonl"),
            "{\"Name\":\"Alice\",\"Email\":\"alice@example.com\"}\n",
        )
        .unwrap();
        fs::write(dir.join("b.jsonl"), "\n{\"Name\":\"Bo\",\"Email\":\"\"}\n").unwrap();

        let result = check::check(
            &["a.jsonl".to_string(), "b.jsonl".to_string()],
            Path::new("fieldtags.toml"),
        )
        .unwrap();

        assert_eq!(result.records_checked(), 2);
        assert_eq!(result.reports[0].source, "a.jsonl");
        assert_eq!(result.reports[1].source, "b.jsonl");
        assert_eq!(result.reports[1].line, 2);
        assert_eq!(
            result.reports[1].outcome.as_ref().unwrap().message(),
            Some("Email is required")
        );
    });
}

#[test]
#[serial]
fn test_check_undecodable_record_is_error() {
    in_temp_dir(|dir| {
        init::run_init(false).unwrap();
        fs::write(dir.join("users.jsonl"), "{not json}\n").unwrap();
        assert_eq!(run(&["users.jsonl"]), EXIT_ERROR);
    });
}

#[test]
#[serial]
fn test_check_without_schema() {
    in_temp_dir(|dir| {
        fs::write(dir.join("users.jsonl"), "{}\n").unwrap();
        assert_eq!(run(&["users.jsonl"]), EXIT_ERROR);
    });
}

#[test]
#[serial]
fn test_check_strict_schema_with_bad_tag() {
    in_temp_dir(|dir| {
        fs::write(
            dir.join("fieldtags.toml"),
            "[schema]\nversion = \"1\"\nmode = \"strict\"\n\n[[fields]]\nname = \"Name\"\nrules = \"min=2,unique\"\n",
        )
        .unwrap();
        fs::write(dir.join("users.jsonl"), "{}\n").unwrap();
        assert_eq!(run(&["users.jsonl"]), EXIT_PARSE_ERROR);
    });
}

#[test]
#[serial]
fn test_init_twice_skips() {
    in_temp_dir(|_| {
        init::run_init(false).unwrap();
        let second = init::run_init(false).unwrap();
        assert!(second.created.is_empty());
        assert_eq!(second.skipped, vec!["fieldtags.toml".to_string()]);

        let forced = init::run_init(true).unwrap();
        assert_eq!(forced.overwritten, vec!["fieldtags.toml".to_string()]);
    });
}
