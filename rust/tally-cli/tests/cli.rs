//! Integration tests for config discovery, file input and command output.

use std::path::PathBuf;
use tally_cli::commands::{self, Render};
use tally_cli::config::{OutputFormat, TallyConfig, CONFIG_FILE};
use tally_cli::input::{gather_tokens, parse_values};
use tally_cli::CliError;

// =============================================================================
// Helper: scratch directory
// =============================================================================

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tally-cli-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

// =============================================================================
// Config
// =============================================================================

#[test]
fn find_from_walks_up_to_ancestor_config() {
    let root = scratch_dir("find");
    let nested = root.join("a").join("b");
    std::fs::create_dir_all(&nested).expect("create nested");
    std::fs::write(root.join(CONFIG_FILE), "[output]\nformat = \"json\"\n").expect("write");

    let found = TallyConfig::find_from(&nested).expect("config found");
    assert_eq!(found, root.join(CONFIG_FILE));

    let cfg = TallyConfig::load_from(&found).expect("load");
    assert_eq!(cfg.output.format, OutputFormat::Json);

    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn write_template_refuses_to_overwrite() {
    let dir = scratch_dir("init");
    let path = TallyConfig::write_template(&dir).expect("first write");
    assert!(path.exists());

    let err = TallyConfig::write_template(&dir).unwrap_err();
    assert!(matches!(err, CliError::ConfigExists { .. }));

    let cfg = TallyConfig::load_from(&path).expect("template loads");
    assert_eq!(cfg, TallyConfig::default());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn malformed_config_reports_path() {
    let dir = scratch_dir("bad");
    let path = dir.join(CONFIG_FILE);
    std::fs::write(&path, "[output\nformat = ").expect("write");

    let err = TallyConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, CliError::Config { .. }));
    assert!(err.to_string().contains(CONFIG_FILE));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn explicit_config_path_skips_search() {
    let dir = scratch_dir("explicit");
    let path = dir.join("custom.toml");
    std::fs::write(&path, "[output]\nformat = \"json\"\ncolor = false\n").expect("write");

    let cfg = TallyConfig::resolve(Some(path.as_path())).expect("load");
    assert_eq!(cfg.output.format, OutputFormat::Json);
    assert!(!cfg.output.color);

    let render = Render::resolve(&cfg, false, false);
    assert_eq!(render.format, OutputFormat::Json);

    let missing = TallyConfig::resolve(Some(dir.join("absent.toml").as_path())).unwrap_err();
    assert!(matches!(missing, CliError::Io { .. }));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn bad_log_filter_in_config_fails_to_load() {
    let dir = scratch_dir("filter");
    let path = dir.join(CONFIG_FILE);
    std::fs::write(&path, "[log]\nfilter = \"tally_core=loud\"\n").expect("write");

    let err = TallyConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, CliError::LogFilter { .. }));
    assert!(err.to_string().contains("tally_core=loud"));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn init_command_writes_template_once() {
    let dir = scratch_dir("init-cmd");

    let out = commands::init(&dir, &Render::text(false)).expect("init");
    assert_eq!(out, format!("created {}", dir.join(CONFIG_FILE).display()));
    assert!(dir.join(CONFIG_FILE).exists());

    let err = commands::init(&dir, &Render::text(false)).unwrap_err();
    assert!(matches!(err, CliError::ConfigExists { .. }));

    std::fs::remove_dir_all(&dir).ok();
}

// =============================================================================
// Input files
// =============================================================================

#[test]
fn file_values_follow_argument_values() {
    let dir = scratch_dir("input");
    let path = dir.join("values.txt");
    std::fs::write(&path, "45 23\n124\t12\n").expect("write");

    let args = vec!["1".to_string(), "2".to_string()];
    let tokens = gather_tokens(&args, Some(path.as_path())).expect("gather");
    assert_eq!(tokens, vec!["1", "2", "45", "23", "124", "12"]);

    let values: Vec<i64> = parse_values(&tokens).expect("parse");
    let out = commands::sort_integers(values, false, &Render::text(false)).expect("sort");
    assert_eq!(out, "1 2 12 23 45 124");

    std::fs::remove_dir_all(&dir).ok();
}

// =============================================================================
// Commands end to end
// =============================================================================

#[test]
fn sort_reference_sequence() {
    let tokens: Vec<String> = "1 2 3 45 23 124 12 43 5 32 1"
        .split(' ')
        .map(str::to_string)
        .collect();
    let values: Vec<i64> = parse_values(&tokens).expect("parse");
    let out = commands::sort_integers(values, true, &Render::text(false)).expect("sort");
    assert_eq!(
        out,
        "1 1 2 3 5 12 23 32 43 45 124\npasses: 10, comparisons: 55, swaps: 9"
    );
}

#[test]
fn count_reference_sequence_json() {
    let values = vec![1, 2, 3, 45, 23, 124, 12, 43, 5, 32, 1];
    let out = commands::count_values(values, vec![1, 7], &Render::json()).expect("count");
    let v: serde_json::Value = serde_json::from_str(&out).expect("json");
    assert_eq!(v["frequencies"][0], serde_json::json!({"value": 1, "count": 2}));
    assert_eq!(v["frequencies"].as_array().map(Vec::len), Some(10));
    assert_eq!(v["queries"][1], serde_json::json!({"query": 7, "count": 0}));
}

#[test]
fn chars_json_keys_are_strings() {
    let out = commands::count_chars("hello", &["l".to_string()], &Render::json()).expect("chars");
    let v: serde_json::Value = serde_json::from_str(&out).expect("json");
    assert_eq!(v["frequencies"][2], serde_json::json!({"value": "l", "count": 2}));
    assert_eq!(v["queries"][0], serde_json::json!({"query": "l", "count": 2}));
}
