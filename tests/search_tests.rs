//! Filesystem occurrence provider tests.
//!
//! Glob discovery and word-boundary symbol search over real temp files.

use refscope::provider::OccurrenceProvider;
use refscope::search::{find_symbol_occurrences, GlobSearchProvider, SearchConfig};
use std::fs;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, content: &str) {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn js_glob(dir: &TempDir) -> String {
    format!("{}/**/*.js", dir.path().display())
}

#[test]
fn test_finds_occurrences_across_files() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "a.js", "let counter = 0\ncounter += 1\n");
    write_file(&dir, "sub/b.js", "console.log(counter)\n");

    let config = SearchConfig {
        glob_pattern: js_glob(&dir),
    };
    let occurrences = find_symbol_occurrences(&config, "counter").unwrap();
    assert_eq!(occurrences.len(), 3);
}

#[test]
fn test_occurrence_positions_are_one_based_lines() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "a.js", "let x = 1\ny = x\n");

    let config = SearchConfig {
        glob_pattern: js_glob(&dir),
    };
    let occurrences = find_symbol_occurrences(&config, "x").unwrap();
    assert_eq!(occurrences.len(), 2);
    assert_eq!(occurrences[0].line, 1);
    assert_eq!(occurrences[0].col_start, 4);
    assert_eq!(occurrences[0].col_end, 5);
    assert_eq!(occurrences[1].line, 2);
    assert_eq!(occurrences[1].col_start, 4);
}

#[test]
fn test_word_boundaries_exclude_longer_identifiers() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "a.js", "xmax = x_old + x\n");

    let config = SearchConfig {
        glob_pattern: js_glob(&dir),
    };
    let occurrences = find_symbol_occurrences(&config, "x").unwrap();
    assert_eq!(occurrences.len(), 1);
    assert_eq!(occurrences[0].col_start, 15);
}

#[test]
fn test_non_matching_glob_yields_no_occurrences() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "a.js", "x = 1\n");

    let config = SearchConfig {
        glob_pattern: format!("{}/**/*.py", dir.path().display()),
    };
    let occurrences = find_symbol_occurrences(&config, "x").unwrap();
    assert!(occurrences.is_empty());
}

#[test]
fn test_invalid_glob_is_provider_unavailable() {
    let config = SearchConfig {
        glob_pattern: "src/***".to_string(),
    };
    let err = find_symbol_occurrences(&config, "x").unwrap_err();
    assert_eq!(err.kind(), "ProviderUnavailable");
}

#[test]
fn test_provider_trait_surface() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "a.js", "value = value + 1\n");

    let provider = GlobSearchProvider::new(js_glob(&dir));
    assert_eq!(provider.name(), "glob-search");
    let occurrences = provider.find_occurrences("value").unwrap();
    assert_eq!(occurrences.len(), 2);
}

#[test]
fn test_matches_inside_strings_are_reported() {
    // Lexical search by design: no string/comment filtering.
    let dir = TempDir::new().unwrap();
    write_file(&dir, "a.js", "msg = \"x marks the spot\"\n");

    let config = SearchConfig {
        glob_pattern: js_glob(&dir),
    };
    let occurrences = find_symbol_occurrences(&config, "x").unwrap();
    assert_eq!(occurrences.len(), 1);
}
