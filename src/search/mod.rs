//! Built-in filesystem occurrence provider.
//!
//! This module supplies the "find references" facility for standalone use:
//! glob patterns for file discovery and identifier-aware text search for
//! occurrence location. It is deliberately lexical - matches inside string
//! literals and comments are reported, same as the classifier's own stated
//! limitation.

use crate::analyze::Occurrence;
use crate::error::{RefscopeError, Result};
use crate::provider::OccurrenceProvider;
use glob::glob;
use ropey::Rope;
use std::path::Path;

/// Configuration for a filesystem symbol search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Glob pattern for matching files (e.g., `src/**/*.js`).
    pub glob_pattern: String,
}

/// Find all word-boundary occurrences of `symbol` in files matching the glob.
///
/// Files are visited in glob order; occurrences within a file are in
/// ascending position order. Directories are skipped. Files that are not
/// valid UTF-8 are skipped with a logged warning rather than failing the
/// whole search.
pub fn find_symbol_occurrences(config: &SearchConfig, symbol: &str) -> Result<Vec<Occurrence>> {
    if symbol.is_empty() {
        return Err(RefscopeError::Other("symbol must not be empty".to_string()));
    }

    let glob_paths = glob(&config.glob_pattern).map_err(|e| RefscopeError::ProviderUnavailable {
        provider: "glob-search".to_string(),
        reason: format!("invalid glob pattern: {}", e),
    })?;

    let mut occurrences = Vec::new();

    for entry in glob_paths {
        let path = entry.map_err(|e| RefscopeError::ProviderUnavailable {
            provider: "glob-search".to_string(),
            reason: format!("glob iteration error: {}", e),
        })?;

        // Skip directories
        if path.is_dir() {
            continue;
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("skipping unreadable file {}: {}", path.display(), e);
                continue;
            }
        };

        occurrences.extend(find_in_content(&path, &content, symbol));
    }

    Ok(occurrences)
}

/// Find word-boundary occurrences of `symbol` within one file's content.
fn find_in_content(path: &Path, content: &str, symbol: &str) -> Vec<Occurrence> {
    let rope = Rope::from_str(content);
    let mut occurrences = Vec::new();

    let mut start_idx = 0;
    while let Some(idx) = content[start_idx..].find(symbol) {
        let abs_start = start_idx + idx;
        let abs_end = abs_start + symbol.len();

        if is_word_boundary(content, abs_start, abs_end) {
            let line_idx = rope.byte_to_line(abs_start);
            let line_start_byte = rope.line_to_byte(line_idx);

            occurrences.push(Occurrence {
                file: path.to_path_buf(),
                line: line_idx + 1,
                col_start: abs_start - line_start_byte,
                col_end: abs_end - line_start_byte,
            });
        }

        start_idx = abs_end;
    }

    occurrences
}

/// Whether `start..end` is delimited by non-identifier characters.
///
/// Rejects substring hits inside longer identifiers (`x` in `max` or `x2`).
fn is_word_boundary(content: &str, start: usize, end: usize) -> bool {
    let before_ok = content[..start]
        .chars()
        .next_back()
        .map_or(true, |c| !c.is_alphanumeric() && c != '_');
    let after_ok = content[end..]
        .chars()
        .next()
        .map_or(true, |c| !c.is_alphanumeric() && c != '_');
    before_ok && after_ok
}

/// [`OccurrenceProvider`] over a [`SearchConfig`].
#[derive(Debug, Clone)]
pub struct GlobSearchProvider {
    config: SearchConfig,
}

impl GlobSearchProvider {
    /// Create a provider searching files matched by `glob_pattern`.
    pub fn new(glob_pattern: String) -> Self {
        GlobSearchProvider {
            config: SearchConfig { glob_pattern },
        }
    }
}

impl OccurrenceProvider for GlobSearchProvider {
    fn find_occurrences(&self, symbol: &str) -> Result<Vec<Occurrence>> {
        find_symbol_occurrences(&self.config, symbol)
    }

    fn name(&self) -> &str {
        "glob-search"
    }
}
