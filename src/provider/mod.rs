//! External collaborator seams and analysis orchestration.
//!
//! The core consumes two collaborators: something that finds the raw
//! occurrences of a symbol ([`OccurrenceProvider`]) and something that
//! retrieves the line of text around each occurrence ([`LineSource`]).
//! Both may fail; neither failure aborts an analysis run:
//! - a failing provider is recovered as "zero occurrences found";
//! - a single unreadable line is recovered with the READ fallback, and the
//!   occurrence is still included in every result set.

use crate::analyze::{analyze, AnalysisResult, Occurrence, SourcedOccurrence};
use crate::error::{RefscopeError, Result};
use ropey::Rope;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Finds the raw occurrences of a symbol (the "find references" facility).
pub trait OccurrenceProvider {
    /// All occurrences of `symbol`, in a stable provider-defined order.
    fn find_occurrences(&self, symbol: &str) -> Result<Vec<Occurrence>>;

    /// Provider name for logs and error payloads.
    fn name(&self) -> &str;
}

/// Retrieves the text of one source line for occurrence context.
pub trait LineSource {
    /// The text of `line` (1-based) in `file`, without the trailing newline.
    fn line_text(&self, file: &Path, line: usize) -> Result<String>;
}

/// Filesystem-backed [`LineSource`].
///
/// Each file is loaded once into a [`Rope`] and cached for the lifetime of
/// the source, so a file with many occurrences is read from disk only once.
#[derive(Debug, Default)]
pub struct FileLineSource {
    cache: RefCell<HashMap<PathBuf, Rope>>,
}

impl FileLineSource {
    /// Create an empty source; files are loaded lazily on first lookup.
    pub fn new() -> Self {
        Self::default()
    }

    fn load(&self, file: &Path) -> Result<()> {
        if self.cache.borrow().contains_key(file) {
            return Ok(());
        }
        let content = std::fs::read_to_string(file).map_err(|e| RefscopeError::Io {
            path: file.to_path_buf(),
            source: e,
        })?;
        self.cache
            .borrow_mut()
            .insert(file.to_path_buf(), Rope::from_str(&content));
        Ok(())
    }
}

impl LineSource for FileLineSource {
    fn line_text(&self, file: &Path, line: usize) -> Result<String> {
        if line == 0 {
            return Err(RefscopeError::LineUnavailable {
                file: file.to_path_buf(),
                line,
                reason: "line numbers are 1-based".to_string(),
            });
        }

        self.load(file).map_err(|e| RefscopeError::LineUnavailable {
            file: file.to_path_buf(),
            line,
            reason: e.to_string(),
        })?;

        let cache = self.cache.borrow();
        let rope = cache.get(file).expect("file loaded above");
        if line > rope.len_lines() {
            return Err(RefscopeError::LineUnavailable {
                file: file.to_path_buf(),
                line,
                reason: format!("file has only {} lines", rope.len_lines()),
            });
        }

        let mut text = rope.line(line - 1).to_string();
        while text.ends_with('\n') || text.ends_with('\r') {
            text.pop();
        }
        Ok(text)
    }
}

/// Pair every occurrence with its line text, applying the READ fallback.
///
/// A [`RefscopeError::LineUnavailable`] for one occurrence logs a warning
/// and yields `line_text: None`; the occurrence is never dropped.
pub fn gather_contexts(
    occurrences: Vec<Occurrence>,
    lines: &dyn LineSource,
) -> Vec<SourcedOccurrence> {
    occurrences
        .into_iter()
        .map(|occurrence| {
            let line_text = match lines.line_text(&occurrence.file, occurrence.line) {
                Ok(text) => Some(text),
                Err(e) => {
                    log::warn!("context unavailable, classifying as read: {}", e);
                    None
                }
            };
            SourcedOccurrence {
                occurrence,
                line_text,
            }
        })
        .collect()
}

/// Run a full analysis: find occurrences, gather contexts, classify, group.
///
/// Provider failure is recovered as zero occurrences (logged); the result is
/// then simply empty. Results are assembled in provider order regardless of
/// how contexts were gathered.
pub fn run_analysis(
    provider: &dyn OccurrenceProvider,
    lines: &dyn LineSource,
    symbol: &str,
) -> AnalysisResult {
    let occurrences = match provider.find_occurrences(symbol) {
        Ok(occurrences) => occurrences,
        Err(e) => {
            log::warn!(
                "provider '{}' failed, treating as zero occurrences: {}",
                provider.name(),
                e
            );
            Vec::new()
        }
    };

    log::debug!(
        "provider '{}' found {} occurrences of '{}'",
        provider.name(),
        occurrences.len(),
        symbol
    );

    let sourced = gather_contexts(occurrences, lines);
    analyze(symbol, &sourced)
}
