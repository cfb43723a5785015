//! Occurrence aggregation: classify every occurrence and group the results.
//!
//! The aggregator is a single deterministic pass over the input list. It
//! builds two groupings of the same classified references:
//! - by category (reads / writes / read-writes), and
//! - by owning file, each file further partitioned by category.
//!
//! # Invariants
//! - Every classified reference lands in exactly one category sequence.
//! - Relative order within each sequence matches the input occurrence order.
//! - The union of all per-file groups equals the top-level category group.
//! - File entries appear in first-appearance order of the input list.

pub mod holder;

use crate::classify::{classify, AccessKind};
use serde::Serialize;
use std::path::{Path, PathBuf};

pub use holder::ResultHolder;

/// An identified position of the symbol in a source file.
///
/// Immutable once discovered; lives for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    /// Owning file path.
    pub file: PathBuf,
    /// Line number (1-based).
    pub line: usize,
    /// Start column of the symbol within the line (0-based, in bytes).
    pub col_start: usize,
    /// End column of the symbol within the line (exclusive).
    pub col_end: usize,
}

/// An occurrence paired with the text of its containing line.
///
/// `line_text` is `None` when the line could not be retrieved; such
/// occurrences fall back to READ classification but are never dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcedOccurrence {
    /// The raw occurrence location.
    pub occurrence: Occurrence,
    /// Full text of the containing line, if it could be read.
    pub line_text: Option<String>,
}

/// An occurrence annotated with its classification.
///
/// Derived solely from the occurrence; never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedReference {
    /// The underlying occurrence location.
    pub occurrence: Occurrence,
    /// Full text of the containing line (empty if it was unavailable).
    pub context: String,
    /// Whether this occurrence mutates the symbol.
    pub is_write: bool,
    /// Classification category.
    pub kind: AccessKind,
}

/// Three ordered sequences partitioning a set of classified references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    /// References that read the symbol.
    pub reads: Vec<ClassifiedReference>,
    /// References that write the symbol.
    pub writes: Vec<ClassifiedReference>,
    /// References that read and write in one operation.
    pub read_writes: Vec<ClassifiedReference>,
}

impl CategoryGroup {
    /// Append a reference to the sequence matching its category.
    pub fn push(&mut self, reference: ClassifiedReference) {
        match reference.kind {
            AccessKind::Read => self.reads.push(reference),
            AccessKind::Write => self.writes.push(reference),
            AccessKind::ReadWrite => self.read_writes.push(reference),
        }
    }

    /// Total number of references across all three sequences.
    pub fn len(&self) -> usize {
        self.reads.len() + self.writes.len() + self.read_writes.len()
    }

    /// Whether all three sequences are empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The sequence for one category.
    pub fn category(&self, kind: AccessKind) -> &[ClassifiedReference] {
        match kind {
            AccessKind::Read => &self.reads,
            AccessKind::Write => &self.writes,
            AccessKind::ReadWrite => &self.read_writes,
        }
    }
}

/// One file's classified references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileGroupEntry {
    /// The owning file path.
    pub file: PathBuf,
    /// That file's references, partitioned by category.
    pub groups: CategoryGroup,
}

/// Per-file partition of the classified references.
///
/// Entries are kept in first-appearance order of the input occurrence list,
/// which is why this is an ordered list rather than a hash map. Only files
/// with at least one occurrence get an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FileGroup {
    entries: Vec<FileGroupEntry>,
}

impl FileGroup {
    /// Append a reference to its file's entry, creating the entry on first
    /// appearance of the file.
    pub fn push(&mut self, reference: ClassifiedReference) {
        let file = &reference.occurrence.file;
        match self.entries.iter_mut().find(|e| &e.file == file) {
            Some(entry) => entry.groups.push(reference),
            None => {
                let file = file.clone();
                let mut groups = CategoryGroup::default();
                groups.push(reference);
                self.entries.push(FileGroupEntry { file, groups });
            }
        }
    }

    /// The category group for one file, if it has occurrences.
    pub fn get(&self, file: &Path) -> Option<&CategoryGroup> {
        self.entries
            .iter()
            .find(|e| e.file == file)
            .map(|e| &e.groups)
    }

    /// Iterate entries in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = &FileGroupEntry> {
        self.entries.iter()
    }

    /// Number of files with at least one occurrence.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no file has an occurrence.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Complete result of one analysis run.
///
/// Created once per request, read-only afterward. Held by the presentation
/// layer (see [`ResultHolder`]) until replaced or cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    /// The symbol that was analyzed.
    pub symbol: String,
    /// Total number of occurrences, across all categories and files.
    pub total_references: usize,
    /// Top-level partition by category.
    pub grouped_by_type: CategoryGroup,
    /// Per-file partition.
    pub grouped_by_file: FileGroup,
}

impl AnalysisResult {
    /// An empty result for `symbol` (zero occurrences).
    pub fn empty(symbol: &str) -> Self {
        AnalysisResult {
            symbol: symbol.to_string(),
            total_references: 0,
            grouped_by_type: CategoryGroup::default(),
            grouped_by_file: FileGroup::default(),
        }
    }
}

/// Classify every occurrence and build both groupings in one pass.
///
/// Empty input yields an empty result, not an error. An occurrence whose
/// line text is unavailable, or whose span does not fit its line (a
/// hand-built occurrence gone stale), is classified READ and kept - one bad
/// element never aborts the batch. Callers that want the hard span error
/// should use [`classify`] directly.
pub fn analyze(symbol: &str, occurrences: &[SourcedOccurrence]) -> AnalysisResult {
    let mut grouped_by_type = CategoryGroup::default();
    let mut grouped_by_file = FileGroup::default();

    for sourced in occurrences {
        let reference = classify_occurrence(sourced);
        grouped_by_type.push(reference.clone());
        grouped_by_file.push(reference);
    }

    AnalysisResult {
        symbol: symbol.to_string(),
        total_references: occurrences.len(),
        grouped_by_type,
        grouped_by_file,
    }
}

/// Build one classified reference, applying the conservative READ fallback.
fn classify_occurrence(sourced: &SourcedOccurrence) -> ClassifiedReference {
    let occurrence = sourced.occurrence.clone();

    let (context, kind) = match &sourced.line_text {
        Some(line) => {
            let kind = match classify(line, occurrence.col_start, occurrence.col_end) {
                Ok(kind) => kind,
                Err(e) => {
                    log::warn!(
                        "falling back to read classification for {}:{}: {}",
                        occurrence.file.display(),
                        occurrence.line,
                        e
                    );
                    AccessKind::Read
                }
            };
            (line.clone(), kind)
        }
        None => (String::new(), AccessKind::Read),
    };

    ClassifiedReference {
        occurrence,
        context,
        is_write: kind.is_write(),
        kind,
    }
}
