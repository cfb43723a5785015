//! Owner of the most recent analysis result.
//!
//! The presentation layer re-renders the last result when the grouping mode
//! changes, without re-running the analysis. That state lives in an explicit
//! holder passed to whoever needs it, not in a hidden global.

use super::AnalysisResult;

/// Holds the last [`AnalysisResult`] between analysis and rendering.
///
/// Lifecycle: created empty, filled by [`set`](Self::set), replaced by the
/// next analysis, or dropped via [`clear`](Self::clear).
#[derive(Debug, Default)]
pub struct ResultHolder {
    current: Option<AnalysisResult>,
}

impl ResultHolder {
    /// Create an empty holder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a result, replacing any previous one, and return a reference
    /// to the stored value.
    pub fn set(&mut self, result: AnalysisResult) -> &AnalysisResult {
        self.current.insert(result)
    }

    /// The held result, if any.
    pub fn get(&self) -> Option<&AnalysisResult> {
        self.current.as_ref()
    }

    /// Drop the held result.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Remove and return the held result.
    pub fn take(&mut self) -> Option<AnalysisResult> {
        self.current.take()
    }
}
