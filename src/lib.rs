//! Refscope: read/write classifier for symbol references.
//!
//! This library classifies symbol occurrences into read, write, or combined
//! read-write accesses using local lexical context only, then groups the
//! results by file and by category for navigable presentation.

#![warn(missing_docs)]
// env_logger is used by src/main.rs (binary), not this library
#![expect(unused_crate_dependencies)]

pub mod analyze;
pub mod classify;
pub mod cli;
pub mod error;
pub mod provider;
pub mod search;
pub mod tree;

/// Re-export common error types for convenience.
pub use error::{RefscopeError, Result};

/// Re-export the core classification entry points for convenience.
pub use classify::{classify, AccessKind};

/// Re-export the aggregation entry points for convenience.
pub use analyze::{analyze, AnalysisResult};

/// Refscope version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
