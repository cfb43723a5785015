//! Command-line interface for Refscope.
//!
//! This module handles argument parsing and output payload shapes only.
//! NO analysis logic is performed here.

use clap::Parser;
use serde::Serialize;
use serde_json::Value;

/// Refscope: read/write classifier for symbol references.
#[derive(Parser, Debug)]
#[command(name = "refscope")]
#[command(author, version, about, long_about = None)]
#[command(subcommand_required = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit machine-readable JSON instead of plain text.
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available Refscope commands.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Find a symbol's references and classify each as read, write or both.
    Analyze {
        /// Symbol name to search for.
        #[arg(short, long)]
        symbol: String,

        /// Glob pattern for files to search (e.g., "src/**/*.js").
        #[arg(short, long)]
        glob: String,

        /// Grouping mode for the output tree.
        #[arg(long, value_name = "MODE", default_value = "file")]
        group_by: GroupBy,
    },

    /// Classify a single occurrence given its line text and column span.
    Classify {
        /// The full line of source text.
        #[arg(short, long)]
        line: String,

        /// Start column of the symbol within the line (0-based).
        #[arg(long)]
        start: usize,

        /// End column of the symbol within the line (exclusive).
        #[arg(long)]
        end: usize,
    },
}

/// Output grouping mode.
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum GroupBy {
    /// Group by source file, categories beneath each file.
    File,
    /// Group by access category.
    Category,
}

impl GroupBy {
    /// Convert to the tree module's grouping mode.
    pub fn to_group_mode(self) -> crate::tree::GroupMode {
        match self {
            GroupBy::File => crate::tree::GroupMode::ByFile,
            GroupBy::Category => crate::tree::GroupMode::ByCategory,
        }
    }
}

/// Parse command-line arguments.
///
/// This function is the entry point for CLI argument parsing.
/// It returns the parsed Cli struct or exits on error.
pub fn parse_args() -> Cli {
    Cli::parse()
}

/// JSON success payload for CLI responses.
#[derive(Serialize)]
pub struct CliSuccessPayload {
    /// Status indicator ("ok").
    pub status: &'static str,
    /// Human-readable message.
    pub message: String,
    /// Optional structured data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl CliSuccessPayload {
    /// Construct a payload containing only the message.
    pub fn message_only(message: String) -> Self {
        Self {
            status: "ok",
            message,
            data: None,
        }
    }

    /// Construct a payload with structured data.
    pub fn with_data(message: String, data: Value) -> Self {
        Self {
            status: "ok",
            message,
            data: Some(data),
        }
    }
}

/// JSON error payload for CLI responses.
#[derive(Serialize)]
pub struct CliErrorPayload {
    /// Status indicator ("error").
    pub status: &'static str,
    /// Structured error details.
    pub error: ErrorDetails,
}

/// Details for a CLI error payload.
#[derive(Serialize)]
pub struct ErrorDetails {
    /// Error kind identifier (InvalidSpan, etc.).
    pub kind: &'static str,
    /// Human-readable message.
    pub message: String,
    /// Optional file context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Optional hint for remediation steps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl CliErrorPayload {
    /// Build payload from a RefscopeError instance.
    pub fn from_error(error: &crate::RefscopeError) -> Self {
        CliErrorPayload {
            status: "error",
            error: ErrorDetails {
                kind: error.kind(),
                message: error.to_string(),
                file: error
                    .file_path()
                    .map(|path| path.to_string_lossy().to_string()),
                hint: error.hint().map(|h| h.to_string()),
            },
        }
    }
}
