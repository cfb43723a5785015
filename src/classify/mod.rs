//! Read/write classification of symbol occurrences.
//!
//! Pure lexical heuristics over a single line of source text. No tokenizer,
//! no parse tree, no type information: the decision looks only at the trimmed
//! text immediately before and after the symbol's column span.
//!
//! # Key Concepts
//! - **Read**: the occurrence consumes the symbol's value (the default).
//! - **Write**: the occurrence assigns a new value (`x = 5`, destructuring).
//! - **ReadWrite**: the occurrence does both (`x++`, `--x`, `x += 1`).
//!
//! Known limitation, accepted by design: operators inside string literals or
//! comments on the same line fool these heuristics, and occurrences split
//! across lines are not handled.

use crate::error::{RefscopeError, Result};
use serde::Serialize;

/// How an occurrence accesses the symbol's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AccessKind {
    /// Value is read.
    #[serde(rename = "read")]
    Read,
    /// Value is overwritten without being read.
    #[serde(rename = "write")]
    Write,
    /// Value is read and written in one operation.
    #[serde(rename = "readwrite")]
    ReadWrite,
}

impl AccessKind {
    /// Whether this access mutates the symbol (Write or ReadWrite).
    pub fn is_write(&self) -> bool {
        matches!(self, AccessKind::Write | AccessKind::ReadWrite)
    }

    /// Stable string identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessKind::Read => "read",
            AccessKind::Write => "write",
            AccessKind::ReadWrite => "readwrite",
        }
    }
}

/// Compound assignment operators, longest first so `>>>=` is not shadowed
/// by a shorter prefix match.
const COMPOUND_ASSIGN_OPS: [&str; 11] = [
    ">>>=", "<<=", ">>=", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=",
];

/// Classify one symbol occurrence within its line of source text.
///
/// `start..end` is the byte span of the symbol inside `line`. The span must
/// satisfy `0 <= start < end <= line.len()` and fall on UTF-8 char
/// boundaries; anything else is a caller contract violation reported as
/// [`RefscopeError::InvalidSpan`].
///
/// # Examples
///
/// ```
/// # use refscope::classify::{classify, AccessKind};
/// assert_eq!(classify("x = 5", 0, 1).unwrap(), AccessKind::Write);
/// assert_eq!(classify("x == 5", 0, 1).unwrap(), AccessKind::Read);
/// assert_eq!(classify("x += 1", 0, 1).unwrap(), AccessKind::ReadWrite);
/// ```
pub fn classify(line: &str, start: usize, end: usize) -> Result<AccessKind> {
    if start >= end
        || end > line.len()
        || !line.is_char_boundary(start)
        || !line.is_char_boundary(end)
    {
        return Err(RefscopeError::InvalidSpan {
            start,
            end,
            line_len: line.len(),
        });
    }

    let before = line[..start].trim();
    let after = line[end..].trim();

    // Read-write takes precedence over plain write, which takes precedence
    // over the read default.
    if is_read_write_access(before, after) {
        Ok(AccessKind::ReadWrite)
    } else if is_write_access(before, after) {
        Ok(AccessKind::Write)
    } else {
        Ok(AccessKind::Read)
    }
}

/// Increment/decrement or compound assignment adjacent to the symbol.
fn is_read_write_access(before: &str, after: &str) -> bool {
    // Prefix increment/decrement: `++x`, `--x`
    if before.ends_with("++") || before.ends_with("--") {
        return true;
    }

    // Postfix increment/decrement: `x++`, `x--`
    if after.starts_with("++") || after.starts_with("--") {
        return true;
    }

    // Compound assignment: `x += 1`, `x >>= 2`, ...
    COMPOUND_ASSIGN_OPS.iter().any(|op| after.starts_with(op))
}

/// Plain assignment target or destructuring-assignment target.
///
/// Shapes that deliberately stay READ (the default) even though they look
/// write-adjacent:
/// - call argument (`foo(x)`): output-parameter detection would need type
///   information outside this system's scope;
/// - property-write receiver (`x.prop = 1`): the write lands on `prop`, the
///   symbol itself is only read.
fn is_write_access(before: &str, after: &str) -> bool {
    // Plain assignment: `x = 5` but not `x == 5` / `x === 5`
    if after.starts_with('=') && !after.starts_with("==") && !after.starts_with("===") {
        return true;
    }

    // Destructuring target: `{ x } = obj`, `[x] = arr`
    if before.contains('=') && (before.contains('{') || before.contains('[')) {
        return true;
    }

    false
}
