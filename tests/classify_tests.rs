//! Classifier behavior tests.
//!
//! Lexical read/write classification over a single line of source text.

use refscope::classify::{classify, AccessKind};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_assignment() {
        assert_eq!(classify("x = 5", 0, 1).unwrap(), AccessKind::Write);
    }

    #[test]
    fn test_assignment_with_declaration_keyword() {
        assert_eq!(classify("let x = 5", 4, 5).unwrap(), AccessKind::Write);
        assert_eq!(classify("const x = compute()", 6, 7).unwrap(), AccessKind::Write);
    }

    #[test]
    fn test_equality_comparison() {
        assert_eq!(classify("x == 5", 0, 1).unwrap(), AccessKind::Read);
        assert_eq!(classify("if (x === null) {", 4, 5).unwrap(), AccessKind::Read);
    }

    #[test]
    fn test_postfix_increment_decrement() {
        assert_eq!(classify("x++", 0, 1).unwrap(), AccessKind::ReadWrite);
        assert_eq!(classify("counter--", 0, 7).unwrap(), AccessKind::ReadWrite);
    }

    #[test]
    fn test_prefix_increment_decrement() {
        assert_eq!(classify("++x;", 2, 3).unwrap(), AccessKind::ReadWrite);
        assert_eq!(classify("--total", 2, 7).unwrap(), AccessKind::ReadWrite);
    }

    #[test]
    fn test_compound_assignment_operators() {
        let cases = [
            "x += 1", "x -= 1", "x *= 2", "x /= 2", "x %= 3", "x &= 1", "x |= 1", "x ^= 1",
            "x <<= 1", "x >>= 1", "x >>>= 1",
        ];
        for line in cases {
            assert_eq!(
                classify(line, 0, 1).unwrap(),
                AccessKind::ReadWrite,
                "line: {line}"
            );
        }
    }

    #[test]
    fn test_right_hand_side_of_assignment() {
        assert_eq!(classify("y = x", 4, 5).unwrap(), AccessKind::Read);
    }

    #[test]
    fn test_call_argument_is_read() {
        // Output-parameter detection would need type information; the
        // conservative answer is READ.
        assert_eq!(classify("foo(x)", 4, 5).unwrap(), AccessKind::Read);
        assert_eq!(classify("bar(a, x, b)", 7, 8).unwrap(), AccessKind::Read);
    }

    #[test]
    fn test_property_write_receiver_is_read() {
        // The write lands on the property, not on the symbol itself.
        assert_eq!(classify("x.prop = 1", 0, 1).unwrap(), AccessKind::Read);
        assert_eq!(classify("x . prop = 1", 0, 1).unwrap(), AccessKind::Read);
    }

    #[test]
    fn test_property_compound_on_receiver_is_read() {
        // `x.count += 1` reads `x`; the read-write applies to `count`.
        assert_eq!(classify("x.count += 1", 0, 1).unwrap(), AccessKind::Read);
    }

    #[test]
    fn test_destructuring_assignment_targets() {
        // Fires once an `=` and a bracket both appear before the symbol.
        assert_eq!(
            classify("{ a = 1, x } = obj", 9, 10).unwrap(),
            AccessKind::Write
        );
        assert_eq!(
            classify("[a = 1, x] = arr", 8, 9).unwrap(),
            AccessKind::Write
        );
        // Without an earlier `=` the heuristic stays conservative: READ.
        assert_eq!(classify("({ x } = obj)", 3, 4).unwrap(), AccessKind::Read);
    }

    #[test]
    fn test_bare_reference_is_read() {
        assert_eq!(classify("return x", 7, 8).unwrap(), AccessKind::Read);
        assert_eq!(classify("x", 0, 1).unwrap(), AccessKind::Read);
    }

    #[test]
    fn test_symbol_with_surrounding_whitespace() {
        assert_eq!(classify("   x   =   5", 3, 4).unwrap(), AccessKind::Write);
        assert_eq!(classify("\tx\t+=\t1", 1, 2).unwrap(), AccessKind::ReadWrite);
    }

    #[test]
    fn test_arrow_function_parameter_counts_as_write() {
        // `=>` starts with '=' and is not '==', so the adjacency heuristic
        // reports WRITE. Known limitation, pinned here so a change is loud.
        assert_eq!(classify("x => x + 1", 0, 1).unwrap(), AccessKind::Write);
    }

    #[test]
    fn test_invalid_spans_are_contract_violations() {
        assert!(classify("x = 5", 3, 2).is_err());
        assert!(classify("x = 5", 0, 0).is_err());
        assert!(classify("x", 0, 10).is_err());
        assert!(classify("x", 5, 6).is_err());
    }

    #[test]
    fn test_multibyte_line_with_valid_span() {
        // Symbol after a multibyte char; byte offsets on char boundaries.
        let line = "π = x";
        let start = line.find('x').unwrap();
        assert_eq!(classify(line, start, start + 1).unwrap(), AccessKind::Read);
    }
}
