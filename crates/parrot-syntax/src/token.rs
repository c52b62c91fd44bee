//! Token extents: a string literal, a (prefixed) list, or an atom.
//!
//! Both helpers receive the byte that begins the token (from the scan
//! direction's point of view) already classified, and keep driving the same
//! lexer so string and escape state stay continuous.

use crate::lexer::{is_escaped, is_reader_prefix, BackwardLexer, CharClass, ForwardLexer};

/// Exclusive end of the token whose first byte is `bytes[ix]`.
///
/// Returns `None` for a list or string that is still open at end of input.
pub(crate) fn forward_token_end(
    bytes: &[u8],
    ix: usize,
    class: CharClass,
    lexer: &mut ForwardLexer,
) -> Option<usize> {
    let mut at = ix;
    let mut class = class;
    while class.is_atom() && is_reader_prefix(bytes[at]) {
        at += 1;
        if at == bytes.len() {
            return Some(at);
        }
        class = lexer.classify(bytes[at]);
    }

    match class {
        CharClass::Open => {
            let mut depth = 1usize;
            for (offset, &byte) in bytes[at + 1..].iter().enumerate() {
                match lexer.classify(byte) {
                    CharClass::Open => depth += 1,
                    CharClass::Close => {
                        depth -= 1;
                        if depth == 0 {
                            return Some(at + 1 + offset + 1);
                        }
                    }
                    _ => {}
                }
            }
            None
        }
        CharClass::Quote => bytes[at + 1..]
            .iter()
            .position(|&byte| lexer.classify(byte) == CharClass::Quote)
            .map(|offset| at + 1 + offset + 1),
        CharClass::Atom => {
            let run = bytes[at + 1..]
                .iter()
                .position(|&byte| !lexer.classify(byte).is_atom())
                .unwrap_or(bytes.len() - at - 1);
            Some(at + 1 + run)
        }
        // A bare prefix such as `'` followed by a delimiter.
        CharClass::Whitespace | CharClass::Close if at > ix => Some(at),
        _ => None,
    }
}

/// Start of the token whose last byte is `bytes[ix]`.
///
/// Lists and string literals absorb the reader prefixes directly before them.
pub(crate) fn backward_token_start(
    bytes: &[u8],
    ix: usize,
    class: CharClass,
    lexer: &mut BackwardLexer,
) -> Option<usize> {
    match class {
        CharClass::Close => {
            let mut depth = 1usize;
            for at in (0..ix).rev() {
                match lexer.classify(bytes, at) {
                    CharClass::Close => depth += 1,
                    CharClass::Open => {
                        depth -= 1;
                        if depth == 0 {
                            return Some(with_prefix(bytes, at));
                        }
                    }
                    _ => {}
                }
            }
            None
        }
        CharClass::Quote => (0..ix)
            .rev()
            .find(|&at| lexer.classify(bytes, at) == CharClass::Quote)
            .map(|at| with_prefix(bytes, at)),
        CharClass::Atom => {
            let mut start = ix;
            while start > 0 && lexer.classify(bytes, start - 1).is_atom() {
                start -= 1;
            }
            Some(start)
        }
        _ => None,
    }
}

pub(crate) fn with_prefix(bytes: &[u8], start: usize) -> usize {
    let mut start = start;
    while start > 0 && is_reader_prefix(bytes[start - 1]) && !is_escaped(bytes, start - 1) {
        start -= 1;
    }
    start
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forward(text: &str) -> Option<&str> {
        let bytes = text.as_bytes();
        let mut lexer = ForwardLexer::new();
        let class = lexer.classify(bytes[0]);
        forward_token_end(bytes, 0, class, &mut lexer).map(|end| &text[..end])
    }

    fn backward(text: &str) -> Option<&str> {
        let bytes = text.as_bytes();
        let last = bytes.len() - 1;
        let mut lexer = BackwardLexer::at_end_of(text);
        let class = lexer.classify(bytes, last);
        backward_token_start(bytes, last, class, &mut lexer).map(|start| &text[start..])
    }

    #[test]
    fn forward_extents() {
        assert_eq!(forward("baz qux"), Some("baz"));
        assert_eq!(forward("baz)"), Some("baz"));
        assert_eq!(forward("baz"), Some("baz"));
        assert_eq!(forward(r#""a b" c"#), Some(r#""a b""#));
        assert_eq!(forward(r#""a \" b" c"#), Some(r#""a \" b""#));
        assert_eq!(forward("'(1 (2) 3) x"), Some("'(1 (2) 3)"));
        assert_eq!(forward("#'foo bar"), Some("#'foo"));
        assert_eq!(forward(r"#\) x"), Some(r"#\)"));
        assert_eq!(forward("(a \")\" b) c"), Some("(a \")\" b)"));
        assert_eq!(forward("\"multi\nline\" x"), Some("\"multi\nline\""));
        assert_eq!(forward("' x"), Some("'"));
    }

    #[test]
    fn forward_unterminated() {
        assert_eq!(forward("(a b"), None);
        assert_eq!(forward("\"open"), None);
    }

    #[test]
    fn backward_extents() {
        assert_eq!(backward("x foo"), Some("foo"));
        assert_eq!(backward("(foo"), Some("foo"));
        assert_eq!(backward("x '(1 (2))"), Some("'(1 (2))"));
        assert_eq!(backward(r#"x "a ( b""#), Some(r#""a ( b""#));
        assert_eq!(backward(r"x #\("), Some(r"#\("));
    }

    #[test]
    fn backward_unterminated() {
        assert_eq!(backward("a b)"), None);
    }
}
