//! Byte classification shared by the structural scanners.
//!
//! Lisp delimiters are all ASCII, so the scanners walk UTF-8 bytes directly.
//! Bytes of multi-byte characters always classify as [`CharClass::Atom`] or
//! [`CharClass::StringBody`].
//!
//! Escapes: a backslash escapes the byte after it, inside and outside string
//! literals. An escaped `"` does not toggle string state and an escaped paren
//! does not change depth, which keeps character literals such as `#\(` inert.

/// Lexical class of a single byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// `(` outside a string literal.
    Open,
    /// `)` outside a string literal.
    Close,
    /// A `"` that opens or closes a string literal.
    Quote,
    /// Whitespace outside a string literal.
    Whitespace,
    /// Any byte inside a string literal other than its delimiters.
    StringBody,
    /// Anything else: atom bytes, reader prefixes, escaped delimiters.
    Atom,
}

impl CharClass {
    /// Returns true for bytes that can be part of an atom token.
    #[must_use]
    pub fn is_atom(self) -> bool {
        self == CharClass::Atom
    }
}

/// Returns true for the whitespace bytes the scanners recognise.
#[must_use]
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// Returns true for reader-macro bytes that glue onto a following form.
#[must_use]
pub fn is_reader_prefix(byte: u8) -> bool {
    matches!(byte, b'\'' | b'`' | b',' | b'@' | b'#')
}

/// Returns true if the byte at `ix` is preceded by an odd run of backslashes.
#[must_use]
pub fn is_escaped(bytes: &[u8], ix: usize) -> bool {
    let run = bytes[..ix].iter().rev().take_while(|&&b| b == b'\\').count();
    run % 2 == 1
}

fn classify_live(byte: u8) -> CharClass {
    match byte {
        b'(' => CharClass::Open,
        b')' => CharClass::Close,
        b'"' => CharClass::Quote,
        b if is_whitespace(b) => CharClass::Whitespace,
        _ => CharClass::Atom,
    }
}

/// Left-to-right classifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForwardLexer {
    in_string: bool,
    escape_next: bool,
}

impl ForwardLexer {
    /// Creates a lexer positioned at the start of a buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a lexer positioned right after `text`.
    #[must_use]
    pub fn resume(text: &str) -> Self {
        let mut lexer = Self::new();
        for byte in text.bytes() {
            lexer.classify(byte);
        }
        lexer
    }

    /// Returns true while inside a string literal.
    #[must_use]
    pub fn in_string(&self) -> bool {
        self.in_string
    }

    /// Returns true if the next byte is escaped.
    #[must_use]
    pub fn escape_pending(&self) -> bool {
        self.escape_next
    }

    /// Classifies the next byte and advances.
    pub fn classify(&mut self, byte: u8) -> CharClass {
        let inert = if self.in_string {
            CharClass::StringBody
        } else {
            CharClass::Atom
        };
        if self.escape_next {
            self.escape_next = false;
            return inert;
        }
        if byte == b'\\' {
            self.escape_next = true;
            return inert;
        }
        if byte == b'"' {
            self.in_string = !self.in_string;
            return CharClass::Quote;
        }
        if self.in_string {
            return CharClass::StringBody;
        }
        classify_live(byte)
    }
}

/// Right-to-left classifier.
///
/// Walks backward from the end of a text the caller has already resumed a
/// [`ForwardLexer`] over, so the initial string state is known.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackwardLexer {
    in_string: bool,
    /// Index and escape state of the byte classified last.
    last: Option<(usize, bool)>,
}

impl BackwardLexer {
    /// Creates a lexer for scanning `text` from its end toward its start.
    #[must_use]
    pub fn at_end_of(text: &str) -> Self {
        Self {
            in_string: ForwardLexer::resume(text).in_string(),
            last: None,
        }
    }

    /// Returns true while inside a string literal.
    #[must_use]
    pub fn in_string(&self) -> bool {
        self.in_string
    }

    /// Classifies `bytes[ix]`. Calls must visit indices in decreasing order.
    ///
    /// Consecutive indices reuse the previous escape state, so a scan over a
    /// backslash run stays linear.
    pub fn classify(&mut self, bytes: &[u8], ix: usize) -> CharClass {
        let byte = bytes[ix];
        let escaped = match self.last {
            // A backslash at `ix` extends the run that ends before `ix + 1`.
            Some((next, next_escaped)) if byte == b'\\' && next == ix + 1 => !next_escaped,
            _ => is_escaped(bytes, ix),
        };
        self.last = Some((ix, escaped));
        if escaped {
            return if self.in_string {
                CharClass::StringBody
            } else {
                CharClass::Atom
            };
        }
        if byte == b'"' {
            self.in_string = !self.in_string;
            return CharClass::Quote;
        }
        if self.in_string {
            return CharClass::StringBody;
        }
        classify_live(byte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forward(text: &str) -> Vec<CharClass> {
        let mut lexer = ForwardLexer::new();
        text.bytes().map(|b| lexer.classify(b)).collect()
    }

    fn backward(text: &str) -> Vec<CharClass> {
        let bytes = text.as_bytes();
        let mut lexer = BackwardLexer::at_end_of(text);
        let mut classes: Vec<_> = (0..bytes.len())
            .rev()
            .map(|ix| lexer.classify(bytes, ix))
            .collect();
        classes.reverse();
        classes
    }

    #[test]
    fn parens_inside_strings_are_inert() {
        use CharClass::*;
        assert_eq!(
            forward(r#"("(")"#),
            vec![Open, Quote, StringBody, Quote, Close]
        );
    }

    #[test]
    fn escaped_quote_stays_in_string() {
        let text = r#""a\"b""#;
        let lexer = ForwardLexer::resume(text);
        assert!(!lexer.in_string());
        assert!(ForwardLexer::resume(r#""a\""#).in_string());
    }

    #[test]
    fn double_backslash_does_not_escape() {
        assert!(!ForwardLexer::resume(r#""a\\""#).in_string());
        assert!(!is_escaped(br#"\\""#, 2));
        assert!(is_escaped(br#"\""#, 1));
    }

    #[test]
    fn character_literal_paren_is_atom() {
        use CharClass::*;
        assert_eq!(forward(r"#\("), vec![Atom, Atom, Atom]);
    }

    #[test]
    fn directions_agree() {
        for text in [
            r#"(foo "bar (baz" qux)"#,
            r#"(a #\) b)"#,
            r#"(x "\\" y)"#,
            "(multi\n \"line\nstring\")",
        ] {
            assert_eq!(forward(text), backward(text), "{text}");
        }
    }

    #[test]
    fn long_backslash_runs_agree() {
        for len in [1, 2, 7, 8] {
            let text = format!("(a {} \"{}\")", "\\".repeat(len), "\\".repeat(len * 2));
            assert_eq!(forward(&text), backward(&text), "{text}");
        }
    }

    #[test]
    fn backward_scan_over_long_backslash_run() {
        let text = format!("(a {}", "\\".repeat(200_000));
        let classes = backward(&text);
        assert_eq!(classes.len(), text.len());
        assert!(classes[3..].iter().all(|class| *class == CharClass::Atom));
    }

    #[test]
    fn backward_starts_inside_open_string() {
        let lexer = BackwardLexer::at_end_of(r#"(foo "ab"#);
        assert!(lexer.in_string());
    }
}
