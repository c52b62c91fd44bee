//! Raw parenthesis tallies.
//!
//! These counts ignore string literals entirely. Scanners that need to know
//! whether a paren is live use [`crate::lexer`] instead.

/// Number of opening and closing parens in a text span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParenCount {
    /// Count of `(`.
    pub opened: usize,
    /// Count of `)`.
    pub closed: usize,
}

impl ParenCount {
    /// Returns `opened - closed`.
    #[must_use]
    pub fn surplus(self) -> i64 {
        self.opened as i64 - self.closed as i64
    }
}

/// Counts every `(` and `)` in `text`.
#[must_use]
pub fn count_parens(text: &str) -> ParenCount {
    text.bytes().fold(ParenCount::default(), |mut count, byte| {
        match byte {
            b'(' => count.opened += 1,
            b')' => count.closed += 1,
            _ => {}
        }
        count
    })
}

/// Returns true if `text` has as many `(` as `)`.
#[must_use]
pub fn is_balanced(text: &str) -> bool {
    let count = count_parens(text);
    count.opened == count.closed
}
