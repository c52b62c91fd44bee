//! The expression that ends at the cursor.
//!
//! Used by "eval last expression": trailing whitespace is skipped, then the
//! last complete token is taken. That is a parenthesized list, a string
//! literal, or an atom.

use crate::lexer::{BackwardLexer, CharClass};
use crate::token::backward_token_start;

/// Returns the expression immediately preceding the cursor.
///
/// Lists and strings include a leading reader prefix, so `'(1 2)` evaluates
/// as written. Returns `None` when the cursor follows an opener, sits inside
/// a string literal, or follows an unmatched `)`.
#[must_use]
pub fn preceding_expr(before: &str) -> Option<&str> {
    let bytes = before.as_bytes();
    let mut lexer = BackwardLexer::at_end_of(before);
    if lexer.in_string() {
        return None;
    }

    for ix in (0..bytes.len()).rev() {
        let class = lexer.classify(bytes, ix);
        if class == CharClass::Whitespace {
            continue;
        }
        let start = backward_token_start(bytes, ix, class, &mut lexer)?;
        return Some(&before[start..=ix]);
    }
    None
}
