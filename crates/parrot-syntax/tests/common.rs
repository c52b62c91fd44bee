//! Shared helpers for scanner tests.
#![allow(dead_code)]

use parrot_syntax::CursorContext;
use text_size::TextSize;

/// Strips the `|` cursor marker from `source`, returning the text and offset.
pub fn split_marker(source: &str) -> (String, TextSize) {
    let cursor = source.find('|').expect("cursor marker");
    let text = source.replacen('|', "", 1);
    (text, TextSize::from(cursor as u32))
}

/// Builds a cursor context over `text` at `offset`.
pub fn context(text: &str, offset: TextSize) -> CursorContext<'_> {
    CursorContext::at_offset(text, offset).expect("cursor inside buffer")
}
