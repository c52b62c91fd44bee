//! Shared helpers for editor command tests.
#![allow(dead_code)]

use parrot_ide::Document;
use text_size::TextSize;

/// Builds a scratch document from `source`, returning it with the offset of
/// the `|` cursor marker.
pub fn document(source: &str) -> (Document, TextSize) {
    let cursor = source.find('|').expect("cursor marker");
    let text = source.replacen('|', "", 1);
    (Document::scratch(text), TextSize::from(cursor as u32))
}

/// Renders a paren-balanced buffer from arbitrary bytes.
pub fn forms(shape: &[u8]) -> String {
    let mut out = String::new();
    let mut depth = 0usize;
    for &b in shape {
        match b % 6 {
            0 => {
                out.push('(');
                depth += 1;
            }
            1 if depth > 0 => {
                out.push(')');
                depth -= 1;
            }
            2 => out.push_str("x"),
            3 => out.push_str("\"s)\""),
            4 => out.push_str("'y"),
            _ => out.push(' '),
        }
    }
    out.push_str(&")".repeat(depth));
    out
}
