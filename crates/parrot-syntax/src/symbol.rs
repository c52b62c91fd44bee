//! The symbol under or directly before the cursor.

use smol_str::SmolStr;

fn is_symbol_delimiter(byte: u8) -> bool {
    matches!(byte, b'"' | b'(' | b')' | b'#' | b' ' | b'\t' | b'\n' | b'\r')
}

fn stops_extension(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '"')
}

/// Returns the symbol token touching the cursor.
///
/// The backward part runs from the end of the trimmed `before` text to the
/// previous delimiter. It is extended into `after` only when the cursor sits
/// inside the token, i.e. neither side of the cursor is whitespace or `"`.
/// Returns `None` when nothing but whitespace precedes the cursor.
#[must_use]
pub fn symbol_under_or_before_cursor(before: &str, after: &str) -> Option<SmolStr> {
    let extend = !(before.ends_with(stops_extension)
        || after.is_empty()
        || after.starts_with(stops_extension));

    let head = before.trim();
    if head.is_empty() {
        return None;
    }
    let start = head
        .bytes()
        .rposition(is_symbol_delimiter)
        .map_or(0, |ix| ix + 1);
    let back = &head[start..];

    let forward = if extend {
        let end = after
            .bytes()
            .position(is_symbol_delimiter)
            .unwrap_or(after.len());
        &after[..end]
    } else {
        ""
    };

    if back.is_empty() && forward.is_empty() {
        return None;
    }
    let mut symbol = String::with_capacity(back.len() + forward.len());
    symbol.push_str(back);
    symbol.push_str(forward);
    Some(SmolStr::from(symbol))
}
