//! Cursor context: the buffer split at the cursor plus its coordinates.

use text_size::TextSize;

/// A location in a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextPosition {
    /// Absolute byte offset from the buffer start.
    pub pos: TextSize,
    /// 1-based line number.
    pub line: u32,
    /// 1-based character column.
    pub col: u32,
}

/// The text around a cursor, as supplied by the editor integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorContext<'a> {
    /// Text from the buffer start up to the cursor.
    pub before: &'a str,
    /// Text from the cursor to the buffer end.
    pub after: &'a str,
    /// Absolute byte offset of the cursor.
    pub pos: TextSize,
    /// 1-based line of the cursor.
    pub line: u32,
    /// 1-based character column of the cursor.
    pub col: u32,
}

impl<'a> CursorContext<'a> {
    /// Creates a context from pre-split text and caller-owned coordinates.
    #[must_use]
    pub fn new(before: &'a str, after: &'a str, pos: TextSize, line: u32, col: u32) -> Self {
        Self {
            before,
            after,
            pos,
            line,
            col,
        }
    }

    /// Splits `source` at `offset` and computes the cursor's line and column.
    ///
    /// Returns `None` if `offset` is past the end or not on a char boundary.
    #[must_use]
    pub fn at_offset(source: &'a str, offset: TextSize) -> Option<Self> {
        let split = usize::from(offset);
        if !source.is_char_boundary(split) {
            return None;
        }
        let (before, after) = source.split_at(split);
        let (line, col) = line_col(before, before.len());
        Some(Self::new(before, after, offset, line, col))
    }

    /// Returns the cursor coordinates.
    #[must_use]
    pub fn position(&self) -> TextPosition {
        TextPosition {
            pos: self.pos,
            line: self.line,
            col: self.col,
        }
    }
}

/// 1-based line and column of byte offset `ix` in `text`.
pub(crate) fn line_col(text: &str, ix: usize) -> (u32, u32) {
    let head = &text[..ix];
    let line = head.bytes().filter(|&b| b == b'\n').count() + 1;
    let line_start = head.rfind('\n').map_or(0, |nl| nl + 1);
    let col = head[line_start..].chars().count() + 1;
    (to_u32(line), to_u32(col))
}

pub(crate) fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
