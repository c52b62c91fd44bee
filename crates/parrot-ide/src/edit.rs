//! Text edits and applying them to a buffer.

use text_size::TextRange;

/// A text edit representing a change to the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    /// The range to replace.
    pub range: TextRange,
    /// The new text.
    pub new_text: String,
}

impl TextEdit {
    /// Creates an edit replacing `range` with `new_text`.
    pub fn replace(range: TextRange, new_text: impl Into<String>) -> Self {
        Self {
            range,
            new_text: new_text.into(),
        }
    }
}

/// Applies non-overlapping edits, all expressed in `source` coordinates.
///
/// Edits are applied from the back so earlier offsets stay valid. Edits that
/// fall outside `source` or split a character are skipped.
#[must_use]
pub fn apply_edits(source: &str, edits: &[TextEdit]) -> String {
    let mut sorted: Vec<&TextEdit> = edits.iter().collect();
    sorted.sort_by(|a, b| {
        b.range
            .start()
            .cmp(&a.range.start())
            .then(b.range.end().cmp(&a.range.end()))
    });

    let mut updated = source.to_string();
    for edit in sorted {
        let start = usize::from(edit.range.start());
        let end = usize::from(edit.range.end());
        if end > updated.len() || !updated.is_char_boundary(start) || !updated.is_char_boundary(end)
        {
            continue;
        }
        updated.replace_range(start..end, &edit.new_text);
    }
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use text_size::TextSize;

    fn range(start: u32, end: u32) -> TextRange {
        TextRange::new(TextSize::from(start), TextSize::from(end))
    }

    #[test]
    fn applies_back_to_front() {
        let edits = [
            TextEdit::replace(range(0, 1), "["),
            TextEdit::replace(range(4, 5), "]"),
        ];
        assert_eq!(apply_edits("(foo)", &edits), "[foo]");
    }

    #[test]
    fn insertions_and_deletions() {
        let edits = [
            TextEdit::replace(range(4, 4), " baz"),
            TextEdit::replace(range(5, 9), ""),
        ];
        assert_eq!(apply_edits("(bar) baz", &edits), "(bar baz)");
    }

    #[test]
    fn skips_invalid_ranges() {
        let edits = [
            TextEdit::replace(range(2, 40), "x"),
            TextEdit::replace(range(1, 2), "y"),
        ];
        assert_eq!(apply_edits("aé", &edits), "aé");
    }
}
