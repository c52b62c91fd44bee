//! Editor command errors.
//!
//! The `Display` text of each variant is the message shown to the user.

use text_size::TextSize;
use thiserror::Error;

/// Why an editor command produced nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The cursor is not inside a closed top-level form.
    #[error("Found no top-level form around your cursor.")]
    NoTopLevelForm,

    /// No complete expression ends at the cursor.
    #[error("Found no expression to evaluate that precedes your cursor.")]
    NoPrecedingExpr,

    /// No symbol touches the cursor.
    #[error("Could not find form under or before cursor.")]
    NoSymbol,

    /// No enclosing form with an adjacent sibling.
    #[error("Nothing to slurp.")]
    NothingToSlurp,

    /// The offset is past the end of the buffer or inside a character.
    #[error("cursor offset {} is not a valid cursor position (buffer length {len})", u32::from(*.offset))]
    InvalidCursor {
        /// Requested cursor offset.
        offset: TextSize,
        /// Buffer length in bytes.
        len: usize,
    },
}
