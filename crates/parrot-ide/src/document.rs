//! Editor buffers.

use std::path::{Path, PathBuf};

use parrot_syntax::CursorContext;
use text_size::TextSize;

use crate::config::IdeConfig;
use crate::error::CommandError;

/// A buffer open in the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Full buffer text.
    pub text: String,
    /// Backing file, `None` for the scratch buffer.
    pub path: Option<PathBuf>,
}

impl Document {
    /// Creates a document backed by `path`.
    pub fn new(text: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            text: text.into(),
            path: Some(path.into()),
        }
    }

    /// Creates an unsaved scratch document.
    pub fn scratch(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            path: None,
        }
    }

    /// Returns the backing file path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Name the backend uses for this buffer: its path, or the scratch name.
    #[must_use]
    pub fn buffer_name(&self, config: &IdeConfig) -> String {
        match &self.path {
            Some(path) => path.display().to_string(),
            None => config.editor.scratch_name.clone(),
        }
    }

    /// Splits the buffer at `offset`.
    pub fn cursor(&self, offset: TextSize) -> Result<CursorContext<'_>, CommandError> {
        CursorContext::at_offset(&self.text, offset).ok_or(CommandError::InvalidCursor {
            offset,
            len: self.text.len(),
        })
    }
}
