//! Editor commands built on the structural scanners.
//!
//! Each command splits the document at the cursor, runs one scanner and turns
//! the result into something the host can dispatch: a backend request, a
//! symbol to look up, or a text edit.

use std::path::PathBuf;

use parrot_syntax::{
    preceding_expr, slurp_backward_target, slurp_forward_target, surrounding_top_level_expr,
    symbol_under_or_before_cursor, SlurpDirection, SlurpTarget, TextPosition,
};
use smol_str::SmolStr;
use text_size::{TextRange, TextSize};
use tracing::debug;

use crate::config::IdeConfig;
use crate::document::Document;
use crate::edit::TextEdit;
use crate::error::CommandError;

/// A top-level form to compile, with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileRequest {
    /// Source text of the form.
    pub form: String,
    /// Buffer the form was read from.
    pub buffer_name: String,
    /// Backing file, `None` for the scratch buffer.
    pub path: Option<PathBuf>,
    /// Where the form starts.
    pub position: TextPosition,
}

/// An expression to evaluate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalRequest {
    /// Source text of the expression.
    pub form: String,
}

/// A slurp target and the edit that performs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlurpEdit {
    /// Located token and destination.
    pub target: SlurpTarget,
    /// Single edit moving the token inside the form.
    pub edit: TextEdit,
}

/// Builds the compile request for the top-level form around the cursor.
pub fn compile_top_level_form(
    doc: &Document,
    offset: TextSize,
    config: &IdeConfig,
) -> Result<CompileRequest, CommandError> {
    let ctx = doc.cursor(offset)?;
    let expr = surrounding_top_level_expr(&ctx).ok_or(CommandError::NoTopLevelForm)?;
    debug!(
        line = expr.position.line,
        col = expr.position.col,
        "top-level form located"
    );
    Ok(CompileRequest {
        form: expr.text,
        buffer_name: doc.buffer_name(config),
        path: doc.path.clone(),
        position: expr.position,
    })
}

/// Builds the eval request for the expression ending before the cursor.
pub fn eval_last_expression(doc: &Document, offset: TextSize) -> Result<EvalRequest, CommandError> {
    let ctx = doc.cursor(offset)?;
    let form = preceding_expr(ctx.before).ok_or(CommandError::NoPrecedingExpr)?;
    debug!(len = form.len(), "preceding expression located");
    Ok(EvalRequest {
        form: form.to_string(),
    })
}

/// Returns the symbol whose definition should be looked up.
pub fn find_definition(doc: &Document, offset: TextSize) -> Result<SmolStr, CommandError> {
    let ctx = doc.cursor(offset)?;
    let symbol =
        symbol_under_or_before_cursor(ctx.before, ctx.after).ok_or(CommandError::NoSymbol)?;
    debug!(%symbol, "symbol under cursor");
    Ok(symbol)
}

/// Moves the sibling after the enclosing form inside it.
pub fn slurp_forward(doc: &Document, offset: TextSize) -> Result<SlurpEdit, CommandError> {
    let ctx = doc.cursor(offset)?;
    slurp(doc, slurp_forward_target(&ctx))
}

/// Moves the sibling before the enclosing form inside it.
pub fn slurp_backward(doc: &Document, offset: TextSize) -> Result<SlurpEdit, CommandError> {
    let ctx = doc.cursor(offset)?;
    slurp(doc, slurp_backward_target(&ctx))
}

fn slurp(doc: &Document, target: Option<SlurpTarget>) -> Result<SlurpEdit, CommandError> {
    let target = target.ok_or(CommandError::NothingToSlurp)?;
    let edit = slurp_edit(&doc.text, &target).ok_or(CommandError::NothingToSlurp)?;
    debug!(
        direction = ?target.direction,
        start = u32::from(target.start()),
        end = u32::from(target.end()),
        dest = u32::from(target.dest),
        "slurp target located"
    );
    Ok(SlurpEdit { target, edit })
}

/// The token moves next to the delimiter. Whitespace between them collapses
/// to one space, and a reader prefix stays on the opener.
fn slurp_edit(text: &str, target: &SlurpTarget) -> Option<TextEdit> {
    let token = slice(text, target.target)?;
    let edit = match target.direction {
        SlurpDirection::Forward => TextEdit::replace(
            TextRange::new(target.dest, target.end()),
            format!(" {token})"),
        ),
        SlurpDirection::Backward => {
            let range = TextRange::new(target.start(), target.dest);
            let opener = slice(text, TextRange::new(target.end(), target.dest))?.trim_start();
            TextEdit::replace(range, format!("{opener}{token} "))
        }
    };
    Some(edit)
}

fn slice(text: &str, range: TextRange) -> Option<&str> {
    text.get(usize::from(range.start())..usize::from(range.end()))
}
