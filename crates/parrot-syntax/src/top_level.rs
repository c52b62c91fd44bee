//! Locating the top-level form that encloses the cursor.
//!
//! A top-level form is one whose `(` sits at depth zero relative to the
//! buffer start. Depth is tracked with the string-aware lexer, so parens in
//! string literals and character literals do not count.

use text_size::{TextRange, TextSize};

use crate::cursor::{line_col, to_u32, CursorContext, TextPosition};
use crate::lexer::{CharClass, ForwardLexer};

/// A top-level form and where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopLevelExpr {
    /// Location of the form's opening paren.
    pub position: TextPosition,
    /// Source text of the form, from its `(` to its matching `)`.
    pub text: String,
}

impl TopLevelExpr {
    /// Absolute byte range of the form.
    #[must_use]
    pub fn range(&self) -> TextRange {
        TextRange::at(self.position.pos, TextSize::of(self.text.as_str()))
    }
}

/// Returns the top-level form around the cursor.
///
/// Returns `None` if the cursor is not inside a form, if an earlier form is
/// left open, or if the enclosing form is never closed.
#[must_use]
pub fn surrounding_top_level_expr(ctx: &CursorContext<'_>) -> Option<TopLevelExpr> {
    let mut lexer = ForwardLexer::new();
    let mut depth = 0i64;
    let mut start = None;
    for (ix, byte) in ctx.before.bytes().enumerate() {
        match lexer.classify(byte) {
            CharClass::Open => {
                if depth == 0 {
                    start = Some(ix);
                }
                depth += 1;
            }
            CharClass::Close => depth -= 1,
            _ => {}
        }
    }
    let start = start?;
    if depth <= 0 {
        return None;
    }

    let end = ctx.after.bytes().enumerate().find_map(|(ix, byte)| {
        match lexer.classify(byte) {
            CharClass::Open => depth += 1,
            CharClass::Close => {
                depth -= 1;
                if depth == 0 {
                    return Some(ix + 1);
                }
            }
            _ => {}
        }
        None
    })?;

    let head = &ctx.before[start..];
    let lines_crossed = to_u32(head.bytes().filter(|&b| b == b'\n').count());
    let (_, col) = line_col(ctx.before, start);
    let position = TextPosition {
        pos: ctx.pos.checked_sub(TextSize::try_from(head.len()).ok()?)?,
        line: ctx.line.checked_sub(lines_crossed)?,
        col,
    };

    let mut text = String::with_capacity(head.len() + end);
    text.push_str(head);
    text.push_str(&ctx.after[..end]);
    Some(TopLevelExpr { position, text })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(source: &str, marker: &str) -> Option<TopLevelExpr> {
        let offset = source.find(marker).expect("marker");
        let ctx = CursorContext::at_offset(source, TextSize::from(offset as u32)).expect("ctx");
        surrounding_top_level_expr(&ctx)
    }

    #[test]
    fn form_spanning_lines() {
        let before = "(defun f ()\n  (+ 1 ";
        let after = "2))";
        let ctx = CursorContext::new(before, after, TextSize::from(25), 8, 7);
        let form = surrounding_top_level_expr(&ctx).expect("form");
        assert_eq!(form.text, "(defun f ()\n  (+ 1 2))");
        assert_eq!(form.position.line, 7);
        assert_eq!(form.position.col, 1);
        assert_eq!(form.position.pos, TextSize::from(6));
    }

    #[test]
    fn picks_the_form_after_earlier_forms() {
        let source = "(defvar *x* 1)\n\n  (defun g (y)\n    (* y *x*))\n";
        let form = at(source, "y *x*").expect("form");
        assert_eq!(form.text, "(defun g (y)\n    (* y *x*))");
        assert_eq!(form.position.line, 3);
        assert_eq!(form.position.col, 3);
        assert_eq!(usize::from(form.position.pos), source.find("(defun").unwrap());
        assert_eq!(form.range().len(), TextSize::of(form.text.as_str()));
    }

    #[test]
    fn cursor_outside_any_form() {
        let ctx = CursorContext::new(")", "", TextSize::from(1), 1, 2);
        assert_eq!(surrounding_top_level_expr(&ctx), None);
        assert_eq!(at("(a b) (c d)", " (c"), None);
        let ctx = CursorContext::new("", "(a)", TextSize::from(0), 1, 1);
        assert_eq!(surrounding_top_level_expr(&ctx), None);
    }

    #[test]
    fn unclosed_form_is_rejected() {
        assert_eq!(at("(defun f (x)\n  (print x)", "x)\n"), None);
    }

    #[test]
    fn string_parens_do_not_count() {
        let source = "(foo \"(not a form\" bar)";
        let form = at(source, "bar").expect("form");
        assert_eq!(form.text, source);

        let source = "(a \")\") (b \"(\" c)";
        let form = at(source, "c)").expect("form");
        assert_eq!(form.text, "(b \"(\" c)");
    }

    #[test]
    fn unterminated_string_literal() {
        assert_eq!(at("(a \"bc)", "c)"), None);
        assert_eq!(at("(a b \"c d)", "b "), None);
        assert_eq!(at("\"(a b)", "b)"), None);

        let form = at("(a b) \"open", "b)").expect("form");
        assert_eq!(form.text, "(a b)");
    }

    #[test]
    fn cursor_inside_string_literal() {
        let source = "(format t \"hello (world\")";
        let form = at(source, "world").expect("form");
        assert_eq!(form.text, source);
    }

    #[test]
    fn character_literals_do_not_count() {
        let source = r"(char= c #\() (x)";
        let form = at(source, "c #").expect("form");
        assert_eq!(form.text, r"(char= c #\()");
    }
}
