//! Slurp targets: the sibling a form should absorb.
//!
//! Forward slurp moves the token after the enclosing form's `)` inside it;
//! backward slurp moves the token before the enclosing form's `(` inside it.
//! The scanners only locate the token and the destination. Building the
//! text edit is up to the caller.
//!
//! The enclosing delimiter is the first one that closes a level around the
//! cursor. If nothing follows it, the scan moves outward to the next level,
//! so `(a (b|)) c` slurps `c` into the outer list. A cursor at top level that
//! touches a form (`(a b)| c` or `a |(b c)`) targets that form. Reader
//! prefixes belong to the form they precede, so `x '(a|)` slurps `x`.

use text_size::{TextRange, TextSize};

use crate::cursor::CursorContext;
use crate::lexer::{BackwardLexer, CharClass, ForwardLexer};
use crate::token::{backward_token_start, forward_token_end, with_prefix};

/// Outcome of the scan for an enclosing form.
enum Enclosing {
    /// The cursor is inside a form and the sibling was found.
    Found(SlurpTarget),
    /// The cursor is inside a form with nothing to absorb.
    Nothing,
    /// The cursor is not inside any form.
    TopLevel,
}

/// Which way a form grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlurpDirection {
    /// Absorb the next sibling after the closing paren.
    Forward,
    /// Absorb the previous sibling before the opening paren.
    Backward,
}

/// Where the absorbed token is and where it goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlurpTarget {
    /// Direction of the slurp.
    pub direction: SlurpDirection,
    /// Absolute range of the token to move.
    pub target: TextRange,
    /// Absolute insertion offset, just inside the enclosing delimiter.
    ///
    /// For a forward slurp this is the offset of the `)`; for a backward
    /// slurp it is the offset right after the `(`.
    pub dest: TextSize,
}

impl SlurpTarget {
    /// Start of the token to move.
    #[must_use]
    pub fn start(&self) -> TextSize {
        self.target.start()
    }

    /// End (exclusive) of the token to move.
    #[must_use]
    pub fn end(&self) -> TextSize {
        self.target.end()
    }
}

/// Finds the token a forward slurp would absorb.
#[must_use]
pub fn slurp_forward_target(ctx: &CursorContext<'_>) -> Option<SlurpTarget> {
    match enclosing_forward(ctx) {
        Enclosing::Found(target) => Some(target),
        Enclosing::Nothing => None,
        Enclosing::TopLevel => touching_forward(ctx),
    }
}

/// Finds the token a backward slurp would absorb.
#[must_use]
pub fn slurp_backward_target(ctx: &CursorContext<'_>) -> Option<SlurpTarget> {
    match enclosing_backward(ctx) {
        Enclosing::Found(target) => Some(target),
        Enclosing::Nothing => None,
        Enclosing::TopLevel => touching_backward(ctx),
    }
}

fn enclosing_forward(ctx: &CursorContext<'_>) -> Enclosing {
    let bytes = ctx.after.as_bytes();
    let mut lexer = ForwardLexer::resume(ctx.before);
    let mut depth = 0i64;
    let mut dest = None;

    for (ix, &byte) in bytes.iter().enumerate() {
        let class = lexer.classify(byte);
        match class {
            CharClass::Open => depth += 1,
            CharClass::Close => {
                depth -= 1;
                if depth < 0 {
                    dest = Some(ix);
                    continue;
                }
            }
            _ => {}
        }
        let Some(dest) = dest else {
            continue;
        };
        if class == CharClass::Whitespace {
            continue;
        }
        let target = forward_token_end(bytes, ix, class, &mut lexer).and_then(|end| {
            Some(SlurpTarget {
                direction: SlurpDirection::Forward,
                target: TextRange::new(after_cursor(ctx, ix)?, after_cursor(ctx, end)?),
                dest: after_cursor(ctx, dest)?,
            })
        });
        return target.map_or(Enclosing::Nothing, Enclosing::Found);
    }
    if dest.is_some() {
        Enclosing::Nothing
    } else {
        Enclosing::TopLevel
    }
}

fn touching_forward(ctx: &CursorContext<'_>) -> Option<SlurpTarget> {
    let before = ctx.before.as_bytes();
    let last = before.len().checked_sub(1)?;
    let mut back = BackwardLexer::at_end_of(ctx.before);
    if back.in_string() || back.classify(before, last) != CharClass::Close {
        return None;
    }

    let bytes = ctx.after.as_bytes();
    let mut lexer = ForwardLexer::resume(ctx.before);
    for (ix, &byte) in bytes.iter().enumerate() {
        match lexer.classify(byte) {
            CharClass::Whitespace => {}
            CharClass::Close | CharClass::StringBody => return None,
            class => {
                let end = forward_token_end(bytes, ix, class, &mut lexer)?;
                return Some(SlurpTarget {
                    direction: SlurpDirection::Forward,
                    target: TextRange::new(after_cursor(ctx, ix)?, after_cursor(ctx, end)?),
                    dest: ctx.pos.checked_sub(TextSize::from(1))?,
                });
            }
        }
    }
    None
}

fn enclosing_backward(ctx: &CursorContext<'_>) -> Enclosing {
    let bytes = ctx.before.as_bytes();
    let mut lexer = BackwardLexer::at_end_of(ctx.before);
    let mut depth = 0i64;
    let mut dest = None;

    let mut ix = bytes.len();
    while ix > 0 {
        ix -= 1;
        let class = lexer.classify(bytes, ix);
        match class {
            CharClass::Open => {
                depth += 1;
                if depth > 0 {
                    dest = Some(ix + 1);
                    ix = with_prefix(bytes, ix);
                    continue;
                }
            }
            CharClass::Close => depth -= 1,
            _ => {}
        }
        let Some(dest) = dest else {
            continue;
        };
        if class == CharClass::Whitespace {
            continue;
        }
        let target = backward_token_start(bytes, ix, class, &mut lexer).and_then(|start| {
            Some(SlurpTarget {
                direction: SlurpDirection::Backward,
                target: TextRange::new(before_cursor(ctx, start)?, before_cursor(ctx, ix + 1)?),
                dest: before_cursor(ctx, dest)?,
            })
        });
        return target.map_or(Enclosing::Nothing, Enclosing::Found);
    }
    if dest.is_some() {
        Enclosing::Nothing
    } else {
        Enclosing::TopLevel
    }
}

fn touching_backward(ctx: &CursorContext<'_>) -> Option<SlurpTarget> {
    let mut forward = ForwardLexer::resume(ctx.before);
    let first = *ctx.after.as_bytes().first()?;
    if forward.classify(first) != CharClass::Open {
        return None;
    }

    let bytes = ctx.before.as_bytes();
    let mut lexer = BackwardLexer::at_end_of(ctx.before);
    for ix in (0..bytes.len()).rev() {
        match lexer.classify(bytes, ix) {
            CharClass::Whitespace => {}
            CharClass::Open | CharClass::StringBody => return None,
            class => {
                let start = backward_token_start(bytes, ix, class, &mut lexer)?;
                return Some(SlurpTarget {
                    direction: SlurpDirection::Backward,
                    target: TextRange::new(
                        before_cursor(ctx, start)?,
                        before_cursor(ctx, ix + 1)?,
                    ),
                    dest: ctx.pos.checked_add(TextSize::from(1))?,
                });
            }
        }
    }
    None
}

/// Absolute offset of index `ix` into `ctx.after`.
fn after_cursor(ctx: &CursorContext<'_>, ix: usize) -> Option<TextSize> {
    ctx.pos.checked_add(TextSize::try_from(ix).ok()?)
}

/// Absolute offset of index `ix` into `ctx.before`.
fn before_cursor(ctx: &CursorContext<'_>, ix: usize) -> Option<TextSize> {
    let back = ctx.before.len().checked_sub(ix)?;
    ctx.pos.checked_sub(TextSize::try_from(back).ok()?)
}
