//! `parrot-syntax` - Structural scanners over raw Lisp source text.
//!
//! This crate provides the text analysis behind the editor's code-aware
//! commands. Every scanner works on the text split at the cursor:
//!
//! - **Balance**: Raw `(`/`)` tallies
//! - **Preceding expression**: The expression that ends at the cursor
//! - **Symbol**: The symbol under or just before the cursor
//! - **Top-level form**: The outermost form enclosing the cursor
//! - **Slurp**: The sibling a form should absorb, forward or backward
//!
//! # Design Principles
//!
//! - **Linear**: Each scanner is a single pass over the input, no AST and no
//!   backtracking
//! - **String-aware**: Parens inside string literals never change depth
//! - **Total**: Malformed input yields `None`, never a panic or an error
//!
//! # Example
//!
//! ```
//! use parrot_syntax::{surrounding_top_level_expr, CursorContext};
//!
//! let source = "(defun f ()\n  (+ 1 2))";
//! let offset = source.find('2').unwrap();
//! let ctx = CursorContext::at_offset(source, (offset as u32).into()).unwrap();
//!
//! let form = surrounding_top_level_expr(&ctx).unwrap();
//! assert_eq!(form.text, source);
//! assert_eq!(form.position.line, 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod balance;
pub mod cursor;
pub mod lexer;
pub mod preceding_expr;
pub mod slurp;
pub mod symbol;
mod token;
pub mod top_level;

pub use balance::{count_parens, is_balanced, ParenCount};
pub use cursor::{CursorContext, TextPosition};
pub use lexer::{BackwardLexer, CharClass, ForwardLexer};
pub use preceding_expr::preceding_expr;
pub use slurp::{slurp_backward_target, slurp_forward_target, SlurpDirection, SlurpTarget};
pub use symbol::symbol_under_or_before_cursor;
pub use top_level::{surrounding_top_level_expr, TopLevelExpr};
