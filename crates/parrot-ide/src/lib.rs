//! `parrot-ide` - Editor commands for the Parrot Lisp IDE.
//!
//! This crate turns the scanners in `parrot-syntax` into editor actions:
//!
//! - **Compile top-level form**: Builds the request sent to the backend
//! - **Eval last expression**: Picks the expression before the cursor
//! - **Find definition**: Resolves the symbol under the cursor
//! - **Slurp**: Produces the text edit that grows a form by one sibling
//! - **Config**: `parrot.toml` loading and backend config diagnostics
//! - **Debounce**: Deadline-based gating for autosave and hover lookups
//!
//! # Architecture
//!
//! Commands are pure functions over a [`Document`] and a cursor offset. They
//! return requests or edits for the host to dispatch and never talk to the
//! backend themselves.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod commands;
pub mod config;
pub mod debounce;
pub mod document;
pub mod edit;
pub mod error;
pub mod validation;

pub use commands::{
    compile_top_level_form, eval_last_expression, find_definition, slurp_backward,
    slurp_forward, CompileRequest, EvalRequest, SlurpEdit,
};
pub use config::{BackendSettings, EditorSettings, IdeConfig, TimingSettings};
pub use debounce::Debouncer;
pub use document::Document;
pub use edit::{apply_edits, TextEdit};
pub use error::CommandError;
pub use validation::{diagnose, ConfigDiagnostics, Validation};
