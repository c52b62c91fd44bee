//! CLI definitions for parrot-edit.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "parrot-edit",
    version,
    about = "Structural editing commands for Lisp source",
    after_help = "Examples:\n  parrot-edit top-level --file demo.lisp --offset 42\n  parrot-edit slurp-forward --file demo.lisp --offset 17 --apply\n  parrot-edit check-config"
)]
pub struct Cli {
    /// Configuration file (defaults to parrot.toml in the current directory).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the top-level form around the cursor.
    TopLevel(CursorArgs),
    /// Print the expression ending at the cursor.
    Preceding(CursorArgs),
    /// Print the symbol under or before the cursor.
    Symbol(CursorArgs),
    /// Pull the next sibling into the enclosing form.
    SlurpForward {
        #[command(flatten)]
        cursor: CursorArgs,
        /// Print the edited buffer instead of the edit.
        #[arg(long)]
        apply: bool,
    },
    /// Pull the previous sibling into the enclosing form.
    SlurpBackward {
        #[command(flatten)]
        cursor: CursorArgs,
        /// Print the edited buffer instead of the edit.
        #[arg(long)]
        apply: bool,
    },
    /// Check the backend settings.
    CheckConfig,
}

#[derive(Debug, Clone, Args)]
pub struct CursorArgs {
    /// Source file to read.
    #[arg(long)]
    pub file: PathBuf,
    /// Cursor byte offset into the file.
    #[arg(long)]
    pub offset: u32,
}
