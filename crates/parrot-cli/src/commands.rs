//! Runs a parsed command and renders its JSON result.

use std::path::Path;

use anyhow::Context;
use parrot_ide::{
    apply_edits, compile_top_level_form, diagnose, eval_last_expression, find_definition,
    slurp_backward, slurp_forward, CommandError, Document, IdeConfig, SlurpEdit,
};
use serde_json::{json, Value};
use text_size::TextSize;
use tracing::info;

use crate::cli::{Cli, Command, CursorArgs};

/// Returns the JSON to print and whether the command succeeded.
pub fn run(cli: &Cli) -> anyhow::Result<(Value, bool)> {
    let config = load_config(cli.config.as_deref())?;
    let result = match &cli.command {
        Command::TopLevel(args) => {
            let doc = read_document(args)?;
            compile_top_level_form(&doc, offset(args), &config).map(|request| {
                json!({
                    "form": request.form,
                    "buffer_name": request.buffer_name,
                    "path": request.path.map(|path| path.display().to_string()),
                    "pos": u32::from(request.position.pos),
                    "line": request.position.line,
                    "col": request.position.col,
                })
            })
        }
        Command::Preceding(args) => {
            let doc = read_document(args)?;
            eval_last_expression(&doc, offset(args)).map(|request| json!({ "form": request.form }))
        }
        Command::Symbol(args) => {
            let doc = read_document(args)?;
            find_definition(&doc, offset(args)).map(|symbol| json!({ "symbol": symbol.as_str() }))
        }
        Command::SlurpForward { cursor, apply } => {
            let doc = read_document(cursor)?;
            slurp_forward(&doc, offset(cursor)).map(|slurp| render_slurp(&doc, &slurp, *apply))
        }
        Command::SlurpBackward { cursor, apply } => {
            let doc = read_document(cursor)?;
            slurp_backward(&doc, offset(cursor)).map(|slurp| render_slurp(&doc, &slurp, *apply))
        }
        Command::CheckConfig => Ok(serde_json::to_value(diagnose(&config.backend))?),
    };
    Ok(render_result(result))
}

fn render_result(result: Result<Value, CommandError>) -> (Value, bool) {
    match result {
        Ok(value) => (value, true),
        Err(err) => (json!({ "error": err.to_string() }), false),
    }
}

fn render_slurp(doc: &Document, slurp: &SlurpEdit, apply: bool) -> Value {
    if apply {
        return json!({ "text": apply_edits(&doc.text, std::slice::from_ref(&slurp.edit)) });
    }
    let start = usize::from(slurp.target.start());
    let end = usize::from(slurp.target.end());
    json!({
        "token": doc.text.get(start..end),
        "start": u32::from(slurp.target.start()),
        "end": u32::from(slurp.target.end()),
        "dest": u32::from(slurp.target.dest),
        "edit": {
            "start": u32::from(slurp.edit.range.start()),
            "end": u32::from(slurp.edit.range.end()),
            "new_text": slurp.edit.new_text,
        },
    })
}

fn load_config(path: Option<&Path>) -> anyhow::Result<IdeConfig> {
    match path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            let root = path.parent().unwrap_or_else(|| Path::new("."));
            info!("Using config {}", path.display());
            Ok(IdeConfig::from_contents(
                root,
                Some(path.to_path_buf()),
                &contents,
            ))
        }
        None => {
            let root = std::env::current_dir().context("failed to resolve current directory")?;
            Ok(IdeConfig::load(&root))
        }
    }
}

fn read_document(args: &CursorArgs) -> anyhow::Result<Document> {
    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    Ok(Document::new(text, args.file.clone()))
}

fn offset(args: &CursorArgs) -> TextSize {
    TextSize::from(args.offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use expect_test::expect;

    struct Fixture {
        dir: tempfile::TempDir,
    }

    impl Fixture {
        fn new(source: &str) -> Self {
            let dir = tempfile::tempdir().expect("tempdir");
            std::fs::write(dir.path().join("demo.lisp"), source).expect("write source");
            std::fs::write(
                dir.path().join("parrot.toml"),
                "[backend]\nslynk_socket = \"127.0.0.1:4005\"\n",
            )
            .expect("write config");
            Self { dir }
        }

        fn run(&self, args: &[&str]) -> (String, bool) {
            let file = self.dir.path().join("demo.lisp");
            let config = self.dir.path().join("parrot.toml");
            let mut argv = vec![
                "parrot-edit".to_string(),
                "--config".to_string(),
                config.display().to_string(),
            ];
            argv.extend(args.iter().map(|arg| arg.replace("FILE", &file.display().to_string())));
            let cli = Cli::try_parse_from(argv).expect("parse args");
            let (value, ok) = run(&cli).expect("run command");
            let mut value = value;
            for key in ["path", "buffer_name"] {
                if let Some(field) = value.get_mut(key) {
                    *field = json!("<demo>");
                }
            }
            (
                serde_json::to_string_pretty(&value).expect("render json"),
                ok,
            )
        }
    }

    #[test]
    fn top_level_command() {
        let fixture = Fixture::new("(a)\n(defun f (x)\n  (g x))\n");
        let (out, ok) = fixture.run(&["top-level", "--file", "FILE", "--offset", "20"]);
        assert!(ok);
        expect![[r#"
            {
              "buffer_name": "<demo>",
              "col": 1,
              "form": "(defun f (x)\n  (g x))",
              "line": 2,
              "path": "<demo>",
              "pos": 4
            }"#]]
        .assert_eq(&out);
    }

    #[test]
    fn slurp_forward_apply() {
        let fixture = Fixture::new("(foo bar) baz");
        let (out, ok) = fixture.run(&["slurp-forward", "--file", "FILE", "--offset", "8", "--apply"]);
        assert!(ok);
        expect![[r#"
            {
              "text": "(foo bar baz)"
            }"#]]
        .assert_eq(&out);
    }

    #[test]
    fn slurp_backward_edit() {
        let fixture = Fixture::new("foo (bar baz)");
        let (out, ok) = fixture.run(&["slurp-backward", "--file", "FILE", "--offset", "8"]);
        assert!(ok);
        expect![[r#"
            {
              "dest": 5,
              "edit": {
                "end": 5,
                "new_text": "(foo ",
                "start": 0
              },
              "end": 3,
              "start": 0,
              "token": "foo"
            }"#]]
        .assert_eq(&out);
    }

    #[test]
    fn command_failure_reports_error() {
        let fixture = Fixture::new("foo bar");
        let (out, ok) = fixture.run(&["preceding", "--file", "FILE", "--offset", "0"]);
        assert!(!ok);
        expect![[r#"
            {
              "error": "Found no expression to evaluate that precedes your cursor."
            }"#]]
        .assert_eq(&out);
    }

    #[test]
    fn symbol_command() {
        let fixture = Fixture::new("(format t \"hi\")");
        let (out, ok) = fixture.run(&["symbol", "--file", "FILE", "--offset", "3"]);
        assert!(ok);
        expect![[r#"
            {
              "symbol": "format"
            }"#]]
        .assert_eq(&out);
    }

    #[test]
    fn check_config_reports_missing_paths() {
        let fixture = Fixture::new("");
        let (out, ok) = fixture.run(&["check-config"]);
        assert!(ok);
        expect![[r#"
            {
              "ok": false,
              "path_to_core": "ValueMissing",
              "path_to_sbcl": "ValueMissing",
              "slynk_socket": {
                "Ok": "127.0.0.1:4005"
              }
            }"#]]
        .assert_eq(&out);
    }
}
