//! CLI entrypoint for parrot-edit.

mod cli;
mod commands;

use clap::Parser;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let (output, success) = commands::run(&cli)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    if !success {
        std::process::exit(1);
    }
    Ok(())
}
