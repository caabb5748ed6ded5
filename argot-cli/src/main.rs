mod args;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::debug;

use argot_core::{Schema, parse};

use args::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug, cli.quiet);

    let schema = Schema::load(&cli.schema)
        .with_context(|| format!("failed to load vocabulary from {}", cli.schema.display()))?;
    debug!(
        "loaded vocabulary: {} options, {} flags",
        schema.options.len(),
        schema.flags.len()
    );

    let registry = schema
        .build()
        .context("vocabulary declares the same name twice")?;

    match parse(registry, &cli.tokens) {
        Ok(registry) => {
            debug!("parsed {} tokens", cli.tokens.len());

            let snapshot = registry.snapshot();
            if cli.raw {
                println!("{}", serde_json::to_string(&snapshot)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(debug: bool, quiet: bool) {
    // Filter based on debug/quiet flags
    let filter = if debug {
        "argot_cli=debug,argot_core=debug"
    } else if quiet {
        "argot_cli=error,argot_core=error"
    } else {
        "argot_cli=info,argot_core=info"
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
