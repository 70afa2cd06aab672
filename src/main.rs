//! `credits` — render the attribution block for a project's third-party assets.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load the catalog ([`credits::load_catalog`]).
//! 3. Resolve licence references; a dangling one exits with code `1`.
//! 4. Render HTML, a terminal table, or JSON.

mod cli;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, ReportFormat};
use credits::report::terminal;
use credits::translate::{load_messages, IdentityTranslator};
use credits::{load_catalog, AttributionFormatter};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let path = cli
        .path
        .canonicalize()
        .unwrap_or_else(|_| cli.path.clone());

    let mut catalog = load_catalog(&path, cli.catalog.as_deref())?;
    if cli.raw {
        catalog.render.escape_markup = false;
    }

    if cli.check {
        return match catalog.validate() {
            Ok(()) => {
                if !cli.quiet {
                    eprintln!(
                        "  {} {} resources, {} licences",
                        "✓".green(),
                        catalog.resources.len(),
                        catalog.licences.len()
                    );
                }
                Ok(())
            }
            Err(err) => {
                eprintln!("  {} {}", "✗".red(), err);
                std::process::exit(1);
            }
        };
    }

    let formatter = match &cli.messages {
        Some(messages) => AttributionFormatter::new(&catalog, load_messages(messages)?),
        None => AttributionFormatter::new(&catalog, IdentityTranslator),
    };
    let formatter = match formatter {
        Ok(formatter) => formatter,
        Err(err) => {
            eprintln!("  {} {}", "✗".red(), err);
            std::process::exit(1);
        }
    };

    if !cli.quiet && cli.report != ReportFormat::Terminal {
        eprintln!(
            "  {} {} credited assets",
            "→".cyan(),
            formatter.attributions().len()
        );
    }

    match cli.report {
        ReportFormat::Html => {
            println!("{}", formatter.info());
        }
        ReportFormat::Terminal => {
            terminal::render(formatter.attributions(), formatter.translator(), cli.quiet);
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(formatter.attributions())?);
        }
    }

    Ok(())
}
