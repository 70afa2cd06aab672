use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "credits",
    about = "Render third-party asset attributions as an HTML credits panel",
    version
)]
pub struct Cli {
    /// Project path used to discover `.credits/catalog.toml`
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Catalog file [default: ./.credits/catalog.toml, fallback ~/.config/credits/catalog.toml]
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Translation table (flat TOML of source string to translation)
    #[arg(long, value_name = "FILE")]
    pub messages: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "html", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Interpolate fields into the markup without escaping
    #[arg(long)]
    pub raw: bool,

    /// Only check that every resource references a known licence
    #[arg(long)]
    pub check: bool,

    /// Suppress status lines on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
pub enum ReportFormat {
    Html,
    Terminal,
    Json,
}
