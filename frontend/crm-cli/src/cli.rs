use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "crm")]
#[command(about = "Customer records client")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// API base URL (overrides config.toml and CRM_API_BASE_URL)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,

    /// Log at debug level regardless of configuration
    #[arg(long, short, global = true)]
    pub(crate) verbose: bool,
}
