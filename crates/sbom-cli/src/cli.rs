use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use sbom_secrets::config::DEFAULT_SECRET_PATH;

#[derive(Parser)]
#[command(
    name = "sbom",
    about = "SBOM registry: software-component records over HTTP",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the registry HTTP server
    Serve(ServeArgs),
    /// Print the effective configuration as TOML
    CheckConfig(ConfigArgs),
}

/// Settings shared by every command that resolves a server configuration.
#[derive(Args, Clone, Debug, Default)]
pub struct ConfigArgs {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Address to listen on
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// Reject components without a license
    #[arg(long)]
    pub require_license: bool,
    /// Indent JSON responses
    #[arg(long)]
    pub pretty: bool,
    /// Also write every returned record to this file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Args)]
pub struct ServeArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
    /// Skip the startup secrets fetch from Vault
    #[arg(long)]
    pub no_secrets: bool,
    /// KV v2 path read from Vault at startup
    #[arg(long, default_value = DEFAULT_SECRET_PATH)]
    pub secrets_path: String,
}
