use anyhow::Context;
use colored::Colorize;

use sbom_secrets::{NoSecrets, SecretsConfig, SecretsSource, VaultClient};
use sbom_server::{SbomServer, ServerConfig};
use sbom_types::LicensePolicy;

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::CheckConfig(args) => cmd_check_config(&args),
    }
}

impl ConfigArgs {
    /// Defaults, then the config file if one was given.
    fn load_base(&self) -> anyhow::Result<ServerConfig> {
        match &self.config {
            Some(path) => ServerConfig::load(path)
                .with_context(|| format!("failed to load config from {}", path.display())),
            None => Ok(ServerConfig::default()),
        }
    }

    /// Command-line flags win over every other source.
    fn apply_overrides(&self, config: &mut ServerConfig) {
        if let Some(bind) = self.bind {
            config.bind_addr = bind;
        }
        if self.require_license {
            config.license_policy = LicensePolicy::Required;
        }
        if self.pretty {
            config.pretty_json = true;
        }
        if let Some(export) = &self.export {
            config.export_path = Some(export.clone());
        }
    }
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = args.config.load_base()?;
    let secrets = SecretsConfig::from_env().with_path(args.secrets_path.as_str());
    let source = secrets_source(args.no_secrets, secrets);
    load_secrets(&mut config, source.as_ref()).await;
    args.config.apply_overrides(&mut config);

    tracing::info!(
        bind = %config.bind_addr,
        license_policy = ?config.license_policy,
        "starting SBOM registry"
    );
    SbomServer::new(config)
        .serve()
        .await
        .context("server terminated")
}

/// Pick where startup secrets come from. An unusable Vault setup falls back
/// to no secrets.
fn secrets_source(disabled: bool, secrets: SecretsConfig) -> Box<dyn SecretsSource> {
    if disabled {
        tracing::debug!("secrets fetch disabled");
        return Box::new(NoSecrets);
    }
    match VaultClient::new(secrets) {
        Ok(client) => Box::new(client),
        Err(e) => {
            tracing::warn!("vault unavailable ({e}), using local defaults");
            Box::new(NoSecrets)
        }
    }
}

/// A failed fetch is logged and otherwise ignored.
async fn load_secrets(config: &mut ServerConfig, source: &dyn SecretsSource) {
    match source.fetch_secrets().await {
        Ok(map) if map.is_empty() => tracing::debug!("no secrets to apply"),
        Ok(map) => {
            tracing::info!("loaded {} secrets from vault", map.len());
            let applied = config.apply_secrets(&map);
            tracing::debug!(applied, "applied secrets to configuration");
        }
        Err(e) => {
            tracing::warn!("vault unavailable ({e}), using local defaults");
        }
    }
}

fn cmd_check_config(args: &ConfigArgs) -> anyhow::Result<()> {
    let mut config = args.load_base()?;
    args.apply_overrides(&mut config);
    let text = config.to_toml_string()?;
    println!("{} configuration OK", "✓".green().bold());
    println!("{text}");
    Ok(())
}
