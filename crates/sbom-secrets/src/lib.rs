//! Startup secrets for the SBOM registry.
//!
//! At process start the registry may pull a configuration map from a Vault
//! KV v2 mount. The address and token come from `VAULT_ADDR` and
//! `VAULT_TOKEN`. A failed fetch is never fatal: callers log it and carry on
//! with built-in defaults.

pub mod config;
pub mod error;
pub mod source;
pub mod vault;

pub use config::SecretsConfig;
pub use error::{SecretsError, SecretsResult};
pub use source::{NoSecrets, SecretMap, SecretsSource};
pub use vault::VaultClient;

/// Fetch the configured secret map with a one-off [`VaultClient`].
pub async fn fetch_secrets(config: &SecretsConfig) -> SecretsResult<SecretMap> {
    VaultClient::new(config.clone())?.fetch_secrets().await
}
