//! Minimal Vault KV v2 reader.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::SecretsConfig;
use crate::error::{SecretsError, SecretsResult};
use crate::source::{SecretMap, SecretsSource};

/// Reads one KV v2 secret over Vault's HTTP API.
pub struct VaultClient {
    http: reqwest::Client,
    address: String,
    token: String,
    path: String,
}

/// `GET /v1/<mount>/data/<path>` wraps the secret as `{"data": {"data": {...}}}`.
#[derive(Deserialize)]
struct KvEnvelope {
    data: Option<KvData>,
}

#[derive(Deserialize)]
struct KvData {
    data: Option<SecretMap>,
}

impl VaultClient {
    /// Build a client. Fails with [`SecretsError::MissingEnv`] when the
    /// address or token is unset.
    pub fn new(config: SecretsConfig) -> SecretsResult<Self> {
        let (Some(address), Some(token)) = (config.address, config.token) else {
            return Err(SecretsError::MissingEnv);
        };
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SecretsError::ClientInit(e.to_string()))?;
        Ok(Self {
            http,
            address: address.trim_end_matches('/').to_string(),
            token,
            path: config.path.trim_start_matches('/').to_string(),
        })
    }

    pub fn url(&self) -> String {
        format!("{}/v1/{}", self.address, self.path)
    }
}

impl std::fmt::Debug for VaultClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultClient")
            .field("address", &self.address)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl SecretsSource for VaultClient {
    async fn fetch_secrets(&self) -> SecretsResult<SecretMap> {
        tracing::debug!(url = %self.url(), "fetching secrets from vault");
        let response = self
            .http
            .get(self.url())
            .header("X-Vault-Token", &self.token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SecretsError::Status {
                status: status.as_u16(),
                path: self.path.clone(),
            });
        }

        let envelope: KvEnvelope = response.json().await?;
        envelope
            .data
            .and_then(|d| d.data)
            .ok_or_else(|| SecretsError::NoData(self.path.clone()))
    }
}
