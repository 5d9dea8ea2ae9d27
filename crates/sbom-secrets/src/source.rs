use async_trait::async_trait;

use crate::error::SecretsResult;

/// Key/value configuration fetched at startup.
pub type SecretMap = serde_json::Map<String, serde_json::Value>;

/// A source of startup secrets.
#[async_trait]
pub trait SecretsSource: Send + Sync {
    async fn fetch_secrets(&self) -> SecretsResult<SecretMap>;
}

/// A source that never has any secrets.
pub struct NoSecrets;

#[async_trait]
impl SecretsSource for NoSecrets {
    async fn fetch_secrets(&self) -> SecretsResult<SecretMap> {
        Ok(SecretMap::new())
    }
}
