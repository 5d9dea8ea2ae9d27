use std::time::Duration;

/// Default KV v2 path holding the registry's configuration.
pub const DEFAULT_SECRET_PATH: &str = "secret/data/app/config";

/// Where to fetch secrets from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecretsConfig {
    pub address: Option<String>,
    pub token: Option<String>,
    pub path: String,
    pub timeout: Duration,
}

impl Default for SecretsConfig {
    fn default() -> Self {
        Self {
            address: None,
            token: None,
            path: DEFAULT_SECRET_PATH.into(),
            timeout: Duration::from_secs(5),
        }
    }
}

impl SecretsConfig {
    /// Read `VAULT_ADDR` and `VAULT_TOKEN` from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("VAULT_ADDR").ok(),
            std::env::var("VAULT_TOKEN").ok(),
        )
    }

    /// Build a config from raw variable values. Blank values count as unset.
    pub fn from_vars(address: Option<String>, token: Option<String>) -> Self {
        let non_blank = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Self {
            address: non_blank(address),
            token: non_blank(token),
            ..Self::default()
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Returns `true` if both address and token are set.
    pub fn is_configured(&self) -> bool {
        self.address.is_some() && self.token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = SecretsConfig::default();
        assert_eq!(c.path, "secret/data/app/config");
        assert_eq!(c.timeout, Duration::from_secs(5));
        assert!(!c.is_configured());
    }

    #[test]
    fn blank_vars_are_unset() {
        let c = SecretsConfig::from_vars(Some("  ".into()), Some("tok".into()));
        assert!(c.address.is_none());
        assert!(!c.is_configured());

        let c = SecretsConfig::from_vars(Some("http://127.0.0.1:8200".into()), Some("tok".into()));
        assert!(c.is_configured());
    }

    #[test]
    fn with_path_overrides() {
        let c = SecretsConfig::default().with_path("kv/data/sbom");
        assert_eq!(c.path, "kv/data/sbom");
    }
}
