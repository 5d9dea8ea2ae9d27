use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use sbom_types::LicensePolicy;

use crate::error::{ServerError, ServerResult};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub license_policy: LicensePolicy,
    /// Indent JSON response bodies.
    pub pretty_json: bool,
    /// Also write each returned record or listing, pretty-printed, to this file.
    pub export_path: Option<PathBuf>,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            license_policy: LicensePolicy::Optional,
            pretty_json: false,
            export_path: None,
            max_body_bytes: 1024 * 1024,
        }
    }
}

impl ServerConfig {
    pub fn from_toml_str(s: &str) -> ServerResult<Self> {
        toml::from_str(s).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Load a TOML config file. Keys missing from the file keep their defaults.
    pub fn load(path: &Path) -> ServerResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> ServerResult<String> {
        toml::to_string_pretty(self).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Override settings from a startup secrets map.
    ///
    /// Recognised keys are `bind_addr`, `license_policy`, `pretty_json` and
    /// `export_path`. Keys with the wrong type are skipped with a warning,
    /// unknown keys are ignored. Returns the number of settings applied.
    pub fn apply_secrets(&mut self, secrets: &Map<String, Value>) -> usize {
        let mut applied = 0;
        for (key, value) in secrets {
            let ok = match key.as_str() {
                "bind_addr" => value
                    .as_str()
                    .and_then(|s| s.parse().ok())
                    .map(|addr| self.bind_addr = addr)
                    .is_some(),
                "license_policy" => serde_json::from_value(value.clone())
                    .map(|policy| self.license_policy = policy)
                    .is_ok(),
                "pretty_json" => value
                    .as_bool()
                    .map(|pretty| self.pretty_json = pretty)
                    .is_some(),
                "export_path" => value
                    .as_str()
                    .map(|p| self.export_path = Some(PathBuf::from(p)))
                    .is_some(),
                _ => {
                    tracing::debug!(key = %key, "ignoring unrecognised secret");
                    continue;
                }
            };
            if ok {
                applied += 1;
            } else {
                tracing::warn!(key = %key, "ignoring secret with unexpected value");
            }
        }
        applied
    }
}
