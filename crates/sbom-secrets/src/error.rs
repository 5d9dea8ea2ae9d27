use thiserror::Error;

#[derive(Debug, Error)]
pub enum SecretsError {
    #[error("VAULT_ADDR or VAULT_TOKEN not set")]
    MissingEnv,

    #[error("vault client init error: {0}")]
    ClientInit(String),

    #[error("vault request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("vault returned status {status} for {path}")]
    Status { status: u16, path: String },

    #[error("no data found at {0}")]
    NoData(String),
}

pub type SecretsResult<T> = Result<T, SecretsError>;
