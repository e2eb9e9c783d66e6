use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures that stop an operation outright. Refused votes and duplicate
/// registrations are ordinary outcomes and never appear here.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Failed to encode ledger: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
    #[error("Failed to initialise logging: {0}")]
    Logging(String),
}
