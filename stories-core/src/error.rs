use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum StoryError {
    #[error("story is missing required field `{0}`")]
    MissingField(&'static str),
    #[error("story url is invalid: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("failed to read stories file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse stories file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no configuration directory available on this platform")]
    NoConfigDir,
    #[error("configuration io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("configuration parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
