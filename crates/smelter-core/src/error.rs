use thiserror::Error;

/// Top-level error type for the Smelter system.
///
/// Business outcomes such as an unknown batch are never errors; they are
/// answered in plain text. This type covers startup and boundary failures:
/// configuration, dataset validation, and server I/O.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SmelterError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for SmelterError {
    fn from(err: toml::de::Error) -> Self {
        SmelterError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for SmelterError {
    fn from(err: toml::ser::Error) -> Self {
        SmelterError::Config(err.to_string())
    }
}

/// A specialized `Result` type for Smelter operations.
pub type Result<T> = std::result::Result<T, SmelterError>;
