use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Database error: {0}")]
    Database(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<&str> for PortalError {
    fn from(err: &str) -> Self {
        PortalError::Internal(err.to_string())
    }
}

impl From<String> for PortalError {
    fn from(err: String) -> Self {
        PortalError::Internal(err)
    }
}

pub type Result<T> = std::result::Result<T, PortalError>;
