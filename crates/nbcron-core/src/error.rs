use thiserror::Error;

#[derive(Debug, Error)]
pub enum NbcronError {
    #[error("Configuration error: {0}")]
    Config(String),
}

impl NbcronError {
    /// Short error code string, stable across releases.
    pub fn code(&self) -> &'static str {
        match self {
            NbcronError::Config(_) => "CONFIG_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, NbcronError>;
