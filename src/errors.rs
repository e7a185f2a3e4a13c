use thiserror::Error;

/// Error type that captures the failures a shopping session can surface.
#[derive(Debug, Error)]
pub enum ShopError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] serde_json::Error),
}

pub type ShopResult<T> = Result<T, ShopError>;
