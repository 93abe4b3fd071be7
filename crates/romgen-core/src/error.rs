use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("sample out of range: {0}")]
    Range(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
