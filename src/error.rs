use thiserror::Error;

pub type DiscriminatorResult<T = ()> = std::result::Result<T, DiscriminatorError>;

#[derive(Debug, Error)]
pub enum DiscriminatorError {
    #[error("name is not valid unicode: {0}")]
    InvalidName(String),
    #[error("unknown byte format: {0}")]
    UnknownFormat(String),
    #[error("unknown section: {0}")]
    UnknownSection(String),
    #[error("unknown namespace: {0}")]
    UnknownNamespace(String),
    #[error("failed to write report")]
    Io(#[from] std::io::Error),
}
