use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Failed to read endpoint file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed endpoint file: {0}")]
    MalformedInput(String),
}
