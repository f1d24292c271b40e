use thiserror::Error;

#[derive(Error, Debug)]
pub enum StrzError {
    #[error("no operands given (pass strings as arguments or pipe them on stdin)")]
    NoOperands,

    #[error("{0}")]
    Usage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StrzError>;
