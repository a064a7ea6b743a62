use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Pattern assembly only emits escaped literals, so the backend can fail
    /// solely by exceeding its compiled-size limit on an enormous query.
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),
}
