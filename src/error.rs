use thiserror::Error;

/// Errors surfaced by the docsmith library.
///
/// Parse errors are never retried. IO errors are converted to a skip in batch
/// and summarizer paths. Service errors are scoped to the element or file that
/// triggered the remote call.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid Python source: {0}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("text generation failed: {0}")]
    Service(String),
}

pub type Result<T> = std::result::Result<T, Error>;
