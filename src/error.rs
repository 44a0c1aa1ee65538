use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Write(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
