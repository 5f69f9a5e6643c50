use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("invalid {format} snapshot: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },
    #[error("duplicate element id: {0}")]
    DuplicateId(String),
    #[error("unknown element id: {0}")]
    UnknownId(String),
}

impl SnapshotError {
    pub fn parse(format: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Parse {
            format,
            message: err.to_string(),
        }
    }
}
