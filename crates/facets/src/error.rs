use crate::storage::FacetId;

#[derive(Debug, thiserror::Error)]
pub enum FacetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Unknown node: {0}")]
    UnknownNode(FacetId),
}

pub type Result<T> = std::result::Result<T, FacetError>;
