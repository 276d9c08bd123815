use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TukError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read code system file {path}: {source}", path = path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to deserialize code system file {path}: {source}", path = path.display())]
    Deserialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unknown template function: {0}")]
    UnknownFunction(String),
    #[error("identifier error: {0}")]
    Id(#[from] tuk_id::IdError),
}

pub type TukResult<T> = std::result::Result<T, TukError>;
