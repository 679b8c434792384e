use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scene: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("surface refers to unknown material '{0}'")]
    UnknownMaterial(String),

    #[error("invalid scene: {0}")]
    InvalidScene(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;
