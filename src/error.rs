use thiserror::Error;

#[derive(Error, Debug)]
pub enum CError {
    #[error("invalid atom index {index} (protein has {size} atoms)")]
    InvalidIndex { index: usize, size: usize },
    #[error("{0}")]
    IoError(#[from] std::io::Error),
    #[error("generic error: {0}")]
    GenericError(String),
    #[error("Failed to parse float: {0}")]
    ParseFloatError(#[from] std::num::ParseFloatError),
    #[error("Missing token")]
    MissingToken,
    #[error("no PROTEIN record found")]
    MissingProtein,
}
