use accretion::AccretionError;
use stellar::StellarError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GenerationError {
    #[error(transparent)]
    Stellar(#[from] StellarError),

    #[error(transparent)]
    Accretion(#[from] AccretionError),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GenerationError>;
