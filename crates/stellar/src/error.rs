use thiserror::Error;

use crate::spectral::{LuminosityClass, SpectralClass};

#[derive(Debug, Error, PartialEq)]
pub enum StellarError {
    #[error("invalid spectral class <{0}>")]
    InvalidSpectralClass(char),

    #[error("invalid spectral class modifier <{0}>")]
    InvalidSpectralNumber(i32),

    #[error("invalid luminosity class <{0}>")]
    InvalidLuminosityClass(char),

    #[error("malformed star type '{0}', expected <class><number><luminosity>/<orbit> such as G2M/0")]
    MalformedStarType(String),

    #[error("no tabulated mass for {class}{number} {luminosity}")]
    UnknownStarMass {
        class: SpectralClass,
        number: i32,
        luminosity: LuminosityClass,
    },

    #[error("stellar mass must be positive, got {0}")]
    NonPositiveMass(f64),
}

pub type Result<T> = std::result::Result<T, StellarError>;
