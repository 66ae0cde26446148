use thiserror::Error;

use crate::body::StarId;

/// Broken geometric preconditions that abort an accretion run
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccretionError {
    #[error("invalid dust cloud bounds {inner}..{outer} AU")]
    InvalidCloudBounds { inner: f64, outer: f64 },

    #[error("inner limit of gravitational influence is negative ({r_inner} AU)")]
    NegativeInfluence { r_inner: f64 },

    #[error("no dust band left to seed a protoplanet")]
    NoDustBand,

    #[error("inner orbit bound {inner} AU lies beyond outer bound {outer} AU")]
    InvalidOrbitBounds { inner: f64, outer: f64 },

    #[error("no body at index {0} of the planet list")]
    UnknownBody(usize),

    #[error("no star in the system for {0:?}")]
    UnknownStar(StarId),
}

pub type Result<T> = std::result::Result<T, AccretionError>;
