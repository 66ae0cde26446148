//! Stars of a generated system: spectral tables, stellar relations, and the
//! random source shared by every stochastic step of generation.

pub mod error;
pub mod generation;
pub mod sampling;
pub mod spectral;
pub mod star;

#[cfg(test)]
mod spectral_test;

pub use error::StellarError;
pub use sampling::RandomSource;
pub use spectral::{LuminosityClass, SpectralClass};
pub use star::{Star, StarSpec};

// Re-export generation functions
pub use generation::{
    generate_stars, luminosity, main_sequence_life, random_star, star_age, star_from_spec,
    star_radius,
};
