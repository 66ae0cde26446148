//! Stellar system generation
//!
//! Drives star creation, Dole accretion and planet characterization into a
//! complete, reproducible system.

pub mod config;
pub mod error;
pub mod generation;
pub mod report;


pub use config::GenerationConfig;
pub use error::GenerationError;
pub use generation::{StellarSystem, check_planets, characterize, form_planets, generate_stellar_system};
pub use report::describe_system;

/// Fixed-draw random source for deterministic tests
#[cfg(test)]
pub(crate) struct Midpoint;

#[cfg(test)]
impl stellar::RandomSource for Midpoint {
    fn unit(&mut self) -> f64 {
        0.5
    }
}
