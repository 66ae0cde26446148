//! Planetary accretion after Dole (1969)
//!
//! A dust and gas cloud about a central body is consumed by repeatedly
//! injected protoplanets. Each one sweeps up the material within its
//! gravitational reach, and bodies whose orbits cross merge. The result is a
//! list of bodies sorted by semi-major axis.

pub mod body;
pub mod collision;
pub mod constants;
pub mod dust;
pub mod error;
pub mod injection;
pub mod sweep;

pub use body::{Body, BodyKind, PlanetList, StarId};
pub use collision::{Coalescence, Protoplanet, coalesce_planetesimals, find_collision};
pub use dust::{DustBand, DustCloud};
pub use error::AccretionError;
pub use injection::{AccretionDisk, DiskBounds, Injection, dist_masses, dist_moons, init_planet_list};
pub use sweep::{Accretion, InfluenceZone, LocalConditions, accrete_dust, collect_dust};

#[cfg(test)]
mod body_test;
#[cfg(test)]
mod collision_test;
#[cfg(test)]
mod sweep_test;

/// Fixed-draw random source for deterministic tests
#[cfg(test)]
pub(crate) struct Midpoint;

#[cfg(test)]
impl stellar::RandomSource for Midpoint {
    fn unit(&mut self) -> f64 {
        0.5
    }
}
