//! Planetary environment physics
//!
//! Single-shot models that turn an accreted body's mass and orbit into radius,
//! density, spin, atmosphere and surface conditions, plus the fixed-point
//! surface temperature solver.

pub mod atmosphere;
pub mod constants;
pub mod interior;
pub mod orbit;
pub mod planet;
pub mod temperature;
pub mod units;

// Re-export key types at crate root
pub use orbit::{DayLength, OrbitZone, SpinState};
pub use planet::{HostStar, PlanetProperties};
pub use temperature::{SurfaceConditions, SurfaceInputs, iterate_surface_temp};
pub use units::{Length, Mass};


/// Fixed-draw random source for deterministic tests
#[cfg(test)]
pub(crate) struct Midpoint;

#[cfg(test)]
impl stellar::RandomSource for Midpoint {
    fn unit(&mut self) -> f64 {
        0.5
    }
}
