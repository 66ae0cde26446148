//! Typed mass and distance at the body boundary
//!
//! Accretion works in bare `f64` solar masses and AU. These wrappers carry the
//! unit with the value wherever a body's mass or orbit is converted for
//! display or for the cgs physics.

use serde::{Deserialize, Serialize};

use crate::constants::{KM_PER_AU, SOLAR_MASS_IN_GRAMS, SUN_MASS_IN_EARTH_MASSES};

/// A mass, stored in solar masses
///
/// # Examples
///
/// ```rust
/// use planetary::units::Mass;
///
/// let earth = Mass::from_earth_masses(1.0);
/// assert!((earth.to_solar_masses() - 3.005e-6).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Mass(f64);

impl Mass {
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value)
    }

    /// Creates a mass from Earth masses
    ///
    /// # Arguments
    ///
    /// * `value` - The mass in Earth masses (332,775.64 per solar mass)
    pub fn from_earth_masses(value: f64) -> Self {
        Self(value / SUN_MASS_IN_EARTH_MASSES)
    }

    pub fn to_solar_masses(&self) -> f64 {
        self.0
    }

    pub fn to_earth_masses(&self) -> f64 {
        self.0 * SUN_MASS_IN_EARTH_MASSES
    }

    pub fn to_grams(&self) -> f64 {
        self.0 * SOLAR_MASS_IN_GRAMS
    }
}

/// A distance, stored in AU
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Length(f64);

impl Length {
    pub fn from_au(value: f64) -> Self {
        Self(value)
    }

    pub fn from_km(value: f64) -> Self {
        Self(value / KM_PER_AU)
    }

    pub fn to_au(&self) -> f64 {
        self.0
    }

    /// Converts to kilometres
    ///
    /// # Returns
    ///
    /// The distance in km, as used for moon orbits and body radii
    pub fn to_km(&self) -> f64 {
        self.0 * KM_PER_AU
    }
}
