//! Orbital zone, period, rotation and axial tilt

use serde::{Deserialize, Serialize};
use stellar::RandomSource;

use crate::constants::{
    CHANGE_IN_EARTH_ANG_VEL, CM_PER_KM, DAYS_IN_A_YEAR, EARTH_AXIAL_TILT, EARTH_DENSITY,
    EARTH_MASS_IN_GRAMS, EARTH_RADIUS, J, RADIANS_PER_ROTATION, SECONDS_PER_HOUR,
};
use crate::planet::HostStar;
use crate::units::Mass;

/// Coarse distance class relative to stellar luminosity
///
/// Selects composition coefficients for radius and volatile models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrbitZone {
    /// Inside 4 √L AU
    Inner,
    /// 4 √L to 15 √L AU
    Middle,
    /// Beyond 15 √L AU
    Outer,
}

impl OrbitZone {
    pub fn from_distance(orbit_radius: f64, luminosity_ratio: f64) -> Self {
        let scale = luminosity_ratio.sqrt();
        if orbit_radius < 4.0 * scale {
            OrbitZone::Inner
        } else if orbit_radius < 15.0 * scale {
            OrbitZone::Middle
        } else {
            OrbitZone::Outer
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            OrbitZone::Inner => 1,
            OrbitZone::Middle => 2,
            OrbitZone::Outer => 3,
        }
    }
}

/// Orbital period in Earth days
///
/// `separation` in AU, masses in solar masses.
pub fn period(separation: f64, small_mass: f64, large_mass: f64) -> f64 {
    let years = (separation.powi(3) / (small_mass + large_mass)).sqrt();
    years * DAYS_IN_A_YEAR
}

/// Body properties that set its spin history
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinState {
    /// Solar masses
    pub mass: f64,
    /// Equatorial radius (km)
    pub radius: f64,
    pub eccentricity: f64,
    /// g/cc
    pub density: f64,
    /// AU
    pub orbit_radius: f64,
    /// Earth days
    pub orbital_period: f64,
    pub gas_giant: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayLength {
    pub hours: f64,
    /// Spin is locked in a resonance with the orbit
    pub resonant: bool,
}

/// Length of the local day
///
/// The primordial spin (Dole) is slowed by stellar tides over the star's age
/// (Goldreich & Soter, scaled from Earth as in Fogg eq. 13). A body whose spin
/// stops, or whose day reaches its year, is tidally locked; eccentric locked
/// orbits fall into a spin resonance instead.
pub fn day_length(body: &SpinState, host: &HostStar) -> DayLength {
    let k2 = if body.gas_giant { 0.24 } else { 0.33 };
    let mass_in_grams = Mass::from_solar_masses(body.mass).to_grams();
    let radius_in_cm = body.radius * CM_PER_KM;
    let year_in_hours = body.orbital_period * 24.0;

    let base_angular_velocity = (2.0 * J * mass_in_grams / (k2 * radius_in_cm.powi(2))).sqrt();
    let change_in_angular_velocity = CHANGE_IN_EARTH_ANG_VEL
        * (body.density / EARTH_DENSITY)
        * (radius_in_cm / EARTH_RADIUS)
        * (EARTH_MASS_IN_GRAMS / mass_in_grams)
        * host.mass.powi(2)
        * (1.0 / body.orbit_radius.powi(6));
    let angular_velocity = base_angular_velocity + change_in_angular_velocity * host.age;

    let spinning = angular_velocity > 0.0;
    let day_in_hours = RADIANS_PER_ROTATION / (SECONDS_PER_HOUR * angular_velocity);
    if !spinning || day_in_hours >= year_in_hours {
        if body.eccentricity > 0.1 {
            let spin_resonance_factor = (1.0 - body.eccentricity) / (1.0 + body.eccentricity);
            return DayLength {
                hours: spin_resonance_factor * year_in_hours,
                resonant: true,
            };
        }
        return DayLength {
            hours: year_in_hours,
            resonant: false,
        };
    }

    DayLength {
        hours: day_in_hours,
        resonant: false,
    }
}

/// Axial tilt in whole degrees
pub fn inclination<R: RandomSource + ?Sized>(orbit_radius: f64, rng: &mut R) -> i32 {
    let tilt = (orbit_radius.powf(0.2) * rng.about(EARTH_AXIAL_TILT, 0.4)) as i32;
    tilt % 360
}
