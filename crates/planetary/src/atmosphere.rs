//! Gas retention, volatile inventory, and surface pressure
//!
//! # References
//! - Fogg (1985), eqs. 15-18 and 21
//! - Dole (1964), "Habitable Planets for Man"

use stellar::RandomSource;

use crate::constants::{
    CM_PER_KM, CM_PER_METER, EARTH_ACCELERATION, EARTH_EXOSPHERE_TEMP, GAS_RETENTION_THRESHOLD,
    GRAV_CONSTANT, KM_EARTH_RADIUS, MILLIBARS_PER_BAR, MOLAR_GAS_CONST,
};
use crate::orbit::OrbitZone;
use crate::units::Mass;

/// Escape velocity (cm/s) for mass in solar masses and radius in km
pub fn escape_velocity(mass: f64, radius: f64) -> f64 {
    let mass_in_grams = Mass::from_solar_masses(mass).to_grams();
    let radius_in_cm = radius * CM_PER_KM;
    (2.0 * GRAV_CONSTANT * mass_in_grams / radius_in_cm).sqrt()
}

/// Surface acceleration (cm/s²) for mass in solar masses and radius in km
pub fn acceleration(mass: f64, radius: f64) -> f64 {
    GRAV_CONSTANT * Mass::from_solar_masses(mass).to_grams() / (radius * CM_PER_KM).powi(2)
}

/// Surface gravity in Earth gravities
pub fn gravity(acceleration: f64) -> f64 {
    acceleration / EARTH_ACCELERATION
}

/// RMS velocity (cm/s) of a molecule in the exosphere
///
/// The exospheric temperature scales Earth's with the insolation at `orbit_radius`.
pub fn rms_velocity(molecular_weight: f64, orbit_radius: f64, luminosity_ratio: f64) -> f64 {
    let exospheric_temp = EARTH_EXOSPHERE_TEMP * (luminosity_ratio / orbit_radius.powi(2));
    ((3.0 * MOLAR_GAS_CONST * exospheric_temp) / molecular_weight).sqrt() * CM_PER_METER
}

/// Smallest molecular weight the body can retain
pub fn molecule_limit(mass: f64, equatorial_radius: f64) -> f64 {
    let escape = escape_velocity(mass, equatorial_radius);
    (3.0 * (GAS_RETENTION_THRESHOLD * CM_PER_METER).powi(2) * MOLAR_GAS_CONST * EARTH_EXOSPHERE_TEMP)
        / escape.powi(2)
}

/// Whether the body suffers a runaway greenhouse
///
/// Inner-zone bodies inside the greenhouse radius keep their volatiles in the
/// atmosphere instead of depositing 99% of them in surface reservoirs.
pub fn greenhouse(zone: OrbitZone, orbit_radius: f64, greenhouse_radius: f64) -> bool {
    orbit_radius < greenhouse_radius && zone == OrbitZone::Inner
}

/// Inputs to the volatile inventory model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolatileSource {
    /// Solar masses
    pub mass: f64,
    /// cm/s
    pub escape_velocity: f64,
    /// cm/s
    pub rms_velocity: f64,
    pub zone: OrbitZone,
    pub greenhouse: bool,
}

/// Unitless measure of the gases outgassed onto the surface (Fogg eq. 17)
///
/// Zero for bodies that cannot hold nitrogen.
pub fn volatile_inventory<R: RandomSource + ?Sized>(
    source: &VolatileSource,
    stellar_mass: f64,
    rng: &mut R,
) -> f64 {
    let velocity_ratio = source.escape_velocity / source.rms_velocity;
    if velocity_ratio < GAS_RETENTION_THRESHOLD {
        return 0.0;
    }

    let proportion_const = match source.zone {
        OrbitZone::Inner => 100_000.0,
        OrbitZone::Middle => 75_000.0,
        OrbitZone::Outer => 250.0,
    };
    let earth_units = Mass::from_solar_masses(source.mass).to_earth_masses();
    let inventory = rng.about((proportion_const * earth_units) / stellar_mass, 0.2);
    if source.greenhouse {
        inventory
    } else {
        inventory / 100.0
    }
}

/// Surface pressure in millibars (Fogg eq. 18)
pub fn pressure(volatile_gas_inventory: f64, equatorial_radius: f64, gravity: f64) -> f64 {
    let radius_ratio = KM_EARTH_RADIUS / equatorial_radius;
    volatile_gas_inventory * gravity / radius_ratio.powi(2)
}

/// Boiling point of water (K) at a surface pressure in millibars (Fogg eq. 21)
pub fn boiling_point(surface_pressure: f64) -> f64 {
    let bars = surface_pressure / MILLIBARS_PER_BAR;
    1.0 / (bars.ln() / -5050.5 + 1.0 / 373.0)
}
