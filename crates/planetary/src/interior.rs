//! Bulk radius and density of planetary bodies
//!
//! # References
//! - Kothari (1936), "The Internal Constitution of Planets", MNRAS 96, eq. 23
//! - Fogg (1985), eq. 9

use std::f64::consts::PI;

use crate::constants::{CM_PER_KM, SOLAR_MASS_IN_GRAMS};
use crate::orbit::OrbitZone;
use crate::units::Mass;

// Kothari's constants, cgs
const A1_20: f64 = 6.485e12;
const A2_20: f64 = 4.0032e-8;
const BETA_20: f64 = 5.71e12;

/// Radius (km) of a sphere of the given mass (solar masses) and density (g/cc)
pub fn volume_radius(mass: f64, density: f64) -> f64 {
    let volume = Mass::from_solar_masses(mass).to_grams() / density;
    ((3.0 * volume) / (4.0 * PI)).powf(1.0 / 3.0) / CM_PER_KM
}

/// Mean atomic weight and atomic number of the bulk material
fn composition(gas_giant: bool, zone: OrbitZone) -> (f64, f64) {
    match (zone, gas_giant) {
        (OrbitZone::Inner, true) => (9.5, 4.5),
        (OrbitZone::Inner, false) => (15.0, 8.0),
        (OrbitZone::Middle, true) => (2.47, 2.0),
        (OrbitZone::Middle, false) => (10.0, 5.0),
        (OrbitZone::Outer, true) => (7.0, 4.0),
        (OrbitZone::Outer, false) => (10.0, 5.0),
    }
}

/// Radius in km of a cold body of the given mass (solar masses)
///
/// Kothari's relation balances electron degeneracy against Coulomb forces, so
/// radius first grows as m^1/3 and then flattens for giant masses.
pub fn kothari_radius(mass: f64, gas_giant: bool, zone: OrbitZone) -> f64 {
    let (atomic_weight, atomic_num) = composition(gas_giant, zone);

    let numerator = (2.0 * BETA_20 * SOLAR_MASS_IN_GRAMS.powf(1.0 / 3.0))
        / (A1_20 * (atomic_weight * atomic_num).powf(1.0 / 3.0));

    let mut denominator =
        A2_20 * atomic_weight.powf(4.0 / 3.0) * SOLAR_MASS_IN_GRAMS.powf(2.0 / 3.0);
    denominator *= mass.powf(2.0 / 3.0);
    denominator /= A1_20 * atomic_num.powi(2);
    denominator += 1.0;

    (numerator / denominator) * mass.powf(1.0 / 3.0) / CM_PER_KM
}

/// Density (g/cc) from Fogg's empirical mass-distance fit
pub fn empirical_density(mass: f64, orbit_radius: f64, gas_giant: bool, luminosity_ratio: f64) -> f64 {
    let density = Mass::from_solar_masses(mass).to_earth_masses().powf(1.0 / 8.0)
        * (luminosity_ratio.sqrt() / orbit_radius).powf(0.25);
    if gas_giant { density * 1.2 } else { density * 5.5 }
}

/// Mean density (g/cc) of a body of the given mass (solar masses) and radius (km)
pub fn volume_density(mass: f64, equatorial_radius: f64) -> f64 {
    let radius_in_cm = equatorial_radius * CM_PER_KM;
    let volume = (4.0 * PI * radius_in_cm.powi(3)) / 3.0;
    Mass::from_solar_masses(mass).to_grams() / volume
}
