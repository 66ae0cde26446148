//! Star generation: mass-luminosity-radius relations, ages, and system multiplicity
//!
//! Relations are eqs. 3.52 and 3.53 of Bowers & Deeming, "Astrophysics I".
//! Population shares follow Abell, "Exploration of the Universe": roughly 90% of
//! nearby stars are on the main sequence, 10% are white dwarfs, and under 1% are
//! giants or supergiants.

use crate::error::{Result, StellarError};
use crate::sampling::{RandomSource, percentile};
use crate::spectral::{LuminosityClass, SpectralInfo, TABLE_ROWS, classify, star_mass};
use crate::star::{GREENHOUSE_EFFECT_CONST, Star, StarSpec};

/// Number of solar radii per AU
pub const SOLAR_RADII_PER_AU: f64 = 4.652e-3;

/// Shortest main-sequence lifetime assigned to any star (years)
pub const MIN_MAIN_SEQUENCE_LIFE: f64 = 1.0e6;

fn checked_log10(mass_ratio: f64) -> Result<f64> {
    if mass_ratio > 0.0 && mass_ratio.is_finite() {
        Ok(mass_ratio.log10())
    } else {
        Err(StellarError::NonPositiveMass(mass_ratio))
    }
}

/// Luminosity ratio from the mass ratio
pub fn luminosity(mass_ratio: f64, class: LuminosityClass) -> Result<f64> {
    let log_mass = checked_log10(mass_ratio)?;
    let luminosity = match class {
        LuminosityClass::MainSequence => {
            let (alpha, beta) = if mass_ratio <= 0.5 {
                (2.85, -0.15)
            } else if mass_ratio < 2.5 {
                (3.6, 0.073)
            } else {
                (2.91, 0.479)
            };
            10f64.powf(beta + alpha * log_mass)
        }
        LuminosityClass::Giant => 10f64.powf(log_mass * 3.3),
        LuminosityClass::Supergiant => 10f64.powf((log_mass + 0.22) / 0.33),
        LuminosityClass::WhiteDwarf => mass_ratio * 5.67e-4,
    };
    Ok(luminosity)
}

/// Stellar radius in AU
///
/// Supergiants cooler than G0 follow a separate relation. White dwarf radii are
/// drawn around 0.02 solar radii.
pub fn star_radius<R: RandomSource + ?Sized>(
    mass_ratio: f64,
    class: LuminosityClass,
    cooler_than_g0: bool,
    rng: &mut R,
) -> Result<f64> {
    let log_mass = checked_log10(mass_ratio)?;
    let solar_radii = match class {
        LuminosityClass::MainSequence => {
            if mass_ratio <= 0.4 {
                10f64.powf(log_mass + 0.1)
            } else {
                10f64.powf(0.73 * log_mass)
            }
        }
        LuminosityClass::Giant => 10f64.powf(log_mass * 2.0),
        LuminosityClass::Supergiant => {
            if cooler_than_g0 {
                10f64.powf((log_mass - 0.32) / 0.34)
            } else {
                10f64.powf((log_mass - 2.7) / -0.86)
            }
        }
        LuminosityClass::WhiteDwarf => rng.about(0.02, 0.005),
    };
    Ok(solar_radii * SOLAR_RADII_PER_AU)
}

/// Main-sequence lifetime in years, never below one million
pub fn main_sequence_life(mass_ratio: f64, luminosity_ratio: f64) -> f64 {
    (1.1e10 * (mass_ratio / luminosity_ratio)).max(MIN_MAIN_SEQUENCE_LIFE)
}

/// Current age in years, drawn within the star's lifetime
pub fn star_age<R: RandomSource + ?Sized>(lifetime: f64, rng: &mut R) -> f64 {
    if lifetime >= 6.0e9 {
        rng.uniform(1.0e9, 6.0e9)
    } else if lifetime > 1.0e9 {
        rng.uniform(1.0e9, lifetime)
    } else {
        rng.uniform(1.0e6, lifetime)
    }
}

pub fn random_luminosity_class<R: RandomSource + ?Sized>(rng: &mut R) -> LuminosityClass {
    let roll = percentile(rng, 0.0);
    if roll <= 1 {
        if percentile(rng, 0.0) <= 70 {
            LuminosityClass::Giant
        } else {
            LuminosityClass::Supergiant
        }
    } else if roll <= 10 {
        LuminosityClass::WhiteDwarf
    } else {
        LuminosityClass::MainSequence
    }
}

/// Draw a stellar mass from the population shares of a luminosity class
///
/// Bins with a zero share are never selected, so the massless first white
/// dwarf row cannot be drawn.
pub fn random_star_mass<R: RandomSource + ?Sized>(class: LuminosityClass, rng: &mut R) -> f64 {
    let table: &[SpectralInfo; TABLE_ROWS] = class.table();
    let roll = percentile(rng, 0.0);
    let mut cumulative = 0;
    let mut prev_mass = 0.0;
    for info in table.iter() {
        cumulative += info.percentage;
        if roll < cumulative {
            return rng.uniform(info.max_mass, prev_mass);
        }
        prev_mass = info.max_mass;
    }
    1.0
}

/// Number of stars in a randomly generated system (1 to 4)
pub fn star_count<R: RandomSource + ?Sized>(rng: &mut R) -> usize {
    match percentile(rng, 1.0) {
        ..=45 => 1,
        46..=80 => 2,
        81..=95 => 3,
        _ => 4,
    }
}

/// Fill in the derived properties of a star of known mass
pub fn characterize<R: RandomSource + ?Sized>(
    classification: String,
    class: LuminosityClass,
    mass_ratio: f64,
    orbit_radius: f64,
    rng: &mut R,
) -> Result<Star> {
    let luminosity_ratio = luminosity(mass_ratio, class)?;
    let cooler_than_g0 = classification.starts_with(['K', 'M']);
    let radius = star_radius(mass_ratio, class, cooler_than_g0, rng)?;
    let main_sequence_life = main_sequence_life(mass_ratio, luminosity_ratio);
    let age = star_age(main_sequence_life, rng);
    let ecosphere_radius = luminosity_ratio.sqrt();

    Ok(Star {
        classification,
        luminosity_class: class,
        mass_ratio,
        luminosity_ratio,
        radius,
        age,
        main_sequence_life,
        orbit_radius,
        ecosphere_radius,
        greenhouse_radius: ecosphere_radius * GREENHOUSE_EFFECT_CONST,
    })
}

/// Build a star from an explicit spectral type
pub fn star_from_spec<R: RandomSource + ?Sized>(spec: &StarSpec, rng: &mut R) -> Result<Star> {
    let mass_ratio =
        star_mass(spec.luminosity, spec.class, spec.number).ok_or(StellarError::UnknownStarMass {
            class: spec.class,
            number: spec.number,
            luminosity: spec.luminosity,
        })?;
    characterize(
        spec.description(),
        spec.luminosity,
        mass_ratio,
        spec.orbit_radius,
        rng,
    )
}

/// Build a random star at the given distance from the primary
pub fn random_star<R: RandomSource + ?Sized>(orbit_radius: f64, rng: &mut R) -> Result<Star> {
    let class = random_luminosity_class(rng);
    let mass_ratio = random_star_mass(class, rng);
    characterize(classify(mass_ratio, class), class, mass_ratio, orbit_radius, rng)
}

/// Build the stars of a system, primary first
///
/// Explicit specs are used as given. With none, the multiplicity is drawn and
/// companions are placed between 1 and 150 AU from the primary.
pub fn generate_stars<R: RandomSource + ?Sized>(specs: &[StarSpec], rng: &mut R) -> Result<Vec<Star>> {
    if !specs.is_empty() {
        return specs.iter().map(|spec| star_from_spec(spec, rng)).collect();
    }

    let count = star_count(rng);
    (0..count)
        .map(|index| {
            let orbit_radius = if index == 0 {
                0.0
            } else {
                rng.uniform(1.0, 150.0)
            };
            random_star(orbit_radius, rng)
        })
        .collect()
}
