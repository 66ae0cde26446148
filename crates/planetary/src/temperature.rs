//! Surface temperature with hydrosphere, cloud and ice feedback
//!
//! Effective temperature sets a greenhouse rise, the resulting surface
//! temperature sets cloud and ice cover, and those set the albedo that feeds
//! the next effective temperature. The loop runs until the surface temperature
//! settles to within a degree.
//!
//! # References
//! - Fogg (1985), eqs. 19-24
//! - Hart (1978), "The Evolution of the Atmosphere of the Earth", Icarus 33

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use stellar::RandomSource;
use tracing::debug;

use crate::constants::{
    AIRLESS_ICE_ALBEDO, CLOUD_ALBEDO, CLOUD_COVERAGE_FACTOR, EARTH_ALBEDO,
    EARTH_CONVECTION_FACTOR, EARTH_EFFECTIVE_TEMP, EARTH_SURF_PRES_IN_MILLIBARS,
    EARTH_WATER_MASS_PER_AREA, FREEZING_POINT_OF_WATER, ICE_ALBEDO, KM_EARTH_RADIUS,
    ROCKY_AIRLESS_ALBEDO, ROCKY_ALBEDO, TEMP_ITERATION_LIMIT, WATER_ALBEDO, WATER_VAPOR,
};

// Hart's cloud constant (1/K)
const Q2_36: f64 = 0.0698;

/// Effective (radiative) temperature in Kelvin (Fogg eq. 19)
///
/// Scales Earth's 255 K by distance from the ecosphere and by albedo.
pub fn effective_temperature(ecosphere_radius: f64, orbit_radius: f64, albedo: f64) -> f64 {
    (ecosphere_radius / orbit_radius).sqrt()
        * ((1.0 - albedo) / 0.7).powf(0.25)
        * EARTH_EFFECTIVE_TEMP
}

/// Temperature rise (K) from the greenhouse effect (Fogg eq. 20)
pub fn greenhouse_rise(optical_depth: f64, effective_temp: f64, surface_pressure: f64) -> f64 {
    let convection_factor =
        EARTH_CONVECTION_FACTOR * (surface_pressure / EARTH_SURF_PRES_IN_MILLIBARS).powf(0.25);
    ((1.0 + 0.75 * optical_depth).powf(0.25) - 1.0) * effective_temp * convection_factor
}

/// Dimensionless optical depth of the atmosphere
///
/// Light gases are more opaque; thick atmospheres multiply the base depth.
pub fn opacity(molecular_weight: f64, surface_pressure: f64) -> f64 {
    let base = match molecular_weight {
        mw if (0.0..10.0).contains(&mw) => 3.0,
        mw if (10.0..20.0).contains(&mw) => 2.34,
        mw if (20.0..30.0).contains(&mw) => 1.0,
        mw if (30.0..45.0).contains(&mw) => 0.15,
        mw if (45.0..100.0).contains(&mw) => 0.05,
        _ => 0.0,
    };

    let earths = surface_pressure / EARTH_SURF_PRES_IN_MILLIBARS;
    let multiplier = if earths >= 70.0 {
        8.333
    } else if earths >= 50.0 {
        6.666
    } else if earths >= 30.0 {
        3.333
    } else if earths >= 10.0 {
        2.0
    } else if earths >= 5.0 {
        1.5
    } else {
        1.0
    };
    base * multiplier
}

/// Fraction of the surface covered by water (Fogg eq. 22, with Earth at 71%)
pub fn hydro_fraction(volatile_gas_inventory: f64, planet_radius: f64) -> f64 {
    let fraction =
        (0.71 * volatile_gas_inventory / 1000.0) * (KM_EARTH_RADIUS / planet_radius).powi(2);
    fraction.min(1.0)
}

/// Fraction of the surface under cloud (Fogg eq. 23, Hart eq. 3)
///
/// Only bodies able to hold water vapour form clouds.
pub fn cloud_fraction(
    surface_temp: f64,
    smallest_mw_retained: f64,
    equatorial_radius: f64,
    hydrosphere: f64,
) -> f64 {
    if smallest_mw_retained > WATER_VAPOR {
        return 0.0;
    }
    let surface_area = 4.0 * PI * equatorial_radius.powi(2);
    let hydro_mass = hydrosphere * surface_area * EARTH_WATER_MASS_PER_AREA;
    let water_vapor_in_kg = (1.0e-8 * hydro_mass) * (Q2_36 * (surface_temp - 288.0)).exp();
    let fraction = CLOUD_COVERAGE_FACTOR * water_vapor_in_kg / surface_area;
    fraction.min(1.0)
}

/// Fraction of the surface under ice (Fogg eq. 24, constant tuned to Earth's 1.6%)
pub fn ice_fraction(hydrosphere: f64, surface_temp: f64) -> f64 {
    let surface_temp = surface_temp.min(328.0);
    let fraction = ((328.0 - surface_temp) / 90.0).powi(5);
    fraction.min(1.5 * hydrosphere).min(1.0)
}

/// Bond albedo from surface composition under partial cloud
///
/// Cloud cover is split evenly across the exposed components below it, and
/// each component's albedo is jittered. Airless bodies use bare rock and ice values.
pub fn planet_albedo<R: RandomSource + ?Sized>(
    water_fraction: f64,
    cloud_fraction: f64,
    ice_fraction: f64,
    surface_pressure: f64,
    rng: &mut R,
) -> f64 {
    let rock_fraction = 1.0 - water_fraction - ice_fraction;
    let components = [water_fraction, ice_fraction, rock_fraction]
        .iter()
        .filter(|&&fraction| fraction > 0.0)
        .count();
    let cloud_adjustment = if components > 0 {
        cloud_fraction / components as f64
    } else {
        0.0
    };

    let rock_fraction = if rock_fraction >= cloud_adjustment {
        rock_fraction - cloud_adjustment
    } else {
        0.0
    };
    let water_fraction = if water_fraction > cloud_adjustment {
        water_fraction - cloud_adjustment
    } else {
        0.0
    };
    let ice_fraction = if ice_fraction > cloud_adjustment {
        ice_fraction - cloud_adjustment
    } else {
        0.0
    };

    let airless = surface_pressure == 0.0;
    let cloud_part = cloud_fraction * rng.about(CLOUD_ALBEDO, 0.2);
    let rock_part = if airless {
        rock_fraction * rng.about(ROCKY_AIRLESS_ALBEDO, 0.3)
    } else {
        rock_fraction * rng.about(ROCKY_ALBEDO, 0.1)
    };
    let water_part = water_fraction * rng.about(WATER_ALBEDO, 0.2);
    let ice_part = if airless {
        ice_fraction * rng.about(AIRLESS_ICE_ALBEDO, 0.4)
    } else {
        ice_fraction * rng.about(ICE_ALBEDO, 0.1)
    };
    cloud_part + rock_part + water_part + ice_part
}

/// Fixed body properties the surface iteration depends on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceInputs {
    /// AU
    pub orbit_radius: f64,
    /// AU
    pub ecosphere_radius: f64,
    /// Equatorial radius (km)
    pub radius: f64,
    /// Smallest molecular weight retained
    pub molecular_weight: f64,
    /// Millibars
    pub surface_pressure: f64,
    /// Kelvin
    pub boiling_point: f64,
    pub volatile_gas_inventory: f64,
}

/// Outcome of the surface temperature iteration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceConditions {
    /// Kelvin
    pub surface_temperature: f64,
    pub albedo: f64,
    /// Liquid water fraction
    pub hydrosphere: f64,
    pub cloud_cover: f64,
    pub ice_cover: f64,
    pub iterations: usize,
    /// Whether the final pass moved the temperature by at most a degree
    pub converged: bool,
}

/// Iterate surface temperature, albedo, and cover fractions to a fixed point
///
/// Starts from Earth's albedo and stops once the surface temperature moves by
/// at most one degree, or after `TEMP_ITERATION_LIMIT` passes. Hitting the
/// ceiling is not an error: the last state is returned, and `converged` records
/// whether that final pass settled.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use planetary::temperature::{SurfaceInputs, iterate_surface_temp};
///
/// let mut rng = ChaChaRng::seed_from_u64(42);
/// let inputs = SurfaceInputs {
///     orbit_radius: 1.0,
///     ecosphere_radius: 1.0,
///     radius: 6378.0,
///     molecular_weight: 28.0,
///     surface_pressure: 1000.0,
///     boiling_point: 373.0,
///     volatile_gas_inventory: 1000.0,
/// };
/// let surface = iterate_surface_temp(&inputs, &mut rng);
/// assert!(surface.converged);
/// assert!(surface.surface_temperature > 200.0 && surface.surface_temperature < 400.0);
/// ```
pub fn iterate_surface_temp<R: RandomSource + ?Sized>(
    inputs: &SurfaceInputs,
    rng: &mut R,
) -> SurfaceConditions {
    let water = hydro_fraction(inputs.volatile_gas_inventory, inputs.radius);
    let optical_depth = opacity(inputs.molecular_weight, inputs.surface_pressure);

    let mut albedo = EARTH_ALBEDO;
    let mut previous_temp = None;
    let mut iterations = 0;

    loop {
        let effective_temp =
            effective_temperature(inputs.ecosphere_radius, inputs.orbit_radius, albedo);
        let last_temp = previous_temp.unwrap_or(effective_temp);

        let rise = greenhouse_rise(optical_depth, effective_temp, inputs.surface_pressure);
        let new_temp = (effective_temp + rise).min(f64::MAX);

        let clouds = cloud_fraction(new_temp, inputs.molecular_weight, inputs.radius, water);
        let ice = ice_fraction(water, new_temp);
        let effective_water =
            if new_temp >= inputs.boiling_point || new_temp <= FREEZING_POINT_OF_WATER {
                0.0
            } else {
                water
            };
        albedo = planet_albedo(effective_water, clouds, ice, inputs.surface_pressure, rng);
        iterations += 1;

        let converged = (new_temp - last_temp).abs() <= 1.0;
        if converged || iterations >= TEMP_ITERATION_LIMIT {
            if !converged {
                debug!(
                    surface_temperature = new_temp,
                    iterations, "surface temperature did not settle"
                );
            }
            return SurfaceConditions {
                surface_temperature: new_temp,
                albedo,
                hydrosphere: effective_water,
                cloud_cover: clouds,
                ice_cover: ice,
                iterations,
                converged,
            };
        }
        previous_temp = Some(new_temp);
    }
}
