//! Physical constants in the cgs units used by the environment models
//!
//! Values follow Fogg (1985), "Extra-Solar Planetary Systems", and Dole (1964),
//! "Habitable Planets for Man".

use std::f64::consts::PI;

pub const RADIANS_PER_ROTATION: f64 = 2.0 * PI;

/// Grams
pub const SOLAR_MASS_IN_GRAMS: f64 = 1.989e33;
/// Grams
pub const EARTH_MASS_IN_GRAMS: f64 = 5.977e27;
pub const SUN_MASS_IN_EARTH_MASSES: f64 = 332_775.64;

/// cm
pub const EARTH_RADIUS: f64 = 6.378e8;
/// km
pub const KM_EARTH_RADIUS: f64 = 6378.0;
/// g/cc
pub const EARTH_DENSITY: f64 = 5.52;
/// cm/s²
pub const EARTH_ACCELERATION: f64 = 981.0;
/// Degrees
pub const EARTH_AXIAL_TILT: f64 = 23.4;
/// Kelvin
pub const EARTH_EXOSPHERE_TEMP: f64 = 1273.0;
/// Kelvin
pub const EARTH_EFFECTIVE_TEMP: f64 = 255.0;
pub const EARTH_ALBEDO: f64 = 0.3;
/// Radians/s per year
pub const CHANGE_IN_EARTH_ANG_VEL: f64 = -1.3e-15;
/// km² per kg of cloud
pub const CLOUD_COVERAGE_FACTOR: f64 = 1.839e-8;
/// Grams per km²
pub const EARTH_WATER_MASS_PER_AREA: f64 = 3.83e15;
pub const EARTH_SURF_PRES_IN_MILLIBARS: f64 = 1000.0;
/// Hart (1978), eq. 20
pub const EARTH_CONVECTION_FACTOR: f64 = 0.43;
/// Kelvin
pub const FREEZING_POINT_OF_WATER: f64 = 273.0;
pub const DAYS_IN_A_YEAR: f64 = 365.256;
/// Ratio of escape velocity to RMS velocity needed to hold a gas
pub const GAS_RETENTION_THRESHOLD: f64 = 6.0;

pub const GAS_GIANT_ALBEDO: f64 = 0.5;
pub const CLOUD_ALBEDO: f64 = 0.52;
pub const ROCKY_AIRLESS_ALBEDO: f64 = 0.07;
pub const ROCKY_ALBEDO: f64 = 0.15;
pub const WATER_ALBEDO: f64 = 0.04;
pub const AIRLESS_ICE_ALBEDO: f64 = 0.5;
pub const ICE_ALBEDO: f64 = 0.7;

pub const SECONDS_PER_HOUR: f64 = 3600.0;
pub const CM_PER_AU: f64 = 1.495_978_707e13;
pub const CM_PER_KM: f64 = 1.0e5;
pub const KM_PER_AU: f64 = CM_PER_AU / CM_PER_KM;
pub const CM_PER_METER: f64 = 100.0;
pub const MILLIBARS_PER_BAR: f64 = 1000.0;

/// dyne cm²/g²
pub const GRAV_CONSTANT: f64 = 6.672e-8;
/// g m²/(s² K mol)
pub const MOLAR_GAS_CONST: f64 = 8314.41;
/// Day-length constant (cm²/(s² g))
pub const J: f64 = 1.46e-19;

// Molecular weights, Dole (1964) p. 38
pub const WATER_VAPOR: f64 = 18.0;
pub const MOL_NITROGEN: f64 = 28.0;

/// Safety valve on the surface temperature iteration
pub const TEMP_ITERATION_LIMIT: usize = 101;
