//! Dole's accretion constants

/// Eccentricity of dust particle orbits in the cloud
pub const CLOUD_ECCENTRICITY: f64 = 0.2;

/// Seed mass of an injected protoplanet (solar masses)
pub const PROTOPLANET_MASS: f64 = 1.0e-15;

/// Grown bodies at or below this mass are discarded (solar masses)
pub const TRIVIAL_MASS: f64 = 1.0e-14;

/// Gas to dust mass ratio (Dole's K)
pub const GAS_DUST_RATIO: f64 = 50.0;

/// Critical mass coefficient (Dole's B)
pub const CRITICAL_MASS_COEFF: f64 = 1.2e-5;

/// Dust density coefficient (Dole's A)
pub const DUST_DENSITY_COEFF: f64 = 6.0e-3;

/// Radial falloff of the dust density
pub const ALPHA: f64 = 5.0;
pub const N: f64 = 3.0;

/// Dust is assumed ten times denser around planets
pub const MOON_DUST_FACTOR: f64 = 10.0;

/// Accretion stops once a sweep adds less than this fraction of the mass
pub const GROWTH_THRESHOLD: f64 = 0.001;
