//! Host star context and the derived physical properties of a body

use serde::{Deserialize, Serialize};
use stellar::Star;

use crate::orbit::OrbitZone;
use crate::temperature::{SurfaceConditions, SurfaceInputs};

/// Host star properties for planet characterization
///
/// Groups the stellar parameters the environment models read: mass for
/// periods and tides, luminosity for zones and exosphere temperature, age
/// for tidal braking, and the ecosphere and greenhouse radii.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostStar {
    /// Solar masses
    pub mass: f64,
    /// Solar luminosities
    pub luminosity: f64,
    /// Years
    pub age: f64,
    /// AU
    pub ecosphere_radius: f64,
    /// AU
    pub greenhouse_radius: f64,
}

impl HostStar {
    pub fn from_star(star: &Star) -> Self {
        Self {
            mass: star.mass_ratio,
            luminosity: star.luminosity_ratio,
            age: star.age,
            ecosphere_radius: star.ecosphere_radius,
            greenhouse_radius: star.greenhouse_radius,
        }
    }

    /// Solar values (M = 1, L = 1, 4.6 Gyr)
    pub fn solar() -> Self {
        Self::from_star(&Star::solar_analog())
    }
}

/// Derived properties of a planet or moon
///
/// Accretion only fixes orbit and mass; every field here starts at its
/// default and is filled in once the system has formed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanetProperties {
    pub orbit_zone: Option<OrbitZone>,
    /// Equatorial radius (km)
    pub radius: f64,
    /// g/cc
    pub density: f64,
    /// Earth days
    pub orbital_period: f64,
    /// Hours
    pub day_length: f64,
    pub resonant_period: bool,
    /// Degrees
    pub axial_tilt: i32,
    /// cm/s
    pub escape_velocity: f64,
    /// cm/s²
    pub surface_acceleration: f64,
    /// Earth gravities
    pub surface_gravity: f64,
    /// cm/s
    pub rms_velocity: f64,
    /// Smallest molecular weight retained
    pub molecular_weight: f64,
    pub volatile_gas_inventory: f64,
    /// Millibars
    pub surface_pressure: f64,
    pub greenhouse_effect: bool,
    /// Kelvin
    pub boiling_point: f64,
    pub albedo: f64,
    /// Kelvin
    pub surface_temperature: f64,
    pub hydrosphere: f64,
    pub cloud_cover: f64,
    pub ice_cover: f64,
}

impl PlanetProperties {
    /// Inputs for the surface iteration from the fields already computed
    pub fn surface_inputs(&self, orbit_radius: f64, host: &HostStar) -> SurfaceInputs {
        SurfaceInputs {
            orbit_radius,
            ecosphere_radius: host.ecosphere_radius,
            radius: self.radius,
            molecular_weight: self.molecular_weight,
            surface_pressure: self.surface_pressure,
            boiling_point: self.boiling_point,
            volatile_gas_inventory: self.volatile_gas_inventory,
        }
    }

    pub fn apply_surface(&mut self, surface: &SurfaceConditions) {
        self.surface_temperature = surface.surface_temperature;
        self.albedo = surface.albedo;
        self.hydrosphere = surface.hydrosphere;
        self.cloud_cover = surface.cloud_cover;
        self.ice_cover = surface.ice_cover;
    }
}
