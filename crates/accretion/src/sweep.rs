//! Sweeping dust and gas into a growing body
//!
//! A body of mass `m` on an orbit `(a, e)` gravitationally reaches the annulus
//! `[r_inner, r_outer]`. Each sweep integrates the dust (and, above the
//! critical mass, gas) inside that annulus and then clears what was taken
//! from the cloud. Growth repeats until a sweep adds less than 0.1%.
//!
//! # References
//! - Dole (1969), "Formation of Planetary Systems by Aggregation", RAND P-4226

use std::f64::consts::PI;

use tracing::{error, trace};

use crate::constants::{
    ALPHA, CLOUD_ECCENTRICITY, CRITICAL_MASS_COEFF, DUST_DENSITY_COEFF, GAS_DUST_RATIO,
    GROWTH_THRESHOLD, N,
};
use crate::dust::{DustBand, DustCloud};
use crate::error::{AccretionError, Result};

/// Scales a body's reach: `(m / (1 + m))^¼`
pub fn reduced_mass(mass: f64) -> f64 {
    (mass / (1.0 + mass)).powf(0.25)
}

/// Innermost distance reached from perihelion
pub fn inner_effect_limit(a: f64, e: f64, factor: f64) -> f64 {
    a * (1.0 - e) * (1.0 - factor) / (1.0 + CLOUD_ECCENTRICITY)
}

/// Outermost distance reached from aphelion
pub fn outer_effect_limit(a: f64, e: f64, factor: f64) -> f64 {
    a * (1.0 + e) * (1.0 + factor) / (1.0 - CLOUD_ECCENTRICITY)
}

/// Mass (solar masses) above which a body also accretes gas
///
/// # Arguments
///
/// * `a` - Semi-major axis (AU)
/// * `e` - Eccentricity; the limit is taken at perihelion
/// * `luminosity_ratio` - Stellar luminosity in solar units
pub fn critical_limit(a: f64, e: f64, luminosity_ratio: f64) -> f64 {
    let perihelion = a - a * e;
    CRITICAL_MASS_COEFF * (perihelion * luminosity_ratio.sqrt()).powf(-0.75)
}

/// Dust density at distance `a` around a central body of the given mass
pub fn dust_density(central_mass: f64, a: f64) -> f64 {
    DUST_DENSITY_COEFF * central_mass.sqrt() * (-ALPHA * a.powf(1.0 / N)).exp()
}

/// Region of gravitational influence of a body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfluenceZone {
    pub a: f64,
    pub e: f64,
    pub reduced_mass: f64,
    pub r_inner: f64,
    pub r_outer: f64,
}

impl InfluenceZone {
    pub fn new(a: f64, e: f64, mass: f64) -> Result<Self> {
        let reduced_mass = reduced_mass(mass);
        let r_inner = inner_effect_limit(a, e, reduced_mass);
        let r_outer = outer_effect_limit(a, e, reduced_mass);
        if r_inner < 0.0 {
            error!(a, e, mass, r_inner, "negative influence limit");
            return Err(AccretionError::NegativeInfluence { r_inner });
        }
        Ok(Self {
            a,
            e,
            reduced_mass,
            r_inner,
            r_outer,
        })
    }

    pub fn width(&self) -> f64 {
        self.r_outer - self.r_inner
    }
}

/// Density law and gas threshold at a protoplanet's birthplace
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalConditions {
    pub dust_density: f64,
    pub critical_mass: f64,
}

/// A band takes part in a sweep when it still has gas, lies inside the zone,
/// and has dust or the body is heavy enough to take gas alone
fn eligible(band: &DustBand, zone: &InfluenceZone, mass: f64, critical_mass: f64) -> bool {
    band.gas_present
        && band.overlaps(zone.r_inner, zone.r_outer)
        && (band.dust_present || mass >= critical_mass)
}

/// Mass one band contributes to a body sweeping `zone`
pub fn band_mass(
    band: &DustBand,
    zone: &InfluenceZone,
    mass: f64,
    conditions: &LocalConditions,
) -> f64 {
    let critical_mass = conditions.critical_mass;
    if !eligible(band, zone, mass, critical_mass) {
        return 0.0;
    }

    let mass_density = if mass < critical_mass {
        conditions.dust_density
    } else {
        GAS_DUST_RATIO * conditions.dust_density
            / (1.0 + (critical_mass / mass).sqrt() * (GAS_DUST_RATIO - 1.0))
    };

    let bandwidth = zone.width();
    let beyond_outer = (zone.r_outer - band.outer_edge).max(0.0);
    let beyond_inner = (band.inner_edge - zone.r_inner).max(0.0);
    let width = bandwidth - beyond_outer - beyond_inner;
    let volume = 4.0
        * PI
        * zone.a.powi(2)
        * zone.reduced_mass
        * (1.0 - zone.e * (beyond_outer - beyond_inner) / bandwidth)
        * width;
    volume * mass_density
}

/// Mass after one sweep, without touching the cloud
pub fn swept_mass(
    cloud: &DustCloud,
    zone: &InfluenceZone,
    mass: f64,
    conditions: &LocalConditions,
) -> f64 {
    cloud
        .bands()
        .iter()
        .fold(mass, |total, band| total + band_mass(band, zone, mass, conditions))
}

/// One sweep: accumulate the swept mass, then clear the swept region
///
/// Below the critical mass the swept region keeps its gas; at or above it
/// the region becomes inert.
///
/// # Returns
///
/// The body's mass plus everything it reached, or
/// `AccretionError::NegativeInfluence` when its inner reach falls below zero
pub fn collect_dust(
    cloud: &mut DustCloud,
    a: f64,
    e: f64,
    mass: f64,
    conditions: &LocalConditions,
) -> Result<f64> {
    let zone = InfluenceZone::new(a, e, mass)?;
    let accumulated = swept_mass(cloud, &zone, mass, conditions);
    deplete(cloud, &zone, mass, conditions.critical_mass);
    Ok(accumulated)
}

fn deplete(cloud: &mut DustCloud, zone: &InfluenceZone, mass: f64, critical_mass: f64) {
    let takes_gas = mass >= critical_mass;
    let swept: fn(f64, f64) -> DustBand = if takes_gas {
        DustBand::inert
    } else {
        DustBand::gas_only
    };

    let bands = cloud.bands_mut();
    let mut i = 0;
    while i < bands.len() {
        let band = bands[i];
        if !eligible(&band, zone, mass, critical_mass) {
            i += 1;
            continue;
        }

        let beyond_outer = zone.r_outer > band.outer_edge;
        let beyond_inner = zone.r_inner < band.inner_edge;
        match (beyond_inner, beyond_outer) {
            // Zone lies inside the band: split around it
            (false, false) => {
                let pieces = [
                    DustBand {
                        outer_edge: zone.r_inner,
                        ..band
                    },
                    swept(zone.r_inner, zone.r_outer),
                    DustBand {
                        inner_edge: zone.r_outer,
                        ..band
                    },
                ];
                bands.splice(i..=i, pieces);
                trace!(
                    band_op = "split",
                    inner = zone.r_inner,
                    outer = zone.r_outer,
                    "splitting a dust band"
                );
                i += 3;
            }
            // Zone covers the whole band
            (true, true) => {
                bands[i] = swept(band.inner_edge, band.outer_edge);
                trace!(
                    band_op = "clear",
                    inner = band.inner_edge,
                    outer = band.outer_edge,
                    takes_gas,
                    "clearing a dust band"
                );
                i += 1;
            }
            // Zone reaches over the band's inner edge
            (true, false) => {
                let extend_previous = !takes_gas
                    && i > 0
                    && bands[i - 1].is_gas_only()
                    && bands[i - 1].outer_edge == band.inner_edge;
                bands[i].inner_edge = zone.r_outer;
                if extend_previous {
                    bands[i - 1].outer_edge = zone.r_outer;
                    trace!(band_op = "extend", outer = zone.r_outer, "growing a gas band");
                    i += 1;
                } else {
                    bands.insert(i, swept(band.inner_edge, zone.r_outer));
                    trace!(
                        band_op = "shrink",
                        inner = zone.r_outer,
                        outer = band.outer_edge,
                        "reducing a dust band"
                    );
                    i += 2;
                }
            }
            // Zone reaches over the band's outer edge
            (false, true) => {
                let extend_next = !takes_gas
                    && i + 1 < bands.len()
                    && bands[i + 1].is_gas_only()
                    && bands[i + 1].inner_edge == band.outer_edge;
                bands[i].outer_edge = zone.r_inner;
                if extend_next {
                    bands[i + 1].inner_edge = zone.r_inner;
                    trace!(band_op = "extend", inner = zone.r_inner, "growing a gas band");
                } else {
                    bands.insert(i + 1, swept(zone.r_inner, band.outer_edge));
                    trace!(
                        band_op = "shrink",
                        inner = band.inner_edge,
                        outer = zone.r_inner,
                        "reducing a dust band"
                    );
                }
                i += 2;
            }
        }
    }
    cloud.normalize();
}

/// Final mass of a grown body and whether the cloud still holds dust
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accretion {
    pub mass: f64,
    pub dust_left: bool,
}

/// Grow a body by repeated sweeps until the gain drops below 0.1%
///
/// # Example
/// ```
/// use accretion::dust::DustCloud;
/// use accretion::sweep::{LocalConditions, accrete_dust, critical_limit, dust_density};
///
/// let mut cloud = DustCloud::new(0.25, 62.5).unwrap();
/// let conditions = LocalConditions {
///     dust_density: dust_density(1.0, 1.0),
///     critical_mass: critical_limit(1.0, 0.0, 1.0),
/// };
/// let grown = accrete_dust(&mut cloud, 1.0, 0.0, 1.0e-15, &conditions).unwrap();
/// assert!(grown.mass > 1.0e-15);
/// assert!(grown.dust_left);
/// assert!(cloud.is_partition());
/// ```
pub fn accrete_dust(
    cloud: &mut DustCloud,
    a: f64,
    e: f64,
    mass: f64,
    conditions: &LocalConditions,
) -> Result<Accretion> {
    let mut new_mass = mass;
    loop {
        let previous = new_mass;
        new_mass = collect_dust(cloud, a, e, previous, conditions)?;
        if new_mass - previous <= GROWTH_THRESHOLD * previous {
            break;
        }
    }
    Ok(Accretion {
        mass: new_mass,
        dust_left: cloud.dust_remains(),
    })
}
