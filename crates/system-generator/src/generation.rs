//! Stellar system generation pipeline
//!
//! Stars are built (or drawn at random), planets accrete about the primary,
//! planets inside or too close to the primary are removed, and every
//! remaining planet is characterized: bulk properties, optional moons, spin,
//! atmosphere and surface conditions.

use accretion::{Body, BodyKind, PlanetList, dist_masses, dist_moons};
use planetary::atmosphere::{
    VolatileSource, acceleration, boiling_point, escape_velocity, gravity, greenhouse,
    molecule_limit, pressure, rms_velocity, volatile_inventory,
};
use planetary::constants::{GAS_GIANT_ALBEDO, MOL_NITROGEN, ROCKY_AIRLESS_ALBEDO};
use planetary::interior::{empirical_density, kothari_radius, volume_density, volume_radius};
use planetary::orbit::{SpinState, day_length, inclination, period};
use planetary::temperature::effective_temperature;
use planetary::{HostStar, OrbitZone, PlanetProperties, iterate_surface_temp};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};
use stellar::{RandomSource, Star, generate_stars};
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::GenerationConfig;
use crate::error::Result;

/// Planets hotter than this (K) as airless rock are vaporized
const VAPORIZATION_TEMP: f64 = 2000.0;

/// A generated system: its stars and the bodies orbiting the primary
///
/// `bodies` holds one `BodyKind::Star` entry per star, interleaved with
/// planets in order of semi-major axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StellarSystem {
    pub id: Uuid,
    pub seed: u64,
    pub stars: Vec<Star>,
    pub bodies: PlanetList,
}

impl StellarSystem {
    pub fn primary(&self) -> Option<&Star> {
        self.stars.first()
    }

    /// Planets and gas giants, skipping star bodies
    pub fn planets(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter().filter(|body| !body.is_star())
    }
}

/// Generate a complete system from a configuration
///
/// The seed resolved from `config` drives every draw, so the same config
/// always yields the same system.
///
/// # Example
/// ```
/// use system_generator::{GenerationConfig, generate_stellar_system};
///
/// let config = GenerationConfig {
///     seed: Some(42),
///     stars: vec!["G2M/0".parse().unwrap()],
///     ..Default::default()
/// };
/// let system = generate_stellar_system(&config).unwrap();
/// assert_eq!(system.stars.len(), 1);
/// assert!(system.planets().count() > 0);
/// ```
pub fn generate_stellar_system(config: &GenerationConfig) -> Result<StellarSystem> {
    let id = config.system_id();
    let seed = config.seed.unwrap_or_else(|| id.as_u64_pair().0);
    let mut rng = ChaChaRng::seed_from_u64(seed);

    let mut stars = generate_stars(&config.stars, &mut rng)?;
    debug!(count = stars.len(), "creating system stars");
    let bodies = form_planets(&mut stars, config.moons, &mut rng)?;

    info!(
        %id,
        seed,
        stars = stars.len(),
        planets = bodies.iter().filter(|body| !body.is_star()).count(),
        "generated stellar system"
    );
    Ok(StellarSystem {
        id,
        seed,
        stars,
        bodies,
    })
}

/// Accrete, prune and characterize the planets of `stars[0]`
///
/// Companion stars take part in accretion and may gain mass; their table
/// entries are updated in place.
pub fn form_planets<R: RandomSource + ?Sized>(
    stars: &mut [Star],
    moons: bool,
    rng: &mut R,
) -> Result<PlanetList> {
    let mut bodies = dist_masses(stars, 0, rng)?;
    let Some(primary) = stars.first() else {
        return Ok(bodies);
    };

    check_planets(&mut bodies, primary);
    let host = HostStar::from_star(primary);
    for body in bodies.iter_mut().filter(|body| !body.is_star()) {
        characterize(body, &host, moons, rng)?;
    }
    Ok(bodies)
}

/// Remove planets swallowed by the primary or hot enough to vaporize
pub fn check_planets(bodies: &mut PlanetList, primary: &Star) {
    bodies.retain(|body| {
        if body.is_star() {
            return true;
        }
        if body.a <= primary.radius {
            debug!(a = body.a, "planet absorbed by primary");
            return false;
        }
        let temperature =
            effective_temperature(primary.ecosphere_radius, body.a, ROCKY_AIRLESS_ALBEDO);
        if temperature >= VAPORIZATION_TEMP {
            debug!(a = body.a, temperature, "planet vaporized by primary");
            return false;
        }
        true
    });
}

/// Fill in the derived properties of a planet, forming its moons if asked
pub fn characterize<R: RandomSource + ?Sized>(
    body: &mut Body,
    host: &HostStar,
    moons: bool,
    rng: &mut R,
) -> Result<()> {
    let gas_giant = body.is_gas_giant();
    let zone = OrbitZone::from_distance(body.a, host.luminosity);
    let mut properties = PlanetProperties {
        orbit_zone: Some(zone),
        ..Default::default()
    };

    if gas_giant {
        properties.density = empirical_density(body.mass, body.a, true, host.luminosity);
        properties.radius = volume_radius(body.mass, properties.density);
    } else {
        properties.radius = kothari_radius(body.mass, false, zone);
        properties.density = volume_density(body.mass, properties.radius);
    }

    if moons {
        let planet_a = body.a;
        let satellites = dist_moons(body.mass, properties.radius, host.luminosity, rng)?;
        debug!(a = planet_a, moons = satellites.len(), "built moon orbits for a planet");
        body.moons = satellites
            .into_iter()
            .map(|moon| moon_with_properties(moon, planet_a, zone, host))
            .collect();
    }

    properties.orbital_period = period(body.a, body.mass, host.mass);
    let day = day_length(
        &SpinState {
            mass: body.mass,
            radius: properties.radius,
            eccentricity: body.e,
            density: properties.density,
            orbit_radius: body.a,
            orbital_period: properties.orbital_period,
            gas_giant,
        },
        host,
    );
    properties.day_length = day.hours;
    properties.resonant_period = day.resonant;
    properties.axial_tilt = inclination(body.a, rng);

    properties.escape_velocity = escape_velocity(body.mass, properties.radius);
    properties.surface_acceleration = acceleration(body.mass, properties.radius);
    properties.rms_velocity = rms_velocity(MOL_NITROGEN, body.a, host.luminosity);
    properties.molecular_weight = molecule_limit(body.mass, properties.radius);

    if gas_giant {
        properties.albedo = rng.about(GAS_GIANT_ALBEDO, 0.1);
    } else {
        properties.surface_gravity = gravity(properties.surface_acceleration);
        properties.greenhouse_effect = greenhouse(zone, body.a, host.greenhouse_radius);
        properties.volatile_gas_inventory = volatile_inventory(
            &VolatileSource {
                mass: body.mass,
                escape_velocity: properties.escape_velocity,
                rms_velocity: properties.rms_velocity,
                zone,
                greenhouse: properties.greenhouse_effect,
            },
            host.mass,
            rng,
        );
        properties.surface_pressure = pressure(
            properties.volatile_gas_inventory,
            properties.radius,
            properties.surface_gravity,
        );
        if properties.surface_pressure > 0.0 {
            properties.boiling_point = boiling_point(properties.surface_pressure);
        }
        let surface = iterate_surface_temp(&properties.surface_inputs(body.a, host), rng);
        properties.apply_surface(&surface);
    }

    body.properties = properties;
    Ok(())
}

/// Radius, density and gravity of a moon, which shares its planet's zone
fn moon_with_properties(mut moon: Body, planet_a: f64, zone: OrbitZone, host: &HostStar) -> Body {
    let properties = &mut moon.properties;
    properties.orbit_zone = Some(zone);
    if moon.kind == BodyKind::GasGiant {
        properties.density = empirical_density(moon.mass, planet_a, true, host.luminosity);
        properties.radius = volume_radius(moon.mass, properties.density);
    } else {
        properties.radius = kothari_radius(moon.mass, false, zone);
        properties.density = volume_density(moon.mass, properties.radius);
    }
    properties.surface_acceleration = acceleration(moon.mass, properties.radius);
    properties.surface_gravity = gravity(properties.surface_acceleration);
    moon
}
