//! Protoplanet injection until the cloud runs out of dust
//!
//! Each trial drops a seed mass somewhere in the innermost band that still
//! holds dust, grows it, and hands it to the collision resolver. The innermost
//! dusty band moves steadily outward until nothing is left.

use planetary::units::Length;
use stellar::{RandomSource, Star};
use tracing::{debug, error, trace};

use crate::body::{Body, BodyKind, PlanetList, StarId};
use crate::collision::{Coalescence, Protoplanet, coalesce_planetesimals};
use crate::constants::{MOON_DUST_FACTOR, PROTOPLANET_MASS};
use crate::dust::DustCloud;
use crate::error::{AccretionError, Result};
use crate::sweep::{
    InfluenceZone, LocalConditions, accrete_dust, critical_limit, dust_density,
    inner_effect_limit, outer_effect_limit,
};

/// Closest stable orbit (AU) about a central mass
pub fn nearest_body(mass_ratio: f64) -> f64 {
    0.3 * mass_ratio.cbrt()
}

/// Farthest stable orbit (AU) about a central mass
pub fn farthest_body(mass_ratio: f64) -> f64 {
    50.0 * mass_ratio.cbrt()
}

/// Outer edge of the dust cloud (AU) set by the central mass
///
/// Around a planet the limit shrinks by 125 and, for `distance² <= 1`,
/// scales with `distance²`.
pub fn stellar_dust_limit(mass_ratio: f64, around_planet: Option<f64>) -> f64 {
    let limit = 200.0 * mass_ratio.cbrt();
    match around_planet {
        Some(distance) => {
            let primary_effect = distance.powi(2);
            if primary_effect <= 1.0 {
                limit / 125.0 * primary_effect
            } else {
                limit / 125.0
            }
        }
        None => limit,
    }
}

/// Distance (AU) inside which a body of the given diameter (km) breaks up
pub fn roche_limit(diameter: f64) -> f64 {
    Length::from_km(2.44 * diameter).to_au()
}

/// Where bodies may orbit and where the dust lies (AU)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiskBounds {
    pub planet_inner: f64,
    pub planet_outer: f64,
    pub dust_inner: f64,
    pub dust_outer: f64,
}

impl DiskBounds {
    /// Planet-forming disk around a star
    pub fn around_star(stellar_mass: f64) -> Self {
        let planet_inner = nearest_body(stellar_mass);
        let planet_outer = farthest_body(stellar_mass);
        Self {
            planet_inner,
            planet_outer,
            dust_inner: inner_effect_limit(planet_inner, 0.0, PROTOPLANET_MASS),
            dust_outer: stellar_dust_limit(stellar_mass, None)
                .min(outer_effect_limit(planet_outer, 0.0, PROTOPLANET_MASS)),
        }
    }

    /// Moon-forming disk around a planet of the given radius (km)
    pub fn around_planet(planet_mass: f64, planet_radius: f64) -> Self {
        let planet_inner = roche_limit(2.0 * planet_radius);
        let planet_outer = farthest_body(planet_mass);
        Self {
            planet_inner,
            planet_outer,
            dust_inner: inner_effect_limit(planet_inner, 0.0, PROTOPLANET_MASS),
            dust_outer: stellar_dust_limit(planet_mass, Some(planet_radius))
                .min(outer_effect_limit(planet_outer, 0.0, PROTOPLANET_MASS)),
        }
    }
}

/// Outcome of one injection trial
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Injection {
    /// No dust within reach of the seed; nothing changed
    NoDust { a: f64 },
    /// The seed could not grow
    TooNear { a: f64 },
    /// The grown body went to the collision resolver
    Accreted { a: f64, outcome: Coalescence },
}

/// One accretion process: a cloud about a central body and what forms in it
#[derive(Debug, Clone)]
pub struct AccretionDisk {
    cloud: DustCloud,
    planets: PlanetList,
    bounds: DiskBounds,
    central_mass: f64,
    luminosity_ratio: f64,
    orbit_kind: BodyKind,
}

impl AccretionDisk {
    /// Planets about `star`, joining the bodies already in `planets`
    pub fn around_star(star: &Star, planets: PlanetList) -> Result<Self> {
        let bounds = DiskBounds::around_star(star.mass_ratio);
        Ok(Self {
            cloud: DustCloud::new(bounds.dust_inner, bounds.dust_outer)?,
            planets,
            bounds,
            central_mass: star.mass_ratio,
            luminosity_ratio: star.luminosity_ratio,
            orbit_kind: BodyKind::Planet,
        })
    }

    /// Moons about a planet; `luminosity_ratio` is the host star's
    pub fn around_planet(planet_mass: f64, planet_radius: f64, luminosity_ratio: f64) -> Result<Self> {
        let bounds = DiskBounds::around_planet(planet_mass, planet_radius);
        Ok(Self {
            cloud: DustCloud::new(bounds.dust_inner, bounds.dust_outer)?,
            planets: PlanetList::new(),
            bounds,
            central_mass: planet_mass,
            luminosity_ratio,
            orbit_kind: BodyKind::Moon,
        })
    }

    pub fn cloud(&self) -> &DustCloud {
        &self.cloud
    }

    pub fn planets(&self) -> &PlanetList {
        &self.planets
    }

    pub fn bounds(&self) -> &DiskBounds {
        &self.bounds
    }

    pub fn into_planets(self) -> PlanetList {
        self.planets
    }

    /// Density law and gas threshold for a seed at `(a, e)`
    pub fn local_conditions(&self, a: f64, e: f64) -> LocalConditions {
        let mut density = dust_density(self.central_mass, a);
        if self.orbit_kind == BodyKind::Moon {
            density *= MOON_DUST_FACTOR;
        }
        LocalConditions {
            dust_density: density,
            critical_mass: critical_limit(a, e, self.luminosity_ratio),
        }
    }

    /// Run a single injection trial
    pub fn inject<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
        stars: &mut [Star],
    ) -> Result<Injection> {
        let e = rng.eccentricity();
        let Some(band) = self.cloud.first_dusty_band().copied() else {
            error!("dust band checking internal error");
            return Err(AccretionError::NoDustBand);
        };

        let DiskBounds {
            planet_inner,
            planet_outer,
            ..
        } = self.bounds;
        if planet_inner > planet_outer {
            error!(planet_inner, planet_outer, "orbit bounding internal error");
            return Err(AccretionError::InvalidOrbitBounds {
                inner: planet_inner,
                outer: planet_outer,
            });
        }

        let a = rng.uniform(
            band.inner_edge.max(planet_inner),
            band.outer_edge.min(planet_outer),
        );
        let seed = InfluenceZone::new(a, e, PROTOPLANET_MASS)?;
        if !self.cloud.has_dust_in(seed.r_inner, seed.r_outer) {
            trace!(a, "not enough dust");
            return Ok(Injection::NoDust { a });
        }

        debug!(a, kind = %self.orbit_kind, "injecting protoplanet");
        let conditions = self.local_conditions(a, e);
        let grown = accrete_dust(&mut self.cloud, a, e, PROTOPLANET_MASS, &conditions)?;
        if grown.mass == 0.0 || grown.mass == PROTOPLANET_MASS {
            trace!(a, "neighbor too near");
            return Ok(Injection::TooNear { a });
        }

        let candidate = Protoplanet {
            a,
            e,
            mass: grown.mass,
            conditions,
        };
        let outcome = coalesce_planetesimals(
            &mut self.planets,
            &mut self.cloud,
            &candidate,
            self.luminosity_ratio,
            self.orbit_kind,
            stars,
        )?;
        Ok(Injection::Accreted { a, outcome })
    }

    /// Inject protoplanets until no dust remains; returns the trial count
    pub fn run<R: RandomSource + ?Sized>(&mut self, rng: &mut R, stars: &mut [Star]) -> Result<usize> {
        let mut trials = 0;
        while self.cloud.dust_remains() {
            self.inject(rng, stars)?;
            trials += 1;
        }
        debug!(
            trials,
            bodies = self.planets.len(),
            kind = %self.orbit_kind,
            "dust cloud exhausted"
        );
        Ok(trials)
    }
}

/// One star body per star, sorted by orbit and linked back to the table
pub fn init_planet_list<R: RandomSource + ?Sized>(stars: &[Star], rng: &mut R) -> PlanetList {
    let mut planets = PlanetList::new();
    for (index, star) in stars.iter().enumerate() {
        trace!(index, "creating a body for a star");
        planets.insert_sorted(Body::from_star(StarId(index), star, rng.eccentricity()));
    }
    planets
}

/// Form planets about `stars[primary]` and return the full body list
///
/// # Arguments
///
/// * `stars` - Star table; a companion that absorbs material is updated in place
/// * `primary` - Index of the star the disk surrounds
/// * `rng` - Source for seed orbits and star-body eccentricities
///
/// # Returns
///
/// One body per star interleaved with the planets, sorted by semi-major axis
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use stellar::Star;
/// use accretion::injection::dist_masses;
///
/// let mut rng = ChaChaRng::seed_from_u64(1);
/// let mut stars = vec![Star::solar_analog()];
/// let bodies = dist_masses(&mut stars, 0, &mut rng).unwrap();
/// assert!(bodies.len() > 1);
/// assert!(bodies.is_sorted());
/// ```
pub fn dist_masses<R: RandomSource + ?Sized>(
    stars: &mut [Star],
    primary: usize,
    rng: &mut R,
) -> Result<PlanetList> {
    let planets = init_planet_list(stars, rng);
    let Some(star) = stars.get(primary) else {
        error!(primary, "primary missing from the star table");
        return Err(AccretionError::UnknownStar(StarId(primary)));
    };
    let mut disk = AccretionDisk::around_star(star, planets)?;
    disk.run(rng, stars)?;
    Ok(disk.into_planets())
}

/// Form moons about a planet of the given mass and radius (km)
///
/// The moon disk starts at the planet's Roche limit, holds ten times the
/// stellar dust density law, and is swept by `BodyKind::Moon` seeds.
///
/// # Arguments
///
/// * `planet_mass` - Mass of the host planet in solar masses
/// * `planet_radius` - Equatorial radius of the host planet in km
/// * `luminosity_ratio` - Stellar luminosity, which sets the gas threshold
/// * `rng` - Source for seed orbits
///
/// # Returns
///
/// The moons sorted by distance from the planet (AU), or
/// `AccretionError::InvalidCloudBounds` when the Roche limit lies beyond the
/// moon disk
pub fn dist_moons<R: RandomSource + ?Sized>(
    planet_mass: f64,
    planet_radius: f64,
    luminosity_ratio: f64,
    rng: &mut R,
) -> Result<PlanetList> {
    let mut disk = AccretionDisk::around_planet(planet_mass, planet_radius, luminosity_ratio)?;
    disk.run(rng, &mut [])?;
    Ok(disk.into_planets())
}
