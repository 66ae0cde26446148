//! Orbit-crossing collisions between protoplanets and existing bodies
//!
//! A grown protoplanet either merges with the nearest body whose reach
//! overlaps its own, or joins the list as a new planet.

use planetary::units::Mass;
use stellar::Star;
use tracing::{debug, error, trace};

use crate::body::{Body, BodyKind, PlanetList};
use crate::constants::TRIVIAL_MASS;
use crate::dust::DustCloud;
use crate::error::{AccretionError, Result};
use crate::sweep::{LocalConditions, accrete_dust, critical_limit};

/// A grown body looking for a place in the planet list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Protoplanet {
    pub a: f64,
    pub e: f64,
    pub mass: f64,
    /// Conditions at its birthplace
    pub conditions: LocalConditions,
}

/// What became of a protoplanet handed to the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coalescence {
    /// Too small to keep
    Trivial,
    /// Absorbed by the body now at `index`
    Merged { index: usize },
    /// Added as a new body at `index`
    Inserted { index: usize },
}

/// Index of the nearest body whose orbit the candidate crosses
///
/// Either body reaching the other counts. Reach uses the existing body's
/// reduced mass for both sides. Ties keep the innermost.
///
/// # Arguments
///
/// * `planets` - Bodies already formed, sorted by semi-major axis
/// * `a` - Candidate semi-major axis (AU)
/// * `e` - Candidate eccentricity
///
/// # Returns
///
/// The list index of the body to merge with, or `None` when the orbit is clear
pub fn find_collision(planets: &PlanetList, a: f64, e: f64) -> Option<usize> {
    let mut closest: Option<(usize, f64)> = None;
    for (index, node) in planets.iter().enumerate() {
        let separation = node.a - a;
        let reduced_mass = node.reduced_mass();
        let (dist1, dist2) = if separation > 0.0 {
            // Neighbour lies farther out
            (
                a * (1.0 + e) * (1.0 + reduced_mass) - a,
                node.a - node.a * (1.0 - node.e) * (1.0 - reduced_mass),
            )
        } else {
            (
                a - a * (1.0 - e) * (1.0 - reduced_mass),
                node.a * (1.0 + node.e) * (1.0 + reduced_mass) - node.a,
            )
        };

        let distance = separation.abs();
        if distance <= dist1.abs() || distance <= dist2.abs() {
            match closest {
                Some((_, best)) if distance >= best => {}
                _ => closest = Some((index, distance)),
            }
        }
    }
    closest.map(|(index, _)| index)
}

/// Orbit of an existing body after absorbing an incoming one, as `(a, e)`
///
/// # Arguments
/// * `m1`, `a1`, `e1` - Mass (solar masses) and orbit of the body already in the list
/// * `m2`, `a2`, `e2` - Mass and orbit of the incoming protoplanet
///
/// # Returns
/// The mass-weighted harmonic mean of the axes and the eccentricity carried by
/// the combined angular momentum. The incoming body's momentum term takes the
/// fourth root of `1 - e²`, as the classic Dole/Burdick merge does. An
/// eccentricity whose square falls outside `[0, 1)` becomes 0.
pub fn merged_orbit(m1: f64, a1: f64, e1: f64, m2: f64, a2: f64, e2: f64) -> (f64, f64) {
    let total = m1 + m2;
    let new_a = total / (m1 / a1 + m2 / a2);

    let momentum = m1 * a1.sqrt() * (1.0 - e1.powi(2)).sqrt()
        + m2 * a2.sqrt() * (1.0 - e2.powi(2)).sqrt().sqrt();
    let mut temp = momentum / (total * new_a.sqrt());
    temp = 1.0 - temp.powi(2);
    if !(0.0..1.0).contains(&temp) {
        temp = 0.0;
    }
    (new_a, temp.sqrt())
}

/// Merge `candidate` into the body at `index` and let it sweep again
///
/// The survivor is re-inserted to keep the list sorted; its new index is
/// returned. A star survivor pushes its new orbit and mass back to `stars`.
pub fn collide_planets(
    planets: &mut PlanetList,
    index: usize,
    candidate: &Protoplanet,
    cloud: &mut DustCloud,
    luminosity_ratio: f64,
    stars: &mut [Star],
) -> Result<usize> {
    let Some(node) = planets.get(index) else {
        error!(index, "collision with a body outside the planet list");
        return Err(AccretionError::UnknownBody(index));
    };
    if let Some(id) = node.star.filter(|_| node.is_star()) {
        if id.0 >= stars.len() {
            error!(?id, "collision with a star missing from the star table");
            return Err(AccretionError::UnknownStar(id));
        }
    }

    let (new_a, new_e) = merged_orbit(
        node.mass,
        node.a,
        node.e,
        candidate.mass,
        candidate.a,
        candidate.e,
    );
    debug!(
        a = candidate.a,
        neighbor = node.a,
        merged = new_a,
        "collision with a {}",
        node.kind
    );

    let conditions = LocalConditions {
        dust_density: candidate.conditions.dust_density,
        critical_mass: critical_limit(new_a, new_e, luminosity_ratio),
    };
    let grown = accrete_dust(cloud, new_a, new_e, node.mass + candidate.mass, &conditions)?;

    let Some(mut body) = planets.remove(index) else {
        return Err(AccretionError::UnknownBody(index));
    };
    body.a = new_a;
    body.e = new_e;
    body.mass = grown.mass;
    if let Some(star) = body
        .star
        .filter(|_| body.is_star())
        .and_then(|id| stars.get_mut(id.0))
    {
        star.orbit_radius = body.a;
        star.mass_ratio = body.mass;
    }
    Ok(planets.insert_sorted(body))
}

/// Resolve a grown protoplanet against the planet list
///
/// # Example
/// ```
/// use accretion::body::{BodyKind, PlanetList};
/// use accretion::collision::{Coalescence, Protoplanet, coalesce_planetesimals};
/// use accretion::dust::DustCloud;
/// use accretion::sweep::LocalConditions;
///
/// let mut planets = PlanetList::new();
/// let mut cloud = DustCloud::new(0.25, 62.5).unwrap();
/// let candidate = Protoplanet {
///     a: 1.0,
///     e: 0.0,
///     mass: 3.0e-6,
///     conditions: LocalConditions { dust_density: 1.0e-4, critical_mass: 1.2e-5 },
/// };
/// let outcome = coalesce_planetesimals(
///     &mut planets, &mut cloud, &candidate, 1.0, BodyKind::Planet, &mut [],
/// ).unwrap();
/// assert_eq!(outcome, Coalescence::Inserted { index: 0 });
/// assert_eq!(planets.get(0).unwrap().kind, BodyKind::Planet);
/// ```
pub fn coalesce_planetesimals(
    planets: &mut PlanetList,
    cloud: &mut DustCloud,
    candidate: &Protoplanet,
    luminosity_ratio: f64,
    orbit_kind: BodyKind,
    stars: &mut [Star],
) -> Result<Coalescence> {
    if candidate.mass <= TRIVIAL_MASS {
        debug!(
            earth_masses = Mass::from_solar_masses(candidate.mass).to_earth_masses(),
            "trivial mass, not adding it"
        );
        return Ok(Coalescence::Trivial);
    }

    if let Some(index) = find_collision(planets, candidate.a, candidate.e) {
        let index = collide_planets(planets, index, candidate, cloud, luminosity_ratio, stars)?;
        return Ok(Coalescence::Merged { index });
    }

    let kind = if candidate.mass >= candidate.conditions.critical_mass {
        BodyKind::GasGiant
    } else {
        orbit_kind
    };
    trace!(a = candidate.a, %kind, "creating a new body");
    let index = planets.insert_sorted(Body::new(candidate.a, candidate.e, candidate.mass, kind));
    Ok(Coalescence::Inserted { index })
}
