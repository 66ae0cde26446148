use std::fmt;

use planetary::{Length, Mass, PlanetProperties};
use serde::{Deserialize, Serialize};
use stellar::Star;

use crate::sweep::reduced_mass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyKind {
    Star,
    Planet,
    GasGiant,
    Moon,
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            BodyKind::Star => "star",
            BodyKind::Planet => "planet",
            BodyKind::GasGiant => "gas giant",
            BodyKind::Moon => "moon",
        };
        write!(f, "{}", str)
    }
}

/// Index of a star in the system's star table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StarId(pub usize);

/// A star, planet, gas giant, or moon on its orbit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Semi-major axis (AU)
    pub a: f64,
    pub e: f64,
    /// Solar masses
    pub mass: f64,
    pub kind: BodyKind,
    /// Sorted by semi-major axis about this body
    pub moons: Vec<Body>,
    /// Back-link to the star table for `BodyKind::Star`
    pub star: Option<StarId>,
    pub properties: PlanetProperties,
}

impl Body {
    pub fn new(a: f64, e: f64, mass: f64, kind: BodyKind) -> Self {
        Self {
            a,
            e,
            mass,
            kind,
            moons: Vec::new(),
            star: None,
            properties: PlanetProperties::default(),
        }
    }

    /// The body standing in for a star in the planet list
    pub fn from_star(id: StarId, star: &Star, e: f64) -> Self {
        Self {
            star: Some(id),
            ..Self::new(star.orbit_radius, e, star.mass_ratio, BodyKind::Star)
        }
    }

    pub fn is_star(&self) -> bool {
        self.kind == BodyKind::Star
    }

    pub fn is_gas_giant(&self) -> bool {
        self.kind == BodyKind::GasGiant
    }

    pub fn reduced_mass(&self) -> f64 {
        reduced_mass(self.mass)
    }

    pub fn body_mass(&self) -> Mass {
        Mass::from_solar_masses(self.mass)
    }

    pub fn semi_major_axis(&self) -> Length {
        Length::from_au(self.a)
    }
}

/// Bodies ordered by semi-major axis
///
/// Equal semi-major axes keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanetList {
    bodies: Vec<Body>,
}

impl PlanetList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.bodies.iter()
    }

    /// Mutable access for derived properties and moons
    ///
    /// Changing `a` through this breaks the ordering.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Body> {
        self.bodies.iter_mut()
    }

    pub fn as_slice(&self) -> &[Body] {
        &self.bodies
    }

    /// Insert before the first body strictly farther out; returns its index
    pub fn insert_sorted(&mut self, body: Body) -> usize {
        let index = self.bodies.partition_point(|node| node.a <= body.a);
        self.bodies.insert(index, body);
        index
    }

    pub fn remove(&mut self, index: usize) -> Option<Body> {
        (index < self.bodies.len()).then(|| self.bodies.remove(index))
    }

    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&Body) -> bool,
    {
        self.bodies.retain(keep);
    }

    pub fn is_sorted(&self) -> bool {
        self.bodies.windows(2).all(|pair| pair[0].a <= pair[1].a)
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|body| body.mass).sum()
    }

    pub fn into_vec(self) -> Vec<Body> {
        self.bodies
    }
}

impl FromIterator<Body> for PlanetList {
    fn from_iter<I: IntoIterator<Item = Body>>(iter: I) -> Self {
        let mut planets = Self::new();
        for body in iter {
            planets.insert_sorted(body);
        }
        planets
    }
}

impl IntoIterator for PlanetList {
    type Item = Body;
    type IntoIter = std::vec::IntoIter<Body>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.into_iter()
    }
}

impl<'a> IntoIterator for &'a PlanetList {
    type Item = &'a Body;
    type IntoIter = std::slice::Iter<'a, Body>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}
