use stellar::Star;

use crate::body::{Body, BodyKind, PlanetList, StarId};

fn planet(a: f64) -> Body {
    Body::new(a, 0.0, 1.0e-6, BodyKind::Planet)
}

#[test]
fn test_new_body_has_no_moons_or_properties() {
    let body = planet(1.0);
    assert!(body.moons.is_empty());
    assert!(body.star.is_none());
    assert!(body.properties.orbit_zone.is_none());
    assert!(!body.is_star());
    assert!(!body.is_gas_giant());
}

#[test]
fn test_star_body_links_back() {
    let star = Star {
        orbit_radius: 12.0,
        mass_ratio: 0.6,
        ..Star::solar_analog()
    };
    let body = Body::from_star(StarId(3), &star, 0.1);
    assert!(body.is_star());
    assert_eq!(body.star, Some(StarId(3)));
    assert_eq!(body.a, 12.0);
    assert_eq!(body.mass, 0.6);
    assert_eq!(body.e, 0.1);
}

#[test]
fn test_kind_names() {
    assert_eq!(BodyKind::Star.to_string(), "star");
    assert_eq!(BodyKind::GasGiant.to_string(), "gas giant");
    assert_eq!(BodyKind::Moon.to_string(), "moon");
}

#[test]
fn test_insert_keeps_order() {
    let mut planets = PlanetList::new();
    assert_eq!(planets.insert_sorted(planet(2.0)), 0);
    assert_eq!(planets.insert_sorted(planet(0.5)), 0);
    assert_eq!(planets.insert_sorted(planet(5.0)), 2);
    assert_eq!(planets.insert_sorted(planet(1.0)), 1);
    let orbits: Vec<f64> = planets.iter().map(|body| body.a).collect();
    assert_eq!(orbits, vec![0.5, 1.0, 2.0, 5.0]);
    assert!(planets.is_sorted());
}

#[test]
fn test_equal_orbits_keep_insertion_order() {
    let mut planets = PlanetList::new();
    planets.insert_sorted(Body::new(1.0, 0.0, 1.0, BodyKind::Planet));
    let index = planets.insert_sorted(Body::new(1.0, 0.0, 2.0, BodyKind::Moon));
    assert_eq!(index, 1);
    assert_eq!(planets.get(1).unwrap().kind, BodyKind::Moon);
}

#[test]
fn test_remove_out_of_range_is_none() {
    let mut planets = PlanetList::new();
    planets.insert_sorted(planet(1.0));
    assert!(planets.remove(3).is_none());
    assert_eq!(planets.remove(0).unwrap().a, 1.0);
    assert!(planets.is_empty());
}

#[test]
fn test_retain_and_total_mass() {
    let mut planets = PlanetList::new();
    for a in [0.5, 1.0, 2.0] {
        planets.insert_sorted(planet(a));
    }
    planets.retain(|body| body.a > 0.7);
    assert_eq!(planets.len(), 2);
    assert!((planets.total_mass() - 2.0e-6).abs() < 1e-18);
}

#[test]
fn test_typed_mass_and_orbit() {
    let moon = Body::new(0.00257, 0.05, 3.7e-8, BodyKind::Moon);
    assert!((moon.semi_major_axis().to_km() - 384_470.0).abs() < 100.0);
    assert!((moon.body_mass().to_earth_masses() - 0.0123).abs() < 1e-4);
}
