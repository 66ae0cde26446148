use approx::assert_relative_eq;
use stellar::Star;

use crate::body::{Body, BodyKind, PlanetList, StarId};
use crate::collision::{
    Coalescence, Protoplanet, coalesce_planetesimals, collide_planets, find_collision,
    merged_orbit,
};
use crate::dust::{DustBand, DustCloud};
use crate::error::AccretionError;
use crate::sweep::LocalConditions;

const EARTH: f64 = 3.0e-6;

fn list(bodies: &[(f64, f64)]) -> PlanetList {
    let mut planets = PlanetList::new();
    for &(a, mass) in bodies {
        planets.insert_sorted(Body::new(a, 0.0, mass, BodyKind::Planet));
    }
    planets
}

/// Gas only, with a sliver of dust far out
fn depleted_cloud() -> DustCloud {
    DustCloud::from_bands(vec![
        DustBand::gas_only(0.25, 60.0),
        DustBand::new(60.0, 62.5, true, true),
    ])
    .unwrap()
}

fn candidate(a: f64, mass: f64) -> Protoplanet {
    Protoplanet {
        a,
        e: 0.0,
        mass,
        conditions: LocalConditions {
            dust_density: 1.0e-4,
            critical_mass: 1.2e-5,
        },
    }
}

// ========== Detection ==========

#[test]
fn test_empty_list_has_no_collision() {
    assert_eq!(find_collision(&PlanetList::new(), 1.0, 0.0), None);
}

#[test]
fn test_near_neighbour_collides() {
    let planets = list(&[(1.0, EARTH)]);
    assert_eq!(find_collision(&planets, 1.02, 0.0), Some(0));
    assert_eq!(find_collision(&planets, 0.98, 0.0), Some(0));
}

#[test]
fn test_distant_orbit_is_clear() {
    let planets = list(&[(1.0, EARTH)]);
    assert_eq!(find_collision(&planets, 2.0, 0.0), None);
    assert_eq!(find_collision(&planets, 0.5, 0.0), None);
}

#[test]
fn test_eccentric_candidate_reaches_farther() {
    let planets = list(&[(1.0, EARTH)]);
    assert_eq!(find_collision(&planets, 1.2, 0.0), None);
    assert_eq!(find_collision(&planets, 1.2, 0.3), Some(0));
}

#[test]
fn test_closest_neighbour_wins() {
    let planets = list(&[(1.0, EARTH), (1.05, EARTH)]);
    assert_eq!(find_collision(&planets, 1.04, 0.0), Some(1));
}

#[test]
fn test_tie_keeps_innermost() {
    let planets = list(&[(0.75, 0.01), (1.25, 0.01)]);
    assert_eq!(find_collision(&planets, 1.0, 0.0), Some(0));
}

#[test]
fn test_primary_at_centre_is_never_hit() {
    let mut planets = PlanetList::new();
    planets.insert_sorted(Body::from_star(StarId(0), &Star::solar_analog(), 0.2));
    assert_eq!(find_collision(&planets, 1.0, 0.2), None);
    assert_eq!(find_collision(&planets, 0.3, 0.5), None);
}

// ========== Merged orbits ==========

#[test]
fn test_merged_axis_is_mass_weighted_harmonic_mean() {
    let (a, _) = merged_orbit(3.0, 1.0, 0.0, 1.0, 2.0, 0.0);
    assert_relative_eq!(a, 4.0 / 3.5, epsilon = 1e-12);
}

#[test]
fn test_incoming_eccentricity_enters_through_fourth_root() {
    // Incoming body's 1 - e² term is damped by a second square root
    let (a, e) = merged_orbit(1.0e-6, 1.0, 0.0, 1.0e-6, 1.05, 0.3);
    assert_relative_eq!(a, 2.1 / 2.05, epsilon = 1e-12);
    assert_relative_eq!(e, 0.151694, epsilon = 1e-6);
}

#[test]
fn test_merge_is_not_symmetric_in_eccentricity() {
    let (a, e) = merged_orbit(1.0, 2.0, 0.3, 1.0, 2.0, 0.3);
    assert_relative_eq!(a, 2.0, epsilon = 1e-12);
    assert_relative_eq!(e, 0.261074, epsilon = 1e-6);
    let (_, swapped) = merged_orbit(1.0, 2.0, 0.0, 1.0, 2.0, 0.3);
    let (_, original) = merged_orbit(1.0, 2.0, 0.3, 1.0, 2.0, 0.0);
    assert!(swapped < original);
}

#[test]
fn test_out_of_range_eccentricity_is_clamped_to_circular() {
    // Equal circular orbits at 1 and 4 AU combine to more angular momentum
    // than a circular orbit at the merged axis can carry
    let (a, e) = merged_orbit(1.0, 1.0, 0.0, 1.0, 4.0, 0.0);
    assert_relative_eq!(a, 1.6, epsilon = 1e-12);
    assert_eq!(e, 0.0);
}

// ========== Resolution ==========

#[test]
fn test_collision_merges_into_existing_body() {
    let mut planets = list(&[(0.5, EARTH), (1.0, EARTH), (3.0, EARTH)]);
    let mut cloud = depleted_cloud();
    let incoming = candidate(1.02, 1.0e-6);

    let index = collide_planets(&mut planets, 1, &incoming, &mut cloud, 1.0, &mut []).unwrap();
    assert_eq!(index, 1);
    assert_eq!(planets.len(), 3);
    assert!(planets.is_sorted());

    let body = planets.get(index).unwrap();
    let (a, e) = merged_orbit(EARTH, 1.0, 0.0, 1.0e-6, 1.02, 0.0);
    assert_relative_eq!(body.a, a, epsilon = 1e-12);
    assert_relative_eq!(body.e, e, epsilon = 1e-12);
    // Nothing left to sweep below the critical mass
    assert_relative_eq!(body.mass, EARTH + 1.0e-6, epsilon = 1e-18);
    assert_eq!(body.kind, BodyKind::Planet);
}

#[test]
fn test_heavy_merger_keeps_its_kind() {
    let mut planets = list(&[(1.0, 1.0e-4)]);
    let mut cloud = depleted_cloud();
    let incoming = candidate(1.05, 1.0e-5);

    let index = collide_planets(&mut planets, 0, &incoming, &mut cloud, 1.0, &mut []).unwrap();
    let body = planets.get(index).unwrap();
    assert_eq!(body.kind, BodyKind::Planet);
    // Above the critical mass it sweeps up gas as well
    assert!(body.mass > 1.1e-4);
    assert!(cloud.is_partition());
}

#[test]
fn test_merger_past_critical_mass_is_not_reclassified() {
    let mut planets = list(&[(5.0, 2.0e-5)]);
    let mut cloud = depleted_cloud();
    let outcome = coalesce_planetesimals(
        &mut planets,
        &mut cloud,
        &candidate(5.05, 1.0e-5),
        1.0,
        BodyKind::Planet,
        &mut [],
    )
    .unwrap();
    assert_eq!(outcome, Coalescence::Merged { index: 0 });
    let body = planets.get(0).unwrap();
    assert_eq!(body.kind, BodyKind::Planet);
    assert!(body.mass >= 3.0e-5);
}

#[test]
fn test_merger_with_star_updates_star_table() {
    let mut stars = vec![
        Star::solar_analog(),
        Star {
            orbit_radius: 2.0,
            mass_ratio: 0.5,
            ..Star::solar_analog()
        },
    ];
    let mut planets = PlanetList::new();
    for (index, star) in stars.iter().enumerate() {
        planets.insert_sorted(Body::from_star(StarId(index), star, 0.0));
    }
    let mut cloud = depleted_cloud();

    let index =
        collide_planets(&mut planets, 1, &candidate(2.1, EARTH), &mut cloud, 1.0, &mut stars)
            .unwrap();
    let body = planets.get(index).unwrap();
    assert_eq!(body.kind, BodyKind::Star);
    assert_eq!(stars[1].orbit_radius, body.a);
    assert_eq!(stars[1].mass_ratio, body.mass);
    assert!(stars[1].mass_ratio > 0.5);
    // Primary untouched
    assert_eq!(stars[0].orbit_radius, 0.0);
}

#[test]
fn test_missing_star_is_an_error() {
    let mut planets = PlanetList::new();
    planets.insert_sorted(Body::from_star(StarId(5), &Star::solar_analog(), 0.0));
    let mut stars = vec![Star::solar_analog()];
    let mut cloud = depleted_cloud();
    let before = cloud.clone();

    let err = collide_planets(&mut planets, 0, &candidate(0.1, EARTH), &mut cloud, 1.0, &mut stars)
        .unwrap_err();
    assert_eq!(err, AccretionError::UnknownStar(StarId(5)));
    assert_eq!(planets.len(), 1);
    assert_eq!(cloud, before);
}

#[test]
fn test_collision_index_must_exist() {
    let mut planets = PlanetList::new();
    let mut cloud = depleted_cloud();
    let err = collide_planets(&mut planets, 0, &candidate(1.0, EARTH), &mut cloud, 1.0, &mut [])
        .unwrap_err();
    assert_eq!(err, AccretionError::UnknownBody(0));
}

#[test]
fn test_trivial_masses_are_dropped() {
    let mut planets = list(&[(1.0, EARTH)]);
    let mut cloud = depleted_cloud();
    let outcome = coalesce_planetesimals(
        &mut planets,
        &mut cloud,
        &candidate(1.01, 1.0e-14),
        1.0,
        BodyKind::Planet,
        &mut [],
    )
    .unwrap();
    assert_eq!(outcome, Coalescence::Trivial);
    assert_eq!(planets.len(), 1);
    assert_eq!(planets.get(0).unwrap().mass, EARTH);
}

#[test]
fn test_clear_orbit_inserts_new_body() {
    let mut planets = list(&[(0.5, EARTH), (3.0, EARTH)]);
    let mut cloud = depleted_cloud();
    let outcome = coalesce_planetesimals(
        &mut planets,
        &mut cloud,
        &candidate(1.0, EARTH),
        1.0,
        BodyKind::Moon,
        &mut [],
    )
    .unwrap();
    assert_eq!(outcome, Coalescence::Inserted { index: 1 });
    assert_eq!(planets.get(1).unwrap().kind, BodyKind::Moon);
    assert!(planets.is_sorted());
}

#[test]
fn test_massive_newcomer_is_gas_giant() {
    let mut planets = PlanetList::new();
    let mut cloud = depleted_cloud();
    let outcome = coalesce_planetesimals(
        &mut planets,
        &mut cloud,
        &candidate(5.0, 1.0e-4),
        1.0,
        BodyKind::Planet,
        &mut [],
    )
    .unwrap();
    assert_eq!(outcome, Coalescence::Inserted { index: 0 });
    assert!(planets.get(0).unwrap().is_gas_giant());
}

#[test]
fn test_crossing_orbit_merges() {
    let mut planets = list(&[(1.0, EARTH)]);
    let mut cloud = depleted_cloud();
    let outcome = coalesce_planetesimals(
        &mut planets,
        &mut cloud,
        &candidate(1.02, 1.0e-6),
        1.0,
        BodyKind::Planet,
        &mut [],
    )
    .unwrap();
    assert_eq!(outcome, Coalescence::Merged { index: 0 });
    assert_eq!(planets.len(), 1);
}
