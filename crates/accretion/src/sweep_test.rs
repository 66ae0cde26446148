use std::f64::consts::PI;

use approx::assert_relative_eq;

use crate::constants::PROTOPLANET_MASS;
use crate::dust::{DustBand, DustCloud};
use crate::error::AccretionError;
use crate::sweep::{
    InfluenceZone, LocalConditions, accrete_dust, band_mass, collect_dust, critical_limit,
    dust_density, inner_effect_limit, outer_effect_limit, reduced_mass, swept_mass,
};

fn earth_orbit() -> LocalConditions {
    LocalConditions {
        dust_density: dust_density(1.0, 1.0),
        critical_mass: critical_limit(1.0, 0.0, 1.0),
    }
}

/// Heavy enough to take gas at any distance
fn gas_giant() -> LocalConditions {
    LocalConditions {
        dust_density: dust_density(1.0, 1.0),
        critical_mass: 0.0,
    }
}

// ========== Formulas ==========

#[test]
fn test_reduced_mass_of_equal_masses() {
    assert_relative_eq!(reduced_mass(1.0), 0.5f64.powf(0.25), epsilon = 1e-12);
    assert_eq!(reduced_mass(0.0), 0.0);
}

#[test]
fn test_effect_limits_for_circular_orbit() {
    assert_relative_eq!(inner_effect_limit(1.0, 0.0, 0.0), 1.0 / 1.2, epsilon = 1e-12);
    assert_relative_eq!(outer_effect_limit(1.0, 0.0, 0.0), 1.25, epsilon = 1e-12);
}

#[test]
fn test_eccentric_orbits_reach_farther() {
    assert!(inner_effect_limit(1.0, 0.2, 0.0) < inner_effect_limit(1.0, 0.0, 0.0));
    assert!(outer_effect_limit(1.0, 0.2, 0.0) > outer_effect_limit(1.0, 0.0, 0.0));
}

#[test]
fn test_critical_mass_at_earth() {
    assert_relative_eq!(critical_limit(1.0, 0.0, 1.0), 1.2e-5, epsilon = 1e-18);
    // Falls off outward and around brighter stars
    assert!(critical_limit(5.0, 0.0, 1.0) < critical_limit(1.0, 0.0, 1.0));
    assert!(critical_limit(1.0, 0.0, 4.0) < critical_limit(1.0, 0.0, 1.0));
}

#[test]
fn test_dust_thins_outward() {
    assert_relative_eq!(dust_density(1.0, 1.0), 6.0e-3 * (-5.0f64).exp(), epsilon = 1e-15);
    assert!(dust_density(1.0, 10.0) < dust_density(1.0, 1.0));
    assert!(dust_density(4.0, 1.0) > dust_density(1.0, 1.0));
}

#[test]
fn test_influence_zone_brackets_orbit() {
    let zone = InfluenceZone::new(1.0, 0.1, PROTOPLANET_MASS).unwrap();
    assert!(zone.r_inner < 1.0 && zone.r_outer > 1.0);
    assert_relative_eq!(zone.reduced_mass, reduced_mass(PROTOPLANET_MASS));
    assert_relative_eq!(zone.width(), zone.r_outer - zone.r_inner);
}

#[test]
fn test_influence_zone_rejects_negative_reach() {
    let err = InfluenceZone::new(1.0, 1.5, PROTOPLANET_MASS).unwrap_err();
    assert!(matches!(err, AccretionError::NegativeInfluence { r_inner } if r_inner < 0.0));
}

// ========== Swept mass ==========

#[test]
fn test_band_inside_zone_contributes_its_width() {
    let zone = InfluenceZone::new(1.0, 0.0, PROTOPLANET_MASS).unwrap();
    let band = DustBand::new(0.9, 1.1, true, true);
    let conditions = earth_orbit();
    let expected = 4.0 * PI * zone.reduced_mass * 0.2 * conditions.dust_density;
    assert_relative_eq!(
        band_mass(&band, &zone, PROTOPLANET_MASS, &conditions),
        expected,
        max_relative = 1e-12
    );
}

#[test]
fn test_ineligible_bands_contribute_nothing() {
    let zone = InfluenceZone::new(1.0, 0.0, PROTOPLANET_MASS).unwrap();
    let conditions = earth_orbit();
    let outside = DustBand::new(2.0, 3.0, true, true);
    let gas = DustBand::gas_only(0.9, 1.1);
    let inert = DustBand::inert(0.9, 1.1);
    assert_eq!(band_mass(&outside, &zone, PROTOPLANET_MASS, &conditions), 0.0);
    assert_eq!(band_mass(&gas, &zone, PROTOPLANET_MASS, &conditions), 0.0);
    assert_eq!(band_mass(&inert, &zone, PROTOPLANET_MASS, &conditions), 0.0);
}

#[test]
fn test_gas_giants_sweep_gas_bands() {
    let zone = InfluenceZone::new(1.0, 0.0, 1.0e-4).unwrap();
    let gas = DustBand::gas_only(0.9, 1.1);
    assert!(band_mass(&gas, &zone, 1.0e-4, &gas_giant()) > 0.0);
}

#[test]
fn test_gas_enriches_density_above_critical_mass() {
    let zone = InfluenceZone::new(1.0, 0.0, 1.0e-4).unwrap();
    let band = DustBand::new(0.9, 1.1, true, true);
    let dusty = LocalConditions {
        critical_mass: 1.0,
        ..gas_giant()
    };
    let below = band_mass(&band, &zone, 1.0e-4, &dusty);
    let above = band_mass(&band, &zone, 1.0e-4, &gas_giant());
    // Critical mass of zero takes the full gas to dust ratio
    assert_relative_eq!(above / below, 50.0, max_relative = 1e-12);
}

#[test]
fn test_swept_mass_starts_from_current_mass() {
    let cloud = DustCloud::new(0.25, 62.5).unwrap();
    let zone = InfluenceZone::new(1.0, 0.0, PROTOPLANET_MASS).unwrap();
    let conditions = earth_orbit();
    let total = swept_mass(&cloud, &zone, PROTOPLANET_MASS, &conditions);
    let single = band_mass(&cloud.bands()[0], &zone, PROTOPLANET_MASS, &conditions);
    assert_relative_eq!(total, PROTOPLANET_MASS + single, max_relative = 1e-12);
}

// ========== Cloud depletion ==========

#[test]
fn test_small_body_splits_band_and_leaves_gas() {
    let mut cloud = DustCloud::new(0.25, 62.5).unwrap();
    let zone = InfluenceZone::new(1.0, 0.0, PROTOPLANET_MASS).unwrap();
    let mass = collect_dust(&mut cloud, 1.0, 0.0, PROTOPLANET_MASS, &earth_orbit()).unwrap();
    assert!(mass > PROTOPLANET_MASS);
    assert_eq!(
        cloud.bands(),
        &[
            DustBand::new(0.25, zone.r_inner, true, true),
            DustBand::gas_only(zone.r_inner, zone.r_outer),
            DustBand::new(zone.r_outer, 62.5, true, true),
        ]
    );
    assert!(cloud.is_partition());
}

#[test]
fn test_gas_giant_leaves_inert_region() {
    let mut cloud = DustCloud::new(0.25, 62.5).unwrap();
    let zone = InfluenceZone::new(1.0, 0.0, 1.0e-4).unwrap();
    collect_dust(&mut cloud, 1.0, 0.0, 1.0e-4, &gas_giant()).unwrap();
    assert_eq!(
        cloud.bands(),
        &[
            DustBand::new(0.25, zone.r_inner, true, true),
            DustBand::inert(zone.r_inner, zone.r_outer),
            DustBand::new(zone.r_outer, 62.5, true, true),
        ]
    );
}

#[test]
fn test_covered_band_loses_only_dust() {
    let mut cloud = DustCloud::from_bands(vec![
        DustBand::new(0.25, 0.95, true, true),
        DustBand::new(0.95, 1.05, true, true),
        DustBand::new(1.05, 62.5, true, true),
    ])
    .unwrap();
    let zone = InfluenceZone::new(1.0, 0.0, PROTOPLANET_MASS).unwrap();
    collect_dust(&mut cloud, 1.0, 0.0, PROTOPLANET_MASS, &earth_orbit()).unwrap();

    // Middle band cleared, neighbours trimmed into the growing gas band
    assert_eq!(
        cloud.bands(),
        &[
            DustBand::new(0.25, zone.r_inner, true, true),
            DustBand::gas_only(zone.r_inner, 0.95),
            DustBand::gas_only(0.95, zone.r_outer),
            DustBand::new(zone.r_outer, 62.5, true, true),
        ]
    );
    assert!(cloud.is_partition());
}

#[test]
fn test_trimmed_band_extends_gas_neighbour_inward() {
    let mut cloud = DustCloud::from_bands(vec![
        DustBand::gas_only(0.25, 1.0),
        DustBand::new(1.0, 62.5, true, true),
    ])
    .unwrap();
    let zone = InfluenceZone::new(1.0, 0.0, PROTOPLANET_MASS).unwrap();
    collect_dust(&mut cloud, 1.0, 0.0, PROTOPLANET_MASS, &earth_orbit()).unwrap();
    assert_eq!(
        cloud.bands(),
        &[
            DustBand::gas_only(0.25, zone.r_outer),
            DustBand::new(zone.r_outer, 62.5, true, true),
        ]
    );
}

#[test]
fn test_trimmed_band_extends_gas_neighbour_outward() {
    let mut cloud = DustCloud::from_bands(vec![
        DustBand::new(0.25, 1.0, true, true),
        DustBand::gas_only(1.0, 62.5),
    ])
    .unwrap();
    let zone = InfluenceZone::new(1.0, 0.0, PROTOPLANET_MASS).unwrap();
    collect_dust(&mut cloud, 1.0, 0.0, PROTOPLANET_MASS, &earth_orbit()).unwrap();
    assert_eq!(
        cloud.bands(),
        &[
            DustBand::new(0.25, zone.r_inner, true, true),
            DustBand::gas_only(zone.r_inner, 62.5),
        ]
    );
}

#[test]
fn test_gas_giant_claims_gas_from_neighbours() {
    let mut cloud = DustCloud::from_bands(vec![
        DustBand::gas_only(0.25, 1.0),
        DustBand::new(1.0, 62.5, true, true),
    ])
    .unwrap();
    let zone = InfluenceZone::new(1.0, 0.0, 1.0e-4).unwrap();
    collect_dust(&mut cloud, 1.0, 0.0, 1.0e-4, &gas_giant()).unwrap();
    assert_eq!(
        cloud.bands(),
        &[
            DustBand::gas_only(0.25, zone.r_inner),
            DustBand::inert(zone.r_inner, zone.r_outer),
            DustBand::new(zone.r_outer, 62.5, true, true),
        ]
    );
}

#[test]
fn test_sweep_outside_dust_changes_nothing() {
    let mut cloud = DustCloud::from_bands(vec![
        DustBand::new(0.25, 0.5, true, true),
        DustBand::gas_only(0.5, 3.0),
        DustBand::new(3.0, 62.5, true, true),
    ])
    .unwrap();
    let before = cloud.clone();
    assert!(!cloud.has_dust_in(0.9, 1.1));
    let mass = collect_dust(&mut cloud, 1.0, 0.0, PROTOPLANET_MASS, &earth_orbit()).unwrap();
    assert_eq!(mass, PROTOPLANET_MASS);
    assert_eq!(cloud, before);
}

// ========== Growth ==========

#[test]
fn test_accretion_grows_and_converges() {
    let mut cloud = DustCloud::new(0.25, 62.5).unwrap();
    let grown = accrete_dust(&mut cloud, 1.0, 0.05, PROTOPLANET_MASS, &earth_orbit()).unwrap();
    assert!(grown.mass > PROTOPLANET_MASS);
    assert!(grown.dust_left);
    assert!(cloud.is_partition());
    assert!(!cloud.has_dust_in(0.95, 1.05));
}

#[test]
fn test_exhausting_the_last_band_reports_no_dust() {
    let mut cloud = DustCloud::from_bands(vec![
        DustBand::gas_only(0.25, 0.95),
        DustBand::new(0.95, 1.05, true, true),
        DustBand::gas_only(1.05, 62.5),
    ])
    .unwrap();
    let grown = accrete_dust(&mut cloud, 1.0, 0.0, PROTOPLANET_MASS, &earth_orbit()).unwrap();
    assert!(grown.mass > PROTOPLANET_MASS);
    assert!(!grown.dust_left);
    assert!(cloud.is_partition());
}
