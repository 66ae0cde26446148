use approx::assert_relative_eq;

use crate::spectral::{
    GIANT_DATA, LuminosityClass, MAIN_SEQUENCE_DATA, SUPERGIANT_DATA, SpectralClass,
    WHITE_DWARF_DATA, classify, describe, star_mass,
};

// ============================================================================
// Display and parsing
// ============================================================================

#[test]
fn test_spectral_class_round_trips_through_char() {
    for c in ['O', 'B', 'A', 'F', 'G', 'K', 'M'] {
        let class = SpectralClass::from_char(c).unwrap();
        assert_eq!(format!("{}", class), c.to_string());
    }
    assert_eq!(SpectralClass::from_char('L'), None);
}

#[test]
fn test_luminosity_class_ids() {
    assert_eq!(
        LuminosityClass::from_id('M'),
        Some(LuminosityClass::MainSequence)
    );
    assert_eq!(LuminosityClass::from_id('G'), Some(LuminosityClass::Giant));
    assert_eq!(
        LuminosityClass::from_id('S'),
        Some(LuminosityClass::Supergiant)
    );
    assert_eq!(
        LuminosityClass::from_id('D'),
        Some(LuminosityClass::WhiteDwarf)
    );
    assert_eq!(LuminosityClass::from_id('V'), None);
    assert_eq!(LuminosityClass::Giant.id(), 'G');
}

#[test]
fn test_luminosity_class_display() {
    assert_eq!(format!("{}", LuminosityClass::MainSequence), "V");
    assert_eq!(format!("{}", LuminosityClass::Giant), "III");
    assert_eq!(format!("{}", LuminosityClass::Supergiant), "Ia");
    assert_eq!(format!("{}", LuminosityClass::WhiteDwarf), "D");
}

#[test]
fn test_describe_uses_white_dwarf_prefix() {
    use LuminosityClass::*;
    assert_eq!(describe(SpectralClass::G, 2, MainSequence), "G2 V");
    assert_eq!(describe(SpectralClass::K, 5, Giant), "K5 III");
    assert_eq!(describe(SpectralClass::B, 0, Supergiant), "B0 Ia");
    assert_eq!(describe(SpectralClass::A, 5, WhiteDwarf), "DA5");
}

// ============================================================================
// Tables
// ============================================================================

#[test]
fn test_population_shares_sum_to_one_hundred() {
    for table in [
        &MAIN_SEQUENCE_DATA,
        &WHITE_DWARF_DATA,
        &GIANT_DATA,
        &SUPERGIANT_DATA,
    ] {
        let total: i32 = table.iter().map(|info| info.percentage).sum();
        assert_eq!(total, 100);
    }
}

#[test]
fn test_main_sequence_masses_increase_toward_early_types() {
    for pair in MAIN_SEQUENCE_DATA.windows(2) {
        assert!(pair[0].max_mass < pair[1].max_mass);
    }
}

// ============================================================================
// Mass interpolation
// ============================================================================

#[test]
fn test_star_mass_interpolates_within_bin() {
    // G2 lies two fifths of the way from G0 (1.1) toward G5 (0.9)
    let mass = star_mass(LuminosityClass::MainSequence, SpectralClass::G, 2).unwrap();
    assert_relative_eq!(mass, 1.02, epsilon = 1e-12);

    let mass = star_mass(LuminosityClass::MainSequence, SpectralClass::M, 7).unwrap();
    assert_relative_eq!(mass, 0.16, epsilon = 1e-12);
}

#[test]
fn test_star_mass_on_bin_edge_is_tabulated_value() {
    let mass = star_mass(LuminosityClass::MainSequence, SpectralClass::M, 9).unwrap();
    assert_relative_eq!(mass, 0.1);

    let mass = star_mass(LuminosityClass::Giant, SpectralClass::K, 0).unwrap();
    assert_relative_eq!(mass, 4.0);
}

#[test]
fn test_type_m9_white_dwarf_has_no_mass() {
    assert_eq!(
        star_mass(LuminosityClass::WhiteDwarf, SpectralClass::M, 9),
        None
    );
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn test_classify_solar_mass() {
    assert_eq!(classify(1.0, LuminosityClass::MainSequence), "G2 V");
}

#[test]
fn test_classify_white_dwarf_uses_suffix() {
    assert_eq!(classify(0.6, LuminosityClass::WhiteDwarf), "G0 D");
}

#[test]
fn test_classify_beyond_table_is_unknown() {
    assert_eq!(classify(100.0, LuminosityClass::MainSequence), "?? ?");
    assert_eq!(classify(95.0, LuminosityClass::Supergiant), "?? ?");
}

#[test]
fn test_classify_top_row() {
    assert_eq!(classify(60.0, LuminosityClass::MainSequence), "O0 V");
}
