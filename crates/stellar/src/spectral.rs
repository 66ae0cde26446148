use std::fmt;

use serde::{Deserialize, Serialize};

/// Harvard spectral classes covered by the stellar tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpectralClass {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

impl SpectralClass {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'O' => Some(SpectralClass::O),
            'B' => Some(SpectralClass::B),
            'A' => Some(SpectralClass::A),
            'F' => Some(SpectralClass::F),
            'G' => Some(SpectralClass::G),
            'K' => Some(SpectralClass::K),
            'M' => Some(SpectralClass::M),
            _ => None,
        }
    }

    /// K and M stars use the cool-supergiant radius relation
    pub fn cooler_than_g0(&self) -> bool {
        matches!(self, SpectralClass::K | SpectralClass::M)
    }
}

impl fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            SpectralClass::O => "O",
            SpectralClass::B => "B",
            SpectralClass::A => "A",
            SpectralClass::F => "F",
            SpectralClass::G => "G",
            SpectralClass::K => "K",
            SpectralClass::M => "M",
        };
        write!(f, "{}", str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LuminosityClass {
    MainSequence, // V
    Giant,        // III
    Supergiant,   // Ia
    WhiteDwarf,   // D
}

impl LuminosityClass {
    /// Parse the single-letter id used on the command line (`M`, `G`, `S`, `D`)
    pub fn from_id(c: char) -> Option<Self> {
        match c {
            'M' => Some(LuminosityClass::MainSequence),
            'G' => Some(LuminosityClass::Giant),
            'S' => Some(LuminosityClass::Supergiant),
            'D' => Some(LuminosityClass::WhiteDwarf),
            _ => None,
        }
    }

    pub fn id(&self) -> char {
        match self {
            LuminosityClass::MainSequence => 'M',
            LuminosityClass::Giant => 'G',
            LuminosityClass::Supergiant => 'S',
            LuminosityClass::WhiteDwarf => 'D',
        }
    }

    /// Table of spectral bins for this luminosity class
    pub fn table(&self) -> &'static [SpectralInfo; TABLE_ROWS] {
        match self {
            LuminosityClass::MainSequence => &MAIN_SEQUENCE_DATA,
            LuminosityClass::Giant => &GIANT_DATA,
            LuminosityClass::Supergiant => &SUPERGIANT_DATA,
            LuminosityClass::WhiteDwarf => &WHITE_DWARF_DATA,
        }
    }
}

impl fmt::Display for LuminosityClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            LuminosityClass::MainSequence => "V",
            LuminosityClass::Giant => "III",
            LuminosityClass::Supergiant => "Ia",
            LuminosityClass::WhiteDwarf => "D",
        };
        write!(f, "{}", str)
    }
}

/// One row of a spectral table
///
/// `max_mass` is the upper mass bound (solar masses) of the bin ending at this
/// class and number; `percentage` is the share of stars of this luminosity class
/// falling between the previous row and this one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralInfo {
    pub class: SpectralClass,
    pub number: i32,
    pub max_mass: f64,
    pub percentage: i32,
}

pub const TABLE_ROWS: usize = 15;

const fn row(class: SpectralClass, number: i32, max_mass: f64, percentage: i32) -> SpectralInfo {
    SpectralInfo {
        class,
        number,
        max_mass,
        percentage,
    }
}

use SpectralClass::{A, B, F, G, K, M, O};

// Bowers & Deeming, "Astrophysics I", p. 31, and a survey of near stars.

pub static MAIN_SEQUENCE_DATA: [SpectralInfo; TABLE_ROWS] = [
    row(M, 9, 0.1, 0),
    row(M, 5, 0.2, 35),
    row(M, 0, 0.5, 36),
    row(K, 5, 0.7, 7),
    row(K, 0, 0.8, 7),
    row(G, 5, 0.9, 3),
    row(G, 0, 1.1, 3),
    row(F, 5, 1.3, 2),
    row(F, 0, 1.7, 1),
    row(A, 5, 2.0, 1),
    row(A, 0, 3.2, 1),
    row(B, 5, 6.5, 1),
    row(B, 0, 17.8, 1),
    row(O, 5, 39.8, 1),
    row(O, 0, 60.0, 1),
];

pub static WHITE_DWARF_DATA: [SpectralInfo; TABLE_ROWS] = [
    row(M, 9, 0.0, 0),
    row(M, 5, 0.2, 0),
    row(M, 0, 0.4, 0),
    row(K, 5, 0.4, 1),
    row(K, 0, 0.4, 1),
    row(G, 5, 0.5, 1),
    row(G, 0, 0.6, 1),
    row(F, 5, 0.7, 4),
    row(F, 0, 0.8, 8),
    row(A, 5, 1.0, 28),
    row(A, 0, 0.5, 32),
    row(B, 5, 0.4, 13),
    row(B, 0, 0.4, 9),
    row(O, 5, 0.5, 1),
    row(O, 0, 0.7, 1),
];

pub static GIANT_DATA: [SpectralInfo; TABLE_ROWS] = [
    row(M, 9, 8.7, 0),
    row(M, 5, 7.9, 12),
    row(M, 0, 6.3, 19),
    row(K, 5, 5.0, 26),
    row(K, 0, 4.0, 25),
    row(G, 5, 3.2, 5),
    row(G, 0, 2.5, 4),
    row(F, 5, 2.4, 2),
    row(F, 0, 2.5, 1),
    row(A, 5, 2.7, 1),
    row(A, 0, 3.4, 1),
    row(B, 5, 7.0, 1),
    row(B, 0, 30.3, 1),
    row(O, 5, 60.0, 1),
    row(O, 0, 70.0, 1),
];

pub static SUPERGIANT_DATA: [SpectralInfo; TABLE_ROWS] = [
    row(M, 9, 22.3, 0),
    row(M, 5, 19.9, 12),
    row(M, 0, 15.8, 13),
    row(K, 5, 15.0, 3),
    row(K, 0, 12.6, 4),
    row(G, 5, 11.6, 3),
    row(G, 0, 10.0, 3),
    row(F, 5, 11.8, 8),
    row(F, 0, 12.6, 7),
    row(A, 5, 13.2, 6),
    row(A, 0, 15.8, 6),
    row(B, 5, 30.2, 12),
    row(B, 0, 50.1, 13),
    row(O, 5, 70.0, 4),
    row(O, 0, 90.0, 6),
];

/// Text description of a spectral type, e.g. `G2 V`, `K5 III`, `B0 Ia`
///
/// White dwarfs read `DA5` when named explicitly and `A5 D` when classified
/// from a mass, matching the two conventions of the stellar tables.
pub fn describe(class: SpectralClass, number: i32, luminosity: LuminosityClass) -> String {
    match luminosity {
        LuminosityClass::WhiteDwarf => format!("D{}{}", class, number),
        _ => format!("{}{} {}", class, number, luminosity),
    }
}

/// Derive a spectral type label from a stellar mass
///
/// Walks the luminosity class's table to the first bin whose upper mass bound
/// reaches `mass_ratio`, then interpolates the spectral number within that bin.
/// Masses beyond the last bin are labelled `?? ?`.
pub fn classify(mass_ratio: f64, luminosity: LuminosityClass) -> String {
    let table = luminosity.table();
    let mut prev_mass = 0.049;
    let mut i = 0;
    while i < TABLE_ROWS - 1 && table[i].max_mass < mass_ratio {
        prev_mass = table[i].max_mass;
        i += 1;
    }
    let info = &table[i];
    if i == TABLE_ROWS - 1 && info.max_mass < mass_ratio {
        return "?? ?".to_string();
    }

    let step = (5.0 * (info.max_mass - mass_ratio) / (info.max_mass - prev_mass)) as i32;
    format!("{}{} {}", info.class, info.number + step, luminosity)
}

/// Interpolate a stellar mass from a luminosity class and spectral type
///
/// Returns `None` when the tables give no positive mass (type-M white dwarfs).
pub fn star_mass(luminosity: LuminosityClass, class: SpectralClass, number: i32) -> Option<f64> {
    let table = luminosity.table();
    let mut prev_mass = 0.0;
    for info in table.iter() {
        if info.class == class && info.number <= number {
            let mass =
                info.max_mass - ((number - info.number) as f64 * (info.max_mass - prev_mass)) / 5.0;
            return (mass > 0.0).then_some(mass);
        }
        prev_mass = info.max_mass;
    }
    None
}
