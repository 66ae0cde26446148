use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StellarError;
use crate::spectral::{LuminosityClass, SpectralClass, describe};

/// Ratio of the ecosphere radius inside which a planet suffers a runaway greenhouse
pub const GREENHOUSE_EFFECT_CONST: f64 = 0.93;

/// A star of the generated system
///
/// All ratios are relative to the Sun. Distances are in AU and times in years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    /// Spectral type label, e.g. `G2 V`
    pub classification: String,
    pub luminosity_class: LuminosityClass,
    pub mass_ratio: f64,
    pub luminosity_ratio: f64,
    /// Stellar radius (AU)
    pub radius: f64,
    /// Age (years)
    pub age: f64,
    /// Main-sequence lifetime (years)
    pub main_sequence_life: f64,
    /// Distance from the primary (AU); zero for the primary itself
    pub orbit_radius: f64,
    /// Distance at which insolation matches Earth's (AU)
    pub ecosphere_radius: f64,
    /// Inner edge of surface volatile retention (AU)
    pub greenhouse_radius: f64,
}

impl Star {
    /// A solar twin at the origin, useful as a fixed primary
    pub fn solar_analog() -> Self {
        Self {
            classification: "G2 V".to_string(),
            luminosity_class: LuminosityClass::MainSequence,
            mass_ratio: 1.0,
            luminosity_ratio: 1.0,
            radius: crate::generation::SOLAR_RADII_PER_AU,
            age: 4.6e9,
            main_sequence_life: 1.1e10,
            orbit_radius: 0.0,
            ecosphere_radius: 1.0,
            greenhouse_radius: GREENHOUSE_EFFECT_CONST,
        }
    }
}

/// A user-chosen star: spectral type, luminosity class, and orbit about the primary
///
/// Parses from the compact `<class><number><luminosity>/<orbit>` form, where the
/// luminosity id is one of `M` (main sequence), `G` (giant), `S` (supergiant)
/// or `D` (white dwarf).
///
/// ```
/// use stellar::StarSpec;
/// use stellar::spectral::{LuminosityClass, SpectralClass};
///
/// let spec: StarSpec = "G2M/0".parse().unwrap();
/// assert_eq!(spec.class, SpectralClass::G);
/// assert_eq!(spec.number, 2);
/// assert_eq!(spec.luminosity, LuminosityClass::MainSequence);
/// assert_eq!(spec.orbit_radius, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarSpec {
    pub class: SpectralClass,
    pub number: i32,
    pub luminosity: LuminosityClass,
    pub orbit_radius: f64,
}

impl StarSpec {
    pub fn description(&self) -> String {
        describe(self.class, self.number, self.luminosity)
    }
}

impl FromStr for StarSpec {
    type Err = StellarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || StellarError::MalformedStarType(s.to_string());
        let text = s.trim();

        let mut chars = text.chars();
        let class_id = chars.next().ok_or_else(malformed)?;
        let rest = chars.as_str();

        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(malformed)?;
        let number: i32 = rest[..digits_end].parse().map_err(|_| malformed())?;

        let mut tail = rest[digits_end..].chars();
        let luminosity_id = tail.next().ok_or_else(malformed)?;
        let orbit = tail.as_str().strip_prefix('/').ok_or_else(malformed)?;
        let orbit_radius: u32 = orbit.parse().map_err(|_| malformed())?;

        let class =
            SpectralClass::from_char(class_id).ok_or(StellarError::InvalidSpectralClass(class_id))?;
        if !(0..=9).contains(&number) {
            return Err(StellarError::InvalidSpectralNumber(number));
        }
        let luminosity = LuminosityClass::from_id(luminosity_id)
            .ok_or(StellarError::InvalidLuminosityClass(luminosity_id))?;

        Ok(Self {
            class,
            number,
            luminosity,
            orbit_radius: orbit_radius as f64,
        })
    }
}
