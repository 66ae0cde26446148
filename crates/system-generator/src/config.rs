//! Generation settings, from command-line flags or a JSON file

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use stellar::StarSpec;
use uuid::Uuid;

use crate::error::{GenerationError, Result};

/// What to generate and how to seed it
///
/// Every field is optional in JSON:
///
/// ```
/// use system_generator::GenerationConfig;
///
/// let config = GenerationConfig::from_json(r#"{ "seed": 7, "stars": ["G2M/0", "M5M/30"] }"#).unwrap();
/// assert_eq!(config.seed, Some(7));
/// assert_eq!(config.stars.len(), 2);
/// assert!(!config.moons);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Explicit RNG seed; takes precedence over `name`
    pub seed: Option<u64>,
    /// System name, hashed into a reproducible seed
    pub name: Option<String>,
    /// Also form moons around every planet
    pub moons: bool,
    /// Stars in `G2M/0` form, primary first; empty draws them at random
    #[serde(with = "star_types")]
    pub stars: Vec<StarSpec>,
}

impl GenerationConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| GenerationError::Config(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| GenerationError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Identity of the system this config generates
    ///
    /// Named systems hash to a stable v5 UUID; unnamed, unseeded ones get a
    /// fresh v4.
    pub fn system_id(&self) -> Uuid {
        match &self.name {
            Some(name) => Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()),
            None => Uuid::new_v4(),
        }
    }
}

/// Star specs as the compact strings used on the command line
mod star_types {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};
    use stellar::StarSpec;

    pub fn serialize<S: Serializer>(specs: &[StarSpec], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(specs.iter().map(|spec| {
            format!(
                "{}{}{}/{}",
                spec.class,
                spec.number,
                spec.luminosity.id(),
                spec.orbit_radius
            )
        }))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<StarSpec>, D::Error> {
        Vec::<String>::deserialize(deserializer)?
            .iter()
            .map(|text| text.parse().map_err(D::Error::custom))
            .collect()
    }
}
