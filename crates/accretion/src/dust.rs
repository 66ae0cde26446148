//! The dust and gas cloud as an ordered partition of orbital distance
//!
//! The cloud spans a fixed `[inner, outer]` interval split into contiguous
//! bands. Each band records whether dust and gas remain in it. Bands with
//! neither are inert: every sweep passes over them.

use serde::{Deserialize, Serialize};
use tracing::{error, trace};

use crate::error::{AccretionError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DustBand {
    /// AU
    pub inner_edge: f64,
    /// AU
    pub outer_edge: f64,
    pub dust_present: bool,
    pub gas_present: bool,
}

impl DustBand {
    pub fn new(inner_edge: f64, outer_edge: f64, dust_present: bool, gas_present: bool) -> Self {
        Self {
            inner_edge,
            outer_edge,
            dust_present,
            gas_present,
        }
    }

    /// Dust swept out, gas left behind
    pub fn gas_only(inner_edge: f64, outer_edge: f64) -> Self {
        Self::new(inner_edge, outer_edge, false, true)
    }

    /// Dust and gas both claimed
    pub fn inert(inner_edge: f64, outer_edge: f64) -> Self {
        Self::new(inner_edge, outer_edge, false, false)
    }

    pub fn width(&self) -> f64 {
        self.outer_edge - self.inner_edge
    }

    pub fn is_gas_only(&self) -> bool {
        !self.dust_present && self.gas_present
    }

    pub fn is_inert(&self) -> bool {
        !self.dust_present && !self.gas_present
    }

    /// Open-interval overlap with `[r_inner, r_outer]`
    pub fn overlaps(&self, r_inner: f64, r_outer: f64) -> bool {
        self.outer_edge > r_inner && self.inner_edge < r_outer
    }
}

/// Dust and gas remaining around a central body
///
/// # Example
/// ```
/// use accretion::dust::DustCloud;
///
/// let cloud = DustCloud::new(0.25, 62.5).unwrap();
/// assert_eq!(cloud.bands().len(), 1);
/// assert!(cloud.dust_remains());
/// assert!(cloud.has_dust_in(1.0, 2.0));
/// assert!(!cloud.has_dust_in(70.0, 80.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DustCloud {
    inner: f64,
    outer: f64,
    bands: Vec<DustBand>,
}

impl DustCloud {
    /// A fresh cloud: one band spanning `[inner, outer]` with dust and gas
    pub fn new(inner: f64, outer: f64) -> Result<Self> {
        if !inner.is_finite() || !outer.is_finite() || inner < 0.0 || inner >= outer {
            error!(inner, outer, "invalid dust cloud bounds");
            return Err(AccretionError::InvalidCloudBounds { inner, outer });
        }
        trace!(band_op = "create", inner, outer, "creating the dust cloud");
        Ok(Self {
            inner,
            outer,
            bands: vec![DustBand::new(inner, outer, true, true)],
        })
    }

    /// Rebuild a cloud from an existing band sequence
    ///
    /// The bands must already partition their span.
    pub fn from_bands(bands: Vec<DustBand>) -> Result<Self> {
        let (inner, outer) = match (bands.first(), bands.last()) {
            (Some(first), Some(last)) => (first.inner_edge, last.outer_edge),
            _ => return Err(AccretionError::InvalidCloudBounds { inner: 0.0, outer: 0.0 }),
        };
        let cloud = Self {
            inner,
            outer,
            bands,
        };
        if !cloud.is_partition() {
            return Err(AccretionError::InvalidCloudBounds { inner, outer });
        }
        Ok(cloud)
    }

    pub fn inner_bound(&self) -> f64 {
        self.inner
    }

    pub fn outer_bound(&self) -> f64 {
        self.outer
    }

    pub fn bands(&self) -> &[DustBand] {
        &self.bands
    }

    pub(crate) fn bands_mut(&mut self) -> &mut Vec<DustBand> {
        &mut self.bands
    }

    /// Whether any band meeting `[inside, outside]` still holds dust
    pub fn has_dust_in(&self, inside: f64, outside: f64) -> bool {
        self.bands
            .iter()
            .skip_while(|band| band.outer_edge < inside)
            .take_while(|band| band.inner_edge < outside)
            .any(|band| band.dust_present)
    }

    pub fn dust_remains(&self) -> bool {
        self.bands.iter().any(|band| band.dust_present)
    }

    /// Innermost band still holding dust
    pub fn first_dusty_band(&self) -> Option<&DustBand> {
        self.bands.iter().find(|band| band.dust_present)
    }

    /// Bands are contiguous, non-overlapping, of positive width, and span
    /// exactly the cloud's bounds
    pub fn is_partition(&self) -> bool {
        let (Some(first), Some(last)) = (self.bands.first(), self.bands.last()) else {
            return false;
        };
        first.inner_edge == self.inner
            && last.outer_edge == self.outer
            && self.bands.iter().all(|band| band.inner_edge < band.outer_edge)
            && self
                .bands
                .windows(2)
                .all(|pair| pair[0].outer_edge == pair[1].inner_edge)
    }

    /// Drop zero-width bands and coalesce neighbouring inert bands
    pub(crate) fn normalize(&mut self) {
        self.bands.retain(|band| band.inner_edge < band.outer_edge);
        self.bands.dedup_by(|next, kept| {
            if kept.is_inert() && next.is_inert() && kept.outer_edge == next.inner_edge {
                kept.outer_edge = next.outer_edge;
                true
            } else {
                false
            }
        });
    }
}
