use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Aggregate metrics across all sheets of one packer invocation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutStats {
    /// Total area covered by placements
    pub used_area: f32,
    /// Total sheet area not covered by placements
    pub waste_area: f32,
    /// Number of saw cuts, after merging collinear segments
    pub cut_count: usize,
    /// Total length of all saw cuts
    pub cut_length: f32,
    /// Edge-banding length of the legacy 16mm bucket
    pub band_length_16: f32,
    /// Edge-banding length of the legacy 32mm bucket
    pub band_length_32: f32,
    /// Edge-banding length per non-legacy thickness class
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub band_length_other: BTreeMap<u32, f32>,
}

impl LayoutStats {
    /// Accumulates `length` of edge banding into the bucket for `thickness_mm`.
    pub fn add_banding(&mut self, thickness_mm: u32, length: f32) {
        if length <= 0.0 {
            return;
        }
        match thickness_mm {
            16 => self.band_length_16 += length,
            32 => self.band_length_32 += length,
            other => *self.band_length_other.entry(other).or_default() += length,
        }
    }

    pub fn total_band_length(&self) -> f32 {
        self.band_length_16 + self.band_length_32 + self.band_length_other.values().sum::<f32>()
    }
}
