use serde::{Deserialize, Serialize};

/// One stock sheet definition.
///
/// The packer supports a single sheet size per invocation: dimensions and kerf
/// are taken from the first stock entry, while the total number of available
/// sheets is the sum of `qty` across the whole stock list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StockSheetSpec {
    /// Unique identifier of the stock sheet type
    pub id: String,
    /// Dimension along the length axis
    pub length_mm: f32,
    /// Dimension along the width axis
    pub width_mm: f32,
    /// Number of sheets available
    pub qty: usize,
    /// Blade width consumed between adjacent cuts
    #[serde(default)]
    pub kerf_mm: f32,
}

impl StockSheetSpec {
    pub fn area(&self) -> f32 {
        self.length_mm * self.width_mm
    }
}
