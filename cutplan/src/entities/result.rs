use serde::{Deserialize, Serialize};

use crate::entities::{LayoutStats, SheetLayout};

/// Why residual demand for a part could not be satisfied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnplacedReason {
    /// The part does not fit an empty stock sheet in any legal orientation
    TooLargeForSheet,
    /// The part fits, but the sheet supply ran out before it could be placed
    InsufficientSheetCapacity,
}

/// Residual demand for one part, grouped by part id rather than by instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnplacedPart {
    pub part_id: String,
    pub count: usize,
    pub reason: UnplacedReason,
}

/// Top-level output of one packer invocation. Constructed once, never mutated
/// after return.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Sheets in fill order
    pub sheets: Vec<SheetLayout>,
    pub stats: LayoutStats,
    /// Demand that could not be satisfied; callers must check this explicitly
    #[serde(default)]
    pub unplaced: Vec<UnplacedPart>,
}

impl LayoutResult {
    pub fn empty() -> Self {
        Self {
            sheets: vec![],
            stats: LayoutStats::default(),
            unplaced: vec![],
        }
    }

    pub fn placed_count(&self) -> usize {
        self.sheets.iter().map(|s| s.placements.len()).sum()
    }

    pub fn unplaced_count(&self) -> usize {
        self.unplaced.iter().map(|u| u.count).sum()
    }

    /// Material yield: used area over the total area of the sheets consumed.
    /// Zero when no sheets were used.
    pub fn yield_fraction(&self, sheet_area: f32) -> f32 {
        let total = self.sheets.len() as f32 * sheet_area;
        if total > 0.0 {
            self.stats.used_area / total
        } else {
            0.0
        }
    }
}
