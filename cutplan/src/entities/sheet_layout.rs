use serde::{Deserialize, Serialize};

use crate::entities::Placement;

/// One physical sheet's output: an ordered list of placements.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SheetLayout {
    /// `"{stock_id}:{sheet_index}"`, with a zero-based index in fill order
    pub id: String,
    /// Placements in the order they were made
    pub placements: Vec<Placement>,
    /// Sum of the placements' areas
    pub used_area: f32,
}

impl SheetLayout {
    pub fn new(stock_id: &str, index: usize, placements: Vec<Placement>) -> Self {
        let used_area = placements.iter().map(Placement::area).sum();
        Self {
            id: format!("{stock_id}:{index}"),
            placements,
            used_area,
        }
    }
}
