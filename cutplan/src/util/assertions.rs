use itertools::Itertools;

use crate::entities::{Placement, StockSheetSpec};
use crate::geometry::{FreeRect, COORD_EPS};

/// No two placements on the same sheet overlap.
pub fn placements_disjoint(placements: &[Placement]) -> bool {
    placements
        .iter()
        .tuple_combinations()
        .all(|(a, b)| !a.rect().overlaps(&b.rect()))
}

/// Every placement lies fully within the sheet interior.
pub fn placements_within_sheet(placements: &[Placement], stock: &StockSheetSpec) -> bool {
    let sheet = FreeRect::new(0.0, 0.0, stock.width_mm, stock.length_mm);
    placements.iter().all(|p| sheet.contains(&p.rect()))
}

/// Placement and free areas partition the sheet: together they never exceed
/// its area. Equality only holds with zero kerf, since kerf strips and pruned
/// sub-minimum slivers are surrendered rather than tracked.
pub fn partition_holds(
    free: &[FreeRect],
    placements: &[Placement],
    stock: &StockSheetSpec,
) -> bool {
    let used: f32 = placements.iter().map(Placement::area).sum();
    let free_area: f32 = free.iter().map(FreeRect::area).sum();
    // edge rounding at sheet scale
    let tol = COORD_EPS * (stock.length_mm + stock.width_mm);
    used + free_area <= stock.area() + tol
}

/// Free rectangles are pairwise disjoint and disjoint from all placements.
pub fn free_space_consistent(free: &[FreeRect], placements: &[Placement]) -> bool {
    let pairwise = free
        .iter()
        .tuple_combinations()
        .all(|(a, b)| !a.overlaps(b));
    let vs_placements = free
        .iter()
        .cartesian_product(placements.iter())
        .all(|(fr, p)| !fr.overlaps(&p.rect()));
    pairwise && vs_placements
}
