mod cut_segment;
mod free_rect;

#[doc(inline)]
pub use cut_segment::{consolidate_cuts, CutAxis, CutSegment};
#[doc(inline)]
pub use free_rect::FreeRect;

/// Tolerance for coordinate comparisons, in mm. Well below any feature the
/// saw can produce, well above accumulated f32 rounding at sheet scale.
pub const COORD_EPS: f32 = 1e-3;
