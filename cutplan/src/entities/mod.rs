mod part;
mod placement;
mod result;
mod sheet_layout;
mod stats;
mod stock;

#[doc(inline)]
pub use part::{BandEdges, Grain, Lamination, PartSpec, DEFAULT_CUSTOM_EDGE_THICKNESS_MM};
#[doc(inline)]
pub use placement::{Placement, Rotation};
#[doc(inline)]
pub use result::{LayoutResult, UnplacedPart, UnplacedReason};
#[doc(inline)]
pub use sheet_layout::SheetLayout;
#[doc(inline)]
pub use stats::LayoutStats;
#[doc(inline)]
pub use stock::StockSheetSpec;
