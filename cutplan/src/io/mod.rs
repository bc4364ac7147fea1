mod export;
mod import;

/// External (serializable) representations of parts, stock and solutions.
pub mod ext_repr;

pub use export::export;

#[doc(inline)]
pub use import::{import, import_part, import_stock_sheet};
