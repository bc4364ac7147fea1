/// Free-rectangle bookkeeping: guillotine split, prune and merge
pub mod free_space;

/// Multi-strategy optimizer
pub mod optimizer;

/// Single-strategy packer
pub mod packer;

/// Placement scoring and selection
pub mod scorer;

/// Deterministic part sort strategies
pub mod sort;

use anyhow::{ensure, Result};

use crate::config::PackConfig;
use crate::entities::{LayoutResult, PartSpec, StockSheetSpec};

#[doc(inline)]
pub use optimizer::OptimizedLayoutResult;

/// Packs all part instances onto a sequence of sheets under
/// `config.sort_strategy`.
///
/// Unplaceable demand is reported as data in [`LayoutResult::unplaced`], never
/// as an error; `Err` is returned only for malformed stock input, before any
/// packing begins.
pub fn pack(
    parts: &[PartSpec],
    stock: &[StockSheetSpec],
    config: &PackConfig,
) -> Result<LayoutResult> {
    validate_stock(parts, stock)?;
    Ok(packer::pack_single(parts, stock, config))
}

/// Packs under every sort strategy and returns the best result along with the
/// strategy that produced it. Error semantics are those of [`pack`].
pub fn pack_optimized(
    parts: &[PartSpec],
    stock: &[StockSheetSpec],
    config: &PackConfig,
) -> Result<OptimizedLayoutResult> {
    validate_stock(parts, stock)?;
    Ok(optimizer::pack_all_strategies(parts, stock, config))
}

/// Fast-fail validation of the stock specification. Part dimensions are not
/// validated here: non-positive part dimensions never satisfy the fit test
/// and surface as unplaced demand instead.
fn validate_stock(parts: &[PartSpec], stock: &[StockSheetSpec]) -> Result<()> {
    ensure!(
        parts.is_empty() || !stock.is_empty(),
        "invalid stock specification: no stock sheets provided"
    );
    for s in stock {
        ensure!(
            s.length_mm.is_finite()
                && s.width_mm.is_finite()
                && s.length_mm > 0.0
                && s.width_mm > 0.0,
            "invalid stock specification: sheet '{}' has non-positive dimensions {}x{}",
            s.id,
            s.length_mm,
            s.width_mm
        );
        ensure!(
            s.kerf_mm.is_finite() && s.kerf_mm >= 0.0,
            "invalid stock specification: sheet '{}' has negative kerf {}",
            s.id,
            s.kerf_mm
        );
    }
    Ok(())
}
