use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::PackConfig;
use crate::entities::{LayoutResult, PartSpec, StockSheetSpec};
use crate::opt::packer::pack_single;
use crate::opt::sort::SortStrategy;

/// A [`LayoutResult`] together with the sort strategy that produced it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptimizedLayoutResult {
    pub strategy_used: SortStrategy,
    #[serde(flatten)]
    pub layout: LayoutResult,
}

/// Runs the single-strategy packer once per sort strategy and keeps the best
/// result: fewest sheets, ties broken by highest material yield.
///
/// The strategy evaluations share no mutable state and run in parallel;
/// winner selection follows the declaration order of [`SortStrategy::ALL`],
/// so the outcome is identical to evaluating them sequentially.
pub(crate) fn pack_all_strategies(
    parts: &[PartSpec],
    stock: &[StockSheetSpec],
    config: &PackConfig,
) -> OptimizedLayoutResult {
    let results: Vec<(SortStrategy, LayoutResult)> = SortStrategy::ALL
        .par_iter()
        .map(|&strategy| {
            let cfg = PackConfig {
                sort_strategy: strategy,
                ..*config
            };
            (strategy, pack_single(parts, stock, &cfg))
        })
        .collect();

    let sheet_area = stock.first().map_or(0.0, StockSheetSpec::area);

    // a later strategy must be strictly better to displace the incumbent,
    // leaving the first one ('area') as the fallback on full ties
    let mut winner: Option<(SortStrategy, LayoutResult)> = None;
    for (strategy, result) in results {
        let better = match &winner {
            None => true,
            Some((_, incumbent)) => {
                result.sheets.len() < incumbent.sheets.len()
                    || (result.sheets.len() == incumbent.sheets.len()
                        && result.yield_fraction(sheet_area)
                            > incumbent.yield_fraction(sheet_area))
            }
        };
        if better {
            winner = Some((strategy, result));
        }
    }

    let (strategy_used, layout) =
        winner.expect("at least one sort strategy is always evaluated");
    info!(
        "strategy '{strategy_used}' selected: {} sheets, {:.1}% yield",
        layout.sheets.len(),
        100.0 * layout.yield_fraction(sheet_area)
    );

    OptimizedLayoutResult {
        strategy_used,
        layout,
    }
}
