use std::time::Duration;

use crate::entities::LayoutResult;
use crate::io::ext_repr::ExtSolution;
use crate::opt::sort::SortStrategy;
use crate::PackConfig;

/// Exports a solution out of the library.
pub fn export(
    name: &str,
    layout: LayoutResult,
    config: PackConfig,
    strategy_used: Option<SortStrategy>,
    run_time: Duration,
) -> ExtSolution {
    ExtSolution {
        name: name.to_string(),
        config,
        strategy_used,
        layout,
        run_time_ms: run_time.as_millis() as u64,
    }
}
