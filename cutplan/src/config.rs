use serde::{Deserialize, Serialize};

use crate::opt::sort::SortStrategy;

/// Configuration for one packing invocation.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PackConfig {
    /// Permit 90° placements. When `false`, parts with `width` grain become unplaceable.
    #[serde(default = "default_allow_rotation")]
    pub allow_rotation: bool,
    /// Stop after filling a single sheet, regardless of remaining demand.
    #[serde(default)]
    pub single_sheet_only: bool,
    /// Sort strategy used by the single-strategy packer.
    /// [`pack_optimized`](crate::pack_optimized) ignores this field and evaluates all strategies.
    #[serde(default)]
    pub sort_strategy: SortStrategy,
}

fn default_allow_rotation() -> bool {
    true
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            allow_rotation: true,
            single_sheet_only: false,
            sort_strategy: SortStrategy::default(),
        }
    }
}
