use serde::{Deserialize, Serialize};

use crate::entities::{BandEdges, Grain, LayoutResult};
use crate::opt::sort::SortStrategy;
use crate::PackConfig;

/// A nesting problem instance as supplied by external collaborators.
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    /// Parts to be produced
    pub parts: Vec<ExtPart>,
    /// Stock sheets to cut them from
    pub stock: Vec<ExtStockSheet>,
}

/// Part record on the wire.
///
/// Carries both the legacy boolean fields (`require_grain`, `laminate`) and
/// their enum successors; [`import`](crate::io::import) collapses each duality
/// to a single enum once, so the algorithm never branches on both
/// representations.
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtPart {
    pub id: String,
    pub length_mm: f32,
    pub width_mm: f32,
    #[serde(default = "default_qty")]
    pub qty: usize,
    /// Grain constraint; takes precedence over `require_grain` when both are set
    #[serde(default)]
    pub grain: Option<Grain>,
    /// Legacy flag: `true` is equivalent to `grain: length`
    #[serde(default)]
    pub require_grain: Option<bool>,
    #[serde(default)]
    pub band_edges: Option<BandEdges>,
    /// Lamination class; takes precedence over `laminate` when both are set
    #[serde(default)]
    pub lamination_type: Option<ExtLaminationType>,
    /// Edge-banding thickness for `custom` lamination
    #[serde(default)]
    pub edge_thickness_mm: Option<u32>,
    /// Legacy flag: `true` is equivalent to `lamination_type: with-backer`
    #[serde(default)]
    pub laminate: Option<bool>,
    #[serde(default)]
    pub label: Option<String>,
}

fn default_qty() -> usize {
    1
}

/// Lamination class on the wire. `custom` takes its thickness from the
/// sibling `edge_thickness_mm` field.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ExtLaminationType {
    None,
    WithBacker,
    SameBoard,
    Custom,
}

/// Stock sheet record on the wire.
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtStockSheet {
    pub id: String,
    pub length_mm: f32,
    pub width_mm: f32,
    pub qty: usize,
    #[serde(default)]
    pub kerf_mm: f32,
}

/// A packing solution on the wire.
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtSolution {
    /// Name of the instance this solution belongs to
    pub name: String,
    /// Configuration the packer ran with
    pub config: PackConfig,
    /// Strategy selected by the optimizer, absent for single-strategy runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_used: Option<SortStrategy>,
    #[serde(flatten)]
    pub layout: LayoutResult,
    /// The time it took to generate the solution in milliseconds
    pub run_time_ms: u64,
}
