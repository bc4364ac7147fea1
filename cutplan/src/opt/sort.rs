use std::cmp::Ordering;
use std::fmt;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::entities::PartSpec;

/// Sort strategies of the single-strategy packer. All orderings are descending
/// on their primary key and total: ties fall through a documented secondary
/// key and finally the part id, so two runs with identical input sort
/// identically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortStrategy {
    /// Area desc, then longest dimension desc
    #[default]
    Area,
    /// Length desc, then width desc
    Length,
    /// Width desc, then length desc
    Width,
    /// Perimeter desc, then area desc
    Perimeter,
}

impl SortStrategy {
    /// All strategies, in the order the optimizer evaluates them.
    /// `Area` comes first: it is the fallback on full ties.
    pub const ALL: [SortStrategy; 4] = [
        SortStrategy::Area,
        SortStrategy::Length,
        SortStrategy::Width,
        SortStrategy::Perimeter,
    ];

    /// Total order over parts for this strategy.
    pub fn cmp(&self, a: &PartSpec, b: &PartSpec) -> Ordering {
        let key = |p: &PartSpec| match self {
            SortStrategy::Area => (OrderedFloat(p.area()), OrderedFloat(p.max_dim())),
            SortStrategy::Length => (OrderedFloat(p.length_mm), OrderedFloat(p.width_mm)),
            SortStrategy::Width => (OrderedFloat(p.width_mm), OrderedFloat(p.length_mm)),
            SortStrategy::Perimeter => (OrderedFloat(p.perimeter()), OrderedFloat(p.area())),
        };
        // primary and secondary keys descending, id ascending
        key(b).cmp(&key(a)).then_with(|| a.id.cmp(&b.id))
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortStrategy::Area => "area",
            SortStrategy::Length => "length",
            SortStrategy::Width => "width",
            SortStrategy::Perimeter => "perimeter",
        };
        write!(f, "{name}")
    }
}
