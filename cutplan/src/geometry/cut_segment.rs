use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::geometry::COORD_EPS;

/// Orientation of a saw cut on the sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CutAxis {
    /// Runs along the length axis, at a fixed `x`
    Vertical,
    /// Runs along the width axis, at a fixed `y`
    Horizontal,
}

/// A straight cut segment: an interval on one axis at a fixed coordinate on
/// the other.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CutSegment {
    pub axis: CutAxis,
    /// The fixed coordinate: `x` for vertical cuts, `y` for horizontal ones
    pub at: f32,
    pub start: f32,
    pub end: f32,
}

impl CutSegment {
    pub fn len(&self) -> f32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() <= COORD_EPS
    }
}

/// Merges a sheet's cut segments into distinct physical cuts.
///
/// Segments are grouped by axis and fixed coordinate; within each group,
/// overlapping or touching intervals collapse into one cut. Returns the
/// resulting cut count and total cut length. The outcome depends only on the
/// set of segments, not on the order they were produced in.
pub fn consolidate_cuts(mut segments: Vec<CutSegment>) -> (usize, f32) {
    segments.retain(|s| !s.is_empty());
    segments.sort_by_key(|s| {
        (
            s.axis as u8,
            OrderedFloat(s.at),
            OrderedFloat(s.start),
            OrderedFloat(s.end),
        )
    });

    let mut count = 0;
    let mut total_len = 0.0;

    let mut i = 0;
    while i < segments.len() {
        // group of segments on the same cut line
        let mut j = i + 1;
        while j < segments.len()
            && segments[j].axis == segments[i].axis
            && (segments[j].at - segments[i].at).abs() <= COORD_EPS
        {
            j += 1;
        }

        // intervals are sorted by start; sweep and merge
        let (mut cur_start, mut cur_end) = (segments[i].start, segments[i].end);
        for seg in &segments[i + 1..j] {
            if seg.start <= cur_end + COORD_EPS {
                cur_end = f32::max(cur_end, seg.end);
            } else {
                count += 1;
                total_len += cur_end - cur_start;
                (cur_start, cur_end) = (seg.start, seg.end);
            }
        }
        count += 1;
        total_len += cur_end - cur_start;

        i = j;
    }

    (count, total_len)
}
