use float_cmp::approx_eq;
use serde::{Deserialize, Serialize};

use crate::geometry::COORD_EPS;

/// An axis-aligned candidate placement region within one sheet.
///
/// Coordinates are sheet-local millimeters with the origin at the sheet's
/// top-left corner, `x` along the width axis and `y` along the length axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FreeRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl FreeRect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn area(&self) -> f32 {
        self.w * self.h
    }

    /// Whether a `w × h` footprint fits within this rectangle.
    /// Degenerate footprints never fit.
    pub fn fits(&self, w: f32, h: f32) -> bool {
        w > 0.0 && h > 0.0 && w <= self.w && h <= self.h
    }

    /// Whether `other` lies fully within `self` (all four boundary comparisons,
    /// with tolerance).
    pub fn contains(&self, other: &FreeRect) -> bool {
        other.x >= self.x - COORD_EPS
            && other.y >= self.y - COORD_EPS
            && other.x + other.w <= self.x + self.w + COORD_EPS
            && other.y + other.h <= self.y + self.h + COORD_EPS
    }

    /// Whether the interiors of `self` and `other` intersect.
    /// Rectangles that merely share an edge do not overlap.
    pub fn overlaps(&self, other: &FreeRect) -> bool {
        self.x + COORD_EPS < other.x + other.w
            && other.x + COORD_EPS < self.x + self.w
            && self.y + COORD_EPS < other.y + other.h
            && other.y + COORD_EPS < self.y + self.h
    }

    /// Coalesces two rectangles that share a full edge: horizontal neighbors
    /// with equal height, or vertical neighbors with equal width.
    pub fn try_merge(&self, other: &FreeRect) -> Option<FreeRect> {
        // normalize to left-of / above so adjacency is checked one way
        let (a, b) = if other.x < self.x || other.y < self.y {
            (other, self)
        } else {
            (self, other)
        };

        let same_row = approx_eq!(f32, a.y, b.y, epsilon = COORD_EPS)
            && approx_eq!(f32, a.h, b.h, epsilon = COORD_EPS);
        if same_row && approx_eq!(f32, a.x + a.w, b.x, epsilon = COORD_EPS) {
            return Some(FreeRect::new(a.x, a.y, b.x + b.w - a.x, a.h));
        }

        let same_col = approx_eq!(f32, a.x, b.x, epsilon = COORD_EPS)
            && approx_eq!(f32, a.w, b.w, epsilon = COORD_EPS);
        if same_col && approx_eq!(f32, a.y + a.h, b.y, epsilon = COORD_EPS) {
            return Some(FreeRect::new(a.x, a.y, a.w, b.y + b.h - a.y));
        }

        None
    }
}
