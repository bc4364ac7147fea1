use serde::{Deserialize, Serialize};

use crate::entities::BandEdges;
use crate::geometry::{CutAxis, CutSegment, FreeRect};

/// Rotation of a placed part, in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum Rotation {
    #[default]
    R0,
    R90,
}

impl From<Rotation> for u16 {
    fn from(rot: Rotation) -> u16 {
        match rot {
            Rotation::R0 => 0,
            Rotation::R90 => 90,
        }
    }
}

impl TryFrom<u16> for Rotation {
    type Error = String;

    fn try_from(deg: u16) -> Result<Self, Self::Error> {
        match deg {
            0 => Ok(Rotation::R0),
            90 => Ok(Rotation::R90),
            other => Err(format!("unsupported rotation: {other}°")),
        }
    }
}

/// One part instance fixed onto a sheet. Immutable once created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Identifier of the part this instance belongs to
    pub part_id: String,
    /// Optional display label, carried over from the part
    #[serde(default)]
    pub label: Option<String>,
    /// Origin along the sheet's width axis
    pub x: f32,
    /// Origin along the sheet's length axis
    pub y: f32,
    /// Realized footprint along the width axis (post-rotation)
    pub w: f32,
    /// Realized footprint along the length axis (post-rotation)
    pub h: f32,
    pub rot: Rotation,
}

impl Placement {
    pub fn area(&self) -> f32 {
        self.w * self.h
    }

    pub fn rect(&self) -> FreeRect {
        FreeRect::new(self.x, self.y, self.w, self.h)
    }

    /// The guillotine cut along this placement's right edge.
    pub fn right_cut(&self) -> CutSegment {
        CutSegment {
            axis: CutAxis::Vertical,
            at: self.x + self.w,
            start: self.y,
            end: self.y + self.h,
        }
    }

    /// The guillotine cut along this placement's bottom edge.
    pub fn bottom_cut(&self) -> CutSegment {
        CutSegment {
            axis: CutAxis::Horizontal,
            at: self.y + self.h,
            start: self.x,
            end: self.x + self.w,
        }
    }

    /// The part's logical banded edges remapped to the physical sheet edges
    /// they touch after rotation (90°: top→left, right→top, bottom→right, left→bottom).
    pub fn physical_band_edges(&self, logical: BandEdges) -> BandEdges {
        match self.rot {
            Rotation::R0 => logical,
            Rotation::R90 => BandEdges {
                left: logical.top,
                top: logical.right,
                right: logical.bottom,
                bottom: logical.left,
            },
        }
    }

    /// Total edge-banding length of this placement for the given logical edge flags.
    pub fn banding_length(&self, logical: BandEdges) -> f32 {
        let phys = self.physical_band_edges(logical);
        let mut len = 0.0;
        if phys.top {
            len += self.w;
        }
        if phys.bottom {
            len += self.w;
        }
        if phys.left {
            len += self.h;
        }
        if phys.right {
            len += self.h;
        }
        len
    }
}
