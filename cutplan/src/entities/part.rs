use serde::{Deserialize, Serialize};

use crate::entities::{Rotation, StockSheetSpec};

/// Edge-banding thickness class applied to `custom` laminations when the
/// external record does not specify one explicitly.
pub const DEFAULT_CUSTOM_EDGE_THICKNESS_MM: u32 = 48;

/// Grain direction constraint of a part.
///
/// A part with a grain constraint requires its long axis to align with a
/// specific sheet axis, which restricts the rotations in which it can be placed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grain {
    /// No constraint, both orientations are legal.
    #[default]
    Any,
    /// The part's length must run along the sheet's length axis (0° only).
    Length,
    /// The part's length must run along the sheet's width axis (90° only).
    Width,
}

impl Grain {
    /// Whether this grain constraint permits placing the part with rotation `rot`,
    /// given the global rotation permission. 90° placements additionally require
    /// `allow_rotation`, which makes a `width`-grain part unplaceable when
    /// rotation is disabled.
    pub fn permits(&self, rot: Rotation, allow_rotation: bool) -> bool {
        match (self, rot) {
            (Grain::Any, Rotation::R0) => true,
            (Grain::Any, Rotation::R90) => allow_rotation,
            (Grain::Length, rot) => rot == Rotation::R0,
            (Grain::Width, rot) => rot == Rotation::R90 && allow_rotation,
        }
    }
}

/// Which logical edges of a part require edge banding.
///
/// Logical edges are expressed in the part's own 0° orientation; the packer
/// remaps them to physical sheet edges when a part is placed rotated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BandEdges {
    #[serde(default)]
    pub top: bool,
    #[serde(default)]
    pub right: bool,
    #[serde(default)]
    pub bottom: bool,
    #[serde(default)]
    pub left: bool,
}

impl BandEdges {
    pub const NONE: BandEdges = BandEdges {
        top: false,
        right: false,
        bottom: false,
        left: false,
    };

    pub const ALL: BandEdges = BandEdges {
        top: true,
        right: true,
        bottom: true,
        left: true,
    };

    pub fn any(&self) -> bool {
        self.top || self.right || self.bottom || self.left
    }
}

/// Lamination class of a part, determining how many physical boards back it
/// and thereby its edge-banding thickness class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Lamination {
    /// Single board, 16mm banding.
    #[default]
    None,
    /// Primary board plus a backer board, 32mm banding.
    WithBacker,
    /// Two boards of the same material, 32mm banding.
    SameBoard,
    /// Multi-layer build-up with an explicit banding thickness.
    Custom { edge_thickness_mm: u32 },
}

impl Lamination {
    /// Nominal edge-banding thickness class in mm.
    pub fn edge_thickness_mm(&self) -> u32 {
        match self {
            Lamination::None => 16,
            Lamination::WithBacker | Lamination::SameBoard => 32,
            Lamination::Custom { edge_thickness_mm } => *edge_thickness_mm,
        }
    }
}

/// A requested rectangular part.
///
/// `qty` is expanded internally into independent instances; the packer never
/// mutates a `PartSpec`, it only consumes copies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PartSpec {
    /// Unique identifier of the part
    pub id: String,
    /// Dimension along the sheet's length axis in the 0° orientation
    pub length_mm: f32,
    /// Dimension along the sheet's width axis in the 0° orientation
    pub width_mm: f32,
    /// Number of independent instances to produce
    pub qty: usize,
    /// Grain direction constraint
    #[serde(default)]
    pub grain: Grain,
    /// Logical edges requiring edge banding
    #[serde(default)]
    pub band_edges: BandEdges,
    /// Lamination class, determines the banding thickness bucket
    #[serde(default)]
    pub lamination: Lamination,
    /// Optional display label carried through to placements
    #[serde(default)]
    pub label: Option<String>,
}

impl PartSpec {
    pub fn area(&self) -> f32 {
        self.length_mm * self.width_mm
    }

    pub fn perimeter(&self) -> f32 {
        2.0 * (self.length_mm + self.width_mm)
    }

    pub fn max_dim(&self) -> f32 {
        f32::max(self.length_mm, self.width_mm)
    }

    /// The realized `(w, h)` footprint of this part under rotation `rot`,
    /// with `w` along the sheet's width axis and `h` along its length axis.
    pub fn footprint(&self, rot: Rotation) -> (f32, f32) {
        match rot {
            Rotation::R0 => (self.width_mm, self.length_mm),
            Rotation::R90 => (self.length_mm, self.width_mm),
        }
    }

    /// Whether this part fits an *empty* stock sheet in at least one legal
    /// orientation. Non-positive part dimensions never fit.
    pub fn fits_empty_sheet(&self, stock: &StockSheetSpec, allow_rotation: bool) -> bool {
        [Rotation::R0, Rotation::R90]
            .into_iter()
            .filter(|&rot| self.grain.permits(rot, allow_rotation))
            .any(|rot| {
                let (w, h) = self.footprint(rot);
                w > 0.0 && h > 0.0 && w <= stock.width_mm && h <= stock.length_mm
            })
    }
}
