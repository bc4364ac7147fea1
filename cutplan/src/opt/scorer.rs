use crate::entities::{PartSpec, Rotation};
use crate::geometry::FreeRect;
use crate::opt::free_space::MIN_USABLE_DIM_MM;

/// Dominates every other score component, forbidding placements that would
/// leave a remainder too small to ever hold a part.
const SLIVER_PENALTY: f32 = 1_000_000.0;

/// Weight of the aspect penalty, biasing toward squarer remainders.
const ASPECT_WEIGHT: f32 = 0.01;

/// Scores within this distance count as an exact tie and are resolved
/// positionally.
const SCORE_EPS: f32 = 1e-6;

/// A scored candidate placement: the footprint and rotation of the part,
/// anchored at the origin of the free rectangle at `free_idx`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementOption {
    /// Index of the consumed rectangle in the free list
    pub free_idx: usize,
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub rot: Rotation,
    pub score: f32,
}

impl PlacementOption {
    /// Deterministic tie-break on exact score ties: smaller `y`, then smaller
    /// `x`, then 0° over 90°.
    fn wins_tie_against(&self, other: &Self) -> bool {
        if self.y != other.y {
            return self.y < other.y;
        }
        if self.x != other.x {
            return self.x < other.x;
        }
        self.rot == Rotation::R0 && other.rot == Rotation::R90
    }
}

/// Evaluates every legal orientation of `part` against every free rectangle
/// and returns the candidate minimizing
/// `leftover_area + sliver_penalty + aspect_penalty`, or `None` if no legal
/// placement exists on this sheet.
pub fn find_best_placement(
    part: &PartSpec,
    free: &[FreeRect],
    kerf_mm: f32,
    allow_rotation: bool,
) -> Option<PlacementOption> {
    let min_dim = f32::max(kerf_mm, MIN_USABLE_DIM_MM);
    let mut best: Option<PlacementOption> = None;

    for (free_idx, fr) in free.iter().enumerate() {
        for rot in [Rotation::R0, Rotation::R90] {
            if !part.grain.permits(rot, allow_rotation) {
                continue;
            }
            let (w, h) = part.footprint(rot);
            if !fr.fits(w, h) {
                continue;
            }

            let leftover_area = fr.area() - w * h;

            let mut sliver_penalty = 0.0;
            // the two guillotine remainders this placement would produce
            let right_w = f32::max(fr.w - w - kerf_mm, 0.0);
            if right_w > 0.0 && (right_w < min_dim || h < min_dim) {
                sliver_penalty += SLIVER_PENALTY;
            }
            let bottom_h = f32::max(fr.h - h - kerf_mm, 0.0);
            if bottom_h > 0.0 && (bottom_h < min_dim || fr.w < min_dim) {
                sliver_penalty += SLIVER_PENALTY;
            }

            let aspect_penalty = (f32::max(w / h, h / w) - 1.0) * w * h * ASPECT_WEIGHT;

            let candidate = PlacementOption {
                free_idx,
                x: fr.x,
                y: fr.y,
                w,
                h,
                rot,
                score: leftover_area + sliver_penalty + aspect_penalty,
            };

            best = match best {
                None => Some(candidate),
                Some(incumbent) => {
                    let delta = candidate.score - incumbent.score;
                    if delta < -SCORE_EPS
                        || (delta.abs() < SCORE_EPS && candidate.wins_tie_against(&incumbent))
                    {
                        Some(candidate)
                    } else {
                        Some(incumbent)
                    }
                }
            };
        }
    }

    best
}
