use log::trace;

use crate::entities::StockSheetSpec;
use crate::geometry::{FreeRect, COORD_EPS};

/// Minimum usable feature size. Remainders narrower than this in either
/// dimension cannot hold any realistic part and are pruned.
pub const MIN_USABLE_DIM_MM: f32 = 10.0;

/// The free-rectangle bookkeeping of one sheet.
///
/// A placement consumes a rectangle via a guillotine split into at most two
/// remainders; pruning and merging then bound fragmentation growth, since the
/// packer never recomputes free space from scratch. The collection is owned
/// and manipulated by explicit index only.
#[derive(Clone, Debug)]
pub struct FreeSpace {
    rects: Vec<FreeRect>,
    kerf_mm: f32,
    min_dim: f32,
}

impl FreeSpace {
    /// A fresh sheet: one free rectangle covering the full interior.
    pub fn sheet(stock: &StockSheetSpec) -> Self {
        Self::new(
            vec![FreeRect::new(0.0, 0.0, stock.width_mm, stock.length_mm)],
            stock.kerf_mm,
        )
    }

    /// A free space from an arbitrary rectangle set, normalized on entry.
    pub fn new(rects: Vec<FreeRect>, kerf_mm: f32) -> Self {
        let mut fs = Self {
            rects,
            kerf_mm,
            min_dim: f32::max(kerf_mm, MIN_USABLE_DIM_MM),
        };
        fs.prune();
        fs.merge();
        fs
    }

    pub fn rects(&self) -> &[FreeRect] {
        &self.rects
    }

    pub fn total_area(&self) -> f32 {
        self.rects.iter().map(FreeRect::area).sum()
    }

    /// Consumes the rectangle at `idx` with a `pw × ph` placement anchored at
    /// its origin, replacing it with its guillotine remainders.
    pub fn apply_placement(&mut self, idx: usize, pw: f32, ph: f32) {
        let fr = self.rects.remove(idx);
        debug_assert!(fr.fits(pw, ph), "placement {pw}x{ph} exceeds {fr:?}");

        let right_w = f32::max(fr.w - pw - self.kerf_mm, 0.0);
        if right_w > 0.0 {
            self.rects
                .push(FreeRect::new(fr.x + pw + self.kerf_mm, fr.y, right_w, ph));
        }

        let bottom_h = f32::max(fr.h - ph - self.kerf_mm, 0.0);
        if bottom_h > 0.0 {
            self.rects
                .push(FreeRect::new(fr.x, fr.y + ph + self.kerf_mm, fr.w, bottom_h));
        }

        self.prune();
        self.merge();
        trace!(
            "free space after placement: {} rects, {:.0}mm²",
            self.rects.len(),
            self.total_area()
        );
    }

    /// Drops degenerate and sub-minimum rectangles, then rectangles fully
    /// contained in another.
    fn prune(&mut self) {
        let min_dim = self.min_dim;
        self.rects
            .retain(|r| r.w >= min_dim - COORD_EPS && r.h >= min_dim - COORD_EPS);

        let mut i = 0;
        while i < self.rects.len() {
            let contained = (0..self.rects.len()).any(|j| {
                j != i
                    && self.rects[j].contains(&self.rects[i])
                    // mutually containing (identical) rects: keep the earlier one
                    && !(self.rects[i].contains(&self.rects[j]) && i < j)
            });
            if contained {
                self.rects.remove(i);
            } else {
                i += 1;
            }
        }
    }

    /// Coalesces edge-adjacent compatible rectangles until no merge applies.
    fn merge(&mut self) {
        loop {
            let mut found = None;
            'scan: for i in 0..self.rects.len() {
                for j in (i + 1)..self.rects.len() {
                    if let Some(merged) = self.rects[i].try_merge(&self.rects[j]) {
                        found = Some((i, j, merged));
                        break 'scan;
                    }
                }
            }
            match found {
                Some((i, j, merged)) => {
                    self.rects.remove(j);
                    self.rects[i] = merged;
                }
                None => break,
            }
        }
    }
}
