use itertools::Itertools;
use log::{debug, info};

use crate::config::PackConfig;
use crate::entities::{
    LayoutResult, LayoutStats, PartSpec, Placement, SheetLayout, StockSheetSpec, UnplacedPart,
    UnplacedReason,
};
use crate::geometry::consolidate_cuts;
use crate::opt::free_space::FreeSpace;
use crate::opt::scorer::find_best_placement;
use crate::util::assertions;

/// One expanded instance of a part. The instance number is a synthetic suffix
/// for internal bookkeeping only; it never appears in output.
#[derive(Clone, Debug)]
struct PartInstance {
    spec: PartSpec,
    instance: usize,
}

/// Packs all part instances onto a sequence of sheets under a single sort
/// strategy. Expects validated stock (see [`pack`](crate::pack)).
pub(crate) fn pack_single(
    parts: &[PartSpec],
    stock: &[StockSheetSpec],
    config: &PackConfig,
) -> LayoutResult {
    if parts.is_empty() {
        return LayoutResult::empty();
    }

    // single sheet size per invocation: dimensions from the first stock entry,
    // supply summed across the list
    let sheet_spec = &stock[0];
    let sheets_available: usize = stock.iter().map(|s| s.qty).sum();

    let mut pending: Vec<PartInstance> = parts
        .iter()
        .flat_map(|p| {
            (0..p.qty).map(move |instance| PartInstance {
                spec: p.clone(),
                instance,
            })
        })
        .collect();

    // stable sort: instances of the same part keep their expansion order
    pending.sort_by(|a, b| config.sort_strategy.cmp(&a.spec, &b.spec));

    let mut stats = LayoutStats::default();
    let mut sheets: Vec<SheetLayout> = Vec::new();

    while !pending.is_empty() && sheets.len() < sheets_available {
        let mut free = FreeSpace::sheet(sheet_spec);
        let mut placements: Vec<Placement> = Vec::new();

        // One forward scan over the pending list. A placed instance is removed
        // in place; a failed one is skipped and retried only against the free
        // list as it stands at its own scan position, never in a second pass.
        let mut i = 0;
        while i < pending.len() {
            let inst = &pending[i];
            let option = find_best_placement(
                &inst.spec,
                free.rects(),
                sheet_spec.kerf_mm,
                config.allow_rotation,
            );
            match option {
                Some(opt) => {
                    free.apply_placement(opt.free_idx, opt.w, opt.h);
                    let placement = Placement {
                        part_id: inst.spec.id.clone(),
                        label: inst.spec.label.clone(),
                        x: opt.x,
                        y: opt.y,
                        w: opt.w,
                        h: opt.h,
                        rot: opt.rot,
                    };
                    debug!(
                        "placed {}#{} at ({:.1}, {:.1}) {:?} on sheet {}",
                        inst.spec.id,
                        inst.instance,
                        opt.x,
                        opt.y,
                        opt.rot,
                        sheets.len()
                    );
                    stats.add_banding(
                        inst.spec.lamination.edge_thickness_mm(),
                        placement.banding_length(inst.spec.band_edges),
                    );
                    placements.push(placement);
                    pending.remove(i);
                }
                None => i += 1,
            }
        }

        if placements.is_empty() {
            // nothing of the remainder fits an empty sheet; opening more
            // sheets would loop forever
            break;
        }

        debug_assert!(assertions::placements_disjoint(&placements));
        debug_assert!(assertions::placements_within_sheet(&placements, sheet_spec));
        debug_assert!(assertions::free_space_consistent(free.rects(), &placements));
        debug_assert!(assertions::partition_holds(
            free.rects(),
            &placements,
            sheet_spec
        ));

        let layout = SheetLayout::new(&sheet_spec.id, sheets.len(), placements);
        info!(
            "sheet {} filled: {} placements, {:.1}% used",
            layout.id,
            layout.placements.len(),
            100.0 * layout.used_area / sheet_spec.area()
        );
        sheets.push(layout);

        if config.single_sheet_only {
            break;
        }
    }

    // Cut geometry is recomputed from the final placements rather than
    // tracked incrementally, decoupling the reported cuts from the order the
    // algorithm happened to produce them in.
    for sheet in &sheets {
        let segments = sheet
            .placements
            .iter()
            .flat_map(|p| [p.right_cut(), p.bottom_cut()])
            .collect_vec();
        let (count, length) = consolidate_cuts(segments);
        stats.cut_count += count;
        stats.cut_length += length;
    }

    stats.used_area = sheets.iter().map(|s| s.used_area).sum();
    stats.waste_area = sheets.len() as f32 * sheet_spec.area() - stats.used_area;

    let unplaced = summarize_unplaced(&pending, sheet_spec, config);
    if !unplaced.is_empty() {
        info!(
            "{} instances of {} parts left unplaced",
            unplaced.iter().map(|u| u.count).sum::<usize>(),
            unplaced.len()
        );
    }

    LayoutResult {
        sheets,
        stats,
        unplaced,
    }
}

/// Groups residual demand by part id, in pending order.
fn summarize_unplaced(
    pending: &[PartInstance],
    sheet_spec: &StockSheetSpec,
    config: &PackConfig,
) -> Vec<UnplacedPart> {
    let mut unplaced: Vec<UnplacedPart> = Vec::new();
    for inst in pending {
        match unplaced.iter_mut().find(|u| u.part_id == inst.spec.id) {
            Some(entry) => entry.count += 1,
            None => {
                let reason = if inst.spec.fits_empty_sheet(sheet_spec, config.allow_rotation) {
                    UnplacedReason::InsufficientSheetCapacity
                } else {
                    UnplacedReason::TooLargeForSheet
                };
                unplaced.push(UnplacedPart {
                    part_id: inst.spec.id.clone(),
                    count: 1,
                    reason,
                });
            }
        }
    }
    unplaced
}
