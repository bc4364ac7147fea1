use cutplan::entities::{
    BandEdges, Grain, Lamination, PartSpec, Placement, Rotation, StockSheetSpec,
};
use cutplan::geometry::{consolidate_cuts, CutAxis, CutSegment, FreeRect};
use cutplan::opt::free_space::FreeSpace;
use cutplan::opt::scorer::find_best_placement;
use cutplan::util::assertions;

fn part(id: &str, length_mm: f32, width_mm: f32, grain: Grain) -> PartSpec {
    PartSpec {
        id: id.to_string(),
        length_mm,
        width_mm,
        qty: 1,
        grain,
        band_edges: BandEdges::NONE,
        lamination: Lamination::None,
        label: None,
    }
}

fn sheet(length_mm: f32, width_mm: f32, kerf_mm: f32) -> StockSheetSpec {
    StockSheetSpec {
        id: "sheet".to_string(),
        length_mm,
        width_mm,
        qty: 1,
        kerf_mm,
    }
}

#[test]
fn merge_horizontal_neighbors() {
    let a = FreeRect::new(0.0, 0.0, 50.0, 100.0);
    let b = FreeRect::new(50.0, 0.0, 50.0, 100.0);
    assert_eq!(a.try_merge(&b), Some(FreeRect::new(0.0, 0.0, 100.0, 100.0)));
    // merging is symmetric
    assert_eq!(b.try_merge(&a), Some(FreeRect::new(0.0, 0.0, 100.0, 100.0)));
}

#[test]
fn merge_vertical_neighbors() {
    let a = FreeRect::new(0.0, 0.0, 100.0, 40.0);
    let b = FreeRect::new(0.0, 40.0, 100.0, 60.0);
    assert_eq!(a.try_merge(&b), Some(FreeRect::new(0.0, 0.0, 100.0, 100.0)));
}

#[test]
fn no_merge_without_full_shared_edge() {
    // adjacent but different heights
    let a = FreeRect::new(0.0, 0.0, 50.0, 100.0);
    let b = FreeRect::new(50.0, 0.0, 50.0, 80.0);
    assert_eq!(a.try_merge(&b), None);

    // compatible but separated by a gap
    let c = FreeRect::new(60.0, 0.0, 40.0, 100.0);
    assert_eq!(a.try_merge(&c), None);
}

#[test]
fn free_space_normalizes_on_construction() {
    // mergeable pair collapses to one rectangle
    let fs = FreeSpace::new(
        vec![
            FreeRect::new(0.0, 0.0, 50.0, 100.0),
            FreeRect::new(50.0, 0.0, 50.0, 100.0),
        ],
        0.0,
    );
    assert_eq!(fs.rects(), &[FreeRect::new(0.0, 0.0, 100.0, 100.0)]);

    // contained rectangle is dropped
    let fs = FreeSpace::new(
        vec![
            FreeRect::new(0.0, 0.0, 100.0, 100.0),
            FreeRect::new(10.0, 10.0, 20.0, 20.0),
        ],
        0.0,
    );
    assert_eq!(fs.rects(), &[FreeRect::new(0.0, 0.0, 100.0, 100.0)]);

    // sub-minimum sliver is dropped
    let fs = FreeSpace::new(vec![FreeRect::new(0.0, 0.0, 5.0, 100.0)], 0.0);
    assert!(fs.rects().is_empty());
}

#[test]
fn guillotine_split_respects_kerf() {
    let mut fs = FreeSpace::sheet(&sheet(100.0, 100.0, 4.0));
    fs.apply_placement(0, 40.0, 60.0);
    assert_eq!(
        fs.rects(),
        &[
            FreeRect::new(44.0, 0.0, 56.0, 60.0),
            FreeRect::new(0.0, 64.0, 100.0, 36.0),
        ]
    );
}

#[test]
fn placements_and_free_space_partition_the_sheet() {
    let placed = |x: f32, y: f32, w: f32, h: f32| Placement {
        part_id: "p".to_string(),
        label: None,
        x,
        y,
        w,
        h,
        rot: Rotation::R0,
    };

    // zero kerf: the split surrenders nothing, the partition is exact
    let stock = sheet(1000.0, 1000.0, 0.0);
    let mut fs = FreeSpace::sheet(&stock);
    fs.apply_placement(0, 400.0, 600.0);
    let placements = vec![placed(0.0, 0.0, 400.0, 600.0)];
    assert!(assertions::partition_holds(fs.rects(), &placements, &stock));
    assert_eq!(
        placements[0].area() + fs.total_area(),
        stock.area()
    );

    // with kerf the strips are surrendered, the bound still holds
    let stock = sheet(1000.0, 1000.0, 3.0);
    let mut fs = FreeSpace::sheet(&stock);
    fs.apply_placement(0, 400.0, 600.0);
    assert!(assertions::partition_holds(fs.rects(), &placements, &stock));

    // a free list never charged for the placement double-counts the area
    let untouched = FreeSpace::sheet(&stock);
    assert!(!assertions::partition_holds(
        untouched.rects(),
        &placements,
        &stock
    ));
}

#[test]
fn exact_fit_leaves_no_free_space() {
    let mut fs = FreeSpace::sheet(&sheet(100.0, 100.0, 0.0));
    fs.apply_placement(0, 100.0, 100.0);
    assert!(fs.rects().is_empty());
}

#[test]
fn consolidate_merges_collinear_cuts() {
    let vertical = |at: f32, start: f32, end: f32| CutSegment {
        axis: CutAxis::Vertical,
        at,
        start,
        end,
    };

    // touching intervals collapse into one cut
    let (count, len) = consolidate_cuts(vec![vertical(50.0, 0.0, 60.0), vertical(50.0, 60.0, 100.0)]);
    assert_eq!(count, 1);
    assert_eq!(len, 100.0);

    // overlapping intervals do not double-count
    let (count, len) = consolidate_cuts(vec![vertical(50.0, 0.0, 60.0), vertical(50.0, 40.0, 100.0)]);
    assert_eq!(count, 1);
    assert_eq!(len, 100.0);

    // disjoint intervals stay separate cuts
    let (count, len) = consolidate_cuts(vec![vertical(50.0, 0.0, 30.0), vertical(50.0, 50.0, 80.0)]);
    assert_eq!(count, 2);
    assert_eq!(len, 60.0);

    // same interval on different lines stays separate
    let (count, len) = consolidate_cuts(vec![vertical(50.0, 0.0, 30.0), vertical(70.0, 0.0, 30.0)]);
    assert_eq!(count, 2);
    assert_eq!(len, 60.0);
}

#[test]
fn scorer_breaks_ties_positionally() {
    let p = part("p", 40.0, 40.0, Grain::Any);
    let rects = [
        FreeRect::new(0.0, 0.0, 50.0, 50.0),
        FreeRect::new(60.0, 0.0, 50.0, 50.0),
    ];

    let best = find_best_placement(&p, &rects, 0.0, true).unwrap();
    assert_eq!((best.x, best.y), (0.0, 0.0));
    assert_eq!(best.rot, Rotation::R0);

    // the winner does not depend on the order of the free list
    let reversed = [rects[1], rects[0]];
    let best = find_best_placement(&p, &reversed, 0.0, true).unwrap();
    assert_eq!((best.x, best.y), (0.0, 0.0));
    assert_eq!(best.rot, Rotation::R0);
}

#[test]
fn scorer_avoids_sliver_remainders() {
    // the tighter rectangle would leave a 5mm strip on the right and a 1mm
    // strip below; the penalty pushes the placement to the looser one
    let p = part("p", 40.0, 90.0, Grain::Length);
    let rects = [
        FreeRect::new(0.0, 0.0, 95.0, 41.0),
        FreeRect::new(0.0, 50.0, 100.0, 50.0),
    ];

    let best = find_best_placement(&p, &rects, 0.0, true).unwrap();
    assert_eq!(best.free_idx, 1);
    assert_eq!(best.y, 50.0);
}

#[test]
fn scorer_honors_grain_and_rotation_permission() {
    let free = [FreeRect::new(0.0, 0.0, 1000.0, 1000.0)];

    // width grain needs a 90° placement, which needs global permission
    let p = part("p", 600.0, 300.0, Grain::Width);
    assert!(find_best_placement(&p, &free, 0.0, false).is_none());
    let best = find_best_placement(&p, &free, 0.0, true).unwrap();
    assert_eq!(best.rot, Rotation::R90);
    assert_eq!((best.w, best.h), (600.0, 300.0));

    // length grain never rotates
    let p = part("p", 600.0, 300.0, Grain::Length);
    let best = find_best_placement(&p, &free, 0.0, false).unwrap();
    assert_eq!(best.rot, Rotation::R0);
    assert_eq!((best.w, best.h), (300.0, 600.0));
}

#[test]
fn degenerate_parts_never_fit() {
    let free = [FreeRect::new(0.0, 0.0, 1000.0, 1000.0)];
    assert!(find_best_placement(&part("p", 0.0, 300.0, Grain::Any), &free, 0.0, true).is_none());
    assert!(find_best_placement(&part("p", -5.0, 300.0, Grain::Any), &free, 0.0, true).is_none());
}
