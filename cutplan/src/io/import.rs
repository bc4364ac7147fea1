use crate::entities::{
    Grain, Lamination, PartSpec, StockSheetSpec, DEFAULT_CUSTOM_EDGE_THICKNESS_MM,
};
use crate::io::ext_repr::{ExtInstance, ExtLaminationType, ExtPart, ExtStockSheet};

/// Imports an external instance, normalizing every record at the boundary.
pub fn import(ext: &ExtInstance) -> (Vec<PartSpec>, Vec<StockSheetSpec>) {
    let parts = ext.parts.iter().map(import_part).collect();
    let stock = ext.stock.iter().map(import_stock_sheet).collect();
    (parts, stock)
}

/// Collapses the legacy boolean/enum duality of an external part record to
/// the single-enum [`PartSpec`]. The enum fields win when both are present.
pub fn import_part(ext: &ExtPart) -> PartSpec {
    let grain = match (ext.grain, ext.require_grain) {
        (Some(grain), _) => grain,
        (None, Some(true)) => Grain::Length,
        (None, _) => Grain::Any,
    };

    let lamination = match ext.lamination_type {
        Some(ExtLaminationType::None) => Lamination::None,
        Some(ExtLaminationType::WithBacker) => Lamination::WithBacker,
        Some(ExtLaminationType::SameBoard) => Lamination::SameBoard,
        Some(ExtLaminationType::Custom) => Lamination::Custom {
            edge_thickness_mm: ext
                .edge_thickness_mm
                .unwrap_or(DEFAULT_CUSTOM_EDGE_THICKNESS_MM),
        },
        None => match ext.laminate {
            Some(true) => Lamination::WithBacker,
            _ => Lamination::None,
        },
    };

    PartSpec {
        id: ext.id.clone(),
        length_mm: ext.length_mm,
        width_mm: ext.width_mm,
        qty: ext.qty,
        grain,
        band_edges: ext.band_edges.unwrap_or_default(),
        lamination,
        label: ext.label.clone(),
    }
}

pub fn import_stock_sheet(ext: &ExtStockSheet) -> StockSheetSpec {
    StockSheetSpec {
        id: ext.id.clone(),
        length_mm: ext.length_mm,
        width_mm: ext.width_mm,
        qty: ext.qty,
        kerf_mm: ext.kerf_mm,
    }
}
