use cutplan::entities::{Grain, Lamination};
use cutplan::io::ext_repr::ExtInstance;

fn parse(json: &str) -> ExtInstance {
    serde_json::from_str(json).expect("instance should parse")
}

#[test]
fn legacy_flags_collapse_to_enums() {
    let ext = parse(
        r#"{
            "name": "legacy",
            "parts": [
                {"id": "a", "length_mm": 600, "width_mm": 300, "qty": 2,
                 "require_grain": true, "laminate": true},
                {"id": "b", "length_mm": 500, "width_mm": 200}
            ],
            "stock": [
                {"id": "board", "length_mm": 2750, "width_mm": 1830, "qty": 10, "kerf_mm": 3}
            ]
        }"#,
    );

    let (parts, stock) = cutplan::io::import(&ext);

    assert_eq!(parts[0].grain, Grain::Length);
    assert_eq!(parts[0].lamination, Lamination::WithBacker);
    assert_eq!(parts[0].qty, 2);

    // absent fields fall back to the defaults
    assert_eq!(parts[1].grain, Grain::Any);
    assert_eq!(parts[1].lamination, Lamination::None);
    assert_eq!(parts[1].qty, 1);
    assert!(!parts[1].band_edges.any());

    assert_eq!(stock[0].kerf_mm, 3.0);
}

#[test]
fn enum_fields_win_over_legacy_flags() {
    let ext = parse(
        r#"{
            "name": "mixed",
            "parts": [
                {"id": "a", "length_mm": 600, "width_mm": 300,
                 "grain": "width", "require_grain": true,
                 "lamination_type": "same-board", "laminate": false}
            ],
            "stock": [
                {"id": "board", "length_mm": 2750, "width_mm": 1830, "qty": 10}
            ]
        }"#,
    );

    let (parts, _) = cutplan::io::import(&ext);
    assert_eq!(parts[0].grain, Grain::Width);
    assert_eq!(parts[0].lamination, Lamination::SameBoard);
}

#[test]
fn custom_lamination_defaults_its_thickness() {
    let ext = parse(
        r#"{
            "name": "custom",
            "parts": [
                {"id": "a", "length_mm": 600, "width_mm": 300, "lamination_type": "custom"},
                {"id": "b", "length_mm": 600, "width_mm": 300,
                 "lamination_type": "custom", "edge_thickness_mm": 60}
            ],
            "stock": [
                {"id": "board", "length_mm": 2750, "width_mm": 1830, "qty": 10}
            ]
        }"#,
    );

    let (parts, _) = cutplan::io::import(&ext);
    assert_eq!(parts[0].lamination.edge_thickness_mm(), 48);
    assert_eq!(parts[1].lamination.edge_thickness_mm(), 60);
}

#[test]
fn band_edges_parse_per_edge() {
    let ext = parse(
        r#"{
            "name": "banded",
            "parts": [
                {"id": "a", "length_mm": 600, "width_mm": 300,
                 "band_edges": {"top": true, "left": true}}
            ],
            "stock": [
                {"id": "board", "length_mm": 2750, "width_mm": 1830, "qty": 10}
            ]
        }"#,
    );

    let (parts, _) = cutplan::io::import(&ext);
    let edges = parts[0].band_edges;
    assert!(edges.top && edges.left);
    assert!(!edges.right && !edges.bottom);
}
