use matchboard::api::BoardSnapshot;
use serde_json::Value;

mod common;
use common::{cell, engine_2x4};

#[test]
fn snapshot_reflects_the_board() {
    let mut engine = engine_2x4();
    engine.place(cell(0), "wine");
    engine.place(cell(1), "wine");
    engine.place(cell(3), "cheese");
    engine.set_layout(3, 3);

    let snapshot = BoardSnapshot::capture(&engine);

    assert_eq!(snapshot.layout.rows, 2);
    assert_eq!(snapshot.layout.cols, 4);
    assert_eq!(snapshot.pending_layout.map(|p| (p.rows, p.cols)), Some((3, 3)));
    assert_eq!(snapshot.history_len, 3);
    assert!(snapshot.can_undo);

    let wine = &snapshot.cells["cell-0"];
    assert_eq!(wine.token, "wine");
    assert_eq!(wine.glyph, "W");
    assert!(wine.locked);
    assert!(!snapshot.cells["cell-3"].locked);
    assert!(!snapshot.cells.contains_key("cell-2"));
}

#[test]
fn snapshot_serializes_camel_case_with_string_cell_keys() {
    let mut engine = engine_2x4();
    engine.place(cell(5), "gem");

    let json = BoardSnapshot::capture(&engine).to_json().unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["historyLen"], 1);
    assert_eq!(value["canUndo"], true);
    assert!(value["pendingLayout"].is_null());
    assert_eq!(value["cells"]["cell-5"]["token"], "gem");
    assert_eq!(value["cells"]["cell-5"]["locked"], false);
}

#[test]
fn empty_board_snapshot_disables_undo() {
    let engine = engine_2x4();
    let snapshot = BoardSnapshot::capture(&engine);

    assert!(snapshot.cells.is_empty());
    assert_eq!(snapshot.history_len, 0);
    assert!(!snapshot.can_undo);
}
