use matchboard::layout::GridLayout;
use rstest::rstest;

mod common;
use common::{cell, engine_2x4};

#[rstest]
#[case(0, 5, 1, 5)]
#[case(11, 3, 10, 3)]
#[case(4, 0, 4, 1)]
#[case(200, 200, 10, 10)]
#[case(1, 1, 1, 1)]
#[case(10, 10, 10, 10)]
fn dimensions_clamp_to_bounds(
    #[case] rows: u32,
    #[case] cols: u32,
    #[case] want_rows: u8,
    #[case] want_cols: u8,
) {
    let layout = GridLayout::clamped(rows, cols);
    assert_eq!(layout.rows, want_rows);
    assert_eq!(layout.cols, want_cols);
}

#[test]
fn layout_enumerates_cells_in_ascending_order() {
    let layout = GridLayout::clamped(2, 3);
    let indices: Vec<usize> = layout.cells().map(|c| c.index()).collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
    assert!(layout.contains(cell(5)));
    assert!(!layout.contains(cell(6)));
}

#[test]
fn empty_grid_applies_layout_immediately() {
    let mut engine = engine_2x4();

    engine.set_layout(3, 3);

    assert_eq!(engine.layout(), GridLayout::clamped(3, 3));
    assert_eq!(engine.pending_layout(), None);
}

#[test]
fn empty_grid_layout_change_clears_stale_history() {
    let mut engine = engine_2x4();
    engine.place(cell(7), "wine");
    engine.remove(cell(7));
    assert_eq!(engine.history_len(), 2);

    // Grid is empty again; cell-7 would be out of bounds on a 2x3 board,
    // so the stale entries must not survive the switch.
    engine.set_layout(2, 3);

    assert_eq!(engine.history_len(), 0);
    assert!(!engine.can_undo());
}

#[test]
fn nonempty_grid_stages_the_change() {
    let mut engine = engine_2x4();
    engine.place(cell(0), "wine");

    engine.set_layout(3, 3);

    // Nothing applied yet.
    assert_eq!(engine.layout(), GridLayout::clamped(2, 4));
    assert_eq!(engine.pending_layout(), Some(GridLayout::clamped(3, 3)));
    assert_eq!(engine.grid().len(), 1);
}

#[test]
fn confirm_applies_and_clears_everything_together() {
    let mut engine = engine_2x4();
    engine.place(cell(0), "wine");
    engine.place(cell(1), "wine");
    engine.set_layout(3, 3);

    engine.confirm_pending_layout();

    assert_eq!(engine.layout(), GridLayout::clamped(3, 3));
    assert_eq!(engine.pending_layout(), None);
    assert!(engine.grid().is_empty());
    assert!(engine.locks().is_empty());
    assert_eq!(engine.history_len(), 0);
}

#[test]
fn cancel_keeps_the_board_untouched() {
    let mut engine = engine_2x4();
    engine.place(cell(0), "wine");
    engine.set_layout(3, 3);

    engine.cancel_pending_layout();

    assert_eq!(engine.layout(), GridLayout::clamped(2, 4));
    assert_eq!(engine.pending_layout(), None);
    assert_eq!(engine.grid().len(), 1);
    assert_eq!(engine.history_len(), 1);
}

#[test]
fn restaging_replaces_the_pending_value() {
    let mut engine = engine_2x4();
    engine.place(cell(0), "wine");

    engine.set_layout(3, 3);
    engine.set_layout(5, 5);

    assert_eq!(engine.pending_layout(), Some(GridLayout::clamped(5, 5)));
}

#[test]
fn requesting_current_dimensions_drops_any_pending_change() {
    let mut engine = engine_2x4();
    engine.place(cell(0), "wine");
    engine.set_layout(3, 3);

    engine.set_layout(2, 4);

    assert_eq!(engine.pending_layout(), None);
    assert_eq!(engine.layout(), GridLayout::clamped(2, 4));
    assert_eq!(engine.grid().len(), 1);
}

#[test]
fn confirm_without_pending_is_a_noop() {
    let mut engine = engine_2x4();
    engine.place(cell(0), "wine");

    engine.confirm_pending_layout();

    assert_eq!(engine.grid().len(), 1);
    assert_eq!(engine.layout(), GridLayout::clamped(2, 4));
}

#[test]
fn reset_clears_stores_but_keeps_dimensions() {
    let mut engine = engine_2x4();
    engine.place(cell(0), "wine");
    engine.place(cell(1), "wine");
    engine.set_layout(3, 3);

    engine.reset();

    assert!(engine.grid().is_empty());
    assert!(engine.locks().is_empty());
    assert_eq!(engine.history_len(), 0);
    assert_eq!(engine.layout(), GridLayout::clamped(2, 4));
    assert_eq!(engine.pending_layout(), None);
}
