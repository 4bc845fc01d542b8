use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use itertools::Itertools;
use matchboard::engine::BoardEngine;

/// Prints the board as a rows x cols table. Locked cells render their
/// glyph in brackets; empty cells stay blank.
pub fn print_board(engine: &BoardEngine) {
    let layout = engine.layout();
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for row in &layout.cells().chunks(layout.cols as usize) {
        let cells: Vec<Cell> = row
            .map(|cell| {
                let label = match engine.grid().get(cell) {
                    Some(token) => {
                        let glyph = engine
                            .catalog()
                            .get(token)
                            .map(|def| def.glyph.clone())
                            .unwrap_or_else(|| "?".to_string());
                        if engine.locks().is_locked(cell) {
                            format!("[{}]", glyph)
                        } else {
                            glyph
                        }
                    }
                    None => " ".to_string(),
                };
                Cell::new(label).set_alignment(CellAlignment::Center)
            })
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);

    let pending = match engine.pending_layout() {
        Some(p) => format!(" | pending: {}x{} (confirm/cancel)", p.rows, p.cols),
        None => String::new(),
    };
    println!(
        "{}x{} | placed: {} | locked: {} | history: {}{}",
        layout.rows,
        layout.cols,
        engine.grid().len(),
        engine.locks().len(),
        engine.history_len(),
        pending
    );
}
