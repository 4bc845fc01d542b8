#![allow(dead_code)]

use matchboard::catalog::TokenCatalog;
use matchboard::core_types::CellId;
use matchboard::engine::BoardEngine;
use matchboard::layout::GridLayout;

/// The in-game 2x4 table with the built-in catalog.
pub fn engine_2x4() -> BoardEngine {
    engine(2, 4)
}

pub fn engine(rows: u32, cols: u32) -> BoardEngine {
    BoardEngine::new(TokenCatalog::builtin(), GridLayout::clamped(rows, cols))
}

pub fn cell(index: u16) -> CellId {
    CellId(index)
}

pub fn occupant(engine: &BoardEngine, index: u16) -> Option<String> {
    engine.grid().get(cell(index)).cloned()
}

pub fn locked(engine: &BoardEngine, index: u16) -> bool {
    engine.locks().is_locked(cell(index))
}
