use crate::engine::BoardEngine;
use crate::error::BoardResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Dimensions as a renderer sees them.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutView {
    pub rows: u8,
    pub cols: u8,
}

/// One occupied cell, resolved against the catalog.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CellView {
    pub token: String,
    pub glyph: String,
    pub tint: String,
    pub locked: bool,
}

/// Render-ready view of the whole board.
///
/// Cells are keyed by their stable `cell-<index>` string form; only
/// occupied cells appear. `history_len`/`can_undo` let a front end disable
/// its undo control, `pending_layout` drives the confirmation prompt.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub layout: LayoutView,
    pub pending_layout: Option<LayoutView>,
    pub cells: BTreeMap<String, CellView>,
    pub history_len: usize,
    pub can_undo: bool,
}

impl BoardSnapshot {
    pub fn capture(engine: &BoardEngine) -> Self {
        let layout = engine.layout();
        let cells = engine
            .grid()
            .iter()
            .map(|(cell, token)| {
                let (glyph, tint) = match engine.catalog().get(token) {
                    Some(def) => (def.glyph.clone(), def.tint.clone()),
                    None => ("?".to_string(), String::new()),
                };
                let view = CellView {
                    token: token.clone(),
                    glyph,
                    tint,
                    locked: engine.locks().is_locked(cell),
                };
                (cell.to_string(), view)
            })
            .collect();

        Self {
            layout: LayoutView {
                rows: layout.rows,
                cols: layout.cols,
            },
            pending_layout: engine.pending_layout().map(|pending| LayoutView {
                rows: pending.rows,
                cols: pending.cols,
            }),
            cells,
            history_len: engine.history_len(),
            can_undo: engine.can_undo(),
        }
    }

    pub fn to_json(&self) -> BoardResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
