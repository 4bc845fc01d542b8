use crate::core_types::{CellId, TokenId};
use std::collections::{BTreeMap, BTreeSet};

/// Occupied cells of the board. Absence of a key means the cell is empty.
///
/// Backed by a `BTreeMap` so every scan over the store runs in ascending
/// cell-index order; the matching search depends on that order being
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct GridStore {
    cells: BTreeMap<CellId, TokenId>,
}

impl GridStore {
    pub fn get(&self, cell: CellId) -> Option<&TokenId> {
        self.cells.get(&cell)
    }

    /// Writes `token` into `cell`, returning the previous occupant.
    pub fn insert(&mut self, cell: CellId, token: TokenId) -> Option<TokenId> {
        self.cells.insert(cell, token)
    }

    pub fn remove(&mut self, cell: CellId) -> Option<TokenId> {
        self.cells.remove(&cell)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Occupied cells in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, &TokenId)> {
        self.cells.iter().map(|(&cell, token)| (cell, token))
    }
}

/// Cells currently in the locked state.
///
/// Locked cells reject placement and removal until released. A cell can be
/// locked only while occupied; the engine maintains that invariant.
#[derive(Debug, Clone, Default)]
pub struct LockSet {
    cells: BTreeSet<CellId>,
}

impl LockSet {
    pub fn lock(&mut self, cell: CellId) {
        self.cells.insert(cell);
    }

    pub fn unlock(&mut self, cell: CellId) {
        self.cells.remove(&cell);
    }

    pub fn is_locked(&self, cell: CellId) -> bool {
        self.cells.contains(&cell)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Locked cells in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = CellId> + '_ {
        self.cells.iter().copied()
    }
}
