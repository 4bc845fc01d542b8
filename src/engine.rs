use crate::catalog::TokenCatalog;
use crate::core_types::{CellId, TokenId};
use crate::grid::{GridStore, LockSet};
use crate::history::{HistoryEntry, HistoryLog};
use crate::layout::GridLayout;
use tracing::debug;

/// The board state machine: grid contents, lock set and undo history behind
/// one mutation interface, so the three stores can never drift apart.
///
/// Every operation is total over its preconditions: a call that hits a
/// precondition (locked target, empty history, ...) is a silent no-op with
/// no partial mutation. All mutation goes through `&mut self`, so a reader
/// never observes the grid updated without the matching lock and history
/// update.
#[derive(Debug, Clone)]
pub struct BoardEngine {
    catalog: TokenCatalog,
    layout: GridLayout,
    pending_layout: Option<GridLayout>,
    grid: GridStore,
    locks: LockSet,
    history: HistoryLog,
}

impl BoardEngine {
    pub fn new(catalog: TokenCatalog, layout: GridLayout) -> Self {
        Self {
            catalog,
            layout,
            pending_layout: None,
            grid: GridStore::default(),
            locks: LockSet::default(),
            history: HistoryLog::default(),
        }
    }

    /// Built-in catalog at the default dimensions.
    pub fn with_defaults() -> Self {
        Self::new(TokenCatalog::builtin(), GridLayout::default())
    }

    pub fn catalog(&self) -> &TokenCatalog {
        &self.catalog
    }

    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    pub fn pending_layout(&self) -> Option<GridLayout> {
        self.pending_layout
    }

    pub fn grid(&self) -> &GridStore {
        &self.grid
    }

    pub fn locks(&self) -> &LockSet {
        &self.locks
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Places `token` on `cell` and records one history entry.
    ///
    /// A locked target is left untouched. The lock token locks its cell
    /// unconditionally; any other token pairs with (and locks) the first
    /// unlocked same-id occupant found in ascending cell order. Passing a
    /// token id outside the catalog or a cell outside the layout is a
    /// caller contract violation, not a recoverable condition.
    pub fn place(&mut self, cell: CellId, token: &str) {
        debug_assert!(self.layout.contains(cell), "cell {cell} out of bounds");

        if self.locks.is_locked(cell) {
            debug!(%cell, token, "place ignored: cell is locked");
            return;
        }

        let token: TokenId = token.to_string();
        let previous = self.grid.insert(cell, token.clone());

        let mut partner = None;
        if self.catalog.is_lock(&token) {
            self.locks.lock(cell);
        } else if let Some(mate) = self.find_unlocked_match(cell, &token) {
            self.locks.lock(cell);
            self.locks.lock(mate);
            partner = Some(mate);
        }

        let entry = match previous {
            Some(previous) => HistoryEntry::Replace {
                cell,
                token,
                previous,
                partner,
            },
            None => HistoryEntry::Add {
                cell,
                token,
                partner,
            },
        };
        self.history.push(entry);
    }

    /// Clears `cell` and records one history entry.
    ///
    /// Locked and empty targets are left untouched. Removing a non-lock
    /// token also releases the first locked same-id cell: the pairing
    /// dissolves with the removal.
    pub fn remove(&mut self, cell: CellId) {
        debug_assert!(self.layout.contains(cell), "cell {cell} out of bounds");

        if self.locks.is_locked(cell) {
            debug!(%cell, "remove ignored: cell is locked");
            return;
        }
        let Some(token) = self.grid.remove(cell) else {
            debug!(%cell, "remove ignored: cell is empty");
            return;
        };

        let mut partner = None;
        if !self.catalog.is_lock(&token) {
            if let Some(mate) = self.find_locked_match(cell, &token) {
                self.locks.unlock(mate);
                partner = Some(mate);
            }
        }

        // The guard above means the removed cell itself is never locked
        // here; the flag still travels with the entry so undo has a single
        // restore path.
        self.history.push(HistoryEntry::Remove {
            cell,
            token,
            partner,
            was_locked: false,
        });
    }

    /// Releases a locked cell, together with its locked pair mate when the
    /// occupant is not the lock token. Unlocked cells are left alone.
    ///
    /// This transition is deliberately absent from the history log and
    /// cannot be undone.
    pub fn toggle_lock(&mut self, cell: CellId) {
        if !self.locks.is_locked(cell) {
            debug!(%cell, "toggle_lock ignored: cell is not locked");
            return;
        }

        self.locks.unlock(cell);

        if let Some(token) = self.grid.get(cell).cloned() {
            if !self.catalog.is_lock(&token) {
                if let Some(mate) = self.find_locked_match(cell, &token) {
                    self.locks.unlock(mate);
                }
            }
        }
    }

    /// Pops the most recent history entry and applies its inverse. Empty
    /// history is a no-op. Exactly one entry is consumed per call.
    pub fn undo(&mut self) {
        let Some(entry) = self.history.pop() else {
            debug!("undo ignored: history is empty");
            return;
        };

        match entry {
            HistoryEntry::Add {
                cell,
                token,
                partner,
            } => {
                self.grid.remove(cell);
                self.unlock_placement(cell, &token, partner);
            }
            HistoryEntry::Replace {
                cell,
                token,
                previous,
                partner,
            } => {
                self.grid.insert(cell, previous);
                self.unlock_placement(cell, &token, partner);
            }
            HistoryEntry::Remove {
                cell,
                token,
                partner,
                was_locked,
            } => {
                self.grid.insert(cell, token);
                if was_locked {
                    self.locks.lock(cell);
                }
                // Restore the pairing the removal dissolved.
                if let Some(mate) = partner {
                    self.locks.lock(mate);
                }
            }
        }
    }

    /// Requests new dimensions, clamped to the valid range.
    ///
    /// On an empty grid the change applies immediately and the stores are
    /// recreated empty. On a non-empty grid the change is staged and waits
    /// for [`confirm_pending_layout`](Self::confirm_pending_layout);
    /// restaging replaces the previous pending value. Requesting the
    /// current dimensions drops any pending change and does nothing else.
    pub fn set_layout(&mut self, rows: u32, cols: u32) {
        let next = GridLayout::clamped(rows, cols);

        if next == self.layout {
            self.pending_layout = None;
            return;
        }
        if self.grid.is_empty() {
            self.apply_layout(next);
        } else {
            debug!(
                rows = next.rows,
                cols = next.cols,
                "layout change staged, awaiting confirmation"
            );
            self.pending_layout = Some(next);
        }
    }

    /// Applies the staged dimensions and clears grid, locks and history
    /// together. No-op without a pending change.
    pub fn confirm_pending_layout(&mut self) {
        if let Some(next) = self.pending_layout.take() {
            self.apply_layout(next);
        }
    }

    pub fn cancel_pending_layout(&mut self) {
        self.pending_layout = None;
    }

    /// Clears grid, locks and history together; dimensions stay. Any
    /// pending layout change is discarded, since confirmation only guards
    /// non-empty grids.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.locks.clear();
        self.history.clear();
        self.pending_layout = None;
    }

    fn apply_layout(&mut self, next: GridLayout) {
        self.layout = next;
        self.pending_layout = None;
        self.grid.clear();
        self.locks.clear();
        self.history.clear();
    }

    /// First unlocked occupied cell holding the same token id, ascending
    /// cell order, excluding `cell` itself.
    fn find_unlocked_match(&self, cell: CellId, token: &str) -> Option<CellId> {
        self.grid
            .iter()
            .find(|&(other, occupant)| {
                other != cell && occupant.as_str() == token && !self.locks.is_locked(other)
            })
            .map(|(other, _)| other)
    }

    /// First locked cell holding the same token id, ascending cell order,
    /// excluding `cell` itself.
    fn find_locked_match(&self, cell: CellId, token: &str) -> Option<CellId> {
        self.locks.iter().find(|&other| {
            other != cell
                && self
                    .grid
                    .get(other)
                    .is_some_and(|occupant| occupant.as_str() == token)
        })
    }

    /// Inverse of the lock side of a placement: clears the flags iff the
    /// placement locked anything (it paired, or placed the lock token).
    fn unlock_placement(&mut self, cell: CellId, token: &str, partner: Option<CellId>) {
        if partner.is_some() || self.catalog.is_lock(token) {
            self.locks.unlock(cell);
        }
        if let Some(mate) = partner {
            self.locks.unlock(mate);
        }
    }
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
