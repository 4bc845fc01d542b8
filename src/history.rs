use crate::core_types::{CellId, TokenId};
use serde::{Deserialize, Serialize};

/// One recorded, invertible mutation of the grid and lock stores.
///
/// `partner` is the second cell whose lock flag changed as a side effect of
/// the action (the matched pair mate), when there was one. Replayed in
/// reverse from the empty board, the log reconstructs the exact grid and
/// lock state present when each entry was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum HistoryEntry {
    /// A token placed on a previously empty cell.
    Add {
        cell: CellId,
        token: TokenId,
        partner: Option<CellId>,
    },
    /// A token placed over an existing occupant.
    Replace {
        cell: CellId,
        token: TokenId,
        previous: TokenId,
        partner: Option<CellId>,
    },
    /// A token removed from its cell. `was_locked` restores the cell's own
    /// lock flag on undo; `partner` is the locked mate released by the
    /// removal.
    Remove {
        cell: CellId,
        token: TokenId,
        partner: Option<CellId>,
        was_locked: bool,
    },
}

impl HistoryEntry {
    pub fn cell(&self) -> CellId {
        match self {
            HistoryEntry::Add { cell, .. }
            | HistoryEntry::Replace { cell, .. }
            | HistoryEntry::Remove { cell, .. } => *cell,
        }
    }

    pub fn partner(&self) -> Option<CellId> {
        match self {
            HistoryEntry::Add { partner, .. }
            | HistoryEntry::Replace { partner, .. }
            | HistoryEntry::Remove { partner, .. } => *partner,
        }
    }
}

/// Strict LIFO log of undoable actions.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}
