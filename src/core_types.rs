use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a catalog token. Two placed tokens match when their ids
/// are equal.
pub type TokenId = String;

/// An addressable board position, stored as the linear index
/// `row * cols + col` of the active layout.
///
/// The stable string form is `cell-<index>`; snapshots and scripts use that
/// form. `Ord` is ascending index, which is also the order every store scan
/// runs in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct CellId(pub u16);

impl CellId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell-{}", self.0)
    }
}

impl FromStr for CellId {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix("cell-")
            .and_then(|idx| idx.parse::<u16>().ok())
            .map(CellId)
            .ok_or_else(|| BoardError::Cell(s.to_string()))
    }
}

impl TryFrom<String> for CellId {
    type Error = BoardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CellId> for String {
    fn from(cell: CellId) -> Self {
        cell.to_string()
    }
}
