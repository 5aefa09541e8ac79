use serde::{Deserialize, Serialize};

use crate::Coord2;

/// One grid position as seen by the host.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub pos: Coord2,
    pub is_mine: bool,
    pub is_revealed: bool,
    pub is_flagged: bool,
    /// Mines among the Moore neighbors, left at 0 on mined cells.
    pub neighbor_mines: u8,
}

impl Cell {
    pub const fn new(pos: Coord2) -> Self {
        Self {
            pos,
            is_mine: false,
            is_revealed: false,
            is_flagged: false,
            neighbor_mines: 0,
        }
    }

    /// Neither revealed nor flagged, so a reveal or the flood fill may open it.
    pub const fn is_hidden(&self) -> bool {
        !self.is_revealed && !self.is_flagged
    }
}
