use core::fmt;
use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular board of [`Cell`]s, indexed by `(x, y)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Allocates an empty board of `(cols, rows)` cells, no mines yet.
    pub fn new(size: Coord2) -> Self {
        let cells = Array2::from_shape_fn(size.to_nd_index(), |index| Cell::new(from_nd_index(index)));
        Self { cells }
    }

    pub fn size(&self) -> Coord2 {
        from_nd_index(self.cells.dim())
    }

    pub fn cols(&self) -> Coord {
        self.size().0
    }

    pub fn rows(&self) -> Coord {
        self.size().1
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let (size_x, size_y) = self.size();
        coords.0 < size_x && coords.1 < size_y
    }

    pub fn get(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    pub fn get_mut(&mut self, coords: Coord2) -> Option<&mut Cell> {
        self.cells.get_mut(coords.to_nd_index())
    }

    /// All cells, column by column.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    /// Copies the mines of `layout` into the board and computes every neighbor count.
    pub fn lay_mines(&mut self, layout: &MineLayout) -> Result<()> {
        if layout.size() != self.size() {
            return Err(GameError::InvalidBoardShape);
        }

        for cell in self.cells.iter_mut() {
            cell.is_mine = layout.contains_mine(cell.pos);
            cell.neighbor_mines = if cell.is_mine {
                0
            } else {
                layout.adjacent_mine_count(cell.pos)
            };
        }

        Ok(())
    }

    pub fn mine_count(&self) -> CellCount {
        self.iter().filter(|cell| cell.is_mine).count() as CellCount
    }

    pub fn flagged_count(&self) -> CellCount {
        self.iter().filter(|cell| cell.is_flagged).count() as CellCount
    }

    pub fn unrevealed_safe_count(&self) -> CellCount {
        self.iter()
            .filter(|cell| !cell.is_mine && !cell.is_revealed)
            .count() as CellCount
    }

    pub(crate) fn reveal_all_mines(&mut self) {
        for cell in self.cells.iter_mut().filter(|cell| cell.is_mine) {
            cell.is_revealed = true;
        }
    }

    pub(crate) fn flag_all_mines(&mut self) {
        for cell in self.cells.iter_mut().filter(|cell| cell.is_mine) {
            cell.is_flagged = true;
        }
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Grid {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

/// One line per row: `.` hidden, `F` flagged, `*` revealed mine, digits for counts, blank for zero.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (size_x, size_y) = self.size();
        for y in 0..size_y {
            for x in 0..size_x {
                let cell = &self[(x, y)];
                let symbol = match (cell.is_revealed, cell.is_flagged, cell.is_mine) {
                    (false, true, _) => 'F',
                    (false, false, _) => '.',
                    (true, _, true) => '*',
                    (true, _, false) if cell.neighbor_mines == 0 => ' ',
                    (true, _, false) => char::from(b'0' + cell.neighbor_mines),
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn new_grid_is_blank_with_coordinates() {
        let grid = Grid::new((30, 16));

        assert_eq!(grid.size(), (30, 16));
        assert_eq!(grid.iter().count(), 480);
        assert_eq!(grid[(29, 15)], Cell::new((29, 15)));
        assert!(grid.iter().all(|cell| cell.is_hidden() && !cell.is_mine));
        assert!(grid.get((30, 0)).is_none());
        assert!(!grid.contains((0, 16)));
    }

    #[test]
    fn lay_mines_computes_neighbor_counts() {
        let layout = MineLayout::from_mine_coords((4, 3), &[(0, 0), (1, 0), (3, 2)]).unwrap();
        let mut grid = Grid::new((4, 3));

        grid.lay_mines(&layout).unwrap();

        assert_eq!(grid.mine_count(), 3);
        assert_eq!(grid[(0, 1)].neighbor_mines, 2);
        assert_eq!(grid[(2, 1)].neighbor_mines, 2);
        assert_eq!(grid[(3, 0)].neighbor_mines, 0);
        assert_eq!(grid[(0, 0)].neighbor_mines, 0);
        for cell in grid.iter().filter(|cell| !cell.is_mine) {
            let expected = grid
                .iter_neighbors(cell.pos)
                .filter(|&pos| grid[pos].is_mine)
                .count() as u8;
            assert_eq!(cell.neighbor_mines, expected, "at {:?}", cell.pos);
        }
    }

    #[test]
    fn lay_mines_rejects_mismatched_layout() {
        let layout = MineLayout::from_mine_coords((3, 4), &[]).unwrap();
        let mut grid = Grid::new((4, 3));

        assert_eq!(grid.lay_mines(&layout), Err(GameError::InvalidBoardShape));
    }

    #[test]
    fn display_renders_rows() {
        let layout = MineLayout::from_mine_coords((3, 2), &[(2, 1)]).unwrap();
        let mut grid = Grid::new((3, 2));
        grid.lay_mines(&layout).unwrap();
        grid[(0, 0)].is_revealed = true;
        grid[(1, 1)].is_revealed = true;
        grid[(2, 0)].is_flagged = true;
        grid[(2, 1)].is_revealed = true;

        assert_eq!(grid.to_string(), " .F\n.1*\n");
    }
}
