use ndarray::Array2;

/// Single coordinate axis used for grid width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`, `x` being the column and `y` the row.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Chessboard distance, the number of king moves between two cells.
pub const fn chebyshev_distance(a: Coord2, b: Coord2) -> Coord {
    let dx = a.0.abs_diff(b.0);
    let dy = a.1.abs_diff(b.1);
    if dx > dy { dx } else { dy }
}

/// Converts an ndarray index back into coordinates; the arrays are always built from a `Coord2` shape.
pub(crate) fn from_nd_index((x, y): (usize, usize)) -> Coord2 {
    (x as Coord, y as Coord)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let (size_x, size_y) = self.dim();
        NeighborIter::new(index, (size_x as Coord, size_y as Coord))
    }
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    let (max_x, max_y) = bounds;

    let next_x = x.checked_add_signed(dx)?;
    if next_x >= max_x {
        return None;
    }

    let next_y = y.checked_add_signed(dy)?;
    if next_y >= max_y {
        return None;
    }

    Some((next_x, next_y))
}

/// Iterates the Moore neighborhood of a cell, clipped at the grid edges.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *DISPLACEMENTS.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, delta, self.bounds) {
                return Some(next_item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_three_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((0, 0), (9, 9)).collect();

        assert_eq!(neighbors, [(1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn interior_has_eight_neighbors() {
        assert_eq!(NeighborIter::new((4, 4), (9, 9)).count(), 8);
        assert!(NeighborIter::new((4, 4), (9, 9)).all(|pos| chebyshev_distance(pos, (4, 4)) == 1));
    }

    #[test]
    fn edge_of_single_row_grid() {
        let neighbors: Vec<_> = NeighborIter::new((2, 0), (3, 1)).collect();

        assert_eq!(neighbors, [(1, 0)]);
    }

    #[test]
    fn chebyshev_distance_is_max_axis_delta() {
        assert_eq!(chebyshev_distance((0, 0), (0, 0)), 0);
        assert_eq!(chebyshev_distance((3, 1), (1, 2)), 2);
        assert_eq!(chebyshev_distance((29, 0), (0, 15)), 29);
    }
}
