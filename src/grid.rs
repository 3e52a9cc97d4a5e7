//! Cell-index arithmetic shared by the generator and any consumer moving a
//! marker around the grid.
//!
//! Cells of a `size * size` grid are addressed by a single index in
//! `[0, size * size)`, with `row = index / size` and `column = index % size`.
//! Naked `±1` / `±size` stepping wraps at row edges, so movement goes
//! through [`neighbor_of`], which validates bounds first.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

#[inline]
pub fn index_of(size: usize, row: usize, column: usize) -> usize {
    (size * row) + column
}

#[inline]
pub fn coords_of(size: usize, index: usize) -> (usize, usize) {
    (index / size, index % size)
}

/// Index of the adjacent cell in `direction`, or `None` at a grid edge.
/// North is up (towards row 0).
pub fn neighbor_of(size: usize, index: usize, direction: Direction) -> Option<usize> {
    let (row, column) = coords_of(size, index);

    let (n_row, n_col) = match direction {
        Direction::North => {
            if row == 0 {
                return None;
            }
            (row - 1, column)
        }
        Direction::South => {
            if row + 1 >= size {
                return None;
            }
            (row + 1, column)
        }
        Direction::East => {
            if column + 1 >= size {
                return None;
            }
            (row, column + 1)
        }
        Direction::West => {
            if column == 0 {
                return None;
            }
            (row, column - 1)
        }
    };

    Some(index_of(size, n_row, n_col))
}
