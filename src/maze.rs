use log::debug;
use rand::Rng;

use crate::error::Error;
use crate::forest::DisjointForest;
use crate::generators::rand_unions::RandUnions;
use crate::generators::Generator;
use crate::grid::{self, Direction};

/// Draw-count ceiling as a multiple of `cells * cells`. Random pair draws
/// connect the corners in roughly `cells * ln(cells)` unions, so this only
/// trips on a broken rng.
const STALL_FACTOR: usize = 64;

/// A generated maze: the frozen disjoint-set forest plus its grid size.
///
/// Queries validate indices and surface [`Error::IndexOutOfBounds`] instead
/// of panicking. Most take `&mut self`: resolving a root compresses parent
/// chains as it walks, a caching side effect that never changes any answer.
pub struct Maze {
    size: usize,
    forest: DisjointForest,
}

impl Maze {
    /// Generate a `size * size` maze off the thread-local rng.
    pub fn new(size: usize) -> Result<Self, Error> {
        Self::with_rng(size, rand::thread_rng())
    }

    /// Generate off a caller-supplied rng. A seeded rng reproduces the same
    /// maze draw for draw.
    pub fn with_rng<R: Rng>(size: usize, rng: R) -> Result<Self, Error> {
        if size < 1 {
            return Err(Error::InvalidSize(size));
        }
        let cells = size.checked_mul(size).ok_or(Error::InvalidSize(size))?;

        let mut generator = RandUnions::new(size, rng);
        let cap = STALL_FACTOR.saturating_mul(cells).saturating_mul(cells);
        while !generator.is_done() {
            generator.step_generation();
            if generator.attempts() > cap {
                return Err(Error::GenerationStall {
                    attempts: generator.attempts(),
                });
            }
        }
        debug!(
            "generated {}x{} maze in {} unions",
            size,
            size,
            generator.attempts()
        );

        Ok(Self {
            size,
            forest: generator.into_forest(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> usize {
        self.forest.len()
    }

    /// Number of groups left in the forest once generation stopped.
    pub fn groups(&self) -> usize {
        self.forest.groups()
    }

    /// Representative cell of `index`'s group.
    pub fn root(&mut self, index: usize) -> Result<usize, Error> {
        self.check_index(index)?;
        Ok(self.forest.root(index))
    }

    pub fn connected(&mut self, a: usize, b: usize) -> Result<bool, Error> {
        self.check_index(a)?;
        self.check_index(b)?;
        Ok(self.forest.connected(a, b))
    }

    /// Whether `index` is an open cell under the rendering convention this
    /// generator was built against: open means the cell is still its own
    /// group of one, untouched by any union.
    pub fn is_open(&self, index: usize) -> Result<bool, Error> {
        self.check_index(index)?;
        Ok(self.forest.is_singleton(index))
    }

    /// Size of the group holding `index`.
    pub fn group_size(&mut self, index: usize) -> Result<usize, Error> {
        self.check_index(index)?;
        Ok(self.forest.group_size(index))
    }

    /// Open flag per cell, in index order. What a rendering layer draws.
    pub fn open_cells(&self) -> Vec<bool> {
        (0..self.cells())
            .map(|i| self.forest.is_singleton(i))
            .collect()
    }

    /// Where a marker on `index` ends up moving one cell in `direction`, or
    /// `None` when the move would leave the grid. This is the validated form
    /// of the `±1` / `±size` index arithmetic an input layer would otherwise
    /// do itself, which wraps at row edges.
    pub fn neighbor(&self, index: usize, direction: Direction) -> Result<Option<usize>, Error> {
        self.check_index(index)?;
        Ok(grid::neighbor_of(self.size, index, direction))
    }

    fn check_index(&self, index: usize) -> Result<(), Error> {
        let cells = self.cells();
        if index >= cells {
            return Err(Error::IndexOutOfBounds { index, cells });
        }
        Ok(())
    }
}

#[cfg(test)]
mod test_maze {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn init_logs() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn corners_end_up_connected() {
        init_logs();
        for size in 1..=6 {
            let mut maze = Maze::new(size).unwrap();
            let last = size * size - 1;
            assert!(maze.connected(0, last).unwrap());
            assert_eq!(maze.root(0).unwrap(), maze.root(last).unwrap());
        }
    }

    #[test]
    fn two_by_two_scenario() {
        init_logs();
        let mut maze = Maze::with_rng(2, StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(maze.cells(), 4);
        assert!(maze.connected(0, 3).unwrap());

        // the surviving root's group holds every cell merged into it
        let root = maze.root(0).unwrap();
        let mut merged = 0;
        for i in 0..4 {
            if maze.root(i).unwrap() == root {
                merged += 1;
            }
        }
        assert_eq!(maze.group_size(root).unwrap(), merged);
        assert!(merged >= 2);
    }

    #[test]
    fn single_cell_maze() {
        init_logs();
        let mut maze = Maze::new(1).unwrap();
        assert_eq!(maze.cells(), 1);
        assert!(maze.connected(0, 0).unwrap());
        assert_eq!(maze.groups(), 1);
        // never unioned, so still open under the literal predicate
        assert!(maze.is_open(0).unwrap());
    }

    #[test]
    fn zero_size_is_rejected() {
        match Maze::new(0) {
            Err(Error::InvalidSize(0)) => {}
            other => panic!("expected InvalidSize, got {:?}", other.map(|m| m.size())),
        }
    }

    #[test]
    fn queries_reject_out_of_range_indices() {
        let mut maze = Maze::with_rng(3, StdRng::seed_from_u64(5)).unwrap();
        let err = Error::IndexOutOfBounds { index: 9, cells: 9 };

        assert_eq!(maze.is_open(9).unwrap_err(), err);
        assert_eq!(maze.root(9).unwrap_err(), err);
        assert_eq!(maze.connected(0, 9).unwrap_err(), err);
        assert_eq!(maze.group_size(9).unwrap_err(), err);
        assert_eq!(maze.neighbor(9, Direction::North).unwrap_err(), err);

        // in-range queries still fine afterwards
        assert!(maze.connected(0, 8).unwrap());
    }

    #[test]
    fn connectivity_is_symmetric_and_transitive() {
        let mut maze = Maze::with_rng(4, StdRng::seed_from_u64(21)).unwrap();
        for a in 0..16 {
            for b in 0..16 {
                assert_eq!(
                    maze.connected(a, b).unwrap(),
                    maze.connected(b, a).unwrap()
                );
            }
        }
        for a in 0..16 {
            for b in 0..16 {
                for c in 0..16 {
                    if maze.connected(a, b).unwrap() && maze.connected(b, c).unwrap() {
                        assert!(maze.connected(a, c).unwrap());
                    }
                }
            }
        }
    }

    #[test]
    fn open_cells_match_the_literal_predicate() {
        let maze = Maze::with_rng(4, StdRng::seed_from_u64(3)).unwrap();
        let open = maze.open_cells();
        assert_eq!(open.len(), 16);
        for (i, &o) in open.iter().enumerate() {
            assert_eq!(maze.is_open(i).unwrap(), o);
        }
        // start and end were merged together, so neither is open
        assert!(!open[0]);
        assert!(!open[15]);
    }

    #[test]
    fn same_seed_reproduces_the_maze() {
        let a = Maze::with_rng(5, StdRng::seed_from_u64(77)).unwrap();
        let b = Maze::with_rng(5, StdRng::seed_from_u64(77)).unwrap();
        assert_eq!(a.open_cells(), b.open_cells());
        assert_eq!(a.groups(), b.groups());
    }

    #[test]
    fn marker_moves_stay_on_the_grid() {
        let maze = Maze::with_rng(3, StdRng::seed_from_u64(1)).unwrap();

        // middle cell moves everywhere
        assert_eq!(maze.neighbor(4, Direction::North).unwrap(), Some(1));
        assert_eq!(maze.neighbor(4, Direction::West).unwrap(), Some(3));

        // edge moves are refused instead of wrapping to the next row
        assert_eq!(maze.neighbor(2, Direction::East).unwrap(), None);
        assert_eq!(maze.neighbor(3, Direction::West).unwrap(), None);
        assert_eq!(maze.neighbor(0, Direction::North).unwrap(), None);
        assert_eq!(maze.neighbor(8, Direction::South).unwrap(), None);
    }
}
