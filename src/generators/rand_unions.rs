use log::debug;
use rand::Rng;

use crate::forest::DisjointForest;
use crate::generators::Generator;

/// Generates a maze by unioning randomly drawn cell pairs until the top-left
/// and bottom-right cells land in the same group.
///
/// The randomness source is whatever `R` the caller hands in, so tests can
/// run generation off a seeded rng and get the same forest every time.
pub struct RandUnions<R: Rng> {
    forest: DisjointForest,
    rng: R,
    attempts: usize,
    pub done: bool,
}

impl<R: Rng> RandUnions<R> {
    /// Callers guarantee `size >= 1` and that `size * size` fits in `usize`;
    /// [`Maze::with_rng`](crate::Maze::with_rng) checks both.
    pub fn new(size: usize, rng: R) -> Self {
        let cells = size * size;
        let mut forest = DisjointForest::new(cells);
        // a 1x1 maze is born connected
        let done = forest.connected(0, cells - 1);
        Self {
            forest,
            rng,
            attempts: 0,
            done,
        }
    }

    /// Random draws applied so far, counting no-op unions.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn into_forest(self) -> DisjointForest {
        self.forest
    }

    fn open_cells(&self) -> Vec<bool> {
        (0..self.forest.len())
            .map(|i| self.forest.is_singleton(i))
            .collect()
    }
}

impl<R: Rng> Generator for RandUnions<R> {
    fn step_generation(&mut self) {
        if self.done {
            return;
        }

        let cells = self.forest.len();
        let i = self.rng.gen_range(0, cells);
        let j = self.rng.gen_range(0, cells);
        self.forest.union(i, j);
        self.attempts += 1;

        // re-check after every union so the connecting one is seen
        // immediately, not a draw late
        self.done = self.forest.connected(0, cells - 1);
    }

    fn next_step(&mut self) -> Vec<bool> {
        self.step_generation();
        self.open_cells()
    }

    fn generate_maze(&mut self) -> Vec<bool> {
        loop {
            self.step_generation();
            if self.done {
                break;
            }
        }
        debug!("corners connected after {} random unions", self.attempts);

        self.open_cells()
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
