use thiserror::Error;

/// Everything that can go wrong at the maze boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("maze size must be at least 1, got {0}")]
    InvalidSize(usize),

    #[error("cell index {index} out of range for a maze of {cells} cells")]
    IndexOutOfBounds { index: usize, cells: usize },

    /// Diagnostic only. A uniform random stream connects the corners long
    /// before the cap; hitting it means the supplied generator is broken.
    #[error("start and end still disconnected after {attempts} random unions")]
    GenerationStall { attempts: usize },
}
