pub mod rand_unions;

/// Stepwise generation protocol. A caller that wants to animate generation
/// drives `next_step` and draws each snapshot; everyone else calls
/// `generate_maze` and takes the finished one.
///
/// Snapshots are one `bool` per cell, `true` for cells still open (never
/// merged into any group).
pub trait Generator {
    fn step_generation(&mut self);
    fn next_step(&mut self) -> Vec<bool>;
    fn generate_maze(&mut self) -> Vec<bool>;
    fn is_done(&self) -> bool;
}
