//! Random tile mazes from a disjoint-set forest.
//!
//! A [`Maze`] is a square grid of `size * size` cells. Generation starts with
//! every cell in its own group and applies unions between randomly drawn
//! cells until the top-left cell and the bottom-right cell share a group, at
//! which point the forest is frozen and only queried.
//!
//! The pieces are usable on their own: [`DisjointForest`] is the union-find
//! core, [`RandUnions`] drives it step by step through the [`Generator`]
//! trait (handy for animating generation), and [`Maze`] is the validated
//! facade a rendering or input layer talks to.

pub mod error;
pub mod forest;
pub mod generators;
pub mod grid;
pub mod maze;

pub use error::Error;
pub use forest::DisjointForest;
pub use generators::rand_unions::RandUnions;
pub use generators::Generator;
pub use grid::Direction;
pub use maze::Maze;
