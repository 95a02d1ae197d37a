pub mod array;
pub mod dims;
pub mod disjoint_set;
pub mod game;
pub mod gameboard;
pub mod progress;
pub mod render;
pub mod solver;

pub use gameboard::algorithms::{create_maze, GenerationAlgorithm, GenerationError};
pub use solver::{solve, Solution};
