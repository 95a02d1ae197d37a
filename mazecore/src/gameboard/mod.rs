pub mod maze;
pub use maze::{Maze, MazeError};
pub mod cell;
pub use cell::{Cell, CellWall};

pub mod algorithms;
