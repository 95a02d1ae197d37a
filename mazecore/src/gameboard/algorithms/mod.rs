mod depth_first_search;
mod rnd_kruskals;

use rand::{thread_rng, Rng, SeedableRng as _};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use std::fmt;

use super::Maze;
use crate::{dims::Dims, progress::Progress};

pub use depth_first_search::DepthFirstSearch;
pub use rnd_kruskals::{RndKruskals, Wall, WallKind};

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Inspection hook, called after every carved passage with the maze in its current state.
pub type ReportCallback<'a> = &'a mut dyn FnMut(&Maze, Progress);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("invalid maze size {0:?}, width and height must be at least 1")]
    InvalidSize(Dims),
    #[error("maze size {0:?} is too large, width * height must fit into i32")]
    TooLarge(Dims),
}

pub trait MazeAlgorithm {
    /// Carves passages into a fully walled `maze` until it's a perfect maze.
    fn carve<R: Rng + ?Sized>(&self, maze: &mut Maze, rng: &mut R, report: Option<ReportCallback>);

    fn generate<R: Rng + ?Sized>(
        &self,
        size: Dims,
        rng: &mut R,
        report: Option<ReportCallback>,
    ) -> Result<Maze, GenerationError> {
        let mut maze = Maze::new(size)?;
        self.carve(&mut maze, rng, report);
        maze.reset_visited();

        Ok(maze)
    }
}

pub(crate) fn report_carve(report: &mut Option<ReportCallback>, maze: &Maze, progress: Progress) {
    if let Some(report) = report {
        report(maze, progress);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationAlgorithm {
    #[default]
    DepthFirstSearch,
    RndKruskals,
}

impl GenerationAlgorithm {
    pub fn generate_with<R: Rng + ?Sized>(
        self,
        size: Dims,
        rng: &mut R,
        report: Option<ReportCallback>,
    ) -> Result<Maze, GenerationError> {
        log::debug!("Generating {}x{} maze using {}", size.0, size.1, self);

        let maze = match self {
            Self::DepthFirstSearch => DepthFirstSearch.generate(size, rng, report),
            Self::RndKruskals => RndKruskals.generate(size, rng, report),
        }?;

        log::debug!("Generated maze with {} passages", maze.passage_count());
        Ok(maze)
    }
}

impl fmt::Display for GenerationAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DepthFirstSearch => write!(f, "depth first search"),
            Self::RndKruskals => write!(f, "randomized Kruskal's algorithm"),
        }
    }
}

/// Generates a new maze, seeded from `seed`, or randomly when it's `None`.
pub fn create_maze(
    size: Dims,
    algorithm: GenerationAlgorithm,
    seed: Option<u64>,
    report: Option<ReportCallback>,
) -> Result<Maze, GenerationError> {
    let mut rng = Random::seed_from_u64(seed.unwrap_or_else(|| thread_rng().gen()));
    algorithm.generate_with(size, &mut rng, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameboard::CellWall;

    const ALGORITHMS: [GenerationAlgorithm; 2] = [
        GenerationAlgorithm::DepthFirstSearch,
        GenerationAlgorithm::RndKruskals,
    ];

    fn assert_symmetric(maze: &Maze) {
        for pos in Dims::iter_fill(Dims::ZERO, maze.size()) {
            let cell = maze.cell(pos).unwrap();
            for wall in CellWall::get_in_order() {
                let neighbor = pos + wall.to_coord();
                match maze.get_cell(neighbor) {
                    Some(other) => {
                        assert_eq!(cell.is_open(wall), other.is_open(wall.reverse_wall()))
                    }
                    None => assert!(cell.is_closed(wall), "{pos:?} open to the outside"),
                }
            }
        }
    }

    #[test]
    fn generates_perfect_mazes() {
        for algorithm in ALGORITHMS {
            for (i, size) in [Dims(1, 1), Dims(1, 7), Dims(6, 1), Dims(2, 2), Dims(13, 9)]
                .into_iter()
                .enumerate()
            {
                let maze = create_maze(size, algorithm, Some(i as u64), None).unwrap();
                assert_eq!(maze.size(), size);
                assert_eq!(maze.passage_count(), maze.cell_count() - 1, "{algorithm}");
                assert!(maze.is_connected(), "{algorithm} {size:?}");
                assert_symmetric(&maze);
                assert!(maze.get_cells().iter().all(|c| !c.is_visited()));
            }
        }
    }

    #[test]
    fn same_seed_same_maze() {
        for algorithm in ALGORITHMS {
            let a = create_maze(Dims(20, 15), algorithm, Some(42), None).unwrap();
            let b = create_maze(Dims(20, 15), algorithm, Some(42), None).unwrap();

            let walls = |maze: &Maze| {
                maze.get_cells()
                    .iter()
                    .map(|c| CellWall::get_in_order().map(|w| c.is_open(w)))
                    .collect::<Vec<_>>()
            };
            assert_eq!(walls(&a), walls(&b));
        }
    }

    #[test]
    fn single_cell() {
        for algorithm in ALGORITHMS {
            let maze = create_maze(Dims::ONE, algorithm, None, None).unwrap();
            assert_eq!(maze.passage_count(), 0);
            assert_eq!(maze.cell(Dims::ZERO).unwrap().open_count(), 0);
        }
    }

    #[test]
    fn invalid_size_is_rejected() {
        for algorithm in ALGORITHMS {
            for size in [Dims(0, 3), Dims(3, 0), Dims(-2, -2)] {
                assert_eq!(
                    create_maze(size, algorithm, Some(1), None).unwrap_err(),
                    GenerationError::InvalidSize(size)
                );
            }
        }
    }

    #[test]
    fn report_called_after_every_carve() {
        for algorithm in ALGORITHMS {
            let mut calls = vec![];
            let mut hook = |maze: &Maze, progress: Progress| {
                calls.push((maze.passage_count(), progress.done));
            };

            let maze = create_maze(Dims(5, 4), algorithm, Some(7), Some(&mut hook)).unwrap();

            assert_eq!(calls.len(), maze.cell_count() - 1);
            for (i, (passages, _)) in calls.iter().enumerate() {
                assert_eq!(*passages, i + 1);
            }
            assert!(calls.windows(2).all(|w| w[0].1 < w[1].1));
        }
    }
}
