use rand::{seq::SliceRandom, Rng};

use super::{report_carve, Maze, MazeAlgorithm, ReportCallback};
use crate::{dims::Dims, progress::Progress};

/// Randomized backtracker, carving from the center of the maze.
///
/// Runs on an explicit stack instead of recursion, the order of visited cells and random draws
/// is the same as in the recursive version.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirstSearch;

impl DepthFirstSearch {
    pub fn start_pos(size: Dims) -> Dims {
        Dims(size.0 / 2, size.1 / 2)
    }
}

impl MazeAlgorithm for DepthFirstSearch {
    fn carve<R: Rng + ?Sized>(
        &self,
        maze: &mut Maze,
        rng: &mut R,
        mut report: Option<ReportCallback>,
    ) {
        let cell_count = maze.cell_count();
        let mut progress = Progress::new(1, cell_count);
        let mut stack = Vec::with_capacity(cell_count);

        maze.reset_visited();
        let start = Self::start_pos(maze.size());
        maze.mark_visited(start);
        stack.push(start);

        while let Some(current) = stack.pop() {
            let unvisited_neighbors = maze.unvisited_neighbors(current);
            let Some(&chosen) = unvisited_neighbors.choose(rng) else {
                continue;
            };

            stack.push(current);
            maze.remove_wall_between(current, chosen);
            maze.mark_visited(chosen);
            stack.push(chosen);

            progress.done += 1;
            log::trace!("Carved {:?} -> {:?}", current, chosen);
            report_carve(&mut report, maze, progress);
        }

        progress.finish();
        log::trace!("Depth first search visited {} cells", progress.done);
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::mock::StepRng, SeedableRng};

    use super::*;
    use crate::gameboard::{algorithms::Random, CellWall::*};

    #[test]
    fn starts_in_the_center() {
        assert_eq!(DepthFirstSearch::start_pos(Dims(1, 1)), Dims(0, 0));
        assert_eq!(DepthFirstSearch::start_pos(Dims(2, 2)), Dims(1, 1));
        assert_eq!(DepthFirstSearch::start_pos(Dims(35, 20)), Dims(17, 10));
    }

    #[test]
    fn first_carve_leaves_the_center() {
        let mut first = None;
        let mut hook = |maze: &Maze, _: Progress| {
            if first.is_none() {
                first = Some(maze.get_cell(Dims(3, 2)).unwrap().open_count());
            }
        };
        let mut rng = Random::seed_from_u64(3);
        DepthFirstSearch
            .generate(Dims(7, 5), &mut rng, Some(&mut hook))
            .unwrap();

        assert_eq!(first, Some(1));
    }

    /// With a source that always picks the first neighbor, the 2x2 maze is carved
    /// (1,1) -> (0,1) -> (0,0) -> (1,0), leaving the wall between (1,0) and (1,1).
    #[test]
    fn always_first_neighbor_2x2() {
        let mut rng = StepRng::new(0, 0);
        let maze = DepthFirstSearch.generate(Dims(2, 2), &mut rng, None).unwrap();

        let open = |pos: Dims| {
            let cell = maze.cell(pos).unwrap();
            [Left, Right, Top, Bottom].map(|w| cell.is_open(w))
        };

        //                          left   right  top    bottom
        assert_eq!(open(Dims(0, 0)), [false, true, false, true]);
        assert_eq!(open(Dims(1, 0)), [true, false, false, false]);
        assert_eq!(open(Dims(0, 1)), [false, true, true, false]);
        assert_eq!(open(Dims(1, 1)), [true, false, false, false]);
        assert!(maze.is_perfect());
    }

    #[test]
    fn always_first_neighbor_corridor() {
        // from the center of a 5x1 maze, left is always chosen first
        let mut rng = StepRng::new(0, 0);
        let mut order = vec![];
        let mut hook = |maze: &Maze, _: Progress| order.push(maze.passage_count());
        let maze = DepthFirstSearch
            .generate(Dims(5, 1), &mut rng, Some(&mut hook))
            .unwrap();

        assert_eq!(order, vec![1, 2, 3, 4]);
        for x in 0..4 {
            assert!(maze.cell(Dims(x, 0)).unwrap().is_open(Right));
        }
    }
}
