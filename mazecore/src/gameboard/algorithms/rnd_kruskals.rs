use rand::{seq::SliceRandom, Rng};

use super::{report_carve, Maze, MazeAlgorithm, ReportCallback};
use crate::{
    dims::Dims, disjoint_set::DisjointSet, gameboard::cell::CellWall, progress::Progress,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallKind {
    Right,
    Bottom,
}

impl WallKind {
    pub fn to_cell_wall(self) -> CellWall {
        match self {
            Self::Right => CellWall::Right,
            Self::Bottom => CellWall::Bottom,
        }
    }
}

/// Wall between the cell at index `cell` and its right or bottom neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wall {
    pub cell: usize,
    pub kind: WallKind,
}

impl Wall {
    pub fn new(cell: usize, kind: WallKind) -> Self {
        Self { cell, kind }
    }

    /// Index of the cell on the other side of the wall.
    pub fn other(&self, width: usize) -> usize {
        match self.kind {
            WallKind::Right => self.cell + 1,
            WallKind::Bottom => self.cell + width,
        }
    }
}

/// Randomized Kruskal's algorithm, removes walls in random order unless the cells behind
/// are already connected.
#[derive(Debug, Clone, Copy, Default)]
pub struct RndKruskals;

impl RndKruskals {
    /// Every inner wall of a maze of `size`, in row-major order.
    pub fn walls(size: Dims) -> Vec<Wall> {
        let Dims(w, h) = size;
        let (wu, hu) = (w.max(0) as usize, h.max(0) as usize);
        let wall_count = (hu * wu.saturating_sub(1)) + (wu * hu.saturating_sub(1));
        let mut walls = Vec::with_capacity(wall_count);

        for pos in Dims::iter_fill(Dims::ZERO, size) {
            let index = pos.linear_index(size);

            if pos.0 != w - 1 {
                walls.push(Wall::new(index, WallKind::Right));
            }

            if pos.1 != h - 1 {
                walls.push(Wall::new(index, WallKind::Bottom));
            }
        }

        walls
    }

    /// Removes `walls` in the given order, skipping those whose cells `sets` already connects.
    ///
    /// Returns number of removed walls.
    pub fn connect(
        maze: &mut Maze,
        walls: &[Wall],
        sets: &mut DisjointSet,
        mut report: Option<ReportCallback>,
    ) -> usize {
        let width = maze.width();
        let mut progress = Progress::new(0, maze.cell_count() - 1);

        for wall in walls {
            let from = wall.cell;
            let to = wall.other(width);

            if sets.find(from) == sets.find(to) {
                continue;
            }

            let Some(pos) = maze.index_to_pos(from) else {
                log::warn!("Skipping wall {:?}, it's outside of the maze", wall);
                continue;
            };

            if !maze.remove_wall(pos, wall.kind.to_cell_wall()) {
                log::warn!("Skipping wall {:?}, it has no cell behind it", wall);
                continue;
            }
            sets.union(from, to);

            progress.done += 1;
            log::trace!("Removed wall {:?}", wall);
            report_carve(&mut report, maze, progress);
        }

        progress.done
    }
}

impl MazeAlgorithm for RndKruskals {
    fn carve<R: Rng + ?Sized>(&self, maze: &mut Maze, rng: &mut R, report: Option<ReportCallback>) {
        let mut walls = Self::walls(maze.size());
        walls.shuffle(rng);

        let mut sets = DisjointSet::new(maze.cell_count());
        let removed = Self::connect(maze, &walls, &mut sets, report);
        log::trace!("Kruskal's removed {} of {} walls", removed, walls.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_list() {
        let walls = RndKruskals::walls(Dims(3, 2));
        assert_eq!(
            walls,
            vec![
                Wall::new(0, WallKind::Right),
                Wall::new(0, WallKind::Bottom),
                Wall::new(1, WallKind::Right),
                Wall::new(1, WallKind::Bottom),
                Wall::new(2, WallKind::Bottom),
                Wall::new(3, WallKind::Right),
                Wall::new(4, WallKind::Right),
            ]
        );

        assert_eq!(RndKruskals::walls(Dims(3, 3)).len(), 12);
        assert!(RndKruskals::walls(Dims::ONE).is_empty());
    }

    #[test]
    fn other_side() {
        assert_eq!(Wall::new(4, WallKind::Right).other(3), 5);
        assert_eq!(Wall::new(4, WallKind::Bottom).other(3), 7);
    }

    /// 3x3 maze with its walls in a fixed order, bottom row first and right to left
    #[test]
    fn fixed_order_3x3() {
        let mut maze = Maze::new(Dims(3, 3)).unwrap();
        let mut walls = RndKruskals::walls(maze.size());
        walls.reverse();

        let mut sets = DisjointSet::new(maze.cell_count());
        let mut unions = 0;
        let mut hook = |_: &Maze, _: Progress| unions += 1;
        let removed = RndKruskals::connect(&mut maze, &walls, &mut sets, Some(&mut hook));

        assert_eq!(removed, 8);
        assert_eq!(unions, 8);
        assert_eq!(sets.set_count(), 1);
        assert_eq!(sets.set_size(0), 9);
        assert!(maze.is_perfect());

        // everything is connected now, no wall may be removed again
        let removed = RndKruskals::connect(&mut maze, &walls, &mut sets, None);
        assert_eq!(removed, 0);
        assert_eq!(maze.passage_count(), 8);
    }

    #[test]
    fn fixed_order_skips_cycles() {
        // square of four cells, the last wall would close a cycle
        let mut maze = Maze::new(Dims(2, 2)).unwrap();
        let walls = [
            Wall::new(0, WallKind::Right),
            Wall::new(0, WallKind::Bottom),
            Wall::new(1, WallKind::Bottom),
            Wall::new(2, WallKind::Right),
        ];

        let mut sets = DisjointSet::new(4);
        let removed = RndKruskals::connect(&mut maze, &walls, &mut sets, None);

        assert_eq!(removed, 3);
        assert!(maze.cell(Dims(0, 1)).unwrap().is_closed(CellWall::Right));
        assert!(maze.is_perfect());
    }
}
