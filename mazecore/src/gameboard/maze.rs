use smallvec::SmallVec;
use thiserror::Error;

use super::algorithms::GenerationError;
use crate::{
    array::Array2D,
    dims::Dims,
    gameboard::cell::{Cell, CellWall},
};

/// Neighbor list of a single cell, never more than 4 entries.
pub type Neighbors = SmallVec<[Dims; 4]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("position {0:?} is outside of the maze")]
    OutOfBounds(Dims),
}

/// Rectangular maze, a fixed-size 4-connected grid of [`Cell`]s.
///
/// Entrance is the top-left cell, exit the bottom-right one.
#[derive(Debug, Clone)]
pub struct Maze {
    pub(crate) cells: Array2D<Cell>,
}

impl Maze {
    /// Creates a maze with every wall closed and every cell unvisited.
    ///
    /// Fails without allocating when any dimension is not positive or the cell count overflows.
    pub fn new(size: Dims) -> Result<Maze, GenerationError> {
        if !size.all_positive() {
            return Err(GenerationError::InvalidSize(size));
        }
        if size.0.checked_mul(size.1).is_none() {
            return Err(GenerationError::TooLarge(size));
        }

        let cells = Array2D::from_fn(size.0 as usize, size.1 as usize, Cell::new);
        Ok(Maze { cells })
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn width(&self) -> usize {
        self.size().0 as usize
    }

    pub fn height(&self) -> usize {
        self.size().1 as usize
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn start(&self) -> Dims {
        Dims::ZERO
    }

    pub fn end(&self) -> Dims {
        self.size() - Dims::ONE
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        let size = self.size();
        0 <= pos.0 && pos.0 < size.0 && 0 <= pos.1 && pos.1 < size.1
    }

    pub fn is_valid_neighbor(&self, cell: Dims, off: Dims) -> bool {
        off.abs_sum() == 1 && self.is_in_bounds(cell) && self.is_in_bounds(cell + off)
    }

    pub fn is_valid_wall(&self, cell: Dims, wall: CellWall) -> bool {
        self.is_valid_neighbor(cell, wall.to_coord())
    }

    /// Returns the wall of `cell` facing `cell2`, `None` if they aren't adjacent.
    pub fn which_wall_between(cell: Dims, cell2: Dims) -> Option<CellWall> {
        use CellWall::*;

        match (cell.0 - cell2.0, cell.1 - cell2.1) {
            (-1, 0) => Some(Right),
            (1, 0) => Some(Left),
            (0, -1) => Some(Bottom),
            (0, 1) => Some(Top),
            _ => None,
        }
    }

    /// Canonical integer encoding of a position, `y * width + x`.
    pub fn cell_index(&self, pos: Dims) -> usize {
        pos.linear_index(self.size())
    }

    pub fn index_to_pos(&self, index: usize) -> Option<Dims> {
        self.cells.idx_to_dim(index)
    }

    /// In-bounds neighbors of `cell`, ordered left, right, top, bottom.
    pub fn get_neighbors_pos(&self, cell: Dims) -> Neighbors {
        CellWall::get_in_order()
            .into_iter()
            .filter(|wall| self.is_valid_wall(cell, *wall))
            .map(|wall| cell + wall.to_coord())
            .collect()
    }

    /// Neighbors not yet visited in the current pass, walls ignored.
    pub fn unvisited_neighbors(&self, cell: Dims) -> Neighbors {
        self.get_neighbors_pos(cell)
            .into_iter()
            .filter(|pos| !self.cells[*pos].is_visited())
            .collect()
    }

    /// Neighbors not yet visited and reachable through an open wall.
    pub fn open_unvisited_neighbors(&self, cell: Dims) -> Neighbors {
        let Some(current) = self.get_cell(cell) else {
            return Neighbors::new();
        };

        CellWall::get_in_order()
            .into_iter()
            .filter_map(|wall| current.end_of_way(wall))
            .filter(|pos| self.get_cell(*pos).is_some_and(|c| !c.is_visited()))
            .collect()
    }

    /// Opens `wall` of `cell` together with the mirrored wall of its neighbor.
    ///
    /// Returns `false` and leaves the maze untouched if there is no neighbor behind the wall.
    pub fn remove_wall(&mut self, cell: Dims, wall: CellWall) -> bool {
        if !self.is_valid_wall(cell, wall) {
            return false;
        }

        self.cells[cell].make_passage(wall);
        self.cells[cell + wall.to_coord()].make_passage(wall.reverse_wall());
        true
    }

    /// Opens the wall between two adjacent cells, `false` if they are not adjacent.
    pub fn remove_wall_between(&mut self, cell: Dims, cell2: Dims) -> bool {
        match Self::which_wall_between(cell, cell2) {
            Some(wall) => self.remove_wall(cell, wall),
            None => false,
        }
    }

    pub fn get_cell(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos)
    }

    pub(crate) fn get_cell_mut(&mut self, pos: Dims) -> Option<&mut Cell> {
        self.cells.get_mut(pos)
    }

    /// Copy of the cell at `pos`.
    pub fn cell(&self, pos: Dims) -> Result<Cell, MazeError> {
        self.get_cell(pos).copied().ok_or(MazeError::OutOfBounds(pos))
    }

    pub fn get_cells(&self) -> &Array2D<Cell> {
        &self.cells
    }

    pub(crate) fn mark_visited(&mut self, pos: Dims) {
        if let Some(cell) = self.get_cell_mut(pos) {
            cell.set_visited(true);
        }
    }

    pub fn reset_visited(&mut self) {
        self.cells.iter_mut().for_each(|cell| cell.set_visited(false));
    }

    /// Number of open walls, every passage counted once.
    pub fn passage_count(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| {
                cell.is_open(CellWall::Right) as usize + cell.is_open(CellWall::Bottom) as usize
            })
            .sum()
    }

    /// Whether every cell can be reached from the entrance through open walls.
    pub fn is_connected(&self) -> bool {
        let mut seen = vec![false; self.cell_count()];
        let mut stack = vec![self.start()];
        seen[0] = true;
        let mut reached = 1;

        while let Some(pos) = stack.pop() {
            let cell = &self.cells[pos];
            for next in CellWall::get_in_order()
                .into_iter()
                .filter_map(|wall| cell.end_of_way(wall))
            {
                let idx = self.cell_index(next);
                if !seen[idx] {
                    seen[idx] = true;
                    reached += 1;
                    stack.push(next);
                }
            }
        }

        reached == self.cell_count()
    }

    /// A perfect maze is a spanning tree: connected, with exactly `cells - 1` passages.
    pub fn is_perfect(&self) -> bool {
        self.passage_count() + 1 == self.cell_count() && self.is_connected()
    }
}
