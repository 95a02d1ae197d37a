use std::collections::BTreeSet;

use crate::{dims::Dims, gameboard::Maze};

/// Path through a maze, from its entrance to its exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    path: Vec<Dims>,
    cells: BTreeSet<usize>,
    size: Dims,
}

impl Solution {
    /// Cells of the path in walking order, entrance first.
    pub fn path(&self) -> &[Dims] {
        &self.path
    }

    /// Cells of the path encoded as `y * width + x`.
    pub fn cells(&self) -> &BTreeSet<usize> {
        &self.cells
    }

    pub fn into_cells(self) -> BTreeSet<usize> {
        self.cells
    }

    pub fn contains(&self, pos: Dims) -> bool {
        pos.all_non_negative()
            && pos.0 < self.size.0
            && pos.1 < self.size.1
            && self.cells.contains(&pos.linear_index(self.size))
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

/// Finds the path from the top-left to the bottom-right cell using depth first search over
/// open walls.
///
/// Visited flags of the maze are reset before the search and left set afterwards. Returns `None`
/// only if the exit can't be reached, which never happens for a generated maze.
pub fn solve(maze: &mut Maze) -> Option<Solution> {
    let (start, goal) = (maze.start(), maze.end());
    log::debug!("Solving maze from {:?} to {:?}", start, goal);

    maze.reset_visited();
    maze.mark_visited(start);
    let mut stack = vec![start];

    // the stack always holds the walked path from the entrance to the current cell
    while let Some(&current) = stack.last() {
        if current == goal {
            break;
        }

        match maze.open_unvisited_neighbors(current).first() {
            Some(&next) => {
                maze.mark_visited(next);
                stack.push(next);
            }
            None => {
                stack.pop();
            }
        }
    }

    if stack.is_empty() {
        log::warn!("Maze has no path from {:?} to {:?}", start, goal);
        return None;
    }

    let cells = stack.iter().map(|pos| maze.cell_index(*pos)).collect();
    log::debug!("Found solution of length {}", stack.len());

    Some(Solution {
        path: stack,
        cells,
        size: maze.size(),
    })
}
