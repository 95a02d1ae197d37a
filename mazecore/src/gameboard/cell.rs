use crate::dims::Dims;

/// One square of the maze.
///
/// Wall flags are stored as *open* flags, `true` means there is a passage to the neighbor on
/// that side. The [`Maze`](super::Maze) keeps the flags of two neighbors in sync.
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    left: bool,
    top: bool,
    right: bool,
    bottom: bool,
    visited: bool,
    pub(crate) coord: Dims,
}

impl Cell {
    pub fn new(pos: Dims) -> Cell {
        Cell {
            left: false,
            right: false,
            top: false,
            bottom: false,
            visited: false,
            coord: pos,
        }
    }

    pub(crate) fn make_passage(&mut self, wall: CellWall) {
        match wall {
            CellWall::Left => self.left = true,
            CellWall::Top => self.top = true,
            CellWall::Right => self.right = true,
            CellWall::Bottom => self.bottom = true,
        }
    }

    pub fn is_open(&self, wall: CellWall) -> bool {
        match wall {
            CellWall::Left => self.left,
            CellWall::Top => self.top,
            CellWall::Right => self.right,
            CellWall::Bottom => self.bottom,
        }
    }

    pub fn is_closed(&self, wall: CellWall) -> bool {
        !self.is_open(wall)
    }

    /// Number of open sides.
    pub fn open_count(&self) -> usize {
        CellWall::get_in_order()
            .into_iter()
            .filter(|&wall| self.is_open(wall))
            .count()
    }

    /// Position of the neighbor behind `wall`, if the passage is open.
    pub fn end_of_way(&self, wall: CellWall) -> Option<Dims> {
        self.is_open(wall).then(|| self.coord + wall.to_coord())
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub(crate) fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    pub fn get_coord(&self) -> Dims {
        self.coord
    }

    pub fn x(&self) -> i32 {
        self.coord.0
    }

    pub fn y(&self) -> i32 {
        self.coord.1
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Cell {}

/// Side of a cell. `Top` is towards `y - 1`, `Bottom` towards `y + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellWall {
    Left,
    Right,
    Top,
    Bottom,
}

impl CellWall {
    pub fn to_coord(&self) -> Dims {
        match self {
            Self::Left => Dims(-1, 0),
            Self::Right => Dims(1, 0),
            Self::Top => Dims(0, -1),
            Self::Bottom => Dims(0, 1),
        }
    }

    pub fn reverse_wall(&self) -> CellWall {
        use CellWall::*;

        match self {
            Left => Right,
            Right => Left,
            Top => Bottom,
            Bottom => Top,
        }
    }

    pub fn perpendicular_walls(&self) -> (CellWall, CellWall) {
        use CellWall::*;

        match self {
            Left | Right => (Top, Bottom),
            Top | Bottom => (Left, Right),
        }
    }

    /// Neighbor enumeration order used by the generators and the solver.
    pub fn get_in_order() -> [CellWall; 4] {
        use CellWall::*;
        [Left, Right, Top, Bottom]
    }
}
