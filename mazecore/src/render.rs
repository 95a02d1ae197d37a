//! Plain text picture of a maze.
//!
//! Every cell takes [`CELL_WIDTH`] columns: the bottom wall, a middle glyph and the right wall.
//! ```text
//!  __ __ __
//! |__    __|
//! |  |  |  |
//! |__ __ __| <- Goal
//! ```

use crate::{
    dims::Dims,
    gameboard::{CellWall, Maze},
    solver::Solution,
};

pub const CELL_WIDTH: usize = 3;

pub const PLAYER_CHAR: char = 'X';
pub const SOLUTION_CHAR: char = '*';
pub const GOAL_LABEL: &str = " <- Goal";

/// Marked cell, the caller decides how it looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Player,
    Solution,
}

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions<'a> {
    pub player: Option<Dims>,
    pub solution: Option<&'a Solution>,
    pub goal_label: Option<&'a str>,
}

impl<'a> RenderOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player(mut self, value: Dims) -> Self {
        self.player = Some(value);
        self
    }

    pub fn solution(mut self, value: &'a Solution) -> Self {
        self.solution = Some(value);
        self
    }

    pub fn goal_label(mut self, value: Option<&'a str>) -> Self {
        self.goal_label = value;
        self
    }

    fn mark_at(&self, pos: Dims) -> Option<Mark> {
        if self.player == Some(pos) {
            Some(Mark::Player)
        } else if self.solution.is_some_and(|s| s.contains(pos)) {
            Some(Mark::Solution)
        } else {
            None
        }
    }
}

impl Default for RenderOptions<'_> {
    fn default() -> Self {
        Self {
            player: None,
            solution: None,
            goal_label: Some(GOAL_LABEL),
        }
    }
}

pub fn render(maze: &Maze, options: &RenderOptions) -> String {
    render_with(maze, options, |mark| match mark {
        Mark::Player => PLAYER_CHAR.to_string(),
        Mark::Solution => SOLUTION_CHAR.to_string(),
    })
}

/// Same as [`render`], with marked cells drawn by `draw_mark`.
pub fn render_with(
    maze: &Maze,
    options: &RenderOptions,
    mut draw_mark: impl FnMut(Mark) -> String,
) -> String {
    let mut out = String::with_capacity((maze.width() * CELL_WIDTH + 12) * (maze.height() + 1));

    out.push_str(&" __".repeat(maze.width()));
    out.push('\n');

    for (y, row) in maze.get_cells().rows().enumerate() {
        out.push('|');

        for cell in row {
            let floor = if cell.is_open(CellWall::Bottom) { ' ' } else { '_' };
            out.push(floor);

            match options.mark_at(cell.get_coord()) {
                Some(mark) => out.push_str(&draw_mark(mark)),
                None => out.push(floor),
            }

            out.push(if cell.is_open(CellWall::Right) { ' ' } else { '|' });
        }

        if y + 1 == maze.height() {
            if let Some(label) = options.goal_label {
                out.push_str(label);
            }
        }
        out.push('\n');
    }

    out
}

/// Pads `title` with spaces so it is centered above a maze of `width` cells.
pub fn centered_title(title: &str, width: usize) -> String {
    let spaces = ((width / 2) * CELL_WIDTH).saturating_sub(title.chars().count() / 2);
    format!("{}{}", " ".repeat(spaces), title)
}
