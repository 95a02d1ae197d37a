use std::{io, io::Write, thread, time::Duration};

use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use mazecore::{
    dims::Dims,
    gameboard::Maze,
    progress::Progress,
    render::{centered_title, render_with, Mark, RenderOptions, PLAYER_CHAR, SOLUTION_CHAR},
};

use crate::constants::{GAME_TITLE, WIN_MESSAGE};

/// Turns mazes into text for the terminal, with or without colors.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    color: bool,
}

impl Painter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn maze(&self, maze: &Maze, options: &RenderOptions) -> String {
        render_with(maze, options, |mark| self.mark(mark))
    }

    pub fn title(&self, width: usize) -> String {
        let title = centered_title(GAME_TITLE, width);
        if self.color {
            title.bold().cyan().to_string()
        } else {
            title
        }
    }

    pub fn win_message(&self) -> String {
        if self.color {
            WIN_MESSAGE.bold().green().to_string()
        } else {
            WIN_MESSAGE.to_string()
        }
    }

    fn mark(&self, mark: Mark) -> String {
        let glyph = match mark {
            Mark::Player => PLAYER_CHAR,
            Mark::Solution => SOLUTION_CHAR,
        }
        .to_string();

        if !self.color {
            return glyph;
        }

        match mark {
            Mark::Player => glyph.bright_green().bold().to_string(),
            Mark::Solution => glyph.yellow().to_string(),
        }
    }
}

pub fn clear_screen(out: &mut impl Write) -> io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}

/// Redraws the whole screen for every frame, used while generating and for the finish replay.
pub struct Animator<'a, W: Write> {
    out: &'a mut W,
    painter: Painter,
    delay: Duration,
    error: Option<io::Error>,
}

impl<'a, W: Write> Animator<'a, W> {
    pub fn new(out: &'a mut W, painter: Painter, delay: Duration) -> Self {
        Self {
            out,
            painter,
            delay,
            error: None,
        }
    }

    /// Generation frame, the maze with the progress below it.
    pub fn frame(&mut self, maze: &Maze, progress: Progress) {
        let footer = format!("{:>5.1} %", progress.percent() * 100.0);
        self.show(maze, &RenderOptions::new().goal_label(None), &footer);
    }

    /// Replay frame, the player at `pos` with the win message below.
    pub fn replay_frame(&mut self, maze: &Maze, options: RenderOptions, pos: Dims) {
        let footer = self.painter.win_message();
        self.show(maze, &options.player(pos), &footer);
    }

    /// After the first failed write the remaining frames are skipped.
    pub fn show(&mut self, maze: &Maze, options: &RenderOptions, footer: &str) {
        if self.error.is_some() {
            return;
        }

        if let Err(err) = self.draw(maze, options, footer) {
            log::warn!("Animation stopped: {}", err);
            self.error = Some(err);
            return;
        }

        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }

    pub fn finish(self) -> io::Result<()> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn draw(&mut self, maze: &Maze, options: &RenderOptions, footer: &str) -> io::Result<()> {
        clear_screen(&mut *self.out)?;
        writeln!(self.out, "{}", self.painter.title(maze.width()))?;
        write!(self.out, "{}", self.painter.maze(maze, options))?;
        writeln!(self.out, "{}", footer)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use mazecore::{gameboard::CellWall, solve};

    use super::*;

    fn corridor() -> Maze {
        let mut maze = Maze::new(Dims(3, 1)).unwrap();
        maze.remove_wall(Dims(0, 0), CellWall::Right);
        maze.remove_wall(Dims(1, 0), CellWall::Right);
        maze
    }

    #[test]
    fn plain_painter_matches_render() {
        let mut maze = corridor();
        let solution = solve(&mut maze).unwrap();
        let options = RenderOptions::new().player(Dims(0, 0)).solution(&solution);

        let text = Painter::new(false).maze(&maze, &options);
        assert_eq!(text, mazecore::render::render(&maze, &options));
        assert_eq!(Painter::new(false).win_message(), WIN_MESSAGE);
    }

    #[test]
    fn colored_painter_keeps_glyphs() {
        colored::control::set_override(true);
        let maze = corridor();
        let text = Painter::new(true).maze(&maze, &RenderOptions::new().player(Dims(2, 0)));

        assert!(text.contains('X'));
        assert!(text.contains("\u{1b}["));
        assert!(Painter::new(true).title(3).contains(GAME_TITLE));

        colored::control::unset_override();
    }

    #[test]
    fn animator_draws_frames() {
        let mut out = Vec::new();
        let mut animator = Animator::new(&mut out, Painter::new(false), Duration::ZERO);
        animator.frame(&corridor(), Progress::new(2, 2));
        animator.finish().unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(GAME_TITLE));
        assert!(text.contains("|__ __ __|\n"));
        assert!(text.ends_with("100.0 %\n"));
    }

    #[test]
    fn replay_frames_show_the_player() {
        let mut out = Vec::new();
        let mut animator = Animator::new(&mut out, Painter::new(false), Duration::ZERO);
        for x in 0..3 {
            animator.replay_frame(&corridor(), RenderOptions::new(), Dims(x, 0));
        }
        animator.finish().unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches(WIN_MESSAGE).count(), 3);
        assert!(text.contains("|_X __ __| <- Goal"));
        assert!(text.contains("|__ _X __| <- Goal"));
        assert!(text.ends_with("|__ __ _X| <- Goal\nCONGRATULATIONS!!!\n"));
    }
}
