use std::{io, io::Write, time::Duration};

use mazecore::{
    dims::Dims,
    game::{GameAlreadyRunningError, GameNotRunningError, MoveMode, RunningGame, RunningGameState},
    gameboard::{CellWall, Maze},
    progress::Progress,
    render::RenderOptions,
    create_maze, GenerationAlgorithm, GenerationError,
};
use thiserror::Error;

use crate::{
    display::{Animator, Painter},
    settings::{Settings, SettingsError},
};

#[derive(Debug, Error)]
pub enum GameError {
    #[error("Terminal error: {0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Settings(#[from] SettingsError),
    #[error("Cannot generate maze: {0}")]
    Generation(#[from] GenerationError),
    #[error("Cannot install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("Invalid move {0:?}, use W, A, S or D")]
    InvalidMove(char),
    #[error("{0}")]
    AlreadyRunning(#[from] GameAlreadyRunningError),
    #[error("{0}")]
    NotRunning(#[from] GameNotRunningError),
}

/// Everything needed for a single run, merged from settings and command line.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub size: Dims,
    pub algorithm: GenerationAlgorithm,
    pub seed: Option<u64>,
    pub solve: bool,
    pub animate: bool,
    pub moves: Vec<CellWall>,
    pub move_mode: MoveMode,
    pub color: bool,
    pub delay: Duration,
}

impl RunConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            size: Dims(settings.get_default_width(), settings.get_default_height()),
            algorithm: settings.get_default_algorithm(),
            seed: None,
            solve: false,
            animate: false,
            moves: vec![],
            move_mode: MoveMode::default(),
            color: settings.get_color(),
            delay: Duration::from_millis(settings.get_animation_delay_ms()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub player_pos: Dims,
    pub move_count: usize,
    pub finished: bool,
}

/// Parses moves in `WASD` notation, case insensitive; whitespace is ignored.
pub fn parse_moves(text: &str) -> Result<Vec<CellWall>, GameError> {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c.to_ascii_lowercase() {
            'w' => Ok(CellWall::Top),
            'a' => Ok(CellWall::Left),
            's' => Ok(CellWall::Bottom),
            'd' => Ok(CellWall::Right),
            _ => Err(GameError::InvalidMove(c)),
        })
        .collect()
}

fn generate(config: &RunConfig, out: &mut impl Write) -> Result<Maze, GameError> {
    if !config.animate {
        return Ok(create_maze(config.size, config.algorithm, config.seed, None)?);
    }

    let mut animator = Animator::new(out, Painter::new(config.color), config.delay);
    let mut hook = |maze: &Maze, progress: Progress| animator.frame(maze, progress);
    let maze = create_maze(config.size, config.algorithm, config.seed, Some(&mut hook))?;
    animator.finish()?;

    Ok(maze)
}

/// Walks the player again through every position it stood on, ending at the goal.
fn replay(
    game: &RunningGame,
    options: RenderOptions,
    config: &RunConfig,
    out: &mut impl Write,
) -> Result<(), GameError> {
    let mut animator = Animator::new(out, Painter::new(config.color), config.delay);
    for &pos in game.get_positions() {
        animator.replay_frame(game.get_maze(), options, pos);
    }
    Ok(animator.finish()?)
}

/// Generates a maze, walks the given moves and prints the result to `out`.
pub fn run(config: &RunConfig, out: &mut impl Write) -> Result<Outcome, GameError> {
    let maze = generate(config, out)?;
    let painter = Painter::new(config.color);

    let mut game = RunningGame::new(maze);
    game.start()?;

    for &dir in &config.moves {
        if game.get_state() == RunningGameState::Finished {
            log::info!("Ignoring moves after the goal was reached");
            break;
        }
        game.move_player(dir, config.move_mode)?;
    }

    if config.solve {
        game.toggle_solution();
    }

    let mut options = RenderOptions::new();
    if let Some(solution) = game.shown_solution() {
        options = options.solution(solution);
    }

    let finished = game.get_state() == RunningGameState::Finished;

    if finished && !config.moves.is_empty() {
        replay(&game, options, config, out)?;
    } else {
        let maze = game.get_maze();
        writeln!(out, "{}", painter.title(maze.width()))?;
        write!(out, "{}", painter.maze(maze, &options.player(game.get_player_pos())))?;
        out.flush()?;
    }

    Ok(Outcome {
        player_pos: game.get_player_pos(),
        move_count: game.get_move_count(),
        finished,
    })
}
