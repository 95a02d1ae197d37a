use thiserror::Error;

use crate::{
    dims::Dims,
    gameboard::{Cell, CellWall, Maze},
    solver::{solve, Solution},
};

#[derive(Debug, Error)]
#[error("game is already running")]
pub struct GameAlreadyRunningError;

#[derive(Debug, Error)]
#[error("game is not running")]
pub struct GameNotRunningError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RunningGameState {
    NotStarted,
    Running,
    Finished,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum MoveMode {
    /// One cell per move.
    #[default]
    Slow,
    /// Follows the corridor until there is a side passage.
    Normal,
    /// Runs until hitting a wall.
    Fast,
}

/// Player walking through a maze from its entrance to its exit.
pub struct RunningGame {
    maze: Maze,
    solution: Option<Solution>,
    show_solution: bool,
    state: RunningGameState,
    player_pos: Dims,
    goal_pos: Dims,
    moves: Vec<(Dims, CellWall)>,
    positions: Vec<Dims>,
}

impl RunningGame {
    pub fn new(mut maze: Maze) -> Self {
        let solution = solve(&mut maze);
        let player_pos = maze.start();
        let goal_pos = maze.end();

        RunningGame {
            maze,
            solution,
            show_solution: false,
            state: RunningGameState::NotStarted,
            player_pos,
            goal_pos,
            moves: vec![],
            positions: vec![player_pos],
        }
    }

    pub fn get_state(&self) -> RunningGameState {
        self.state
    }

    pub fn get_maze(&self) -> &Maze {
        &self.maze
    }

    pub fn get_player_pos(&self) -> Dims {
        self.player_pos
    }

    pub fn get_goal_pos(&self) -> Dims {
        self.goal_pos
    }

    pub fn get_moves(&self) -> &[(Dims, CellWall)] {
        &self.moves
    }

    pub fn get_move_count(&self) -> usize {
        self.moves.len()
    }

    /// Every position the player stood on, starting with the entrance.
    pub fn get_positions(&self) -> &[Dims] {
        &self.positions
    }

    pub fn get_solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    pub fn is_solution_shown(&self) -> bool {
        self.show_solution
    }

    /// Solution to draw, if the player turned it on.
    pub fn shown_solution(&self) -> Option<&Solution> {
        self.show_solution.then_some(self.solution.as_ref()).flatten()
    }

    pub fn toggle_solution(&mut self) -> bool {
        self.show_solution = !self.show_solution;
        self.show_solution
    }

    pub fn start(&mut self) -> Result<(), GameAlreadyRunningError> {
        if let RunningGameState::NotStarted = self.get_state() {
            self.state = RunningGameState::Running;
            self.check_finished();

            Ok(())
        } else {
            Err(GameAlreadyRunningError)
        }
    }

    /// Moves the player towards `dir`, returns the new position and the number of cells walked.
    pub fn move_player(
        &mut self,
        dir: CellWall,
        move_mode: MoveMode,
    ) -> Result<(Dims, usize), GameNotRunningError> {
        self.check_running()?;

        let mut count = 0;

        match move_mode {
            MoveMode::Slow => {
                if self.step(dir) {
                    count += 1;
                }
            }

            MoveMode::Fast => {
                while self.player_pos != self.goal_pos && self.step(dir) {
                    count += 1;
                }
            }

            MoveMode::Normal => {
                while self.player_pos != self.goal_pos && self.step(dir) {
                    count += 1;

                    let cell = self.current_cell();
                    let (side_a, side_b) = dir.perpendicular_walls();
                    if cell.is_open(side_a) || cell.is_open(side_b) {
                        break;
                    }
                }
            }
        }

        self.check_finished();

        Ok((self.player_pos, count))
    }

    pub fn check_running(&self) -> Result<(), GameNotRunningError> {
        match self.state {
            RunningGameState::Running => Ok(()),
            _ => Err(GameNotRunningError),
        }
    }

    fn current_cell(&self) -> Cell {
        self.maze.get_cells()[self.player_pos]
    }

    fn step(&mut self, dir: CellWall) -> bool {
        if self.current_cell().is_closed(dir) {
            return false;
        }

        self.moves.push((self.player_pos, dir));
        self.player_pos += dir.to_coord();
        self.positions.push(self.player_pos);
        true
    }

    fn check_finished(&mut self) {
        if self.player_pos == self.goal_pos {
            log::info!("Goal reached after {} moves", self.moves.len());
            self.state = RunningGameState::Finished;
        }
    }
}
