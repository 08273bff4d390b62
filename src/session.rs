use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    constants::{DEFAULT_COLS, DEFAULT_ROWS},
    maze::{Direction, Maze, MazeError},
    player::Player,
    route::{Route, RouteError},
    score,
    trail::{Trail, TrailError},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    Maze(MazeError),
    Route(RouteError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Maze(error) => write!(f, "failed to generate maze: {}", error),
            SessionError::Route(error) => write!(f, "failed to solve maze: {}", error),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Maze(error) => Some(error),
            SessionError::Route(error) => Some(error),
        }
    }
}

impl From<MazeError> for SessionError {
    fn from(error: MazeError) -> Self {
        SessionError::Maze(error)
    }
}

impl From<RouteError> for SessionError {
    fn from(error: RouteError) -> Self {
        SessionError::Route(error)
    }
}

// One playthrough of one maze. Everything derived from the maze (route,
// trail, player, score, clock) lives and dies with it; starting a new
// session replaces the lot.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    maze: Maze,
    route: Route,
    trail: Trail,
    player: Player,
    score: i32,
    elapsed: f64,
}

impl Session {
    pub fn new(rows: usize, cols: usize, seed: Option<u64>) -> Result<Self, SessionError> {
        let mut maze = Maze::generate(rows, cols, seed)?;
        let start = maze.start();
        let goal = maze.goal();

        let route = Route::find(&mut maze, start, goal)?;
        let trail = Trail::seed(&route);
        let player = Player::new(start.0, start.1);
        maze.mark_visited(start.0, start.1);

        Ok(Self {
            maze,
            route,
            trail,
            player,
            score: 0,
            elapsed: 0.0,
        })
    }

    // A fresh game on the standard board.
    pub fn with_default_dimensions(seed: Option<u64>) -> Result<Self, SessionError> {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS, seed)
    }

    // Attempts the move and, when the player's cell actually changes, folds
    // the consequences into the session state. Scoring happens before the
    // cell is marked visited so each cell scores at most once.
    pub fn move_player(&mut self, direction: Direction) -> bool {
        let from = self.player.position();
        if !self.player.step(&self.maze, direction) {
            return false;
        }

        let (row, col) = self.player.position();
        self.score += score::move_delta(&self.maze, row, col);
        self.trail.record_move((row, col), from);
        self.maze.mark_visited(row, col);

        true
    }

    pub fn advance_time(&mut self, dt: f64) {
        self.elapsed += dt;
    }

    // The next cell to step into. Once the maze is solved there is no next
    // step, even though the trail still holds the goal at its bottom.
    pub fn hint(&self) -> Result<(usize, usize), TrailError> {
        if self.is_solved() {
            return Err(TrailError::GoalReached);
        }
        self.trail.hint()
    }

    pub fn is_solved(&self) -> bool {
        self.player.position() == self.maze.goal()
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}
