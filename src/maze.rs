pub mod maker;

use std::fmt;

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    // The direction that takes you from one cell to a grid-adjacent one, if any.
    pub fn between(from: (usize, usize), to: (usize, usize)) -> Option<Direction> {
        Direction::iter().find(|direction| {
            let (dr, dc) = direction.delta();
            from.0.checked_add_signed(dr) == Some(to.0)
                && from.1.checked_add_signed(dc) == Some(to.1)
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub wall_up: bool,
    pub wall_down: bool,
    pub wall_left: bool,
    pub wall_right: bool,
    pub visited: bool,
    pub on_shortest_path: bool,
}

impl Cell {
    fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            wall_up: true,
            wall_down: true,
            wall_left: true,
            wall_right: true,
            visited: false,
            on_shortest_path: false,
        }
    }

    pub fn wall(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.wall_up,
            Direction::Down => self.wall_down,
            Direction::Left => self.wall_left,
            Direction::Right => self.wall_right,
        }
    }

    fn set_wall(&mut self, direction: Direction, present: bool) {
        match direction {
            Direction::Up => self.wall_up = present,
            Direction::Down => self.wall_down = present,
            Direction::Left => self.wall_left = present,
            Direction::Right => self.wall_right = present,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    InvalidDimensions { rows: usize, cols: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidDimensions { rows, cols } => {
                write!(f, "maze must be at least 1x1, got {}x{}", rows, cols)
            }
        }
    }
}

impl std::error::Error for MazeError {}

#[derive(Clone, Serialize, Deserialize)]
pub struct Maze {
    pub grid: Vec<Vec<Cell>>,
    rows: usize,
    cols: usize,
}

impl Maze {
    pub fn generate(rows: usize, cols: usize, seed: Option<u64>) -> Result<Self, MazeError> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::generate_with(rows, cols, &mut rng)
    }

    pub fn generate_with(rows: usize, cols: usize, rng: &mut impl Rng) -> Result<Self, MazeError> {
        let mut maze = Self::closed(rows, cols)?;
        maker::carve(&mut maze, rng);
        Ok(maze)
    }

    // All walls present, no passages. Generation starts from here.
    pub(crate) fn closed(rows: usize, cols: usize) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }

        let grid = (0..rows)
            .map(|row| (0..cols).map(|col| Cell::new(row, col)).collect())
            .collect();

        Ok(Self { grid, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn start(&self) -> (usize, usize) {
        (0, 0)
    }

    pub fn goal(&self) -> (usize, usize) {
        (self.rows - 1, self.cols - 1)
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.grid[row][col]
    }

    pub fn wall_open(&self, row: usize, col: usize, direction: Direction) -> bool {
        !self.grid[row][col].wall(direction)
    }

    pub fn mark_visited(&mut self, row: usize, col: usize) {
        self.grid[row][col].visited = true;
    }

    pub fn neighbor_towards(
        &self,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Option<(usize, usize)> {
        let (dr, dc) = direction.delta();
        let row = row.checked_add_signed(dr)?;
        let col = col.checked_add_signed(dc)?;

        (row < self.rows && col < self.cols).then_some((row, col))
    }

    // Grid-adjacent cells, in up, down, left, right order.
    pub fn neighbors(&self, row: usize, col: usize) -> Vec<(usize, usize)> {
        Direction::iter()
            .filter_map(|direction| self.neighbor_towards(row, col, direction))
            .collect()
    }

    // The subset of `neighbors` whose connecting wall has been removed.
    pub fn reachable_neighbors(&self, row: usize, col: usize) -> Vec<(usize, usize)> {
        Direction::iter()
            .filter_map(|direction| {
                if self.wall_open(row, col, direction) {
                    self.neighbor_towards(row, col, direction)
                } else {
                    None
                }
            })
            .collect()
    }

    // Removes the wall pair between a cell and its neighbor in one step, so
    // the two sides never disagree.
    pub(crate) fn open_wall(&mut self, row: usize, col: usize, direction: Direction) {
        debug_assert!(
            self.neighbor_towards(row, col, direction).is_some(),
            "no cell on the far side of that wall"
        );

        if let Some((neighbor_row, neighbor_col)) = self.neighbor_towards(row, col, direction) {
            self.grid[row][col].set_wall(direction, false);
            self.grid[neighbor_row][neighbor_col].set_wall(direction.opposite(), false);
        }
    }

    pub fn passage_count(&self) -> usize {
        let mut open_sides = 0;

        for row in &self.grid {
            for cell in row {
                for direction in Direction::iter() {
                    if !cell.wall(direction) {
                        open_sides += 1;
                    }
                }
            }
        }

        // Every passage is open from both of its sides.
        open_sides / 2
    }

    pub(crate) fn clear_route_flags(&mut self) {
        for row in &mut self.grid {
            for cell in row {
                cell.on_shortest_path = false;
            }
        }
    }
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            for cell in row {
                write!(f, "+{}", if cell.wall_up { "--" } else { "  " })?;
            }
            writeln!(f, "+")?;

            for cell in row {
                write!(f, "{}  ", if cell.wall_left { "|" } else { " " })?;
            }
            let right_edge = row.last().is_some_and(|cell| cell.wall_right);
            writeln!(f, "{}", if right_edge { "|" } else { " " })?;
        }

        if let Some(last_row) = self.grid.last() {
            for cell in last_row {
                write!(f, "+{}", if cell.wall_down { "--" } else { "  " })?;
            }
            writeln!(f, "+")?;
        }

        Ok(())
    }
}
