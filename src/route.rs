use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::maze::Maze;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    NoPathFound,
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::NoPathFound => {
                write!(f, "no open-passage route between the requested cells")
            }
        }
    }
}

impl std::error::Error for RouteError {}

// The shortest open-passage path through a maze, start and goal inclusive.
// In a fully carved maze the passage graph is a spanning tree, so the route
// between any two cells is unique.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    cells: Vec<(usize, usize)>,
}

impl Route {
    pub fn find(
        maze: &mut Maze,
        start: (usize, usize),
        goal: (usize, usize),
    ) -> Result<Self, RouteError> {
        // A rerun on the same maze must not inherit flags from the last one.
        maze.clear_route_flags();

        let rows = maze.rows();
        let cols = maze.cols();

        let mut seen = vec![vec![false; cols]; rows];
        let mut parent: Vec<Vec<Option<(usize, usize)>>> = vec![vec![None; cols]; rows];
        let mut queue = VecDeque::new();

        seen[start.0][start.1] = true;
        queue.push_back(start);

        let mut reached = false;
        while let Some((row, col)) = queue.pop_front() {
            if (row, col) == goal {
                reached = true;
                break;
            }

            for (neighbor_row, neighbor_col) in maze.reachable_neighbors(row, col) {
                if !seen[neighbor_row][neighbor_col] {
                    seen[neighbor_row][neighbor_col] = true;
                    parent[neighbor_row][neighbor_col] = Some((row, col));
                    queue.push_back((neighbor_row, neighbor_col));
                }
            }
        }

        if !reached {
            return Err(RouteError::NoPathFound);
        }

        let mut cells = Vec::new();
        let mut current = Some(goal);
        while let Some((row, col)) = current {
            cells.push((row, col));
            current = parent[row][col];
        }
        cells.reverse();

        for &(row, col) in &cells {
            maze.grid[row][col].on_shortest_path = true;
        }

        Ok(Self { cells })
    }

    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    // A route always holds at least the start cell.
    pub fn start(&self) -> (usize, usize) {
        self.cells[0]
    }

    pub fn goal(&self) -> (usize, usize) {
        self.cells[self.cells.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Direction;

    #[test]
    fn route_runs_from_start_to_goal_over_open_passages() {
        let mut maze = Maze::generate(8, 8, Some(3)).expect("generation failed");
        let start = maze.start();
        let goal = maze.goal();
        let route = Route::find(&mut maze, start, goal).expect("no route found");

        assert_eq!(route.start(), start);
        assert_eq!(route.goal(), goal);

        for pair in route.cells().windows(2) {
            let direction =
                Direction::between(pair[0], pair[1]).expect("route cells are not adjacent");
            assert!(
                maze.wall_open(pair[0].0, pair[0].1, direction),
                "route passes through a wall between {:?} and {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn route_is_deterministic_for_a_fixed_maze() {
        let mut maze = Maze::generate(10, 10, Some(5)).expect("generation failed");
        let start = maze.start();
        let goal = maze.goal();

        let first = Route::find(&mut maze, start, goal).expect("no route found");
        let second = Route::find(&mut maze, start, goal).expect("no route found");

        assert_eq!(first, second);
    }

    #[test]
    fn route_flags_exactly_its_own_cells() {
        let mut maze = Maze::generate(7, 7, Some(9)).expect("generation failed");
        let start = maze.start();
        let goal = maze.goal();
        let route = Route::find(&mut maze, start, goal).expect("no route found");

        let mut flagged = 0;
        for row in &maze.grid {
            for cell in row {
                if cell.on_shortest_path {
                    flagged += 1;
                    assert!(route.cells().contains(&(cell.row, cell.col)));
                }
            }
        }
        assert_eq!(flagged, route.len());
    }

    #[test]
    fn rerun_does_not_leak_flags_from_an_earlier_run() {
        let mut maze = Maze::generate(6, 6, Some(13)).expect("generation failed");
        let goal = maze.goal();

        // First solve from a different corner, then from the real start. Only
        // the second route's cells may stay flagged.
        Route::find(&mut maze, (5, 0), goal).expect("no route found");
        let route = Route::find(&mut maze, (0, 0), goal).expect("no route found");

        let mut flagged = 0;
        for row in &maze.grid {
            for cell in row {
                if cell.on_shortest_path {
                    flagged += 1;
                }
            }
        }
        assert_eq!(flagged, route.len());
    }

    #[test]
    fn single_cell_route_is_just_the_start() {
        let mut maze = Maze::generate(1, 1, Some(0)).expect("generation failed");
        let route = Route::find(&mut maze, (0, 0), (0, 0)).expect("no route found");

        assert_eq!(route.cells(), &[(0, 0)]);
        assert_eq!(route.len(), 1);
    }

    #[test]
    fn sealed_maze_reports_no_path_instead_of_spinning() {
        let mut maze = Maze::closed(3, 3).expect("construction failed");

        assert_eq!(
            Route::find(&mut maze, (0, 0), (2, 2)),
            Err(RouteError::NoPathFound)
        );
    }

    #[test]
    fn manhattan_distance_bounds_the_route_length() {
        for seed in 0..8 {
            let mut maze = Maze::generate(5, 5, Some(seed)).expect("generation failed");
            let start = maze.start();
            let goal = maze.goal();
            let route = Route::find(&mut maze, start, goal).expect("no route found");

            assert!(route.len() >= 9, "route shorter than the straight walk");
            assert!(route.len() <= 25, "route longer than the cell count");
        }
    }
}
