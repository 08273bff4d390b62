use rand::Rng;
use rand::prelude::IndexedRandom;

use super::{Direction, Maze};

pub(crate) fn carve(maze: &mut Maze, rng: &mut impl Rng) {
    MazeMaker::new(maze, rng).grow();
}

// Randomized incremental spanning-tree growth. One cell is seeded at random,
// then cells on the frontier are absorbed one at a time, each connected to
// the grown maze by knocking out a single wall pair. Membership lives here,
// not on the cells, so nothing has to be scrubbed off the grid afterwards.
struct MazeMaker<'a, R: Rng> {
    maze: &'a mut Maze,
    rng: &'a mut R,
    frontier: Vec<(usize, usize)>,
    in_frontier: Vec<Vec<bool>>,
    in_maze: Vec<Vec<bool>>,
}

impl<'a, R: Rng> MazeMaker<'a, R> {
    fn new(maze: &'a mut Maze, rng: &'a mut R) -> Self {
        let rows = maze.rows();
        let cols = maze.cols();

        Self {
            maze,
            rng,
            frontier: Vec::new(),
            in_frontier: vec![vec![false; cols]; rows],
            in_maze: vec![vec![false; cols]; rows],
        }
    }

    fn grow(mut self) {
        let first = self.pick_first_cell();
        self.absorb(first);

        while let Some(cell) = self.pick_out_frontier_cell() {
            self.connect_to_grown_maze(cell);
            self.absorb(cell);
        }
    }

    fn pick_first_cell(&mut self) -> (usize, usize) {
        let rows = self.maze.rows();
        let cols = self.maze.cols();

        (
            self.rng.random_range(0..rows),
            self.rng.random_range(0..cols),
        )
    }

    // Uniform pick that also removes the cell from the frontier.
    fn pick_out_frontier_cell(&mut self) -> Option<(usize, usize)> {
        if self.frontier.is_empty() {
            return None;
        }

        let i = self.rng.random_range(0..self.frontier.len());
        let (row, col) = self.frontier.swap_remove(i);
        self.in_frontier[row][col] = false;

        Some((row, col))
    }

    // A frontier cell always has at least one grown neighbor; the wall to one
    // of them, picked uniformly, becomes the cell's passage into the maze.
    fn connect_to_grown_maze(&mut self, cell: (usize, usize)) {
        let (row, col) = cell;
        let grown_neighbors: Vec<(usize, usize)> = self
            .maze
            .neighbors(row, col)
            .into_iter()
            .filter(|&(neighbor_row, neighbor_col)| self.in_maze[neighbor_row][neighbor_col])
            .collect();

        if let Some(&neighbor) = grown_neighbors.choose(self.rng) {
            if let Some(direction) = Direction::between(cell, neighbor) {
                self.maze.open_wall(row, col, direction);
            }
        }
    }

    fn absorb(&mut self, cell: (usize, usize)) {
        let (row, col) = cell;
        self.in_maze[row][col] = true;

        for (neighbor_row, neighbor_col) in self.maze.neighbors(row, col) {
            if !self.in_maze[neighbor_row][neighbor_col]
                && !self.in_frontier[neighbor_row][neighbor_col]
            {
                self.frontier.push((neighbor_row, neighbor_col));
                self.in_frontier[neighbor_row][neighbor_col] = true;
            }
        }
    }
}
