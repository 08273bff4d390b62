use serde::{Deserialize, Serialize};

use crate::maze::{Direction, Maze};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub row: usize,
    pub col: usize,
}

impl Player {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    // Walls block movement; the maze edge is a wall that is never open.
    pub fn step(&mut self, maze: &Maze, direction: Direction) -> bool {
        if !maze.wall_open(self.row, self.col, direction) {
            return false;
        }

        let Some((row, col)) = maze.neighbor_towards(self.row, self.col, direction) else {
            return false;
        };

        self.row = row;
        self.col = col;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> Maze {
        let mut maze = Maze::closed(1, 3).expect("construction failed");
        maze.open_wall(0, 0, Direction::Right);
        maze.open_wall(0, 1, Direction::Right);
        maze
    }

    #[test]
    fn steps_through_open_walls() {
        let maze = corridor();
        let mut player = Player::new(0, 0);

        assert!(player.step(&maze, Direction::Right));
        assert_eq!(player.position(), (0, 1));
        assert!(player.step(&maze, Direction::Right));
        assert_eq!(player.position(), (0, 2));
    }

    #[test]
    fn closed_walls_block_the_step() {
        let maze = corridor();
        let mut player = Player::new(0, 0);

        assert!(!player.step(&maze, Direction::Down));
        assert_eq!(player.position(), (0, 0));
    }

    #[test]
    fn the_maze_edge_blocks_the_step() {
        let maze = corridor();
        let mut player = Player::new(0, 0);

        assert!(!player.step(&maze, Direction::Left));
        assert!(!player.step(&maze, Direction::Up));
        assert_eq!(player.position(), (0, 0));
    }

    #[test]
    fn steps_back_through_the_same_passage() {
        let maze = corridor();
        let mut player = Player::new(0, 1);

        assert!(player.step(&maze, Direction::Left));
        assert_eq!(player.position(), (0, 0));
    }
}
