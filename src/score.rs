use crate::constants::{NEAR_ROUTE_PENALTY, ON_ROUTE_REWARD, STRAY_PENALTY};
use crate::maze::Maze;

// Score adjustment for the cell the player just entered, before it is marked
// visited. Staying on the shortest path pays out; drifting off it costs more
// the further away the cell sits. Revisits are worth nothing.
pub fn move_delta(maze: &Maze, row: usize, col: usize) -> i32 {
    let cell = maze.cell(row, col);

    if cell.visited {
        return 0;
    }

    if cell.on_shortest_path {
        return ON_ROUTE_REWARD;
    }

    let near_route = maze
        .neighbors(row, col)
        .into_iter()
        .any(|(neighbor_row, neighbor_col)| maze.cell(neighbor_row, neighbor_col).on_shortest_path);

    if near_route {
        -NEAR_ROUTE_PENALTY
    } else {
        -STRAY_PENALTY
    }
}
