// Default board:
pub const DEFAULT_ROWS: usize = 20;
pub const DEFAULT_COLS: usize = 20;

// Scoring. A cell only ever scores once, on first entry.
pub const ON_ROUTE_REWARD: i32 = 5;
pub const NEAR_ROUTE_PENALTY: i32 = 1; // One cell away from the shortest path.
pub const STRAY_PENALTY: i32 = 2; // Two or more cells away.
