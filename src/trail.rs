use std::fmt;

use serde::{Deserialize, Serialize};

use crate::route::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrailError {
    GoalReached,
}

impl fmt::Display for TrailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrailError::GoalReached => {
                write!(f, "the goal has been reached; no next step remains")
            }
        }
    }
}

impl std::error::Error for TrailError {}

// The live remaining-path stack: the goal sits at the bottom and the correct
// next step sits on top. Correct moves shrink it, wrong turns grow it with
// the cells to retrace, so its length reads as "distance left along the
// route, inflated by the detour".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trail {
    stack: Vec<(usize, usize)>,
    goal: (usize, usize),
}

impl Trail {
    // The start cell stays off the stack: the top is the step to take from it.
    pub fn seed(route: &Route) -> Self {
        let mut stack = Vec::with_capacity(route.len().saturating_sub(1));
        for &cell in route.cells().iter().skip(1).rev() {
            stack.push(cell);
        }

        Self {
            stack,
            goal: route.goal(),
        }
    }

    // Call once per observed change of the player's cell.
    pub fn record_move(&mut self, cell: (usize, usize), previous: (usize, usize)) {
        if cell == self.goal {
            return;
        }

        if self.stack.last() == Some(&cell) {
            self.stack.pop();
        } else {
            self.stack.push(previous);
        }
    }

    pub fn hint(&self) -> Result<(usize, usize), TrailError> {
        self.stack.last().copied().ok_or(TrailError::GoalReached)
    }

    pub fn remaining(&self) -> usize {
        self.stack.len()
    }

    pub fn is_consumed(&self) -> bool {
        self.stack.is_empty()
    }

    // Bottom to top; the slice for consumers that draw the whole trail.
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.stack
    }
}
