use grid_util::point::Point;
use num_traits::Zero;

use crate::cost::Cost;
use crate::error::MazeError;
use crate::maze::Maze;
use crate::solver::best_first::best_first_search;
use crate::solver::observer::NullObserver;
use crate::solver::{MazeSolver, Solution};

/// Uniform-cost search: the priority frontier ordered by cumulative cost
/// alone. Guarantees a minimum-cost path under non-negative costs.
#[derive(Clone, Debug, Default)]
pub struct UcsSolver;

impl UcsSolver {
    pub fn new() -> UcsSolver {
        UcsSolver
    }

    pub fn solve_from(&self, maze: &Maze, start: Point, goal: Point) -> Solution {
        let outcome = best_first_search(maze, start, goal, |_| Cost::zero(), &mut NullObserver);
        Solution {
            path: outcome.path,
            expanded: outcome.expanded,
            cost: Some(outcome.cost),
        }
    }
}

impl MazeSolver for UcsSolver {
    fn solve(&self, maze: &Maze) -> Result<Solution, MazeError> {
        Ok(self.solve_from(maze, maze.start()?, maze.goal()?))
    }
}
