use grid_util::point::Point;

use crate::error::MazeError;
use crate::heuristic::{self, Heuristic};
use crate::maze::Maze;
use crate::solver::best_first::best_first_search;
use crate::solver::observer::{NullObserver, SearchObserver};
use crate::solver::{MazeSolver, Solution};

/// A*: the priority frontier ordered by cumulative cost plus an estimate of
/// the cost remaining to the goal.
///
/// With an admissible heuristic this expands no more nodes than UCS while
/// still finding a minimum-cost path; the bundled step-count heuristics are
/// only approximately admissible against weighted terrain, which the
/// strategy deliberately does not correct for (see the engine docs).
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic: Heuristic,
}

impl AstarSolver {
    pub fn new(heuristic: Heuristic) -> AstarSolver {
        AstarSolver { heuristic }
    }

    pub fn manhattan() -> AstarSolver {
        AstarSolver::new(heuristic::manhattan)
    }

    pub fn euclidean() -> AstarSolver {
        AstarSolver::new(heuristic::euclidean)
    }

    /// Searches like [`solve`](MazeSolver::solve) while feeding the observer
    /// one [`ExpansionSnapshot`](crate::ExpansionSnapshot) per expansion,
    /// the strategy's only side channel, used for live visualization.
    pub fn solve_observed(
        &self,
        maze: &Maze,
        observer: &mut dyn SearchObserver,
    ) -> Result<Solution, MazeError> {
        let start = maze.start()?;
        let goal = maze.goal()?;
        Ok(self.solve_from_observed(maze, start, goal, observer))
    }

    pub fn solve_from(&self, maze: &Maze, start: Point, goal: Point) -> Solution {
        self.solve_from_observed(maze, start, goal, &mut NullObserver)
    }

    pub fn solve_from_observed(
        &self,
        maze: &Maze,
        start: Point,
        goal: Point,
        observer: &mut dyn SearchObserver,
    ) -> Solution {
        let h = self.heuristic;
        let outcome = best_first_search(maze, start, goal, |p| h(p, goal), observer);
        Solution {
            path: outcome.path,
            expanded: outcome.expanded,
            cost: Some(outcome.cost),
        }
    }
}

impl MazeSolver for AstarSolver {
    fn solve(&self, maze: &Maze) -> Result<Solution, MazeError> {
        self.solve_observed(maze, &mut NullObserver)
    }
}
