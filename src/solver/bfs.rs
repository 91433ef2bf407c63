use std::collections::VecDeque;

use fxhash::{FxHashMap, FxHashSet};
use grid_util::point::Point;
use log::info;

use crate::error::MazeError;
use crate::maze::Maze;
use crate::solver::{reconstruct_path, MazeSolver, Solution};

/// Breadth-first search: FIFO frontier, every edge treated as unit cost.
///
/// Guarantees a path with the fewest edges, not the cheapest weighted cost.
#[derive(Clone, Debug, Default)]
pub struct BfsSolver;

impl BfsSolver {
    pub fn new() -> BfsSolver {
        BfsSolver
    }

    /// Searches between explicit cells. Neighbors are marked visited and
    /// given their parent when first discovered; expansion stops once the
    /// goal itself is popped.
    pub fn solve_from(&self, maze: &Maze, start: Point, goal: Point) -> Solution {
        let mut frontier = VecDeque::from([start]);
        let mut visited: FxHashSet<Point> = FxHashSet::default();
        visited.insert(start);
        let mut parents: FxHashMap<Point, Point> = FxHashMap::default();
        let mut expanded = 0;

        while let Some(current) = frontier.pop_front() {
            expanded += 1;
            if current == goal {
                break;
            }
            for neighbor in maze.neighbors(current) {
                if visited.insert(neighbor) {
                    parents.insert(neighbor, current);
                    frontier.push_back(neighbor);
                }
            }
        }

        let path = reconstruct_path(start, goal, |p| parents.get(p).copied());
        if path.is_none() {
            info!("BFS exhausted {} expansions without reaching {}", expanded, goal);
        }
        Solution {
            path,
            expanded,
            cost: None,
        }
    }
}

impl MazeSolver for BfsSolver {
    fn solve(&self, maze: &Maze) -> Result<Solution, MazeError> {
        Ok(self.solve_from(maze, maze.start()?, maze.goal()?))
    }
}
