use fxhash::{FxHashMap, FxHashSet};
use grid_util::point::Point;
use log::info;

use crate::error::MazeError;
use crate::maze::Maze;
use crate::solver::{reconstruct_path, MazeSolver, Solution};

/// Depth-first search: LIFO frontier, otherwise the discovery protocol of
/// [`BfsSolver`](crate::BfsSolver).
///
/// Guarantees only that *a* path is found if one exists; the
/// most-recently-discovered neighbor is expanded first, so the last
/// neighbor in enumeration order leads.
#[derive(Clone, Debug, Default)]
pub struct DfsSolver;

impl DfsSolver {
    pub fn new() -> DfsSolver {
        DfsSolver
    }

    pub fn solve_from(&self, maze: &Maze, start: Point, goal: Point) -> Solution {
        let mut frontier = vec![start];
        let mut visited: FxHashSet<Point> = FxHashSet::default();
        visited.insert(start);
        let mut parents: FxHashMap<Point, Point> = FxHashMap::default();
        let mut expanded = 0;

        while let Some(current) = frontier.pop() {
            expanded += 1;
            if current == goal {
                break;
            }
            for neighbor in maze.neighbors(current) {
                if visited.insert(neighbor) {
                    parents.insert(neighbor, current);
                    frontier.push(neighbor);
                }
            }
        }

        let path = reconstruct_path(start, goal, |p| parents.get(p).copied());
        if path.is_none() {
            info!("DFS exhausted {} expansions without reaching {}", expanded, goal);
        }
        Solution {
            path,
            expanded,
            cost: None,
        }
    }
}

impl MazeSolver for DfsSolver {
    fn solve(&self, maze: &Maze) -> Result<Solution, MazeError> {
        Ok(self.solve_from(maze, maze.start()?, maze.goal()?))
    }
}
