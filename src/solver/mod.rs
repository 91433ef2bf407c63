//! The four search strategies and their shared protocol.
//!
//! Every strategy consumes a read-only [`Maze`], owns its frontier, visited
//! set and parent map for the duration of one call, and produces a
//! [`Solution`]. The unweighted strategies (BFS, DFS) leave `cost` empty and
//! let the caller derive it with [`path_cost`](crate::path_cost); the
//! weighted ones (UCS, A*) report the accumulated cost directly.

use grid_util::point::Point;

use crate::cost::Cost;
use crate::error::MazeError;
use crate::maze::Maze;

pub mod astar;
pub mod best_first;
pub mod bfs;
pub mod dfs;
pub mod observer;
pub mod ucs;

/// Outcome of one search invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Start-to-goal positions inclusive, or [None] if no route exists.
    pub path: Option<Vec<Point>>,
    /// Number of frontier pops that were expanded (stale weighted entries
    /// skipped by lazy deletion are not counted).
    pub expanded: usize,
    /// Accumulated route cost for the weighted strategies;
    /// [`Cost::INFINITE`] when the frontier exhausted, [None] for BFS/DFS.
    pub cost: Option<Cost>,
}

impl Solution {
    /// Route length in edges, if a route was found.
    pub fn route_len(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len() - 1)
    }
}

/// A search strategy over a maze.
pub trait MazeSolver {
    /// Searches from the maze's start symbol to its goal symbol. Fails with
    /// [`MazeError::SymbolNotFound`] before any traversal if either is
    /// missing; an unreachable goal is a normal [`Solution`], not an error.
    fn solve(&self, maze: &Maze) -> Result<Solution, MazeError>;
}

/// Walks parent pointers backward from `goal` and returns the start-to-goal
/// path, both endpoints included.
///
/// `parent_of` abstracts over the parent store so the hash-map parents of
/// BFS/DFS and the indexed records of the weighted engine share one walker.
/// If a predecessor is missing before `start` is reached the goal was never
/// connected and the result is [None].
pub fn reconstruct_path<F>(start: Point, goal: Point, parent_of: F) -> Option<Vec<Point>>
where
    F: Fn(&Point) -> Option<Point>,
{
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        current = parent_of(&current)?;
        path.push(current);
    }
    path.reverse();
    Some(path)
}
