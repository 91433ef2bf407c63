//! # maze_pathfinding
//!
//! A pathfinding sandbox over 2-D symbol grids. Four interchangeable search
//! strategies (breadth-first, depth-first,
//! [uniform-cost](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) and
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with pluggable
//! heuristics) share one frontier/visited/parent-pointer protocol and report
//! a route, an expansion count and, for the weighted strategies, a total
//! cost. The A* strategy additionally offers a per-expansion snapshot of its
//! open set, closed set and partial path for step-by-step visualization.
//!
//! Cells carry a terrain symbol: walls block movement entirely, the three
//! open terrains charge different costs on entry, and the start/goal cells
//! are free to enter. Movement is 4-neighbor, axis-aligned, uniform-step.

pub mod cost;
pub mod error;
pub mod heuristic;
pub mod maze;
pub mod solver;

pub use cost::{cell_cost, path_cost, Cost};
pub use error::MazeError;
pub use maze::Maze;
pub use solver::astar::AstarSolver;
pub use solver::bfs::BfsSolver;
pub use solver::dfs::DfsSolver;
pub use solver::observer::{
    ExpansionSnapshot, NullObserver, SearchObserver, SnapshotFrame, SnapshotLog,
};
pub use solver::ucs::UcsSolver;
pub use solver::{MazeSolver, Solution};

/// Impassable wall.
pub const WALL: u8 = b'#';
/// Open floor, cost 1 to enter.
pub const FLOOR: u8 = b'.';
/// Heavy terrain, cost 5 to enter.
pub const SAND: u8 = b',';
/// Heaviest terrain, cost 10 to enter.
pub const WATER: u8 = b'~';
/// Start cell, free to enter.
pub const START: u8 = b'S';
/// Goal cell, free to enter.
pub const GOAL: u8 = b'G';

/// A weighted demonstration labyrinth: the direct corridor along the top is
/// short in steps but runs through sand, and the open hall in the middle is
/// flooded, so the cost-aware strategies detour while BFS does not.
pub const DEMO_MAZE: &str = "\
###################
#S..,,..........#G#
#.###.###########.#
#...#.......,,,,..#
#.#.#.#########.#.#
#.#.#.....~~~~~.#.#
#.#.###########.#.#
#.#.............#.#
#.###############.#
#.................#
###################";
