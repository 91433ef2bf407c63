//! Cross-strategy properties: edge-count versus cost awareness, expansion
//! accounting, determinism and cost round-trips, checked on hand-traced
//! fixtures and the two demonstration labyrinths.

use grid_util::point::Point;
use maze_pathfinding::{
    path_cost, AstarSolver, BfsSolver, Cost, DfsSolver, Maze, MazeSolver, Solution, UcsSolver,
    DEMO_MAZE,
};

/// A large all-floor labyrinth; every open cell costs 1 to enter.
const CLASSIC_MAZE: &str = "\
#####################
#S....#.........#...#
#.##.#.#.#####.#.#.##
#.#..#.#.....#.#.#.##
#.#.##.###.#.#.#.#.##
#.#......#.#.#...#.##
#.#.####.#.#.#####.##
#.#.#..#.#.#.....#.##
#...#..#...#.###.#.##
###.#######.#...#..##
#...#.....#.#.#.##.##
#.###.###.#.#.#...###
#...#...#.#...#.....#
###.#.#.#.#####.##.##
#...#.#.#.....#...###
#.###.#.###.#.###..##
#.....#.....#....G.##
#####################";

fn all_solvers() -> Vec<(&'static str, Box<dyn MazeSolver>)> {
    vec![
        ("bfs", Box::new(BfsSolver::new())),
        ("dfs", Box::new(DfsSolver::new())),
        ("ucs", Box::new(UcsSolver::new())),
        ("astar-manhattan", Box::new(AstarSolver::manhattan())),
        ("astar-euclidean", Box::new(AstarSolver::euclidean())),
    ]
}

fn assert_valid_route(maze: &Maze, solution: &Solution) {
    let path = solution.path.as_deref().expect("route expected");
    assert_eq!(path.first(), Some(&maze.start().unwrap()));
    assert_eq!(path.last(), Some(&maze.goal().unwrap()));
    for pair in path.windows(2) {
        assert!(maze.walkable(pair[1]));
        assert_eq!((pair[0].x - pair[1].x).abs() + (pair[0].y - pair[1].y).abs(), 1);
    }
}

#[test]
fn every_strategy_solves_both_labyrinths() {
    for text in [CLASSIC_MAZE, DEMO_MAZE] {
        let maze = Maze::parse(text).unwrap();
        for (name, solver) in all_solvers() {
            let solution = solver.solve(&maze).unwrap();
            assert!(solution.path.is_some(), "{name} found no route");
            assert_valid_route(&maze, &solution);
            assert!(solution.expanded >= solution.path.as_ref().unwrap().len());
        }
    }
}

#[test]
fn bfs_is_shortest_in_edges() {
    for text in [CLASSIC_MAZE, DEMO_MAZE] {
        let maze = Maze::parse(text).unwrap();
        let bfs = BfsSolver::new().solve(&maze).unwrap();
        for (name, solver) in all_solvers() {
            let other = solver.solve(&maze).unwrap();
            assert!(
                bfs.route_len() <= other.route_len(),
                "{name} beat BFS on edge count"
            );
        }
    }
}

/// Entering the goal is free, so on an all-floor maze the cheapest cost is
/// the minimal step count minus one; cost-awareness and edge-count-awareness
/// coincide there.
#[test]
fn uniform_cost_matches_edge_count() {
    let maze = Maze::parse(CLASSIC_MAZE).unwrap();
    let bfs = BfsSolver::new().solve(&maze).unwrap();
    let ucs = UcsSolver::new().solve(&maze).unwrap();
    let edges = bfs.route_len().unwrap() as u32;
    assert_eq!(ucs.cost, Some(Cost::new(edges - 1)));
}

/// The free goal entry makes the step-count heuristics overestimate the
/// true remaining cost by up to one, so A* is only guaranteed optimal to
/// within that margin on uniform terrain.
#[test]
fn astar_is_near_optimal_on_uniform_terrain() {
    let maze = Maze::parse(CLASSIC_MAZE).unwrap();
    let ucs_cost = UcsSolver::new().solve(&maze).unwrap().cost.unwrap();
    for solver in [AstarSolver::manhattan(), AstarSolver::euclidean()] {
        let astar = solver.solve(&maze).unwrap();
        let cost = astar.cost.unwrap();
        assert!(ucs_cost <= cost);
        assert!(cost <= ucs_cost + Cost::new(1));
        // The reconstructed route never costs more than the reported total.
        assert!(path_cost(&maze, astar.path.as_deref().unwrap()) <= cost);
    }
}

/// The weighted strategies detour around the water while BFS, blind to
/// cost, walks straight through it.
#[test]
fn cost_awareness_diverges_from_edge_count() {
    let maze = Maze::parse("S~G\n...").unwrap();
    let bfs = BfsSolver::new().solve(&maze).unwrap();
    assert_eq!(
        bfs.path,
        Some(vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)])
    );
    assert_eq!(path_cost(&maze, bfs.path.as_deref().unwrap()), Cost::new(10));

    let detour = vec![
        Point::new(0, 0),
        Point::new(0, 1),
        Point::new(1, 1),
        Point::new(2, 1),
        Point::new(2, 0),
    ];
    for solution in [
        UcsSolver::new().solve(&maze).unwrap(),
        AstarSolver::manhattan().solve(&maze).unwrap(),
        AstarSolver::euclidean().solve(&maze).unwrap(),
    ] {
        assert_eq!(solution.cost, Some(Cost::new(3)));
        assert_eq!(solution.path, Some(detour.clone()));
    }
}

/// Unknown symbols are walkable but infinitely expensive to enter: the
/// unweighted strategies route straight through them, and the weighted ones
/// still find the same route but report the sentinel cost, since the only
/// way to the goal saturates at infinity.
#[test]
fn unknown_terrain_is_walkable_but_infinitely_expensive() {
    let maze = Maze::parse("S?G").unwrap();
    let route = vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)];

    for solver in [
        Box::new(BfsSolver::new()) as Box<dyn MazeSolver>,
        Box::new(DfsSolver::new()),
    ] {
        let solution = solver.solve(&maze).unwrap();
        assert_eq!(solution.path, Some(route.clone()));
        assert_eq!(solution.cost, None);
    }

    for solver in [
        Box::new(UcsSolver::new()) as Box<dyn MazeSolver>,
        Box::new(AstarSolver::manhattan()),
        Box::new(AstarSolver::euclidean()),
    ] {
        let solution = solver.solve(&maze).unwrap();
        assert_eq!(solution.path, Some(route.clone()));
        assert_eq!(solution.cost, Some(Cost::INFINITE));
    }
}

/// Every strategy must exhaust the whole component reachable from the start
/// before giving up on a walled-in goal.
#[test]
fn walled_in_goal_exhausts_the_reachable_region() {
    let maze = Maze::parse("S..##\n..#G#\n..###").unwrap();
    for (name, solver) in all_solvers() {
        let solution = solver.solve(&maze).unwrap();
        assert_eq!(solution.path, None, "{name} hallucinated a route");
        assert_eq!(solution.expanded, 7, "{name} expansion count");
    }
    let ucs = UcsSolver::new().solve(&maze).unwrap();
    assert_eq!(ucs.cost, Some(Cost::INFINITE));
}

#[test]
fn strategies_are_deterministic() {
    for text in [CLASSIC_MAZE, DEMO_MAZE] {
        let maze = Maze::parse(text).unwrap();
        for (name, solver) in all_solvers() {
            let first = solver.solve(&maze).unwrap();
            let second = solver.solve(&maze).unwrap();
            assert_eq!(first, second, "{name} is not deterministic");
        }
    }
}

#[test]
fn ucs_cost_round_trips_through_path_cost() {
    for text in [CLASSIC_MAZE, DEMO_MAZE] {
        let maze = Maze::parse(text).unwrap();
        let ucs = UcsSolver::new().solve(&maze).unwrap();
        assert_eq!(
            path_cost(&maze, ucs.path.as_deref().unwrap()),
            ucs.cost.unwrap()
        );
    }
}

/// The two result conventions: BFS/DFS leave cost to the caller, UCS/A*
/// report it themselves.
#[test]
fn cost_reporting_conventions() {
    let maze = Maze::parse(DEMO_MAZE).unwrap();
    assert_eq!(BfsSolver::new().solve(&maze).unwrap().cost, None);
    assert_eq!(DfsSolver::new().solve(&maze).unwrap().cost, None);
    assert!(UcsSolver::new().solve(&maze).unwrap().cost.is_some());
    assert!(AstarSolver::manhattan().solve(&maze).unwrap().cost.is_some());
}
