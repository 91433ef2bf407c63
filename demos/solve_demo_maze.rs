use std::time::Instant;

use grid_util::point::Point;
use maze_pathfinding::{
    path_cost, AstarSolver, BfsSolver, DfsSolver, Maze, MazeSolver, Solution, UcsSolver, DEMO_MAZE,
};

// Runs every strategy on the demonstration labyrinth and reports route
// length, cost, expansion count and elapsed time for each. The unweighted
// strategies do not report a cost themselves, so it is derived afterwards
// with path_cost.
fn main() {
    let maze = Maze::parse(DEMO_MAZE).expect("demo maze is well-formed");
    println!("{maze}");

    let solvers: Vec<(&str, Box<dyn MazeSolver>)> = vec![
        ("BFS", Box::new(BfsSolver::new())),
        ("DFS", Box::new(DfsSolver::new())),
        ("UCS", Box::new(UcsSolver::new())),
        ("A* (Manhattan)", Box::new(AstarSolver::manhattan())),
        ("A* (Euclidean)", Box::new(AstarSolver::euclidean())),
    ];

    for (name, solver) in solvers {
        let started = Instant::now();
        let solution = solver.solve(&maze).expect("start and goal exist");
        let elapsed = started.elapsed();
        report(&maze, name, &solution, elapsed.as_secs_f64() * 1000.0);
    }
}

fn report(maze: &Maze, name: &str, solution: &Solution, millis: f64) {
    println!("== {name} ==");
    match &solution.path {
        Some(path) => {
            let cost = solution.cost.unwrap_or_else(|| path_cost(maze, path));
            println!("route length: {} edges", path.len() - 1);
            println!("total cost:   {cost}");
            draw_route(maze, path);
        }
        None => println!("no route found"),
    }
    println!("expanded:     {} nodes", solution.expanded);
    println!("time:         {millis:.2} ms\n");
}

// Overlays the route on the grid with 'o'.
fn draw_route(maze: &Maze, path: &[Point]) {
    for y in 0..maze.height() as i32 {
        let mut line = String::with_capacity(maze.width());
        for x in 0..maze.width() as i32 {
            let p = Point::new(x, y);
            if path.contains(&p) {
                line.push('o');
            } else {
                line.push(maze.symbol(p).unwrap_or(b'#') as char);
            }
        }
        println!("{line}");
    }
}
