use std::thread;
use std::time::Duration;

use grid_util::point::Point;
use maze_pathfinding::{AstarSolver, ExpansionSnapshot, Maze, DEMO_MAZE};

// Watches A* solve the demonstration labyrinth: after every expansion the
// grid is redrawn with the open set (+), the closed set (x) and the partial
// path (o) overlaid. The observer is an ordinary closure; the pacing delay
// lives entirely on this side of the callback.
fn main() {
    let maze = Maze::parse(DEMO_MAZE).expect("demo maze is well-formed");
    let mut frame = 0usize;

    let solution = AstarSolver::manhattan()
        .solve_observed(&maze, &mut |snapshot: ExpansionSnapshot<'_>| {
            frame += 1;
            println!("frame {frame}: expanded {}", snapshot.current);
            draw(&maze, &snapshot);
            thread::sleep(Duration::from_millis(40));
        })
        .expect("start and goal exist");

    match solution.path {
        Some(path) => println!(
            "done: {} edges, cost {}, {} nodes expanded",
            path.len() - 1,
            solution.cost.expect("weighted strategy reports cost"),
            solution.expanded
        ),
        None => println!("no route found after {} expansions", solution.expanded),
    }
}

fn draw(maze: &Maze, snapshot: &ExpansionSnapshot<'_>) {
    for y in 0..maze.height() as i32 {
        let mut line = String::with_capacity(maze.width());
        for x in 0..maze.width() as i32 {
            let p = Point::new(x, y);
            let symbol = maze.symbol(p).unwrap_or(b'#') as char;
            if snapshot.path.contains(&p) {
                line.push('o');
            } else if snapshot.open.contains(&p) {
                line.push('+');
            } else if snapshot.closed.contains(&p) {
                line.push('x');
            } else {
                line.push(symbol);
            }
        }
        println!("{line}");
    }
    println!();
}
