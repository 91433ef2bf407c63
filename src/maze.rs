use core::fmt;

use grid_util::point::Point;
use log::info;

use crate::error::MazeError;
use crate::{GOAL, START, WALL};

/// Immutable view of a rectangular symbol grid.
///
/// Cells are stored row-major; a [`Point`] addresses column `x` of row `y`.
/// A maze is constructed once by [`Maze::parse`] and never mutated, so every
/// search borrows it read-only and keeps its own frontier and parent state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    cells: Vec<u8>,
    width: usize,
    height: usize,
}

impl Maze {
    /// Parses a maze from text, one row per line.
    ///
    /// Surrounding blank lines are ignored. Fails on empty input and on
    /// ragged rows; symbols are not interpreted here, so a map with unknown
    /// terrain parses fine and is only penalized by the cost model.
    pub fn parse(text: &str) -> Result<Maze, MazeError> {
        let lines: Vec<&str> = text.trim_matches('\n').lines().collect();
        let width = lines.first().map_or(0, |l| l.len());
        if width == 0 {
            return Err(MazeError::Empty);
        }
        let mut cells = Vec::with_capacity(width * lines.len());
        for (row, line) in lines.iter().enumerate() {
            if line.len() != width {
                return Err(MazeError::RaggedRow {
                    row,
                    len: line.len(),
                    expected: width,
                });
            }
            cells.extend_from_slice(line.as_bytes());
        }
        let maze = Maze {
            cells,
            width,
            height: lines.len(),
        };
        info!("parsed {}x{} maze", maze.width, maze.height);
        Ok(maze)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Point) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// The symbol at `pos`, or [None] outside the grid.
    pub fn symbol(&self, pos: Point) -> Option<u8> {
        if self.in_bounds(pos) {
            Some(self.cells[pos.y as usize * self.width + pos.x as usize])
        } else {
            None
        }
    }

    /// Whether `pos` is inside the grid and not a wall. Heavy or unknown
    /// terrain is walkable; only its cost differs.
    pub fn walkable(&self, pos: Point) -> bool {
        self.symbol(pos).is_some_and(|s| s != WALL)
    }

    /// Finds the first cell holding `symbol` in row-major order.
    ///
    /// The maze contract assumes start and goal symbols are unique; if a map
    /// violates that, the row-major scan keeps the result deterministic.
    pub fn locate(&self, symbol: u8) -> Result<Point, MazeError> {
        self.cells
            .iter()
            .position(|&s| s == symbol)
            .map(|ix| Point::new((ix % self.width) as i32, (ix / self.width) as i32))
            .ok_or(MazeError::SymbolNotFound(symbol as char))
    }

    pub fn start(&self) -> Result<Point, MazeError> {
        self.locate(START)
    }

    pub fn goal(&self) -> Result<Point, MazeError> {
        self.locate(GOAL)
    }

    /// The walkable axis-aligned neighbors of `pos`, in up, down, left,
    /// right order. Each call yields a fresh iterator.
    pub fn neighbors(&self, pos: Point) -> impl Iterator<Item = Point> + '_ {
        [
            Point::new(pos.x, pos.y - 1),
            Point::new(pos.x, pos.y + 1),
            Point::new(pos.x - 1, pos.y),
            Point::new(pos.x + 1, pos.y),
        ]
        .into_iter()
        .filter(move |p| self.walkable(*p))
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for &s in row {
                write!(f, "{}", s as char)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
