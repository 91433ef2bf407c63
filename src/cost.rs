use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use grid_util::point::Point;
use num_traits::{Bounded, Zero};

use crate::maze::Maze;
use crate::{FLOOR, GOAL, SAND, START, WATER};

/// Non-negative traversal cost with an unreachable sentinel.
///
/// Addition saturates at [`Cost::INFINITE`], so arithmetic involving
/// impassable or unknown terrain stays at the sentinel instead of wrapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cost(u32);

impl Cost {
    pub const ZERO: Cost = Cost(0);
    /// Sentinel for impassable or unknown terrain and for absent paths.
    pub const INFINITE: Cost = Cost(u32::MAX);

    pub const fn new(value: u32) -> Cost {
        Cost(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    pub const fn is_infinite(self) -> bool {
        self.0 == u32::MAX
    }
}

impl Add for Cost {
    type Output = Cost;

    fn add(self, rhs: Cost) -> Cost {
        Cost(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Cost {
    fn sum<I: Iterator<Item = Cost>>(iter: I) -> Cost {
        iter.fold(Cost::ZERO, Add::add)
    }
}

impl Zero for Cost {
    fn zero() -> Cost {
        Cost::ZERO
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Bounded for Cost {
    fn min_value() -> Cost {
        Cost::ZERO
    }

    fn max_value() -> Cost {
        Cost::INFINITE
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_infinite() {
            write!(f, "inf")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// The cost charged on entering the cell at `pos`.
///
/// Start and goal cells are free to enter; terrain is looked up in the
/// symbol table; walls, out-of-bounds positions and unrecognized symbols
/// all cost [`Cost::INFINITE`]. Unknown terrain is thereby effectively
/// impassable for the weighted strategies while the unweighted ones, which
/// never consult this table, still traverse it.
pub fn cell_cost(maze: &Maze, pos: Point) -> Cost {
    match maze.symbol(pos) {
        Some(START) | Some(GOAL) => Cost::ZERO,
        Some(FLOOR) => Cost::new(1),
        Some(SAND) => Cost::new(5),
        Some(WATER) => Cost::new(10),
        _ => Cost::INFINITE,
    }
}

/// Sums [`cell_cost`] over every position of `path`, start and goal
/// included (both contribute 0). An empty path costs [`Cost::INFINITE`].
pub fn path_cost(maze: &Maze, path: &[Point]) -> Cost {
    if path.is_empty() {
        return Cost::INFINITE;
    }
    path.iter().map(|&p| cell_cost(maze, p)).sum()
}
