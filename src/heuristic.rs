//! Remaining-cost estimates for A*.
//!
//! Both estimates measure distance in grid steps. With uniform unit terrain
//! they are the usual admissible pair; against the weighted terrain symbols
//! (costs 5 and 10 per step) and the free goal entry they are a heuristic
//! convenience rather than formally admissible, which the tests account for
//! instead of papering over.

use grid_util::point::Point;

use crate::cost::Cost;

/// A pure estimate of remaining cost between two positions.
pub type Heuristic = fn(Point, Point) -> Cost;

/// Sum of absolute row and column differences.
pub fn manhattan(a: Point, b: Point) -> Cost {
    Cost::new(((a.x - b.x).abs() + (a.y - b.y).abs()) as u32)
}

/// Straight-line distance, floored to an integer cost. Flooring never
/// raises the estimate, so it stays below [`manhattan`] everywhere.
pub fn euclidean(a: Point, b: Point) -> Cost {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    Cost::new((dx * dx + dy * dy).sqrt() as u32)
}
