//! Shared priority-frontier engine behind UCS and A*.
//!
//! A lazy-deletion best-first search: duplicate frontier entries are
//! tolerated and a popped position that is already closed is skipped.
//! Relaxation overwrites a position's parent and cumulative cost whenever a
//! strictly cheaper route appears, even after the position was closed; but
//! a corrected closed position is never expanded again, so with an
//! inconsistent heuristic the correction reaches the final path only
//! through the parent chain. The tests pin this behavior down rather than
//! paper over it.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use fxhash::{FxBuildHasher, FxHashSet};
use grid_util::point::Point;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::warn;
use num_traits::Zero;

use crate::cost::{cell_cost, Cost};
use crate::maze::Maze;
use crate::solver::observer::{ExpansionSnapshot, SearchObserver};
use crate::solver::reconstruct_path;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Best-known route to a discovered position: the parent's index in the
/// record map (`usize::MAX` for the start) and the cumulative cost.
#[derive(Clone, Copy, Debug)]
struct PathRecord {
    parent: usize,
    cost: Cost,
}

struct FrontierEntry {
    priority: Cost,
    cost: Cost,
    pos: Point,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority.eq(&other.priority) && self.cost.eq(&other.cost)
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap on priority; equal priorities favor the entry that has
        // accumulated more real cost, i.e. the one closer to the goal.
        match other.priority.cmp(&self.priority) {
            Ordering::Equal => self.cost.cmp(&other.cost),
            ord => ord,
        }
    }
}

pub(crate) struct WeightedOutcome {
    pub path: Option<Vec<Point>>,
    pub expanded: usize,
    pub cost: Cost,
}

/// Walks the parent-index chain of `records` from `index` back to the start
/// and returns the positions in start-first order.
fn trace(records: &FxIndexMap<Point, PathRecord>, index: usize) -> Vec<Point> {
    let mut path: Vec<Point> = itertools::unfold(index, |ix| {
        records.get_index(*ix).map(|(pos, record)| {
            *ix = record.parent;
            *pos
        })
    })
    .collect();
    path.reverse();
    path
}

/// Priority search from `start` to `goal`; `heuristic` is the estimated
/// remaining cost of a position (zero for UCS). The observer is called once
/// per expansion, goal pop included.
pub(crate) fn best_first_search<H>(
    maze: &Maze,
    start: Point,
    goal: Point,
    mut heuristic: H,
    observer: &mut dyn SearchObserver,
) -> WeightedOutcome
where
    H: FnMut(Point) -> Cost,
{
    let mut frontier = BinaryHeap::new();
    frontier.push(FrontierEntry {
        priority: heuristic(start),
        cost: Cost::zero(),
        pos: start,
    });
    let mut records: FxIndexMap<Point, PathRecord> = FxIndexMap::default();
    records.insert(
        start,
        PathRecord {
            parent: usize::MAX,
            cost: Cost::zero(),
        },
    );
    let mut open: FxHashSet<Point> = FxHashSet::default();
    open.insert(start);
    let mut closed: FxHashSet<Point> = FxHashSet::default();
    let mut expanded = 0;

    while let Some(FrontierEntry { pos: current, .. }) = frontier.pop() {
        // A position may sit in the frontier several times if cheaper routes
        // to it kept being found; only the first pop expands it.
        if !closed.insert(current) {
            continue;
        }
        open.remove(&current);
        expanded += 1;

        // The record holds the best-known cost, which can be lower than the
        // popped entry's when the entry went stale in the frontier.
        let (current_index, _, record) = records.get_full(&current).unwrap();
        let current_cost = record.cost;

        let partial = trace(&records, current_index);
        observer.expanded(ExpansionSnapshot {
            current,
            open: &open,
            closed: &closed,
            path: &partial,
        });

        if current == goal {
            let path = reconstruct_path(start, goal, |p| {
                records
                    .get(p)
                    .and_then(|r| records.get_index(r.parent))
                    .map(|(parent, _)| *parent)
            });
            return WeightedOutcome {
                path,
                expanded,
                cost: current_cost,
            };
        }

        for neighbor in maze.neighbors(current) {
            let candidate = current_cost + cell_cost(maze, neighbor);
            match records.entry(neighbor) {
                Vacant(entry) => {
                    entry.insert(PathRecord {
                        parent: current_index,
                        cost: candidate,
                    });
                }
                Occupied(mut entry) => {
                    if candidate < entry.get().cost {
                        entry.insert(PathRecord {
                            parent: current_index,
                            cost: candidate,
                        });
                    } else {
                        continue;
                    }
                }
            }
            if !closed.contains(&neighbor) {
                open.insert(neighbor);
            }
            frontier.push(FrontierEntry {
                priority: candidate + heuristic(neighbor),
                cost: candidate,
                pos: neighbor,
            });
        }
    }

    warn!("frontier exhausted after {} expansions without reaching {}", expanded, goal);
    WeightedOutcome {
        path: None,
        expanded,
        cost: Cost::INFINITE,
    }
}
