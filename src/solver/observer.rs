//! Per-expansion snapshots of the weighted engine's internal state.
//!
//! The A* strategy offers its open set, closed set and partial path to an
//! observer after every expansion. The observer is a synchronous callback:
//! the caller controls pacing, and the search has no dependency on what the
//! observer does with a frame. Detaching the observer (the default) leaves
//! the strategy a pure function of the maze.

use fxhash::FxHashSet;
use grid_util::point::Point;

/// Borrowed view of the search state right after one expansion. Valid only
/// for the duration of the callback; [`SnapshotFrame`] holds an owned copy.
#[derive(Clone, Copy, Debug)]
pub struct ExpansionSnapshot<'a> {
    /// The position that was just expanded (already in the closed set).
    pub current: Point,
    /// Discovered but not yet expanded positions.
    pub open: &'a FxHashSet<Point>,
    /// Fully expanded positions.
    pub closed: &'a FxHashSet<Point>,
    /// Partial path from the start to `current`.
    pub path: &'a [Point],
}

/// Consumer of the expansion feed.
pub trait SearchObserver {
    fn expanded(&mut self, snapshot: ExpansionSnapshot<'_>);
}

/// Ignores every frame.
pub struct NullObserver;

impl SearchObserver for NullObserver {
    fn expanded(&mut self, _: ExpansionSnapshot<'_>) {}
}

impl<F> SearchObserver for F
where
    F: FnMut(ExpansionSnapshot<'_>),
{
    fn expanded(&mut self, snapshot: ExpansionSnapshot<'_>) {
        self(snapshot)
    }
}

/// Owned copy of one frame.
#[derive(Clone, Debug)]
pub struct SnapshotFrame {
    pub current: Point,
    pub open: Vec<Point>,
    pub closed: Vec<Point>,
    pub path: Vec<Point>,
}

/// Collects every frame of a run, for tests and offline rendering.
#[derive(Default)]
pub struct SnapshotLog {
    pub frames: Vec<SnapshotFrame>,
}

impl SearchObserver for SnapshotLog {
    fn expanded(&mut self, snapshot: ExpansionSnapshot<'_>) {
        self.frames.push(SnapshotFrame {
            current: snapshot.current,
            open: snapshot.open.iter().copied().collect(),
            closed: snapshot.closed.iter().copied().collect(),
            path: snapshot.path.to_vec(),
        });
    }
}
