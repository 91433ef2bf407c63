use thiserror::Error;

/// Structural problems with a maze that make a search attempt meaningless.
///
/// "No path found" is deliberately not represented here: an exhausted
/// frontier is an expected outcome and is reported as a
/// [`Solution`](crate::Solution) with no path, never as an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze text is empty")]
    Empty,

    #[error("row {row} has length {len}, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("maze contains no '{0}' cell")]
    SymbolNotFound(char),
}
