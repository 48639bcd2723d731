use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Board dimensions must be positive, got {rows}x{cols}")]
    EmptyDimension { rows: usize, cols: usize },
    #[error("Board of {rows}x{cols} has more tiles than fit in memory")]
    TooLarge { rows: usize, cols: usize },
    #[error("Row {row} is {actual} tiles wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("Board of {rows}x{cols} needs {expected} tiles, got {actual}")]
    TileCountMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },
}
