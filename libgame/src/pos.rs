/// A cell coordinate on the board. `row` grows downwards, `col` grows to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Applies a signed offset, returning `None` if either coordinate would go negative.
    /// The upper bound is checked by the board, not here.
    pub fn offset(self, row_offset: isize, col_offset: isize) -> Option<Position> {
        Some(Position {
            row: self.row.checked_add_signed(row_offset)?,
            col: self.col.checked_add_signed(col_offset)?,
        })
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}
