use std::fmt;

use itertools::Itertools;
use rand::Rng;

use super::{error::BoardError, pos::Position};

/// Offsets of the 8 tiles surrounding a tile, as `[row, col]`.
const NEIGHBOR_RELATIVE_POSITIONS: &[[isize; 2]] = &[
    [-1, -1],
    [-1, 0],
    [-1, 1],
    [0, -1],
    [0, 1],
    [1, -1],
    [1, 0],
    [1, 1],
];

/// A bounded `rows x cols` board stored row-major. The dimensions are fixed for the
/// lifetime of the board and `tiles.len() == rows * cols` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameBoard {
    rows: usize,
    cols: usize,
    tiles: Vec<TileState>,
}

impl GameBoard {
    /// An all-dead board.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        let tile_count = check_dimensions(rows, cols)?;
        Self::with_tiles(rows, cols, vec![TileState::default(); tile_count])
    }

    /// Every tile is independently alive or dead with equal probability.
    pub fn new_random<R>(rows: usize, cols: usize, rng: &mut R) -> Result<Self, BoardError>
    where
        R: Rng + ?Sized,
    {
        let tile_count = check_dimensions(rows, cols)?;

        let tiles = (0..tile_count)
            .map(|_| {
                if rng.random_bool(0.5) {
                    TileState::Alive
                } else {
                    TileState::Dead
                }
            })
            .collect_vec();

        Self::with_tiles(rows, cols, tiles)
    }

    pub fn with_tiles(rows: usize, cols: usize, tiles: Vec<TileState>) -> Result<Self, BoardError> {
        let tile_count = check_dimensions(rows, cols)?;

        if tiles.len() != tile_count {
            return Err(BoardError::TileCountMismatch {
                rows,
                cols,
                expected: tile_count,
                actual: tiles.len(),
            });
        }

        Ok(Self { rows, cols, tiles })
    }

    /// Builds a board from one string per row, `#` or `O` for alive and anything else for dead.
    /// Every row must be as long as the first.
    pub fn from_rows<S>(rows: &[S]) -> Result<Self, BoardError>
    where
        S: AsRef<str>,
    {
        let cols = rows.first().map_or(0, |row| row.as_ref().chars().count());

        if let Some((row, actual)) = rows
            .iter()
            .map(|row| row.as_ref().chars().count())
            .enumerate()
            .find(|(_, len)| *len != cols)
        {
            return Err(BoardError::RaggedRow {
                row,
                expected: cols,
                actual,
            });
        }

        let tiles = rows
            .iter()
            .flat_map(|row| row.as_ref().chars())
            .map(|c| match c {
                '#' | 'O' => TileState::Alive,
                _ => TileState::Dead,
            })
            .collect_vec();

        Self::with_tiles(rows.len(), cols, tiles)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn tiles(&self) -> &[TileState] {
        &self.tiles
    }

    pub fn tile<P>(&self, pos: P) -> Option<&TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get(index)
    }

    pub fn enumerate_tiles(&self) -> impl Iterator<Item = (Position, &TileState)> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(index, tile)| (self.index_to_pos(index), tile))
    }

    pub fn alive_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_alive()).count()
    }

    /// Number of live tiles among the up to 8 tiles around `pos`. Tiles past the board
    /// edge are skipped, so corners see at most 3 neighbors and edges at most 5.
    pub fn count_alive_neighbors<P>(&self, pos: P) -> usize
    where
        P: Into<Position>,
    {
        let pos = pos.into();

        NEIGHBOR_RELATIVE_POSITIONS
            .iter()
            .filter_map(|[row_offset, col_offset]| self.tile(pos.offset(*row_offset, *col_offset)?))
            .filter(|neighbor| neighbor.is_alive())
            .count()
    }

    /// Replaces the whole tile buffer with `tiles`, handing the previous buffer back
    /// through the same reference.
    pub(crate) fn swap_tiles(&mut self, tiles: &mut Vec<TileState>) {
        debug_assert_eq!(tiles.len(), self.tiles.len());
        std::mem::swap(&mut self.tiles, tiles);
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { row, col } = pos.into();

        if row >= self.rows {
            return None;
        }

        if col >= self.cols {
            return None;
        }

        Some(col + row * self.cols)
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let row = index / self.cols;
        let col = index % self.cols;
        Position { row, col }
    }
}

impl fmt::Display for GameBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .tiles
            .chunks_exact(self.cols)
            .map(|row| {
                row.iter()
                    .map(|tile| match tile {
                        TileState::Alive => '#',
                        TileState::Dead => '.',
                    })
                    .collect::<String>()
            })
            .join("\n");

        f.write_str(&text)
    }
}

/// Returns the tile count of a `rows x cols` board.
fn check_dimensions(rows: usize, cols: usize) -> Result<usize, BoardError> {
    if rows == 0 || cols == 0 {
        return Err(BoardError::EmptyDimension { rows, cols });
    }

    rows.checked_mul(cols)
        .ok_or(BoardError::TooLarge { rows, cols })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileState {
    Alive,

    #[default]
    Dead,
}

impl TileState {
    pub fn is_alive(self) -> bool {
        self == TileState::Alive
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn full_board(rows: usize, cols: usize) -> GameBoard {
        GameBoard::with_tiles(rows, cols, vec![TileState::Alive; rows * cols]).unwrap()
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            GameBoard::new(0, 4),
            Err(BoardError::EmptyDimension { rows: 0, cols: 4 })
        );
        assert_eq!(
            GameBoard::new(4, 0),
            Err(BoardError::EmptyDimension { rows: 4, cols: 0 })
        );

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(GameBoard::new_random(0, 0, &mut rng).is_err());
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        let side = usize::MAX / 2 + 1;

        assert_eq!(
            GameBoard::new(side, 2),
            Err(BoardError::TooLarge { rows: side, cols: 2 })
        );

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            GameBoard::new_random(side, side, &mut rng),
            Err(BoardError::TooLarge {
                rows: side,
                cols: side
            })
        );

        assert_eq!(
            GameBoard::with_tiles(side, 3, Vec::new()),
            Err(BoardError::TooLarge { rows: side, cols: 3 })
        );
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert_eq!(
            GameBoard::from_rows(&["#", "##", ""]),
            Err(BoardError::RaggedRow {
                row: 1,
                expected: 1,
                actual: 2
            })
        );
        assert_eq!(
            GameBoard::from_rows(&["##", "#."]).map(|board| board.alive_count()),
            Ok(3)
        );
    }

    #[test]
    fn tile_count_must_match_dimensions() {
        let err = GameBoard::with_tiles(2, 3, vec![TileState::Dead; 5]).unwrap_err();

        assert_eq!(
            err,
            BoardError::TileCountMismatch {
                rows: 2,
                cols: 3,
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn random_board_is_reproducible_and_mixed() {
        let first = GameBoard::new_random(30, 30, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();
        let second = GameBoard::new_random(30, 30, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.tiles().len(), 900);

        // 900 fair coin flips landing outside [300, 600] would be absurdly unlikely.
        let alive = first.alive_count();
        assert!((300..=600).contains(&alive), "alive = {alive}");
    }

    #[test]
    fn positions_are_row_major() {
        let board = GameBoard::from_rows(&["..#", "#.."]).unwrap();

        assert_eq!(board.rows(), 2);
        assert_eq!(board.cols(), 3);
        assert_eq!(board.tile((0, 2)), Some(&TileState::Alive));
        assert_eq!(board.tile((1, 0)), Some(&TileState::Alive));
        assert_eq!(board.tile((1, 2)), Some(&TileState::Dead));
        assert_eq!(board.tile((2, 0)), None);
        assert_eq!(board.tile((0, 3)), None);

        let alive = board
            .enumerate_tiles()
            .filter(|(_, tile)| tile.is_alive())
            .map(|(pos, _)| pos)
            .collect_vec();
        assert_eq!(alive, vec![Position::new(0, 2), Position::new(1, 0)]);
    }

    #[test]
    fn display_matches_from_rows() {
        let rows = [".#.", "##.", "..#"];
        let board = GameBoard::from_rows(&rows).unwrap();

        assert_eq!(board.to_string(), rows.join("\n"));
    }

    #[test]
    fn neighbors_are_clipped_at_corners_and_edges() {
        let board = full_board(4, 5);

        for (pos, _) in board.enumerate_tiles() {
            let on_row_edge = pos.row == 0 || pos.row == 3;
            let on_col_edge = pos.col == 0 || pos.col == 4;

            let expected = match (on_row_edge, on_col_edge) {
                (true, true) => 3,
                (true, false) | (false, true) => 5,
                (false, false) => 8,
            };

            assert_eq!(board.count_alive_neighbors(pos), expected, "at {pos:?}");
        }
    }

    #[test]
    fn center_tile_is_not_its_own_neighbor() {
        let board = GameBoard::from_rows(&["...", ".#.", "..."]).unwrap();

        assert_eq!(board.count_alive_neighbors((1, 1)), 0);
        assert_eq!(board.count_alive_neighbors((0, 0)), 1);
        assert_eq!(board.count_alive_neighbors((2, 1)), 1);
    }

    #[test]
    fn single_tile_board_has_no_neighbors() {
        let board = full_board(1, 1);

        assert_eq!(board.count_alive_neighbors((0, 0)), 0);
    }
}
