use board::{GameBoard, TileState};
use error::BoardError;
use pos::Position;
use rand::Rng;

pub mod board;
pub mod color;
pub mod controller;
pub mod error;
pub mod pos;
pub mod rule;

/// The authoritative automaton state: the current board and how many generations it
/// has gone through.
#[derive(Debug, Clone)]
pub struct Game {
    board: GameBoard,
    // Back buffer the next generation is written into before being swapped in.
    next_tiles: Vec<TileState>,
    generation: u64,
}

impl Game {
    pub fn new(board: GameBoard) -> Self {
        let next_tiles = Vec::with_capacity(board.tiles().len());

        Self {
            board,
            next_tiles,
            generation: 0,
        }
    }

    /// A game at generation 0 on a coin-flip seeded board.
    pub fn new_random<R>(rows: usize, cols: usize, rng: &mut R) -> Result<Self, BoardError>
    where
        R: Rng + ?Sized,
    {
        Ok(Self::new(GameBoard::new_random(rows, cols, rng)?))
    }

    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn count_neighbors<P>(&self, pos: P) -> usize
    where
        P: Into<Position>,
    {
        self.board.count_alive_neighbors(pos)
    }

    /// Advances one generation. Every tile is decided from the current board before the
    /// result replaces it, so no tile sees a neighbor's new state.
    pub fn evolve(&mut self) {
        let board = &self.board;

        self.next_tiles.clear();
        self.next_tiles.extend(
            board
                .enumerate_tiles()
                .map(|(tile_pos, tile)| rule::next_state(*tile, board.count_alive_neighbors(tile_pos))),
        );

        self.board.swap_tiles(&mut self.next_tiles);
        self.generation += 1;

        log::debug!(
            "Generation {} ({} alive)",
            self.generation,
            self.board.alive_count()
        );
    }
}
