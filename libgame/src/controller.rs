use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strum::Display;

use crate::{Game, board::GameBoard, color::Color, color::ColorCycle, error::BoardError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum RunState {
    #[default]
    Paused,
    Running,
}

impl RunState {
    pub fn toggled(self) -> Self {
        match self {
            RunState::Paused => RunState::Running,
            RunState::Running => RunState::Paused,
        }
    }

    pub fn is_running(self) -> bool {
        self == RunState::Running
    }
}

/// Everything a renderer needs to draw one tick.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub board: &'a GameBoard,
    pub generation: u64,
    pub color: Color,
}

/// Gates evolution behind a start/pause switch. Ticks always produce a frame, so a
/// paused simulation keeps being redrawn at the tick rate.
#[derive(Debug, Clone)]
pub struct SimulationController<R = ChaCha8Rng> {
    game: Game,
    colors: ColorCycle,
    rng: R,
    state: RunState,
}

impl SimulationController<ChaCha8Rng> {
    /// A paused controller over a random board, fully determined by `seed`.
    pub fn from_seed(rows: usize, cols: usize, seed: u64) -> Result<Self, BoardError> {
        Self::new_random(rows, cols, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R> SimulationController<R>
where
    R: Rng,
{
    pub fn new(game: Game, rng: R) -> Self {
        Self {
            game,
            colors: ColorCycle::new(),
            rng,
            state: RunState::default(),
        }
    }

    /// Seeds the board from `rng`, which then keeps driving the color choice.
    pub fn new_random(rows: usize, cols: usize, mut rng: R) -> Result<Self, BoardError> {
        let game = Game::new_random(rows, cols, &mut rng)?;
        Ok(Self::new(game, rng))
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn toggle(&mut self) -> RunState {
        self.state = self.state.toggled();
        log::info!("Simulation {}", self.state);
        self.state
    }

    /// Evolves the game if running, then picks this tick's color.
    pub fn tick(&mut self) -> Frame<'_> {
        if self.state.is_running() {
            self.game.evolve();
        }

        let color = self.colors.next_color(&mut self.rng);

        Frame {
            board: self.game.board(),
            generation: self.game.generation(),
            color,
        }
    }
}
