use crate::board::TileState;

/// Neighbor counts that bring a dead tile to life.
pub const BIRTH: &[usize] = &[3];

/// Neighbor counts that keep a live tile alive.
pub const SURVIVE: &[usize] = &[2, 3];

/// Conway's B3/S23 transition for a single tile.
pub fn next_state(tile: TileState, alive_neighbors: usize) -> TileState {
    let alive = match tile {
        TileState::Alive => SURVIVE.contains(&alive_neighbors),
        TileState::Dead => BIRTH.contains(&alive_neighbors),
    };

    if alive {
        TileState::Alive
    } else {
        TileState::Dead
    }
}
