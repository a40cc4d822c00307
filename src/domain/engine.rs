use super::{Board, Cell};

/// Engine computes generation transitions for a board.
///
/// It keeps a scratch buffer the same shape as the board so that every cell's
/// next state is derived from the pre-advance board only; the scratch contents
/// replace the live cells in a single swap once all cells are computed, so no
/// reader can observe a board mid-transition.
pub struct Engine {
    scratch: Vec<Cell>,
}

impl Engine {
    pub const fn new() -> Self {
        Self { scratch: Vec::new() }
    }

    /// Advance the board by exactly one generation
    pub fn advance(&mut self, board: &mut Board) {
        let (width, height) = board.dimensions();
        self.scratch.clear();
        self.scratch.extend(
            (0..height)
                .flat_map(|y| (0..width).map(move |x| (x, y)))
                .map(|(x, y)| board.get(x, y).next_state(board.neighbor_count(x, y))),
        );
        board.commit(&mut self.scratch);
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
