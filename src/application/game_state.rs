use crate::domain::{Board, CreatureKind, Engine, catalog, seed};

/// Run mode of the simulation. There is no terminal state; the loop runs
/// until process exit.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    Running,
    Paused,
}

/// GameState orchestrates the simulation.
/// This is the application layer that coordinates domain logic: it owns the
/// board and engine, the run mode, the frames-per-step cadence and the
/// pending creature selection, and exposes the command surface the
/// presentation layer drives.
pub struct GameState {
    pub board: Board,
    engine: Engine,
    pub mode: Mode,
    pub generation: u64,
    /// Creature pending placement (None = normal mode)
    pub selected: Option<CreatureKind>,
    frames_per_step: u32,
    frame: u32,
}

impl GameState {
    /// Create new game state with the startup seed layout, running
    pub fn new(width: i32, height: i32) -> Self {
        let mut board = Board::new(width, height);
        seed(&mut board);
        Self {
            board,
            engine: Engine::new(),
            mode: Mode::Running,
            generation: 0,
            selected: None,
            frames_per_step: 10,
            frame: 0,
        }
    }

    /// Toggle a single cell; editing pauses the simulation
    pub fn toggle_cell(&mut self, x: i32, y: i32) {
        self.board.toggle(x, y);
        self.mode = Mode::Paused;
    }

    /// Select a creature for placement; the simulation pauses until it is
    /// placed
    pub fn select_creature(&mut self, kind: CreatureKind) {
        self.selected = Some(kind);
        self.mode = Mode::Paused;
    }

    /// Stamp the pending creature at (x, y) and resume running
    pub fn place_selected(&mut self, x: i32, y: i32) {
        if let Some(kind) = self.selected.take() {
            self.board.stamp(&catalog::creature(kind), x, y);
            self.mode = Mode::Running;
        }
    }

    /// Clear the board and reset the generation counter; the run mode is
    /// unchanged
    pub fn clear(&mut self) {
        self.board.clear();
        self.generation = 0;
    }

    /// Re-roll the whole board and reset the generation counter
    pub fn randomize(&mut self) {
        self.board.randomize();
        self.generation = 0;
    }

    /// Toggle between Running and Paused
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            Mode::Running => Mode::Paused,
            Mode::Paused => Mode::Running,
        };
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Render frames between generation steps, clamped to 1..=60
    pub fn set_cadence(&mut self, frames_per_step: u32) {
        self.frames_per_step = frames_per_step.clamp(1, 60);
    }

    /// Adjust the cadence by a delta (positive = slower)
    pub fn adjust_cadence(&mut self, delta: i32) {
        self.set_cadence((self.frames_per_step as i32 + delta).clamp(1, 60) as u32);
    }

    pub const fn cadence(&self) -> u32 {
        self.frames_per_step
    }

    /// Drive one frame of the simulation. While running, at most one
    /// generation advances per call, gated by the cadence counter; frames
    /// only count while running, so the first frame after a resume steps
    /// immediately.
    pub fn tick(&mut self) {
        if self.mode != Mode::Running {
            return;
        }
        if self.frame % self.frames_per_step == 0 {
            self.engine.advance(&mut self.board);
            self.generation += 1;
        }
        self.frame += 1;
    }
}
