mod board;
mod cell;
mod creatures;
mod engine;

pub use board::Board;
pub use cell::Cell;
pub use creatures::{Creature, CreatureKind, catalog, seed};
pub use engine::Engine;
