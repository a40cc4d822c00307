// Domain layer - Board, engine and creature catalog
pub mod domain;

// Application layer - Simulation orchestration
pub mod application;

// Infrastructure layer - Rendering and input
pub mod input;
pub mod rendering;

// Re-exports for convenience
pub use application::{GameState, Mode};
pub use domain::{Board, Cell, Creature, CreatureKind, catalog};
