use macroquad::prelude::*;

use crate::domain::{Board, Creature};

/// Side length of a rendered cell in pixels
pub const CELL_SIZE: f32 = 10.0;

/// Dead cells and the window background share one color
pub const BACKGROUND_COLOR: Color = Color::new(0.94, 0.94, 0.94, 1.0);
pub const ALIVE_COLOR: Color = Color::new(0.20, 0.31, 0.31, 1.0);

const PAUSED_HINT_COLOR: Color = Color::new(0.94, 0.04, 0.04, 0.75);

fn cell_color(alive: bool) -> Color {
    if alive { ALIVE_COLOR } else { BACKGROUND_COLOR }
}

/// Draw every cell of the board as a filled square
pub fn draw_board(board: &Board) {
    for (x, y, cell) in board.iter_cells() {
        draw_rectangle(
            x as f32 * CELL_SIZE,
            y as f32 * CELL_SIZE,
            CELL_SIZE,
            CELL_SIZE,
            cell_color(cell.is_alive()),
        );
    }
}

/// Draw the selected creature's full bit-matrix at the given cell, previewing
/// exactly what a stamp there would produce. Destination cells wrap the same
/// way the stamp will.
pub fn draw_creature_preview(creature: &Creature, board: &Board, at: (i32, i32)) {
    let (width, height) = board.dimensions();
    for py in 0..creature.height() {
        for px in 0..creature.width() {
            let x = (at.0 + px).rem_euclid(width);
            let y = (at.1 + py).rem_euclid(height);
            draw_rectangle(
                x as f32 * CELL_SIZE,
                y as f32 * CELL_SIZE,
                CELL_SIZE,
                CELL_SIZE,
                cell_color(creature.get(px, py).is_alive()),
            );
        }
    }
}

/// Centered hint shown while the simulation is paused
pub fn draw_paused_hint() {
    draw_text(
        "Press Space or P to continue running",
        screen_width() / 2.0 - 190.0,
        screen_height() / 2.0 - 10.0,
        20.0,
        PAUSED_HINT_COLOR,
    );
}
