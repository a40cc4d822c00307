use macroquad::prelude::*;

use crate::application::GameState;
use crate::domain::CreatureKind;
use crate::rendering::CELL_SIZE;

/// Convert a mouse position to board cell coordinates
pub fn mouse_cell(mouse_pos: (f32, f32)) -> (i32, i32) {
    ((mouse_pos.0 / CELL_SIZE) as i32, (mouse_pos.1 / CELL_SIZE) as i32)
}

/// Left click toggles a cell, or stamps the pending creature if one is
/// selected
pub fn handle_mouse(state: &mut GameState, mouse_pos: (f32, f32)) {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }
    let (x, y) = mouse_cell(mouse_pos);
    if state.selected.is_some() {
        state.place_selected(x, y);
    } else {
        state.toggle_cell(x, y);
    }
}

/// Process keyboard input: pause/resume, cadence, clear, randomize and
/// creature selection
pub fn handle_keyboard(state: &mut GameState) {
    type KeyAction = (KeyCode, fn(&mut GameState));

    let actions: [KeyAction; 12] = [
        (KeyCode::Space, |s| s.toggle_mode()),
        (KeyCode::P, |s| s.toggle_mode()),
        // Minus slows the simulation down (more frames per step), Equal
        // speeds it up.
        (KeyCode::Minus, |s| s.adjust_cadence(1)),
        (KeyCode::Equal, |s| s.adjust_cadence(-1)),
        (KeyCode::Key0, |s| s.clear()),
        (KeyCode::R, |s| s.randomize()),
        (KeyCode::Key1, |s| s.select_creature(CreatureKind::GliderRight)),
        (KeyCode::Key2, |s| s.select_creature(CreatureKind::GliderLeft)),
        (KeyCode::Key3, |s| s.select_creature(CreatureKind::Spaceship)),
        (KeyCode::Key4, |s| s.select_creature(CreatureKind::PrePulsar)),
        (KeyCode::Key5, |s| s.select_creature(CreatureKind::Pulsar)),
        (KeyCode::Key6, |s| s.select_creature(CreatureKind::QueenBee)),
    ];

    for (key, action) in actions {
        if is_key_pressed(key) {
            action(state);
        }
    }
}

/// True when the user asked to quit this frame
pub fn quit_requested() -> bool {
    is_key_pressed(KeyCode::Q)
}
