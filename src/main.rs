use macroquad::prelude::*;
use torus_life::{GameState, Mode, catalog, input, rendering};

const SCREEN_WIDTH: i32 = 640;
const SCREEN_HEIGHT: i32 = 480;

fn window_conf() -> Conf {
    Conf {
        window_title: "Life".to_owned(),
        window_width: SCREEN_WIDTH,
        window_height: SCREEN_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Grid dimensions derive from the screen and cell size; the board is
    // never resized after this.
    let width = SCREEN_WIDTH / rendering::CELL_SIZE as i32;
    let height = SCREEN_HEIGHT / rendering::CELL_SIZE as i32;
    let mut state = GameState::new(width, height);

    loop {
        if input::quit_requested() {
            break;
        }

        let mouse_pos = mouse_position();
        input::handle_mouse(&mut state, mouse_pos);
        input::handle_keyboard(&mut state);

        state.tick();

        clear_background(rendering::BACKGROUND_COLOR);
        rendering::draw_board(&state.board);
        if let Some(kind) = state.selected {
            rendering::draw_creature_preview(
                &catalog::creature(kind),
                &state.board,
                input::mouse_cell(mouse_pos),
            );
        }
        if state.mode == Mode::Paused {
            rendering::draw_paused_hint();
        }

        next_frame().await;
    }
}
