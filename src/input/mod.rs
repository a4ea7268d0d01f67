use macroquad::prelude::*;
use crate::application::Session;

/// Convert a pointer position in pixels to a (row, col) grid coordinate.
/// Positions left of or above the grid map to negative coordinates.
pub fn pixel_to_cell(x: f32, y: f32, cell_size: f32) -> (isize, isize) {
    let row = (y / cell_size).floor() as isize;
    let col = (x / cell_size).floor() as isize;
    (row, col)
}

/// Toggle the cell under the pointer on a left click
pub fn handle_mouse_toggle(session: &mut Session, cell_size: f32, mouse_pos: (f32, f32)) {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }

    let (row, col) = pixel_to_cell(mouse_pos.0, mouse_pos.1, cell_size);
    tracing::trace!(row, col, "toggle cell");
    session.automaton.toggle_cell(row, col);
}

/// Process keyboard input functionally
pub fn process_keyboard_input(session: Session) -> Session {
    type KeyAction = (KeyCode, fn(Session) -> Session);

    let actions: [KeyAction; 4] = [
        (KeyCode::Space, Session::toggle_running),
        (KeyCode::C, Session::clear),
        (KeyCode::R, Session::randomize),
        (KeyCode::N, Session::step),
    ];

    actions.iter().fold(session, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_to_cell_divides_by_cell_size() {
        assert_eq!(pixel_to_cell(0.0, 0.0, 16.0), (0, 0));
        assert_eq!(pixel_to_cell(15.9, 16.0, 16.0), (1, 0));
        assert_eq!(pixel_to_cell(799.0, 33.0, 16.0), (2, 49));
    }

    #[test]
    fn test_pixel_outside_grid_is_out_of_range() {
        assert_eq!(pixel_to_cell(-1.0, 5.0, 10.0), (0, -1));
        assert_eq!(pixel_to_cell(905.0, 5.0, 10.0), (0, 90));
    }
}
