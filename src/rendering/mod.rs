use macroquad::prelude::*;
use crate::application::Session;
use crate::domain::Automaton;

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.0, 1.0);
const DEAD_COLOR: Color = BLACK;
const BORDER_COLOR: Color = Color::new(50.0 / 255.0, 50.0 / 255.0, 50.0 / 255.0, 1.0);

/// Draw every cell as a filled square with a thin border
pub fn draw_automaton(automaton: &Automaton, cell_size: f32) {
    for (row, col, cell) in automaton.iter_cells() {
        let x = col as f32 * cell_size;
        let y = row as f32 * cell_size;

        let fill = if cell.is_alive() { ALIVE_COLOR } else { DEAD_COLOR };
        draw_rectangle(x, y, cell_size, cell_size, fill);
        draw_rectangle_lines(x, y, cell_size, cell_size, 1.0, BORDER_COLOR);
    }
}

const STATUS_BACKING: Color = Color::new(0.0, 0.0, 0.0, 0.75);

/// Overlay text, shown only while paused so a running grid stays unobstructed
pub fn status_line(session: &Session) -> Option<String> {
    (!session.is_running).then(|| {
        format!(
            "Paused | Gen {} | Pop {}",
            session.automaton.generation(),
            session.automaton.population()
        )
    })
}

/// Draw the paused overlay over a dark backing box in the top-left corner
pub fn draw_status(session: &Session) {
    let Some(text) = status_line(session) else {
        return;
    };

    let size = measure_text(&text, None, 20, 1.0);
    draw_rectangle(4.0, 4.0, size.width + 8.0, size.height + 8.0, STATUS_BACKING);
    draw_text(&text, 8.0, 8.0 + size.offset_y, 20.0, Color::from_rgba(255, 165, 0, 255));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_status_hidden_while_running() {
        let mut automaton = Automaton::new(4, 4);
        automaton.toggle_cell(0, 0);
        let session = Session::new(automaton, Duration::from_millis(100));
        assert_eq!(status_line(&session).as_deref(), Some("Paused | Gen 0 | Pop 1"));

        let session = session.toggle_running();
        assert_eq!(status_line(&session), None);
    }
}
