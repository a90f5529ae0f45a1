use crate::app::AppState;
use crate::domain::{FormField, Status, UiMode, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask => handle_input_form_mode(app, key),
        UiMode::Grabbing => handle_grab_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> bool {
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    let on_board = app.view == View::Board;

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,

        // Navigation, Shift moves the selected card instead
        KeyCode::Up if on_board => {
            if shift {
                app.nudge_selected(-1, 0);
            } else {
                app.move_selection_up();
            }
        }
        KeyCode::Down if on_board => {
            if shift {
                app.nudge_selected(1, 0);
            } else {
                app.move_selection_down();
            }
        }
        KeyCode::Left if on_board => {
            if shift {
                app.nudge_selected(0, -1);
            } else {
                app.move_selection_left();
            }
        }
        KeyCode::Right if on_board => {
            if shift {
                app.nudge_selected(0, 1);
            } else {
                app.move_selection_right();
            }
        }

        // Pick up the selected card
        KeyCode::Char(' ') if on_board => app.begin_grab(),

        // Change status in place
        KeyCode::Char('1') if on_board => app.change_selected_status(Status::Todo),
        KeyCode::Char('2') if on_board => app.change_selected_status(Status::InProgress),
        KeyCode::Char('3') if on_board => app.change_selected_status(Status::Done),

        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete if on_board => app.delete_selected(),

        KeyCode::Char('f') | KeyCode::Char('F') if on_board => app.cycle_filter(),

        KeyCode::Char('a') | KeyCode::Char('A') => app.start_add_task(),
        KeyCode::Char('v') | KeyCode::Char('V') | KeyCode::Tab => app.toggle_view(),
        KeyCode::Char('t') | KeyCode::Char('T') => app.toggle_theme(),

        _ => {}
    }

    false
}

/// Handle keys while a card is picked up
fn handle_grab_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Up => app.move_grab(-1, 0),
        KeyCode::Down => app.move_grab(1, 0),
        KeyCode::Left => app.move_grab(0, -1),
        KeyCode::Right => app.move_grab(0, 1),
        KeyCode::Char(' ') | KeyCode::Enter => app.drop_grab(),
        KeyCode::Esc => app.cancel_grab(),
        _ => {}
    }
    false
}

/// Handle keys in the add-task form
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> bool {
    let on_priority = app
        .input_form
        .as_ref()
        .is_some_and(|form| form.editing_field == FormField::Priority);

    match key.code {
        KeyCode::Enter => app.submit_input_form(),
        KeyCode::Esc => app.cancel_input_form(),
        KeyCode::Tab => app.input_form_toggle_field(),
        KeyCode::Backspace => app.input_form_backspace(),
        KeyCode::Left if on_priority => app.input_form_cycle_priority(false),
        KeyCode::Right if on_priority => app.input_form_cycle_priority(true),
        KeyCode::Char(c) => app.input_form_add_char(c),
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::store::MemoryStore;
    use crossterm::event::KeyEventKind;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn shift(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::SHIFT)
    }

    fn type_str(app: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_key(app, press(KeyCode::Char(c)));
        }
    }

    fn app() -> AppState {
        AppState::load(Box::new(MemoryStore::default()))
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert!(handle_key(&mut app, press(KeyCode::Char('q'))));
    }

    #[test]
    fn test_q_in_form_is_text() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('a')));
        assert!(!handle_key(&mut app, press(KeyCode::Char('q'))));
        assert_eq!(app.input_form.as_ref().unwrap().title, "q");
    }

    #[test]
    fn test_add_task_through_form() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('a')));
        type_str(&mut app, "Plant tulips");
        handle_key(&mut app, press(KeyCode::Tab));
        type_str(&mut app, "by the fence");
        handle_key(&mut app, press(KeyCode::Tab));
        handle_key(&mut app, press(KeyCode::Left));
        handle_key(&mut app, press(KeyCode::Enter));

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks[0].title, "Plant tulips");
        assert_eq!(app.tasks[0].description, "by the fence");
        assert_eq!(app.tasks[0].priority, crate::domain::Priority::Low);
    }

    #[test]
    fn test_status_keys_and_delete() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('a')));
        type_str(&mut app, "Task");
        handle_key(&mut app, press(KeyCode::Enter));

        handle_key(&mut app, press(KeyCode::Char('3')));
        assert_eq!(app.tasks[0].status, Status::Done);

        // Cursor stayed on the To Do column, which is now empty
        handle_key(&mut app, press(KeyCode::Char('x')));
        assert_eq!(app.tasks.len(), 1);

        handle_key(&mut app, press(KeyCode::Right));
        handle_key(&mut app, press(KeyCode::Right));
        handle_key(&mut app, press(KeyCode::Delete));
        assert!(app.tasks.is_empty());
    }

    #[test]
    fn test_grab_keys() {
        let mut app = app();
        for title in ["A", "B"] {
            handle_key(&mut app, press(KeyCode::Char('a')));
            type_str(&mut app, title);
            handle_key(&mut app, press(KeyCode::Enter));
        }

        handle_key(&mut app, press(KeyCode::Char(' ')));
        assert_eq!(app.ui_mode, UiMode::Grabbing);
        handle_key(&mut app, press(KeyCode::Right));
        handle_key(&mut app, press(KeyCode::Enter));

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.column_len(Status::InProgress), 1);
        assert_eq!(app.column_len(Status::Todo), 1);
    }

    #[test]
    fn test_shift_down_reorders() {
        let mut app = app();
        for title in ["A", "B"] {
            handle_key(&mut app, press(KeyCode::Char('a')));
            type_str(&mut app, title);
            handle_key(&mut app, press(KeyCode::Enter));
        }

        handle_key(&mut app, shift(KeyCode::Down));
        let titles: Vec<_> = app.column_tasks(Status::Todo).iter().map(|t| t.title.clone()).collect();
        assert_eq!(titles, vec!["A", "B"]);
        assert_eq!(app.cursor.row, 1);
    }

    #[test]
    fn test_view_and_theme_toggle() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('v')));
        assert_eq!(app.view, View::Timeline);
        handle_key(&mut app, press(KeyCode::Char('t')));
        assert!(app.theme_needs_save);

        // Board-only keys do nothing on the timeline
        let mut key = press(KeyCode::Char('f'));
        key.kind = KeyEventKind::Press;
        handle_key(&mut app, key);
        assert_eq!(app.filter, crate::domain::StatusFilter::All);
    }
}
