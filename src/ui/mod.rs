pub mod board_pane;
pub mod header;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod styles;
pub mod timeline_pane;

use crate::app::AppState;
use crate::domain::View;
use board_pane::render_board;
use header::render_header;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use ratatui::{widgets::Block, Frame};
use styles::Palette;
use timeline_pane::render_timeline;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let palette = Palette::for_theme(app.theme);
    let layout = create_layout(size);

    f.render_widget(Block::default().style(palette.page_style()), size);

    render_header(f, app, &palette, layout.header_area);

    match app.view {
        View::Board => render_board(f, app, &palette, layout.content_area),
        View::Timeline => render_timeline(f, app, &palette, layout.content_area),
    }

    render_keybindings(f, app, &palette, layout.keybindings_area);

    // The form floats above both views
    if app.input_form.is_some() {
        render_input_form(f, app, &palette, size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::store::MemoryStore;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_board_and_form() {
        let mut app = AppState::load(Box::new(MemoryStore::default()));
        let text = screen(&app);
        assert!(text.contains("Task Board"));
        assert!(text.contains("Filter: All"));
        assert!(text.contains("Nothing planned yet"));

        app.start_add_task();
        let text = screen(&app);
        assert!(text.contains("Add Task"));
        assert!(text.contains("Priority:"));
    }

    #[test]
    fn test_render_timeline_view() {
        let mut app = AppState::load(Box::new(MemoryStore::default()));
        app.toggle_view();
        let text = screen(&app);
        assert!(text.contains("Today's focus"));
        assert!(!text.contains("Filter:"));
    }

    #[test]
    fn test_render_save_error() {
        let mut app = AppState::load(Box::new(MemoryStore::default()));
        app.last_error = Some("disk full".to_string());
        assert!(screen(&app).contains("Save failed: disk full"));
    }
}
