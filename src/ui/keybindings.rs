use crate::app::AppState;
use crate::domain::{UiMode, View};
use crate::ui::styles::{error_style, Palette};
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Hint text for the current mode
pub fn hints(app: &AppState) -> &'static str {
    match (app.ui_mode, app.view) {
        (UiMode::AddingTask, _) => " Tab next field   ←/→ priority   Enter add   Esc cancel",
        (UiMode::Grabbing, _) => " ←/→/↑/↓ move card   Space/Enter drop   Esc put back",
        (UiMode::Normal, View::Board) => {
            " ←/→/↑/↓ select   Space grab   Shift+arrows move   1/2/3 move to   x delete   a add   f filter   v timeline   t theme   q quit"
        }
        (UiMode::Normal, View::Timeline) => " a add   v board   t theme   q quit",
    }
}

/// Render the keybindings hint bar, or the last save error if there is one
pub fn render_keybindings(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let line = match &app.last_error {
        Some(err) => Line::from(Span::styled(format!(" Save failed: {}", err), error_style())),
        None => Line::from(Span::raw(hints(app))),
    };

    let paragraph = Paragraph::new(line).style(palette.hint_style());
    f.render_widget(paragraph, area);
}
