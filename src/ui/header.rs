use crate::app::AppState;
use crate::domain::View;
use crate::ui::styles::Palette;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title, view tabs, filter and theme indicator
pub fn render_header(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let mut spans = vec![
        Span::styled(" Task Board ", palette.title_style()),
        Span::raw("  "),
    ];

    for view in [View::Board, View::Timeline] {
        let style = if app.view == view {
            palette.active_tab_style()
        } else {
            palette.inactive_tab_style()
        };
        spans.push(Span::styled(format!(" {} ", view.label()), style));
        spans.push(Span::raw(" "));
    }

    if app.view == View::Board {
        spans.push(Span::styled("   Filter: ", palette.subtle_style()));
        spans.push(Span::styled(app.filter.label(), palette.title_style()));
    }

    spans.push(Span::styled(
        format!("   {} {}", app.theme.toggle_icon(), app.theme.key()),
        palette.subtle_style(),
    ));

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(palette.border_style()),
    );

    f.render_widget(header, area);
}
