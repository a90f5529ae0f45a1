use crate::app::AppState;
use crate::domain::{FormField, Priority};
use crate::ui::{layout::create_modal_area, styles::{priority_style, Palette}};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the input form for adding tasks
pub fn render_input_form(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    if let Some(form) = &app.input_form {
        let modal_area = create_modal_area(area);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let mut lines = Vec::new();
        let cursor = |field: FormField| {
            if form.editing_field == field {
                Span::styled("█", palette.modal_title_style())
            } else {
                Span::raw("")
            }
        };

        lines.push(Line::raw(""));
        lines.push(Line::styled("Task title", palette.subtle_style()));
        lines.push(Line::from(vec![
            Span::raw("> "),
            Span::raw(form.title.as_str()),
            cursor(FormField::Title),
        ]));
        lines.push(Line::raw(""));

        lines.push(Line::styled("Description (optional)", palette.subtle_style()));
        lines.push(Line::from(vec![
            Span::raw("> "),
            Span::raw(form.description.as_str()),
            cursor(FormField::Description),
        ]));
        lines.push(Line::raw(""));

        // Priority selector: all three options, the chosen one as a chip
        let mut priority_spans = vec![Span::styled("Priority: ", palette.subtle_style())];
        for priority in Priority::ALL {
            let label = format!(" {} ", priority.label());
            if priority == form.priority {
                priority_spans.push(Span::styled(label, priority_style(priority)));
            } else {
                priority_spans.push(Span::styled(label, palette.subtle_style()));
            }
            priority_spans.push(Span::raw(" "));
        }
        priority_spans.push(cursor(FormField::Priority));
        lines.push(Line::from(priority_spans));
        lines.push(Line::raw(""));

        lines.push(Line::raw("Tab next field  ·  Enter add  ·  Esc cancel"));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" Add Task ", palette.modal_title_style()))
                    .style(palette.modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
