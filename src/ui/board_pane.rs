use crate::app::AppState;
use crate::domain::{DragLocation, Status, Task, UiMode};
use crate::ui::layout::board_columns;
use crate::ui::styles::{priority_style, Palette};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Render the three status columns
pub fn render_board(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    for (column, column_area) in Status::ALL.into_iter().zip(board_columns(area)) {
        render_column(f, app, palette, column, column_area);
    }
}

fn render_column(f: &mut Frame, app: &AppState, palette: &Palette, column: Status, area: Rect) {
    let count = app.column_len(column);
    let focused = match app.grab {
        Some(grab) => grab.target.column == column,
        None => app.cursor.column == column,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            palette.drop_marker_style()
        } else {
            palette.border_style()
        })
        .title(Span::styled(
            format!(" {} ({}) ", column.label(), count),
            palette.title_style(),
        ))
        .style(palette.panel_style());

    let (items, selected) = column_items(app, palette, column);

    if items.is_empty() {
        let placeholder = Paragraph::new(Line::styled(column.empty_text(), palette.subtle_style()))
            .block(block)
            .wrap(Wrap { trim: true });
        f.render_widget(placeholder, area);
        return;
    }

    let list = List::new(items).block(block);
    let mut state = ListState::default().with_selected(selected);
    f.render_stateful_widget(list, area, &mut state);
}

/// Build the rows for one column, plus the row to keep scrolled into view.
///
/// While a card is grabbed it is drawn at its drop target; in its own column
/// it is lifted out, elsewhere its origin is shown dimmed.
fn column_items<'a>(app: &'a AppState, palette: &Palette, column: Status) -> (Vec<ListItem<'a>>, Option<usize>) {
    let tasks = app.column_tasks(column);
    let grab = app.grab;
    let mut items = Vec::with_capacity(tasks.len() + 1);
    let mut selected = None;

    for (row, task) in tasks.into_iter().enumerate() {
        let here = DragLocation::new(column, row);
        let style = match grab {
            Some(grab) if grab.source == here => {
                if grab.target.column == column {
                    continue;
                }
                palette.grabbed_style()
            }
            _ if app.ui_mode == UiMode::Normal && app.cursor.column == column && app.cursor.row == row => {
                selected = Some(items.len());
                palette.selected_style()
            }
            _ if app.is_just_added(&task.id) => palette.just_added_style(),
            _ => palette.card_style(),
        };
        items.push(ListItem::new(card_text(task, palette, "")).style(style));
    }

    if let Some(grab) = grab.filter(|grab| grab.target.column == column) {
        let source_tasks = app.column_tasks(grab.source.column);
        if let Some(task) = source_tasks.get(grab.source.index).copied() {
            let at = grab.target.index.min(items.len());
            items.insert(
                at,
                ListItem::new(card_text(task, palette, "▸ ")).style(palette.drop_marker_style()),
            );
            selected = Some(at);
        }
    }

    (items, selected)
}

/// Card body: title with priority chip, then the description if any
pub fn card_text<'a>(task: &'a Task, palette: &Palette, marker: &'a str) -> Text<'a> {
    let mut lines = vec![Line::from(vec![
        Span::raw(marker),
        Span::styled(task.title.as_str(), Style::default()),
        Span::raw("  "),
        Span::styled(format!(" {} ", task.priority.label()), priority_style(task.priority)),
    ])];

    if !task.description.is_empty() {
        lines.push(Line::styled(task.description.as_str(), palette.description_style()));
    }
    lines.push(Line::raw(""));

    Text::from(lines)
}
