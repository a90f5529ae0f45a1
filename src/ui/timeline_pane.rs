use crate::app::AppState;
use crate::domain::{bucket_tasks, created_date, Task};
use crate::ui::layout::timeline_sections;
use crate::ui::styles::Palette;
use chrono::{DateTime, Local};
use ratatui::{
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Render the timeline: today's focus, completed today, completed earlier
pub fn render_timeline(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    // Buckets follow the live clock on every frame
    let now = Local::now();
    let buckets = bucket_tasks(&app.tasks, &now);
    let [active_area, today_done_area, earlier_area] = timeline_sections(area);

    let active: Vec<ListItem> = buckets
        .today_active
        .iter()
        .map(|task| ListItem::new(active_row(task, palette)))
        .collect();
    render_section(f, palette, active_area, "Today's focus", "🌤 Nothing planned for today yet.", active);

    let done_today: Vec<ListItem> = buckets
        .today_done
        .iter()
        .map(|task| ListItem::new(Line::from(Span::raw(task.title.as_str()))))
        .collect();
    render_section(
        f,
        palette,
        today_done_area,
        "Completed today",
        "✅ Nothing done yet. You've got this!",
        done_today,
    );

    let earlier: Vec<ListItem> = buckets
        .earlier_done
        .iter()
        .map(|task| ListItem::new(earlier_row(task, &now, palette)))
        .collect();
    render_section(
        f,
        palette,
        earlier_area,
        "Completed earlier",
        "📅 No older completed tasks yet.",
        earlier,
    );
}

fn render_section(f: &mut Frame, palette: &Palette, area: Rect, title: &str, empty_text: &str, items: Vec<ListItem>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style())
        .title(Span::styled(format!(" {} ", title), palette.title_style()))
        .style(palette.panel_style());

    if items.is_empty() {
        let placeholder = Paragraph::new(Line::styled(empty_text, palette.subtle_style()))
            .block(block)
            .wrap(Wrap { trim: true });
        f.render_widget(placeholder, area);
    } else {
        f.render_widget(List::new(items).block(block), area);
    }
}

/// Title with status label, then the description if any
fn active_row<'a>(task: &'a Task, palette: &Palette) -> Text<'a> {
    let mut lines = vec![Line::from(vec![
        Span::raw(task.title.as_str()),
        Span::raw("  "),
        Span::styled(task.status.label(), palette.subtle_style()),
    ])];
    if !task.description.is_empty() {
        lines.push(Line::styled(task.description.as_str(), palette.description_style()));
    }
    Text::from(lines)
}

/// Title with the local creation date
fn earlier_row<'a>(task: &'a Task, now: &DateTime<Local>, palette: &Palette) -> Text<'a> {
    let date = created_date(task, now);
    Text::from(Line::from(vec![
        Span::raw(task.title.as_str()),
        Span::raw("  "),
        Span::styled(date.format("%Y-%m-%d").to_string(), palette.subtle_style()),
    ]))
}
