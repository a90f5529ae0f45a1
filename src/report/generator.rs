use crate::domain::{bucket_tasks, created_date, tasks_for_column, Priority, Status, StatusFilter, Task};
use crate::persistence::{files::atomic_write, report_file};
use crate::report::stats::calculate_board_stats;
use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone};
use std::path::{Path, PathBuf};
use tracing::info;

/// Format percentage with 1 decimal place
fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

fn task_line(task: &Task) -> String {
    let checkbox = if task.is_done() { "x" } else { " " };
    let mut line = format!("- [{}] **{}** ({})\n", checkbox, task.title, task.priority.label());
    if !task.description.is_empty() {
        line.push_str(&format!("  - {}\n", task.description));
    }
    line
}

/// Build the Markdown summary of the board as seen at `now`
pub fn build_report<Tz: TimeZone>(tasks: &[Task], now: &DateTime<Tz>) -> String {
    let stats = calculate_board_stats(tasks);
    let buckets = bucket_tasks(tasks, now);
    let mut report = String::new();

    // Header
    report.push_str(&format!("# Task Board Report - {}\n\n", now.date_naive()));

    // Summary Section
    report.push_str("## Summary\n\n");
    report.push_str(&format!(
        "- **Total Tasks:** {} (To Do: {}, In Progress: {}, Done: {})\n",
        stats.total_tasks, stats.todo_count, stats.in_progress_count, stats.done_count
    ));
    report.push_str(&format!(
        "- **Completion Rate:** {}/{} tasks done ({})\n",
        stats.done_count,
        stats.total_tasks,
        format_percent(stats.completion_percent())
    ));
    let priorities: Vec<String> = Priority::ALL
        .iter()
        .map(|p| format!("{}: {}", p.label(), stats.priority_count(*p)))
        .collect();
    report.push_str(&format!("- **By Priority:** {}\n\n", priorities.join(", ")));

    // Columns in board order
    report.push_str("## Board\n\n");
    for column in Status::ALL {
        report.push_str(&format!("### {} ({})\n\n", column.label(), stats.status_count(column)));
        let column_tasks = tasks_for_column(tasks, column, StatusFilter::All);
        if column_tasks.is_empty() {
            report.push_str(&format!("_{}_\n\n", column.empty_text()));
            continue;
        }
        for task in column_tasks {
            report.push_str(&task_line(task));
        }
        report.push('\n');
    }

    // Timeline
    report.push_str(&format!("## Timeline ({} tasks)\n\n", buckets.total()));
    report.push_str(&format!("### Today's focus ({})\n\n", buckets.today_active.len()));
    for task in &buckets.today_active {
        report.push_str(&format!("- **{}** ({})\n", task.title, task.status.label()));
    }
    report.push('\n');

    report.push_str(&format!("### Completed today ({})\n\n", buckets.today_done.len()));
    for task in &buckets.today_done {
        report.push_str(&format!("- [x] {}\n", task.title));
    }
    report.push('\n');

    report.push_str(&format!("### Completed earlier ({})\n\n", buckets.earlier_done.len()));
    for task in &buckets.earlier_done {
        report.push_str(&format!("- [x] {} ({})\n", task.title, created_date(task, now)));
    }

    report
}

/// Write the report for `tasks` into `output_path`, or the dated default in `data_dir`
pub fn generate_report<Tz: TimeZone>(
    tasks: &[Task],
    now: &DateTime<Tz>,
    data_dir: &Path,
    output_path: Option<PathBuf>,
) -> Result<PathBuf> {
    let report = build_report(tasks, now);
    let output = output_path.unwrap_or_else(|| report_file(data_dir, now.date_naive()));

    atomic_write(&output, &report)
        .with_context(|| format!("Failed to write report to {}", output.display()))?;
    info!(path = %output.display(), tasks = tasks.len(), "report written");

    Ok(output)
}
