//! Task collection reducer and drag-reorder algorithm.
//!
//! The board is a single ordered `Vec<Task>`. Columns are never stored; they
//! are derived by filtering on status, and a column's order is the order its
//! tasks appear in the full list.

use super::enums::{Priority, Status, StatusFilter};
use super::task::Task;
use chrono::{DateTime, Utc};
use tracing::debug;

/// A position within one column's view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragLocation {
    pub column: Status,
    pub index: usize,
}

impl DragLocation {
    pub fn new(column: Status, index: usize) -> Self {
        Self { column, index }
    }
}

/// Prepend a new `todo` task. Returns its id, or `None` when the trimmed
/// title is empty (the list is left untouched).
pub fn add_task(
    tasks: &mut Vec<Task>,
    title: &str,
    description: &str,
    priority: Priority,
    now: DateTime<Utc>,
) -> Option<String> {
    let title = title.trim();
    if title.is_empty() {
        return None;
    }

    let task = Task::new(title.to_string(), description.trim().to_string(), priority, now);
    let id = task.id.clone();
    tasks.insert(0, task);
    Some(id)
}

/// Set the status of the task with `id` in place. Its position in the list
/// does not change. Returns false if no such task exists.
pub fn change_status(tasks: &mut [Task], id: &str, status: Status) -> bool {
    match tasks.iter_mut().find(|task| task.id == id) {
        Some(task) => {
            task.status = status;
            true
        }
        None => false,
    }
}

/// Remove the task with `id`. Returns false if it was not present.
pub fn delete_task(tasks: &mut Vec<Task>, id: &str) -> bool {
    let before = tasks.len();
    tasks.retain(|task| task.id != id);
    tasks.len() != before
}

/// Tasks shown in `column` under `filter`, in list order
pub fn tasks_for_column(tasks: &[Task], column: Status, filter: StatusFilter) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|task| filter.admits(task.status) && task.status == column)
        .collect()
}

/// Move one element of `list` from `start` to `end`
pub fn reorder_within_column<T>(list: &mut Vec<T>, start: usize, end: usize) {
    if start >= list.len() {
        return;
    }
    let removed = list.remove(start);
    let end = end.min(list.len());
    list.insert(end, removed);
}

/// Apply a finished drag to the task list.
///
/// `destination == None` means the drop was cancelled. Same-column drops
/// rebuild the list as `[other columns] ++ [reordered column]`; cross-column
/// drops rebuild it as `[neither column] ++ [source] ++ [destination]`.
/// A source index outside the column is ignored, a destination index past
/// the end appends. Returns whether the list was rebuilt.
pub fn apply_drag(tasks: &mut Vec<Task>, source: DragLocation, destination: Option<DragLocation>) -> bool {
    let Some(destination) = destination else {
        return false;
    };
    if source == destination {
        return false;
    }

    let source_len = tasks.iter().filter(|t| t.status == source.column).count();
    if source.index >= source_len {
        debug!(?source, source_len, "drag source out of range, ignoring");
        return false;
    }

    let (mut source_tasks, rest): (Vec<Task>, Vec<Task>) = std::mem::take(tasks)
        .into_iter()
        .partition(|t| t.status == source.column);

    if source.column == destination.column {
        reorder_within_column(&mut source_tasks, source.index, destination.index);
        *tasks = rest;
        tasks.extend(source_tasks);
    } else {
        let (mut dest_tasks, others): (Vec<Task>, Vec<Task>) =
            rest.into_iter().partition(|t| t.status == destination.column);

        let mut moving = source_tasks.remove(source.index);
        moving.status = destination.column;
        let at = destination.index.min(dest_tasks.len());
        dest_tasks.insert(at, moving);

        *tasks = others;
        tasks.extend(source_tasks);
        tasks.extend(dest_tasks);
    }

    debug!(?source, ?destination, "applied drag");
    true
}
