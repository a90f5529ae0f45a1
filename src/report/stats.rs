use crate::domain::{Priority, Status, Task};

/// Counts across the whole board
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BoardStats {
    pub total_tasks: usize,
    pub todo_count: usize,
    pub in_progress_count: usize,
    pub done_count: usize,
    pub low_count: usize,
    pub medium_count: usize,
    pub high_count: usize,
}

impl BoardStats {
    pub fn status_count(&self, status: Status) -> usize {
        match status {
            Status::Todo => self.todo_count,
            Status::InProgress => self.in_progress_count,
            Status::Done => self.done_count,
        }
    }

    pub fn priority_count(&self, priority: Priority) -> usize {
        match priority {
            Priority::Low => self.low_count,
            Priority::Medium => self.medium_count,
            Priority::High => self.high_count,
        }
    }

    /// Share of tasks that are done, 0.0 for an empty board
    pub fn completion_percent(&self) -> f64 {
        if self.total_tasks == 0 {
            0.0
        } else {
            (self.done_count as f64 / self.total_tasks as f64) * 100.0
        }
    }
}

/// Calculate per-status and per-priority counts
pub fn calculate_board_stats(tasks: &[Task]) -> BoardStats {
    let mut stats = BoardStats {
        total_tasks: tasks.len(),
        ..BoardStats::default()
    };

    for task in tasks {
        match task.status {
            Status::Todo => stats.todo_count += 1,
            Status::InProgress => stats.in_progress_count += 1,
            Status::Done => stats.done_count += 1,
        }
        match task.priority {
            Priority::Low => stats.low_count += 1,
            Priority::Medium => stats.medium_count += 1,
            Priority::High => stats.high_count += 1,
        }
    }

    stats
}
