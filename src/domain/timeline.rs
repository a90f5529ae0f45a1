use super::task::Task;
use chrono::{DateTime, NaiveDate, TimeZone};

/// Timeline sections derived from the task list
///
/// Tasks created before today that are not done belong to no section.
#[derive(Debug, Default)]
pub struct TimelineBuckets<'a> {
    /// Created today, not done
    pub today_active: Vec<&'a Task>,
    /// Created today, done
    pub today_done: Vec<&'a Task>,
    /// Created before today, done
    pub earlier_done: Vec<&'a Task>,
}

impl TimelineBuckets<'_> {
    pub fn total(&self) -> usize {
        self.today_active.len() + self.today_done.len() + self.earlier_done.len()
    }
}

/// Calendar date of a task's creation, seen from the time zone of `now`
pub fn created_date<Tz: TimeZone>(task: &Task, now: &DateTime<Tz>) -> NaiveDate {
    task.created_at.with_timezone(&now.timezone()).date_naive()
}

/// Partition tasks into timeline sections, comparing calendar dates in the
/// time zone of `now`. List order is kept within each section.
pub fn bucket_tasks<'a, Tz: TimeZone>(tasks: &'a [Task], now: &DateTime<Tz>) -> TimelineBuckets<'a> {
    let today = now.date_naive();
    let mut buckets = TimelineBuckets::default();

    for task in tasks {
        let is_today = created_date(task, now) == today;
        match (is_today, task.is_done()) {
            (true, false) => buckets.today_active.push(task),
            (true, true) => buckets.today_done.push(task),
            (false, true) => buckets.earlier_done.push(task),
            (false, false) => {}
        }
    }

    buckets
}
