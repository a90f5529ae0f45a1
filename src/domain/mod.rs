pub mod board;
pub mod enums;
pub mod task;
pub mod timeline;

pub use board::{add_task, apply_drag, change_status, delete_task, tasks_for_column, DragLocation};
pub use enums::{FormField, Priority, Status, StatusFilter, Theme, UiMode, View};
pub use task::Task;
pub use timeline::{bucket_tasks, created_date};
