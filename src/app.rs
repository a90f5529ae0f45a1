use crate::domain::{
    add_task, apply_drag, change_status, delete_task, tasks_for_column, DragLocation, FormField, Priority,
    Status, StatusFilter, Task, Theme, UiMode, View,
};
use crate::persistence::{load_tasks, load_theme, save_tasks, save_theme, KeyValueStore};
use crate::ticker::just_added_duration;
use anyhow::Result;
use chrono::Utc;
use std::time::Instant;
use tracing::{debug, info};

/// Input form state for adding tasks
#[derive(Debug, Clone, Default)]
pub struct InputFormState {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub editing_field: FormField,
}

/// A card picked up with Space, following the cursor until dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrabState {
    pub source: DragLocation,
    pub target: DragLocation,
}

/// Board cursor: a column and a row within that column's view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardCursor {
    pub column: Status,
    pub row: usize,
}

impl Default for BoardCursor {
    fn default() -> Self {
        Self {
            column: Status::Todo,
            row: 0,
        }
    }
}

/// Main application state
pub struct AppState {
    pub tasks: Vec<Task>,
    pub filter: StatusFilter,
    pub theme: Theme,
    pub view: View,
    pub ui_mode: UiMode,
    pub input_form: Option<InputFormState>,
    pub cursor: BoardCursor,
    pub grab: Option<GrabState>,
    /// Cards still inside their entry highlight, with the instant it ends
    pub just_added: Vec<(String, Instant)>,
    pub tasks_need_save: bool,
    pub theme_needs_save: bool,
    /// Last persistence failure, shown in the hint bar until the next good save
    pub last_error: Option<String>,
    store: Box<dyn KeyValueStore>,
}

impl AppState {
    /// Build the state from whatever the store holds. Unreadable values fall
    /// back to an empty board and the light theme.
    pub fn load(mut store: Box<dyn KeyValueStore>) -> Self {
        let tasks = load_tasks(store.as_mut());
        let theme = load_theme(store.as_ref());
        info!(tasks = tasks.len(), theme = theme.key(), "board loaded");

        Self {
            tasks,
            filter: StatusFilter::All,
            theme,
            view: View::Board,
            ui_mode: UiMode::Normal,
            input_form: None,
            cursor: BoardCursor::default(),
            grab: None,
            just_added: Vec::new(),
            tasks_need_save: false,
            theme_needs_save: false,
            last_error: None,
            store,
        }
    }

    /// Write whatever changed since the last save
    pub fn save(&mut self) -> Result<()> {
        if self.tasks_need_save {
            save_tasks(self.store.as_mut(), &self.tasks)?;
            self.tasks_need_save = false;
        }
        if self.theme_needs_save {
            save_theme(self.store.as_mut(), self.theme)?;
            self.theme_needs_save = false;
        }
        self.last_error = None;
        Ok(())
    }

    pub fn needs_save(&self) -> bool {
        self.tasks_need_save || self.theme_needs_save
    }

    /// Tasks visible in `column` under the current filter
    pub fn column_tasks(&self, column: Status) -> Vec<&Task> {
        tasks_for_column(&self.tasks, column, self.filter)
    }

    pub fn column_len(&self, column: Status) -> usize {
        self.column_tasks(column).len()
    }

    /// Task under the board cursor
    pub fn selected_task(&self) -> Option<&Task> {
        self.column_tasks(self.cursor.column).get(self.cursor.row).copied()
    }

    fn selected_location(&self) -> Option<DragLocation> {
        self.selected_task()
            .map(|_| DragLocation::new(self.cursor.column, self.cursor.row))
    }

    /// Keep the cursor row inside its column
    pub fn clamp_cursor(&mut self) {
        let len = self.column_len(self.cursor.column);
        if self.cursor.row >= len {
            self.cursor.row = len.saturating_sub(1);
        }
    }

    // ---- navigation ----

    pub fn move_selection_up(&mut self) {
        self.cursor.row = self.cursor.row.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        if self.cursor.row + 1 < self.column_len(self.cursor.column) {
            self.cursor.row += 1;
        }
    }

    pub fn move_selection_left(&mut self) {
        if let Some(column) = neighbour_column(self.cursor.column, -1) {
            self.cursor.column = column;
            self.clamp_cursor();
        }
    }

    pub fn move_selection_right(&mut self) {
        if let Some(column) = neighbour_column(self.cursor.column, 1) {
            self.cursor.column = column;
            self.clamp_cursor();
        }
    }

    // ---- task mutations ----

    /// Apply a drag and keep the cursor on the moved card
    pub fn drag(&mut self, source: DragLocation, destination: Option<DragLocation>) -> bool {
        let moved = apply_drag(&mut self.tasks, source, destination);
        if moved {
            if let Some(destination) = destination {
                self.cursor = BoardCursor {
                    column: destination.column,
                    row: destination.index,
                };
            }
            self.clamp_cursor();
            self.tasks_need_save = true;
        }
        moved
    }

    /// Set the status of the selected task without moving it in the list
    pub fn change_selected_status(&mut self, status: Status) {
        let Some(id) = self.selected_task().map(|task| task.id.clone()) else {
            return;
        };
        if change_status(&mut self.tasks, &id, status) {
            info!(%id, %status, "status changed");
            self.clamp_cursor();
            self.tasks_need_save = true;
        }
    }

    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_task().map(|task| task.id.clone()) else {
            return;
        };
        if delete_task(&mut self.tasks, &id) {
            info!(%id, "task deleted");
            self.just_added.retain(|(added, _)| *added != id);
            self.clamp_cursor();
            self.tasks_need_save = true;
        }
    }

    /// Shift+arrow: move the selected card one step without entering grab mode
    pub fn nudge_selected(&mut self, rows: isize, columns: isize) {
        let Some(source) = self.selected_location() else {
            return;
        };
        let Some(destination) = self.step_location(source, source, rows, columns) else {
            return;
        };
        self.drag(source, Some(destination));
    }

    // ---- grab and drop ----

    /// Pick up the selected card
    pub fn begin_grab(&mut self) {
        if let Some(source) = self.selected_location() {
            debug!(?source, "grabbed card");
            self.grab = Some(GrabState { source, target: source });
            self.ui_mode = UiMode::Grabbing;
        }
    }

    /// Move the drop target of the grabbed card
    pub fn move_grab(&mut self, rows: isize, columns: isize) {
        let Some(grab) = self.grab else {
            return;
        };
        if let Some(target) = self.step_location(grab.source, grab.target, rows, columns) {
            self.grab = Some(GrabState { target, ..grab });
        }
    }

    /// Drop the grabbed card on its target
    pub fn drop_grab(&mut self) {
        if let Some(grab) = self.grab.take() {
            self.drag(grab.source, Some(grab.target));
        }
        self.ui_mode = UiMode::Normal;
    }

    /// Put the grabbed card back where it was
    pub fn cancel_grab(&mut self) {
        if let Some(grab) = self.grab.take() {
            self.drag(grab.source, None);
        }
        self.ui_mode = UiMode::Normal;
    }

    /// One step from `from` for the card picked up at `source`. A card can be
    /// dropped on any row of its own column and on any row, including one past
    /// the end, of another column.
    fn step_location(
        &self,
        source: DragLocation,
        from: DragLocation,
        rows: isize,
        columns: isize,
    ) -> Option<DragLocation> {
        let column = if columns == 0 {
            from.column
        } else {
            neighbour_column(from.column, columns)?
        };

        let len = self.column_len(column);
        let max_index = if column == source.column {
            len.saturating_sub(1)
        } else {
            len
        };

        let index = from.index.saturating_add_signed(rows).min(max_index);
        Some(DragLocation::new(column, index))
    }

    // ---- form ----

    /// Open the add-task form
    pub fn start_add_task(&mut self) {
        if self.input_form.is_none() {
            self.input_form = Some(InputFormState::default());
        }
        self.ui_mode = UiMode::AddingTask;
    }

    /// Move focus to the next form field (title -> description -> priority)
    pub fn input_form_toggle_field(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.editing_field = form.editing_field.next();
        }
    }

    /// Add character to the focused text field
    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.input_form {
            match form.editing_field {
                FormField::Title => form.title.push(c),
                FormField::Description => form.description.push(c),
                FormField::Priority => {}
            }
        }
    }

    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            match form.editing_field {
                FormField::Title => {
                    form.title.pop();
                }
                FormField::Description => {
                    form.description.pop();
                }
                FormField::Priority => {}
            }
        }
    }

    pub fn input_form_cycle_priority(&mut self, forward: bool) {
        if let Some(form) = &mut self.input_form {
            form.priority = if forward {
                form.priority.next()
            } else {
                form.priority.prev()
            };
        }
    }

    /// Submit the form. A blank title leaves the form open and untouched.
    pub fn submit_input_form(&mut self) {
        let Some(form) = &self.input_form else {
            return;
        };

        let added = add_task(
            &mut self.tasks,
            &form.title,
            &form.description,
            form.priority,
            Utc::now(),
        );

        if let Some(id) = added {
            info!(%id, "task added");
            self.just_added.push((id, Instant::now() + just_added_duration()));
            self.input_form = None;
            self.ui_mode = UiMode::Normal;
            self.cursor = BoardCursor::default();
            self.tasks_need_save = true;
        }
    }

    /// Close the form, keeping nothing
    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }

    // ---- view state ----

    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.cycle();
        self.clamp_cursor();
    }

    pub fn toggle_view(&mut self) {
        self.view = self.view.toggled();
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.theme_needs_save = true;
    }

    // ---- ticking ----

    /// Called on every tick
    pub fn tick(&mut self) {
        self.expire_just_added(Instant::now());
    }

    /// Drop entry highlights whose window has passed
    pub fn expire_just_added(&mut self, now: Instant) {
        self.just_added.retain(|(_, until)| *until > now);
    }

    pub fn is_just_added(&self, id: &str) -> bool {
        self.just_added.iter().any(|(added, _)| added == id)
    }
}

/// Column `step` positions away from `column`, if any
fn neighbour_column(column: Status, step: isize) -> Option<Status> {
    let index = column.column_index().checked_add_signed(step)?;
    Status::from_column_index(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::state::{TASKS_KEY, THEME_KEY};
    use crate::persistence::store::MemoryStore;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn empty_app() -> AppState {
        AppState::load(Box::new(MemoryStore::default()))
    }

    fn add(app: &mut AppState, title: &str) -> String {
        app.start_add_task();
        for c in title.chars() {
            app.input_form_add_char(c);
        }
        app.submit_input_form();
        app.tasks[0].id.clone()
    }

    fn titles(app: &AppState, column: Status) -> Vec<String> {
        app.column_tasks(column).iter().map(|t| t.title.clone()).collect()
    }

    #[test]
    fn test_submit_form_adds_task() {
        let mut app = empty_app();
        app.start_add_task();
        for c in "Write spec".chars() {
            app.input_form_add_char(c);
        }
        app.input_form_toggle_field();
        app.input_form_toggle_field();
        app.input_form_cycle_priority(true);
        app.submit_input_form();

        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks[0].title, "Write spec");
        assert_eq!(app.tasks[0].priority, Priority::High);
        assert_eq!(app.tasks[0].status, Status::Todo);
        assert!(app.input_form.is_none());
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.tasks_need_save);
    }

    #[test]
    fn test_blank_title_keeps_form() {
        let mut app = empty_app();
        app.start_add_task();
        app.input_form_add_char(' ');
        app.input_form_toggle_field();
        for c in "some notes".chars() {
            app.input_form_add_char(c);
        }
        app.submit_input_form();

        assert!(app.tasks.is_empty());
        assert_eq!(app.ui_mode, UiMode::AddingTask);
        let form = app.input_form.as_ref().unwrap();
        assert_eq!(form.title, " ");
        assert_eq!(form.description, "some notes");
        assert!(!app.tasks_need_save);
    }

    #[test]
    fn test_added_task_moves_to_in_progress_on_board() {
        let mut app = empty_app();
        add(&mut app, "Write spec");
        app.change_selected_status(Status::InProgress);

        assert_eq!(titles(&app, Status::InProgress), vec!["Write spec"]);
        assert!(titles(&app, Status::Todo).is_empty());
    }

    #[test]
    fn test_grab_and_drop_reorders() {
        let mut app = empty_app();
        add(&mut app, "A");
        add(&mut app, "B");
        // New tasks go first, so the column reads [B, A]
        assert_eq!(titles(&app, Status::Todo), vec!["B", "A"]);

        app.cursor.row = 1;
        app.begin_grab();
        assert_eq!(app.ui_mode, UiMode::Grabbing);
        app.move_grab(-1, 0);
        app.drop_grab();

        assert_eq!(titles(&app, Status::Todo), vec!["A", "B"]);
        assert_eq!(app.cursor, BoardCursor { column: Status::Todo, row: 0 });
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_grab_across_columns() {
        let mut app = empty_app();
        add(&mut app, "A");
        add(&mut app, "B");

        app.begin_grab();
        app.move_grab(0, 2);
        app.move_grab(5, 0);
        app.drop_grab();

        assert_eq!(titles(&app, Status::Todo), vec!["A"]);
        assert_eq!(titles(&app, Status::Done), vec!["B"]);
        assert_eq!(app.tasks.len(), 2);
        assert_eq!(app.cursor.column, Status::Done);
    }

    #[test]
    fn test_cancel_grab_leaves_tasks() {
        let mut app = empty_app();
        add(&mut app, "A");
        add(&mut app, "B");
        app.tasks_need_save = false;
        let before = app.tasks.clone();

        app.begin_grab();
        app.move_grab(1, 1);
        app.cancel_grab();

        assert_eq!(app.tasks, before);
        assert!(!app.tasks_need_save);
        assert!(app.grab.is_none());
    }

    #[test]
    fn test_nudge_moves_to_neighbour_column() {
        let mut app = empty_app();
        add(&mut app, "A");
        app.nudge_selected(0, 1);
        assert_eq!(titles(&app, Status::InProgress), vec!["A"]);

        // No column left of To Do
        app.cursor = BoardCursor::default();
        add(&mut app, "B");
        app.nudge_selected(0, -1);
        assert_eq!(titles(&app, Status::Todo), vec!["B"]);
    }

    #[test]
    fn test_delete_selected_drops_highlight() {
        let mut app = empty_app();
        let id = add(&mut app, "Short lived");
        assert!(app.is_just_added(&id));

        app.delete_selected();
        assert!(app.tasks.is_empty());
        assert!(!app.is_just_added(&id));

        // Expiring after the task is gone touches nothing
        app.expire_just_added(Instant::now() + Duration::from_secs(1));
        assert!(app.tasks.is_empty());
    }

    #[test]
    fn test_just_added_expires() {
        let mut app = empty_app();
        let id = add(&mut app, "Fresh");
        app.expire_just_added(Instant::now());
        assert!(app.is_just_added(&id));

        app.expire_just_added(Instant::now() + just_added_duration() + Duration::from_millis(1));
        assert!(!app.is_just_added(&id));
    }

    #[test]
    fn test_filter_hides_columns() {
        let mut app = empty_app();
        add(&mut app, "A");
        app.cycle_filter(); // To Do
        assert_eq!(app.column_len(Status::Todo), 1);
        app.cycle_filter(); // In Progress
        assert_eq!(app.column_len(Status::Todo), 0);
        assert!(app.selected_task().is_none());
    }

    #[test]
    fn test_save_writes_both_keys() {
        let mut app = empty_app();
        add(&mut app, "Persist me");
        app.toggle_theme();
        app.save().unwrap();
        assert!(!app.needs_save());

        let reloaded_tasks = crate::persistence::state::decode_tasks(
            &app.store.load(TASKS_KEY).unwrap().unwrap(),
        )
        .unwrap();
        assert_eq!(reloaded_tasks, app.tasks);
        assert_eq!(app.store.load(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_nudge_into_hidden_column_lands_on_top() {
        let mut app = empty_app();
        add(&mut app, "Hidden");
        app.change_selected_status(Status::InProgress);
        add(&mut app, "Visible");

        app.filter = StatusFilter::Only(Status::Todo);
        app.nudge_selected(0, 1);

        let in_progress: Vec<&str> = tasks_for_column(&app.tasks, Status::InProgress, StatusFilter::All)
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(in_progress, vec!["Visible", "Hidden"]);
        assert!(titles(&app, Status::Todo).is_empty());
        assert_eq!(app.cursor, BoardCursor { column: Status::InProgress, row: 0 });
        assert!(app.tasks_need_save);
    }

    #[test]
    fn test_neighbour_column() {
        assert_eq!(neighbour_column(Status::Todo, 1), Some(Status::InProgress));
        assert_eq!(neighbour_column(Status::Todo, -1), None);
        assert_eq!(neighbour_column(Status::Done, 1), None);
        assert_eq!(neighbour_column(Status::Done, -2), Some(Status::Todo));
    }
}
