pub mod files;
pub mod state;
pub mod store;

pub use files::{get_data_dir, init_local_data_dir, log_file, report_file};
pub use state::{load_tasks, load_theme, save_tasks, save_theme};
pub use store::{FileStore, KeyValueStore};
