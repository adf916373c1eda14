//! Persistence for saved estimates and user settings

mod error;
mod export;
mod io;
mod paths;
mod store;
mod types;

pub use error::{HistoryError, Result};
pub use export::{default_file_name, to_csv, to_json, ExportFormat};
pub use io::{atomic_write, read_json_or_default, write_json};
pub use paths::{Paths, HOME_ENV};
pub use store::{search, HistoryStore, SettingsStore, MAX_HISTORY};
pub use types::{HistoryItem, HistoryUpdate, Settings, Theme};
