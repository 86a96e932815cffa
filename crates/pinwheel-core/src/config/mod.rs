//! Settings storage: the schema, the JSON file store, dumps and watching.

mod dirs;
pub mod dump;
pub mod schema;
mod store;
mod validation;
mod watcher;

pub use dirs::Directories;
pub use schema::{SettingKind, SettingSpec};
pub(crate) use store::check_value;
pub use store::{SettingsFile, SettingsPort};
pub use validation::warn_unknown_keys;
pub use watcher::{ChangeCallback, SettingsWatcher, watch_settings};
