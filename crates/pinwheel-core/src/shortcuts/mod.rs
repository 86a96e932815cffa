//! Shortcut lists: the in-memory model, its persisted encodings, editing
//! sessions and resolution against installed applications.

pub mod codec;
mod editor;
mod list;
mod resolve;
mod store;

pub use editor::{
    DEFAULT_WEB_BROWSER_KEY, DragSession, PIN_LABEL, ShortcutEditor, UNPIN_LABEL,
    expand_web_browser_placeholder, pin_label, settle_web_browser_placeholder,
};
pub use list::{ShortcutList, Toggled};
pub use resolve::{
    Activation, AppDatabase, AppInfo, ResolvedShortcut, SOFTWARE_MANAGER_IDS,
    find_software_manager, resolve, should_show,
};
pub use store::{
    ListForm, ShortcutListKey, default_list, load_list, load_list_or_empty, save_list,
};
