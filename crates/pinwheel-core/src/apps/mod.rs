//! Installed application lookup and search.

mod index;
mod search;

pub use index::{AppIndex, application_dirs};
pub use search::{AppMatch, AppSearch};
