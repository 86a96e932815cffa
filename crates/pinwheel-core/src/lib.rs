//! Pinwheel core: ordered shortcut lists, their settings storage, layouts and
//! theme presets for the Pinwheel launcher menu.

pub mod apps;
pub mod config;
pub mod layouts;
pub mod presets;
pub mod shortcuts;

mod error;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};

pub use pinwheel_types::*;
