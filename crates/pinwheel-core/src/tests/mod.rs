//! Test module for pinwheel-core
//!
//! Cross-module tests for:
//! - Shortcut list operations and their algebraic properties
//! - Stride-3 and tuple encodings against stored settings
//! - Batched editing sessions, pinning and drag reordering
//! - Settings files, dumps and the settings watcher
//! - Theme preset storage and layout tweak panels

mod editor_tests;
mod fixtures;
mod shortcut_property_tests;
