//! Utility helpers shared across state and view modules.

pub mod color;
pub mod format;
