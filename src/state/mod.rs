//! Client-side view state.
//!
//! DESIGN
//! ======
//! State is split by component (`selection`, `manifest`, `records`, `monthly`,
//! `observed`, `tabs`). Each module is plain data plus transition methods, so
//! every rule is testable without a browser; `controller` wires them to
//! signals and fetches.

pub mod manifest;
pub mod monthly;
pub mod observed;
pub mod records;
pub mod selection;
pub mod tabs;
