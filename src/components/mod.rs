//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared `Dashboard` from Leptos context and forward user
//! intents to it; none of them hold state of their own beyond chart handles.

pub mod category_select;
pub mod chart_canvas;
pub mod monthly_panel;
pub mod observed_panel;
pub mod record_viewer;
pub mod tab_bar;
