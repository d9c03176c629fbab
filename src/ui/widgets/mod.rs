//! Reusable dashboard widgets.

pub mod footer;
pub mod location_panel;
