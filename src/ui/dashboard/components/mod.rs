//! Dashboard UI components
//!
//! Individual rendering components for the dashboard

pub mod footer;
pub mod header;
pub mod logs;
pub mod shift_entry;
pub mod shift_history;
pub mod tabs;
