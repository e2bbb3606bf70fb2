//! Terminal user interface.
//!
//! Built with ratatui + crossterm. The event loop is synchronous: scans
//! complete within a single key press, so there is no background worker.

pub mod app;
pub mod styles;
pub mod ui;

pub use app::{App, Screen};
