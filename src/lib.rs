//! Contact form TUI
//!
//! The form domain layer lives in [`state`]: a synchronous validation engine
//! with no I/O that any front end can drive. The terminal front end is built
//! from [`app`] (key handling) and [`ui`] (rendering).

pub mod app;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod platform;
pub mod state;
pub mod ui;
