//! Terminal form for interactive submissions, rendered with Ratatui.

pub mod app;
pub mod events;
pub mod handler;
pub mod ui;

pub use handler::run_form;
