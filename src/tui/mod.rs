//! Terminal User Interface module
//!
//! ratatui front end with a catalog browser and a per-template design
//! system editor.

pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;
