//! uiforge - UI template catalog and project generator
//!
//! A registry of themed UI templates, the design-token generation that
//! turns a palette into CSS variables and component classes, and a project
//! generator that packages a ready-to-run Next.js or React app as a zip.
//! Both a CLI and a TUI sit on top of the library.

pub mod archive;
pub mod catalog;
pub mod cli;
pub mod core;
pub mod error;
pub mod scaffold;
pub mod theme;
pub mod tui;

pub use error::{ForgeError, Result};
