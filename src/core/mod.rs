//! Core functionality for uiforge
//!
//! Shared state that outlives a single command:
//! - Application configuration

pub mod config;

pub use config::Config;
