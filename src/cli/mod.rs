//! CLI module for uiforge
//!
//! This module contains all CLI command definitions and handlers using clap.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod generate;

pub use commands::{Cli, Commands};
