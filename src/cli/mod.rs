//! CLI module for the Pomodoro focus timer.
//!
//! This module contains:
//! - `commands`: clap command definitions
//! - `display`: snapshot rendering and message output

pub mod commands;
pub mod display;

pub use commands::{Cli, Commands};
pub use display::Display;
