//! Application layer orchestrating the terminal interface.
//!
//! This module handles command-line parsing and the main UI loop, wiring user
//! interactions to the state store.

pub mod cli;
pub mod ui;
