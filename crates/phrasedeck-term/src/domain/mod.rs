//! Core domain logic for the terminal interface.
//!
//! This module contains the models and services that drive the terminal UI,
//! independent of how the screen is drawn.

pub mod models;
pub mod services;
