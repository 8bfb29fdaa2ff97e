//! Configuration management for the terminal interface.
//!
//! Values are seeded from defaults, overlaid from an optional TOML file, and
//! finally from command-line flags.

mod config;

pub use config::*;
