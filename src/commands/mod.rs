//! Command handlers for the indent-bars CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod config;
pub mod palette;
pub mod preview;
pub mod stipple;

use anyhow::Result;
use std::path::Path;

use indent_bars::Config;

/// Load the configuration from `path`, or from the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}
