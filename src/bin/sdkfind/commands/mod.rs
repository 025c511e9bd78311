//! Command implementations

pub mod completions;
pub mod components;
pub mod flags;
pub mod locate;

use std::path::Path;

use anyhow::{Context, Result};

use sdkfind::util::config::{global_config_path, load_config as load_merged, project_config_path};
use sdkfind::util::Config;

/// Load the config named on the command line, or the merged
/// global/project config.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return Config::load(path);
    }

    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let project = project_config_path(&cwd);
    let config = match global_config_path() {
        Some(global) => load_merged(&global, &project),
        None => Config::load_or_default(&project),
    };
    Ok(config)
}
