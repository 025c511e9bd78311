//! Imported targets - the consumable view of a located library.
//!
//! An imported target bundles what a dependent needs to use a prebuilt
//! library: its include directories, its per-configuration link-time
//! location, the runtime file to ship next to the application, and the
//! targets and system libraries it drags along.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Build configuration a library variant belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Configuration {
    Debug,
    Release,
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Configuration::Debug => write!(f, "debug"),
            Configuration::Release => write!(f, "release"),
        }
    }
}

/// A prebuilt library exposed as a build target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedTarget {
    /// Qualified name, e.g. `ACIS::ACIS` or `ACIS::HBRIDGE`
    pub name: String,
    /// Public include directories
    pub include_dirs: Vec<PathBuf>,
    /// Link-time library for release builds
    pub release: PathBuf,
    /// Link-time library for debug builds
    pub debug: PathBuf,
    /// Runtime library shipped with release builds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_release: Option<PathBuf>,
    /// Runtime library shipped with debug builds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_debug: Option<PathBuf>,
    /// Other imported targets this one depends on
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// System libraries linked along with this target
    #[serde(default)]
    pub system_libs: Vec<String>,
}

impl ImportedTarget {
    /// Qualified target name for a toolkit and library name.
    pub fn qualified_name(toolkit: &str, library: &str) -> String {
        format!("{}::{}", toolkit, library)
    }

    /// Link-time location for a configuration.
    pub fn location(&self, config: Configuration) -> &Path {
        match config {
            Configuration::Debug => &self.debug,
            Configuration::Release => &self.release,
        }
    }

    /// Runtime library for a configuration, if one ships.
    pub fn runtime(&self, config: Configuration) -> Option<&Path> {
        match config {
            Configuration::Debug => self.runtime_debug.as_deref(),
            Configuration::Release => self.runtime_release.as_deref(),
        }
    }

    /// Check whether this target depends on another by name.
    pub fn depends_on(&self, name: &str) -> bool {
        self.dependencies.iter().any(|d| d == name)
    }
}
