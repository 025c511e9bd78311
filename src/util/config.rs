//! Configuration file support.
//!
//! Two configuration file locations are read:
//! - Global: `~/.sdkfind/config.toml` - User-wide defaults
//! - Project: `.sdkfind/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config, and command-line
//! flags take precedence over both.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::descriptor::{ComponentDescriptor, ToolkitDescriptor};

/// sdkfind configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Search settings
    pub search: SearchConfig,

    /// Overrides applied to the built-in toolkit descriptor
    pub toolkit: ToolkitOverrides,
}

/// Where and what to search for.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Explicit installation root
    pub root: Option<PathBuf>,

    /// Extra install-location globs, searched after the built-in hints
    pub extra_hints: Vec<String>,

    /// Components to locate when none are given on the command line
    pub components: Vec<String>,

    /// Platform layout to assume (windows, linux, macos)
    pub platform: Option<String>,

    /// Treat a missing toolkit as an error
    pub required: Option<bool>,
}

/// Descriptor fields that may be overridden from config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolkitOverrides {
    /// Signature header file name
    pub header: Option<String>,

    /// Environment variable naming the install path
    pub root_env: Option<String>,

    /// Environment variable naming the architecture tag
    pub arch_env: Option<String>,

    /// Architecture tag used when the environment does not set one
    pub arch: Option<String>,

    /// Release library stem
    pub release: Option<String>,

    /// Debug library stem
    pub debug: Option<String>,

    /// Additional components, or replacements for built-in ones
    pub components: Vec<ComponentDescriptor>,
}

impl ToolkitOverrides {
    /// Apply these overrides to a descriptor.
    pub fn apply(&self, desc: &mut ToolkitDescriptor) {
        if let Some(header) = &self.header {
            desc.header = header.clone();
        }
        if let Some(root_env) = &self.root_env {
            desc.root_env = root_env.clone();
        }
        if let Some(arch_env) = &self.arch_env {
            desc.arch_env = arch_env.clone();
        }
        if let Some(release) = &self.release {
            desc.release = release.clone();
        }
        if let Some(debug) = &self.debug {
            desc.debug = debug.clone();
        }

        for comp in &self.components {
            let comp = ComponentDescriptor::new(&comp.name, &comp.release, &comp.debug);
            match desc.components.iter_mut().find(|c| c.name == comp.name) {
                Some(existing) => *existing = comp,
                None => desc.components.push(comp),
            }
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        // Search settings
        if other.search.root.is_some() {
            self.search.root = other.search.root;
        }
        // Hints accumulate: global ones first, then project ones
        self.search.extra_hints.extend(other.search.extra_hints);
        if !other.search.components.is_empty() {
            self.search.components = other.search.components;
        }
        if other.search.platform.is_some() {
            self.search.platform = other.search.platform;
        }
        if other.search.required.is_some() {
            self.search.required = other.search.required;
        }

        // Toolkit overrides
        let toolkit = other.toolkit;
        if toolkit.header.is_some() {
            self.toolkit.header = toolkit.header;
        }
        if toolkit.root_env.is_some() {
            self.toolkit.root_env = toolkit.root_env;
        }
        if toolkit.arch_env.is_some() {
            self.toolkit.arch_env = toolkit.arch_env;
        }
        if toolkit.arch.is_some() {
            self.toolkit.arch = toolkit.arch;
        }
        if toolkit.release.is_some() {
            self.toolkit.release = toolkit.release;
        }
        if toolkit.debug.is_some() {
            self.toolkit.debug = toolkit.debug;
        }
        self.toolkit.components.extend(toolkit.components);
    }

    /// The built-in descriptor with this config's overrides applied.
    pub fn descriptor(&self) -> ToolkitDescriptor {
        let mut desc = ToolkitDescriptor::default();
        self.toolkit.apply(&mut desc);
        desc
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.sdkfind/config.toml)
/// 2. Global config (~/.sdkfind/config.toml)
/// 3. Defaults
pub fn load_config(global_path: &Path, project_path: &Path) -> Config {
    let mut config = Config::default();

    if global_path.exists() {
        let global = Config::load_or_default(global_path);
        config.merge(global);
    }

    if project_path.exists() {
        let project = Config::load_or_default(project_path);
        config.merge(project);
    }

    config
}

/// Get the global config directory (~/.sdkfind).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".sdkfind"))
}

/// Get the global config path (~/.sdkfind/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.sdkfind/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".sdkfind").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.search.root.is_none());
        assert!(config.search.extra_hints.is_empty());
        assert!(config.search.required.is_none());
        assert_eq!(config.descriptor().header, "acis.hxx");
    }

    #[test]
    fn test_config_load() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");

        std::fs::write(
            &config_path,
            r#"
[search]
root = "/opt/spatial/acis2024"
extra_hints = ["/data/sdk/acis*"]
components = ["hbridge", "CGM"]
platform = "windows"

[toolkit]
arch = "NT_VC14_64_DLL"

[[toolkit.components]]
name = "booleans"
release = "SpaBool"
debug = "SpaBoold"
"#,
        )
        .unwrap();

        let config = Config::load(&config_path).unwrap();
        assert_eq!(
            config.search.root,
            Some(PathBuf::from("/opt/spatial/acis2024"))
        );
        assert_eq!(config.search.extra_hints, vec!["/data/sdk/acis*"]);
        assert_eq!(config.search.components, vec!["hbridge", "CGM"]);
        assert_eq!(config.search.platform, Some("windows".to_string()));
        assert_eq!(config.toolkit.arch, Some("NT_VC14_64_DLL".to_string()));

        let desc = config.descriptor();
        let comp = desc.component("BOOLEANS").unwrap();
        assert_eq!(comp.name, "BOOLEANS");
        assert_eq!(comp.release, "SpaBool");
    }

    #[test]
    fn test_invalid_config_falls_back_to_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        std::fs::write(&config_path, "[search\nroot = ").unwrap();

        assert!(Config::load(&config_path).is_err());
        let config = Config::load_or_default(&config_path);
        assert!(config.search.root.is_none());
    }

    #[test]
    fn test_config_merge() {
        let mut base = Config::default();
        base.search.root = Some(PathBuf::from("/global"));
        base.search.extra_hints = vec!["/global/acis*".to_string()];
        base.toolkit.arch = Some("linux_a64".to_string());

        let mut override_cfg = Config::default();
        override_cfg.search.root = Some(PathBuf::from("/project"));
        override_cfg.search.extra_hints = vec!["/project/acis*".to_string()];

        base.merge(override_cfg);

        assert_eq!(base.search.root, Some(PathBuf::from("/project")));
        assert_eq!(
            base.search.extra_hints,
            vec!["/global/acis*", "/project/acis*"]
        );
        // Not overridden
        assert_eq!(base.toolkit.arch, Some("linux_a64".to_string()));
    }

    #[test]
    fn test_project_can_turn_off_required() {
        let tmp = TempDir::new().unwrap();
        let global_path = tmp.path().join("global.toml");
        let project_path = tmp.path().join("project.toml");

        std::fs::write(&global_path, "[search]\nrequired = true\n").unwrap();
        std::fs::write(&project_path, "[search]\nrequired = false\n").unwrap();

        let config = load_config(&global_path, &project_path);
        assert_eq!(config.search.required, Some(false));

        // Unset in the project keeps the global value
        std::fs::write(&project_path, "[search]\n").unwrap();
        let config = load_config(&global_path, &project_path);
        assert_eq!(config.search.required, Some(true));
    }

    #[test]
    fn test_overrides_replace_builtin_component() {
        let overrides = ToolkitOverrides {
            header: Some("kernapi.hxx".to_string()),
            components: vec![ComponentDescriptor::new("cgm", "SpaCGM2", "SpaCGM2d")],
            ..Default::default()
        };

        let mut desc = ToolkitDescriptor::acis();
        let count = desc.components.len();
        overrides.apply(&mut desc);

        assert_eq!(desc.header, "kernapi.hxx");
        assert_eq!(desc.components.len(), count);
        assert_eq!(desc.component("CGM").unwrap().release, "SpaCGM2");
    }

    #[test]
    fn test_load_config_precedence() {
        let tmp = TempDir::new().unwrap();
        let global_path = tmp.path().join("global.toml");
        let project_path = tmp.path().join("project.toml");

        std::fs::write(
            &global_path,
            r#"
[search]
root = "/global/acis"
components = ["HBRIDGE"]
"#,
        )
        .unwrap();

        std::fs::write(
            &project_path,
            r#"
[search]
root = "/project/acis"
"#,
        )
        .unwrap();

        let config = load_config(&global_path, &project_path);

        assert_eq!(config.search.root, Some(PathBuf::from("/project/acis")));
        assert_eq!(config.search.components, vec!["HBRIDGE"]);
    }
}
