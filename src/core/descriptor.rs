//! Toolkit descriptors.
//!
//! A descriptor holds every toolkit-specific name the locator needs:
//! the signature header, environment variable names, conventional
//! install locations, the directory layout under the installation root
//! and the library stems of the toolkit and its add-on components.
//!
//! Directory templates may contain `{arch}`, which is replaced by the
//! resolved architecture tag.

use serde::{Deserialize, Serialize};

use crate::core::platform::Platform;

/// Placeholder substituted with the architecture tag in templates.
pub const ARCH_PLACEHOLDER: &str = "{arch}";

/// An optional add-on library shipped with the toolkit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    /// Upper-case component name (e.g., `HBRIDGE`)
    pub name: String,
    /// Library stem of the release build
    pub release: String,
    /// Library stem of the debug build
    pub debug: String,
}

impl ComponentDescriptor {
    pub fn new(name: &str, release: &str, debug: &str) -> Self {
        ComponentDescriptor {
            name: name.to_ascii_uppercase(),
            release: release.to_string(),
            debug: debug.to_string(),
        }
    }
}

/// Conventional install locations, per platform family.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HintPaths {
    #[serde(default)]
    pub windows: Vec<String>,
    #[serde(default)]
    pub linux: Vec<String>,
    #[serde(default)]
    pub macos: Vec<String>,
}

impl HintPaths {
    /// Hint globs for a platform, in declared order.
    pub fn for_platform(&self, platform: Platform) -> &[String] {
        match platform {
            Platform::Windows => &self.windows,
            Platform::Linux => &self.linux,
            Platform::MacOs => &self.macos,
        }
    }
}

/// Everything needed to locate one toolkit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolkitDescriptor {
    /// Name used for output variables and target names (e.g., `ACIS`)
    pub name: String,
    /// Header whose presence identifies an installation
    pub header: String,
    /// Subdirectories of a search group searched for the header, in order.
    /// An empty string searches the group directory itself.
    pub header_suffixes: Vec<String>,
    /// Environment variable naming an install path
    pub root_env: String,
    /// Environment variable holding an explicit architecture tag
    pub arch_env: String,
    /// Conventional install locations (globs)
    pub hints: HintPaths,
    /// Glob (relative to the root) matching architecture directories
    /// on platforms that scan for them
    pub arch_dir_glob: String,
    /// Directory templates searched for release libraries
    pub release_dirs: Vec<String>,
    /// Directory templates searched for debug libraries
    pub debug_dirs: Vec<String>,
    /// Directory template holding release redistributables
    pub release_bin_dir: String,
    /// Directory template holding debug redistributables
    pub debug_bin_dir: String,
    /// Library stem of the release build
    pub release: String,
    /// Library stem of the debug build
    pub debug: String,
    /// Known add-on components
    pub components: Vec<ComponentDescriptor>,
}

impl ToolkitDescriptor {
    /// Built-in descriptor for an ACIS-layout installation.
    pub fn acis() -> Self {
        ToolkitDescriptor {
            name: "ACIS".to_string(),
            header: "acis.hxx".to_string(),
            header_suffixes: vec!["include".to_string(), String::new()],
            root_env: "A3DT".to_string(),
            arch_env: "ARCH".to_string(),
            hints: HintPaths {
                windows: vec![
                    "C:/Program Files/Spatial/ACIS*".to_string(),
                    "C:/Spatial/ACIS*".to_string(),
                ],
                linux: vec![
                    "/opt/spatial/acis*".to_string(),
                    "/usr/local/spatial/acis*".to_string(),
                ],
                macos: vec![
                    "/Applications/Spatial/ACIS*".to_string(),
                    "/opt/spatial/acis*".to_string(),
                ],
            },
            arch_dir_glob: "NT*DLL".to_string(),
            release_dirs: vec!["{arch}/code/lib".to_string(), "{arch}/code/bin".to_string()],
            debug_dirs: vec![
                "{arch}D/code/lib".to_string(),
                "{arch}D/code/bin".to_string(),
            ],
            release_bin_dir: "{arch}/code/bin".to_string(),
            debug_bin_dir: "{arch}D/code/bin".to_string(),
            release: "SpaACIS".to_string(),
            debug: "SpaACISd".to_string(),
            components: vec![
                ComponentDescriptor::new("HBRIDGE", "SpaHBridge", "SpaHBridged"),
                ComponentDescriptor::new("DEFEATURE", "SpaDefeature", "SpaDefeatured"),
                ComponentDescriptor::new("POLYHEDRA", "SpaPoly", "SpaPolyd"),
                ComponentDescriptor::new("CGM", "SpaCGM", "SpaCGMd"),
            ],
        }
    }

    /// Look up a component by name (case-insensitive).
    pub fn component(&self, name: &str) -> Option<&ComponentDescriptor> {
        self.components
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// The primary toolkit libraries expressed as a component entry, so
    /// the same search routine serves both.
    pub fn primary(&self) -> ComponentDescriptor {
        ComponentDescriptor::new(&self.name, &self.release, &self.debug)
    }
}

impl Default for ToolkitDescriptor {
    fn default() -> Self {
        ToolkitDescriptor::acis()
    }
}

/// Substitute the architecture tag into a directory template.
pub fn expand_template(template: &str, arch: &str) -> String {
    template.replace(ARCH_PLACEHOLDER, arch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_lookup_is_case_insensitive() {
        let desc = ToolkitDescriptor::acis();
        let comp = desc.component("hbridge").unwrap();
        assert_eq!(comp.release, "SpaHBridge");
        assert!(desc.component("nope").is_none());
    }

    #[test]
    fn test_expand_template() {
        assert_eq!(
            expand_template("{arch}D/code/lib", "NT_VC14_64_DLL"),
            "NT_VC14_64_DLLD/code/lib"
        );
        assert_eq!(expand_template("plain", "x"), "plain");
    }

    #[test]
    fn test_primary_uses_toolkit_name() {
        let primary = ToolkitDescriptor::acis().primary();
        assert_eq!(primary.name, "ACIS");
        assert_eq!(primary.release, "SpaACIS");
        assert_eq!(primary.debug, "SpaACISd");
    }

    #[test]
    fn test_hints_per_platform() {
        let desc = ToolkitDescriptor::acis();
        assert!(desc.hints.for_platform(Platform::Windows)[0].starts_with("C:/"));
        assert!(desc.hints.for_platform(Platform::Linux)[0].starts_with("/opt"));
    }
}
