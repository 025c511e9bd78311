//! The result of locating a toolkit.
//!
//! A [`Resolution`] is returned by value from the locator. It is either
//! found (header directory and release library present) or not found,
//! in which case `missing` names the variables that could not be
//! resolved.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::platform::Platform;
use crate::core::target::{Configuration, ImportedTarget};
use crate::util::diagnostic::Diagnostic;
use crate::util::hash::Fingerprint;

/// Where a search group came from, highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchOrigin {
    /// The caller's explicit root override
    ExplicitRoot,
    /// The toolkit's root environment variable
    Environment,
    /// A conventional install location
    Hint,
}

impl SearchOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchOrigin::ExplicitRoot => "explicit-root",
            SearchOrigin::Environment => "environment",
            SearchOrigin::Hint => "hint",
        }
    }
}

impl fmt::Display for SearchOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOrigin::ExplicitRoot => write!(f, "explicit root"),
            SearchOrigin::Environment => write!(f, "environment"),
            SearchOrigin::Hint => write!(f, "install hint"),
        }
    }
}

/// How the architecture tag was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchSource {
    /// Explicit environment override
    Override,
    /// Scanned from the installation root
    Detected,
    /// Fixed per-platform value
    Fixed,
}

/// Architecture tag selecting the prebuilt library subdirectory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchTag {
    pub value: String,
    pub source: ArchSource,
}

impl ArchTag {
    pub fn new(value: impl Into<String>, source: ArchSource) -> Self {
        ArchTag {
            value: value.into(),
            source,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ArchTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Release and debug link-time libraries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryArtifacts {
    pub release: Option<PathBuf>,
    pub debug: Option<PathBuf>,
}

impl LibraryArtifacts {
    /// Library for a configuration. A missing debug variant falls back
    /// to the release library.
    pub fn for_config(&self, config: Configuration) -> Option<&PathBuf> {
        match config {
            Configuration::Release => self.release.as_ref(),
            Configuration::Debug => self.debug.as_ref().or(self.release.as_ref()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.release.is_none() && self.debug.is_none()
    }
}

/// Redistributable dynamic libraries, split by configuration.
///
/// Both lists stay empty on platforms that do not ship separate debug
/// and release binaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redistributables {
    pub release: Vec<PathBuf>,
    pub debug: Vec<PathBuf>,
}

impl Redistributables {
    pub fn is_empty(&self) -> bool {
        self.release.is_empty() && self.debug.is_empty()
    }

    pub fn extend(&mut self, other: &Redistributables) {
        self.release.extend(other.release.iter().cloned());
        self.debug.extend(other.debug.iter().cloned());
    }
}

/// Resolution of one optional component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentResolution {
    /// Upper-case component name
    pub name: String,
    pub found: bool,
    /// Whether the descriptor knows this component at all
    pub known: bool,
    pub libraries: LibraryArtifacts,
    pub redistributables: Redistributables,
}

impl ComponentResolution {
    /// A component that could not be resolved.
    pub fn not_found(name: &str, known: bool) -> Self {
        ComponentResolution {
            name: name.to_string(),
            found: false,
            known,
            libraries: LibraryArtifacts::default(),
            redistributables: Redistributables::default(),
        }
    }
}

/// Runtime threading dependency pulled in on success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadsDependency {
    /// System libraries to link (may be empty when the runtime provides threads)
    pub libs: Vec<String>,
}

/// One entry of the aggregate link list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LinkItem {
    /// A located library file, per configuration
    Library { release: PathBuf, debug: PathBuf },
    /// A system library linked by name
    System { name: String },
}

/// Complete result of locating a toolkit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Toolkit name (e.g., `ACIS`)
    pub toolkit: String,
    pub platform: Platform,
    pub found: bool,
    /// Search group the header was found in
    pub origin: Option<SearchOrigin>,
    pub include_dir: Option<PathBuf>,
    /// Installation root (parent of `include_dir`)
    pub root: Option<PathBuf>,
    pub arch: Option<ArchTag>,
    pub libraries: LibraryArtifacts,
    /// Toolkit redistributables only; see [`Resolution::all_redistributables`]
    pub redistributables: Redistributables,
    pub components: BTreeMap<String, ComponentResolution>,
    pub threads: Option<ThreadsDependency>,
    /// Toolkit libraries, then threading, then found component libraries
    pub link_libraries: Vec<LinkItem>,
    pub targets: Vec<ImportedTarget>,
    /// Names of required variables that could not be resolved
    pub missing: Vec<String>,
}

impl Resolution {
    /// An empty, not-yet-found resolution.
    pub fn new(toolkit: &str, platform: Platform) -> Self {
        Resolution {
            toolkit: toolkit.to_string(),
            platform,
            found: false,
            origin: None,
            include_dir: None,
            root: None,
            arch: None,
            libraries: LibraryArtifacts::default(),
            redistributables: Redistributables::default(),
            components: BTreeMap::new(),
            threads: None,
            link_libraries: Vec::new(),
            targets: Vec::new(),
            missing: Vec::new(),
        }
    }

    /// Look up a component resolution (case-insensitive).
    pub fn component(&self, name: &str) -> Option<&ComponentResolution> {
        self.components.get(&name.to_ascii_uppercase())
    }

    /// Whether a component was requested and found.
    pub fn component_found(&self, name: &str) -> bool {
        self.component(name).is_some_and(|c| c.found)
    }

    /// Imported target by qualified name.
    pub fn target(&self, name: &str) -> Option<&ImportedTarget> {
        self.targets.iter().find(|t| t.name == name)
    }

    /// Redistributables of the toolkit and every found component.
    pub fn all_redistributables(&self) -> Redistributables {
        let mut all = self.redistributables.clone();
        for comp in self.components.values().filter(|c| c.found) {
            all.extend(&comp.redistributables);
        }
        all
    }

    /// Short fingerprint of everything that was resolved.
    ///
    /// Identical inputs on an unchanged filesystem give identical
    /// fingerprints, so callers can cache on it.
    pub fn fingerprint(&self) -> String {
        let mut fp = Fingerprint::new();

        fp.update_str(&self.toolkit)
            .update_str(self.platform.as_str())
            .update_bool(self.found)
            .update_opt(self.origin.map(|o| o.as_str()))
            .update_opt(self.root.as_ref().and_then(|p| p.to_str()))
            .update_opt(self.include_dir.as_ref().and_then(|p| p.to_str()))
            .update_opt(self.arch.as_ref().map(|a| a.as_str()))
            .update_opt(self.libraries.release.as_ref().and_then(|p| p.to_str()))
            .update_opt(self.libraries.debug.as_ref().and_then(|p| p.to_str()));

        // BTreeMap iteration is sorted, so this is deterministic
        for comp in self.components.values() {
            fp.update_str(&comp.name)
                .update_bool(comp.found)
                .update_opt(comp.libraries.release.as_ref().and_then(|p| p.to_str()))
                .update_opt(comp.libraries.debug.as_ref().and_then(|p| p.to_str()));
        }

        let redist = self.all_redistributables();
        for path in &redist.release {
            fp.update_str("release").update_str(&path.to_string_lossy());
        }
        for path in &redist.debug {
            fp.update_str("debug").update_str(&path.to_string_lossy());
        }

        if let Some(threads) = &self.threads {
            for lib in &threads.libs {
                fp.update_str(lib);
            }
        }

        fp.finish_short()
    }

    /// Output variables in `NAME=value` form.
    ///
    /// Unresolved paths are emitted as empty strings so consumers can
    /// rely on every variable being present.
    pub fn variables(&self) -> Vec<(String, String)> {
        let prefix = self.toolkit.to_ascii_uppercase();
        let path = |p: Option<&PathBuf>| p.map(|p| p.display().to_string()).unwrap_or_default();
        let join = |paths: &[PathBuf]| {
            paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(";")
        };

        let mut vars = vec![
            (format!("{}_FOUND", prefix), bool_var(self.found)),
            (
                format!("{}_INCLUDE_DIR", prefix),
                path(self.include_dir.as_ref()),
            ),
            (format!("{}_ROOT", prefix), path(self.root.as_ref())),
            (
                format!("{}_ARCH", prefix),
                self.arch.as_ref().map(|a| a.value.clone()).unwrap_or_default(),
            ),
            (
                format!("{}_LIBRARY_RELEASE", prefix),
                path(self.libraries.release.as_ref()),
            ),
            (
                format!("{}_LIBRARY_DEBUG", prefix),
                path(self.libraries.debug.as_ref()),
            ),
        ];

        for comp in self.components.values() {
            vars.push((
                format!("{}_{}_FOUND", prefix, comp.name),
                bool_var(comp.found),
            ));
            vars.push((
                format!("{}_{}_LIBRARY_RELEASE", prefix, comp.name),
                path(comp.libraries.release.as_ref()),
            ));
            vars.push((
                format!("{}_{}_LIBRARY_DEBUG", prefix, comp.name),
                path(comp.libraries.debug.as_ref()),
            ));
        }

        let redist = self.all_redistributables();
        vars.push((
            format!("{}_REDIST_RELEASE", prefix),
            join(redist.release.as_slice()),
        ));
        vars.push((format!("{}_REDIST_DEBUG", prefix), join(redist.debug.as_slice())));

        vars
    }

    /// Human-readable failure message naming the missing variables.
    pub fn failure_diagnostic(&self, root_env: &str, arch_env: &str) -> Diagnostic {
        let mut diag = Diagnostic::error(format!("could not find `{}`", self.toolkit));

        for var in &self.missing {
            diag = diag.with_context(format!("missing required variable: {}", var));
        }
        if let Some(root) = &self.root {
            diag = diag.with_location(root.clone());
        }

        diag.with_suggestion("Pass the installation directory with `--root <dir>`")
            .with_suggestion(format!(
                "Set `{}` to the installation directory",
                root_env
            ))
            .with_suggestion(format!(
                "Set `{}` to the architecture directory name if it is not detected",
                arch_env
            ))
    }
}

fn bool_var(value: bool) -> String {
    let s = if value { "TRUE" } else { "FALSE" };
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_falls_back_to_release() {
        let libs = LibraryArtifacts {
            release: Some(PathBuf::from("/sdk/libSpaACIS.so")),
            debug: None,
        };
        assert_eq!(
            libs.for_config(Configuration::Debug),
            Some(&PathBuf::from("/sdk/libSpaACIS.so"))
        );
    }

    #[test]
    fn test_component_lookup_normalizes_case() {
        let mut res = Resolution::new("ACIS", Platform::Linux);
        res.components.insert(
            "HBRIDGE".to_string(),
            ComponentResolution::not_found("HBRIDGE", true),
        );
        assert!(res.component("hbridge").is_some());
        assert!(!res.component_found("HBRIDGE"));
        assert!(!res.component_found("CGM"));
    }

    #[test]
    fn test_variables_for_not_found() {
        let res = Resolution::new("ACIS", Platform::Linux);
        let vars = res.variables();
        assert!(vars.contains(&("ACIS_FOUND".to_string(), "FALSE".to_string())));
        assert!(vars.contains(&("ACIS_INCLUDE_DIR".to_string(), String::new())));
        assert!(vars.contains(&("ACIS_REDIST_DEBUG".to_string(), String::new())));
    }

    #[test]
    fn test_failure_diagnostic_lists_missing() {
        let mut res = Resolution::new("ACIS", Platform::Linux);
        res.missing = vec!["ACIS_INCLUDE_DIR".to_string()];

        let output = res.failure_diagnostic("A3DT", "ARCH").format(false);
        assert!(output.contains("error: could not find `ACIS`"));
        assert!(output.contains("missing required variable: ACIS_INCLUDE_DIR"));
        assert!(output.contains("A3DT"));
        assert!(!output.contains("-->"));
    }

    #[test]
    fn test_failure_diagnostic_points_at_root() {
        let mut res = Resolution::new("ACIS", Platform::Windows);
        res.root = Some(PathBuf::from("/opt/spatial/acis"));
        res.missing = vec!["ACIS_ARCH".to_string(), "ACIS_LIBRARY".to_string()];

        let output = res.failure_diagnostic("A3DT", "ARCH").format(false);
        assert!(output.contains("  --> /opt/spatial/acis"));
        assert!(output.contains("missing required variable: ACIS_ARCH"));
    }

    #[test]
    fn test_fingerprint_changes_with_found() {
        let a = Resolution::new("ACIS", Platform::Linux);
        let mut b = a.clone();
        b.found = true;
        assert_eq!(a.fingerprint(), a.clone().fingerprint());
        assert_ne!(a.fingerprint(), b.fingerprint());
    }
}
