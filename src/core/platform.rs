//! Target platform families.
//!
//! Platform-specific decisions of the locator hang off the [`Platform`]
//! enum. The resolution sequence itself never branches on the host OS.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::util::errors::LocateError;

/// Platform family a toolkit installation is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    Linux,
    #[serde(rename = "macos")]
    MacOs,
}

/// How the architecture tag is obtained when no override is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchStrategy {
    /// Glob the installation root for compiler/DLL-named directories.
    ScanRoot,
    /// Use a fixed tag for the OS family.
    Fixed(&'static str),
}

impl Platform {
    /// Detect the platform family of the host.
    ///
    /// Anything that is neither Windows nor macOS is treated as a
    /// Linux-style layout.
    pub fn host() -> Self {
        match std::env::consts::OS {
            "windows" => Platform::Windows,
            "macos" => Platform::MacOs,
            _ => Platform::Linux,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Linux => "linux",
            Platform::MacOs => "macos",
        }
    }

    /// Strategy used to derive the architecture tag.
    pub fn arch_strategy(&self) -> ArchStrategy {
        match self {
            Platform::Windows => ArchStrategy::ScanRoot,
            Platform::Linux => ArchStrategy::Fixed("linux_a64"),
            Platform::MacOs => ArchStrategy::Fixed("macos_b64"),
        }
    }

    /// Whether debug and release binaries are shipped separately.
    pub fn has_debug_variants(&self) -> bool {
        matches!(self, Platform::Windows)
    }

    /// File name of the link-time library for a library stem.
    ///
    /// On Windows this is the import library; elsewhere the shared
    /// object itself is linked.
    pub fn link_library_name(&self, stem: &str) -> String {
        match self {
            Platform::Windows => format!("{}.lib", stem),
            Platform::Linux => format!("lib{}.so", stem),
            Platform::MacOs => format!("lib{}.dylib", stem),
        }
    }

    /// File name of the redistributable dynamic library for a stem.
    pub fn dynamic_library_name(&self, stem: &str) -> String {
        match self {
            Platform::Windows => format!("{}.dll", stem),
            Platform::Linux => format!("lib{}.so", stem),
            Platform::MacOs => format!("lib{}.dylib", stem),
        }
    }

    /// System libraries that provide threading support.
    pub fn thread_libs(&self) -> &'static [&'static str] {
        match self {
            // The CRT carries threading on Windows
            Platform::Windows => &[],
            Platform::Linux | Platform::MacOs => &["pthread"],
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Platform::host()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = LocateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "windows" | "win32" | "win64" | "nt" => Ok(Platform::Windows),
            "linux" => Ok(Platform::Linux),
            "macos" | "darwin" | "osx" => Ok(Platform::MacOs),
            _ => Err(LocateError::UnknownPlatform(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_platform() {
        assert_eq!("Windows".parse::<Platform>().unwrap(), Platform::Windows);
        assert_eq!("darwin".parse::<Platform>().unwrap(), Platform::MacOs);
        assert_eq!("linux".parse::<Platform>().unwrap(), Platform::Linux);
        assert!("solaris".parse::<Platform>().is_err());
    }

    #[test]
    fn test_library_names() {
        assert_eq!(Platform::Windows.link_library_name("SpaACIS"), "SpaACIS.lib");
        assert_eq!(Platform::Windows.dynamic_library_name("SpaACIS"), "SpaACIS.dll");
        assert_eq!(Platform::Linux.link_library_name("SpaACIS"), "libSpaACIS.so");
        assert_eq!(Platform::MacOs.link_library_name("SpaACIS"), "libSpaACIS.dylib");
    }

    #[test]
    fn test_arch_strategy() {
        assert_eq!(Platform::Windows.arch_strategy(), ArchStrategy::ScanRoot);
        assert_eq!(
            Platform::Linux.arch_strategy(),
            ArchStrategy::Fixed("linux_a64")
        );
        assert_eq!(
            Platform::MacOs.arch_strategy(),
            ArchStrategy::Fixed("macos_b64")
        );
    }

    #[test]
    fn test_debug_variants_only_on_windows() {
        assert!(Platform::Windows.has_debug_variants());
        assert!(!Platform::Linux.has_debug_variants());
        assert!(!Platform::MacOs.has_debug_variants());
    }
}
