//! Test utilities for building fake toolkit installations.
//!
//! ```rust,ignore
//! let install = InstallFixture::new()
//!     .windows("NT_VC14_64_DLL")
//!     .header()
//!     .library("SpaACIS", "SpaACISd");
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::core::platform::Platform;

/// A toolkit installation laid out in a temporary directory.
pub struct InstallFixture {
    _tmp: TempDir,
    root: PathBuf,
    platform: Platform,
    arch: String,
}

impl InstallFixture {
    /// An empty installation root using the Linux layout.
    pub fn new() -> Self {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("acis");
        fs::create_dir_all(&root).unwrap();
        InstallFixture {
            _tmp: tmp,
            root,
            platform: Platform::Linux,
            arch: "linux_a64".to_string(),
        }
    }

    /// Use the Windows layout with the given architecture directory.
    pub fn windows(mut self, arch: &str) -> Self {
        self.platform = Platform::Windows;
        self.arch = arch.to_string();
        fs::create_dir_all(self.root.join(arch)).unwrap();
        self
    }

    /// Use the Linux layout.
    pub fn linux(mut self) -> Self {
        self.platform = Platform::Linux;
        self.arch = "linux_a64".to_string();
        self
    }

    /// Use the macOS layout.
    pub fn macos(mut self) -> Self {
        self.platform = Platform::MacOs;
        self.arch = "macos_b64".to_string();
        self
    }

    /// Write the signature header into `include/`.
    pub fn header(self) -> Self {
        touch(&self.root.join("include").join("acis.hxx"));
        self
    }

    /// Write the release/debug libraries (and runtime files) for a stem pair.
    pub fn library(self, release: &str, debug: &str) -> Self {
        let p = self.platform;
        match p {
            Platform::Windows => {
                let rel = self.root.join(&self.arch).join("code");
                let dbg = self.root.join(format!("{}D", self.arch)).join("code");
                touch(&rel.join("lib").join(p.link_library_name(release)));
                touch(&rel.join("bin").join(p.dynamic_library_name(release)));
                touch(&dbg.join("lib").join(p.link_library_name(debug)));
                touch(&dbg.join("bin").join(p.dynamic_library_name(debug)));
            }
            Platform::Linux | Platform::MacOs => {
                let bin = self.root.join(&self.arch).join("code").join("bin");
                touch(&bin.join(p.link_library_name(release)));
            }
        }
        self
    }

    /// Create an extra (empty) directory under the root.
    pub fn dir(self, name: &str) -> Self {
        fs::create_dir_all(self.root.join(name)).unwrap();
        self
    }

    /// Installation root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the header.
    pub fn include_dir(&self) -> PathBuf {
        self.root.join("include")
    }
}

impl Default for InstallFixture {
    fn default() -> Self {
        InstallFixture::new()
    }
}

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"").unwrap();
}
