//! Compiler and linker flags for a resolved toolkit.

use std::path::{Path, PathBuf};

use crate::core::platform::Platform;
use crate::core::resolution::{LinkItem, Resolution};
use crate::core::target::Configuration;

/// Flags for one build configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    pub compile: Vec<String>,
    pub link: Vec<String>,
}

/// Compute compile and link flags from a found resolution.
///
/// Windows links libraries by full path. Elsewhere libraries become
/// `-L<dir>` / `-l<name>` pairs, with an rpath entry per library
/// directory so the shared objects are found at run time.
pub fn flags(resolution: &Resolution, config: Configuration) -> Flags {
    let mut out = Flags::default();

    if let Some(include) = &resolution.include_dir {
        out.compile.push(format!("-I{}", include.display()));
    }

    let windows = resolution.platform == Platform::Windows;
    let mut lib_dirs: Vec<PathBuf> = Vec::new();
    let mut libs: Vec<String> = Vec::new();

    for item in &resolution.link_libraries {
        match item {
            LinkItem::Library { release, debug } => {
                let lib = match config {
                    Configuration::Release => release,
                    Configuration::Debug => debug,
                };
                if windows {
                    libs.push(lib.display().to_string());
                    continue;
                }
                if let Some(dir) = lib.parent() {
                    if !lib_dirs.iter().any(|p| p == dir) {
                        lib_dirs.push(dir.to_path_buf());
                    }
                }
                libs.push(format!("-l{}", link_name(lib)));
            }
            LinkItem::System { name } => {
                if windows {
                    libs.push(format!("{}.lib", name));
                } else {
                    libs.push(format!("-l{}", name));
                }
            }
        }
    }

    for dir in &lib_dirs {
        out.link.push(format!("-L{}", dir.display()));
    }
    out.link.extend(libs);
    for dir in &lib_dirs {
        out.link.push(format!("-Wl,-rpath,{}", dir.display()));
    }

    out
}

/// `libSpaACIS.so` -> `SpaACIS`
fn link_name(lib: &Path) -> String {
    let stem = lib
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    match stem.strip_prefix("lib") {
        Some(name) => name.to_string(),
        None => stem,
    }
}
