//! Library search under an installation root.
//!
//! The toolkit and every component go through the same routine; only
//! the library stems differ.

use std::path::{Path, PathBuf};

use crate::core::descriptor::{expand_template, ComponentDescriptor, ToolkitDescriptor};
use crate::core::platform::Platform;
use crate::core::resolution::{ArchTag, LibraryArtifacts, Redistributables};
use crate::util::fs::find_in_dirs;

/// Libraries and runtime files found for one descriptor entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibrarySearch {
    pub libraries: LibraryArtifacts,
    pub redistributables: Redistributables,
}

impl LibrarySearch {
    /// Whether the required (release) library was found.
    pub fn is_found(&self) -> bool {
        self.libraries.release.is_some()
    }
}

/// Search the release and debug libraries of `entry` under `root`.
pub fn search_libraries(
    root: &Path,
    arch: &ArchTag,
    desc: &ToolkitDescriptor,
    platform: Platform,
    entry: &ComponentDescriptor,
) -> LibrarySearch {
    let release_dirs = expand_dirs(root, &desc.release_dirs, arch);
    let release = find_in_dirs(
        release_dirs.iter().map(PathBuf::as_path),
        &platform.link_library_name(&entry.release),
    );

    if !platform.has_debug_variants() {
        // One binary serves both configurations
        return LibrarySearch {
            libraries: LibraryArtifacts {
                debug: release.clone(),
                release,
            },
            redistributables: Redistributables::default(),
        };
    }

    let debug_dirs = expand_dirs(root, &desc.debug_dirs, arch);
    let debug = find_in_dirs(
        debug_dirs.iter().map(PathBuf::as_path),
        &platform.link_library_name(&entry.debug),
    );

    let mut redistributables = Redistributables::default();
    let release_dll = root
        .join(expand_template(&desc.release_bin_dir, arch.as_str()))
        .join(platform.dynamic_library_name(&entry.release));
    if release_dll.is_file() {
        redistributables.release.push(release_dll);
    }
    let debug_dll = root
        .join(expand_template(&desc.debug_bin_dir, arch.as_str()))
        .join(platform.dynamic_library_name(&entry.debug));
    if debug_dll.is_file() {
        redistributables.debug.push(debug_dll);
    }

    LibrarySearch {
        libraries: LibraryArtifacts { release, debug },
        redistributables,
    }
}

fn expand_dirs(root: &Path, templates: &[String], arch: &ArchTag) -> Vec<PathBuf> {
    templates
        .iter()
        .map(|t| root.join(expand_template(t, arch.as_str())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resolution::ArchSource;
    use crate::test_support::InstallFixture;

    #[test]
    fn test_windows_release_and_debug() {
        let fixture = InstallFixture::new()
            .windows("NT_VC14_64_DLL")
            .library("SpaACIS", "SpaACISd");
        let desc = ToolkitDescriptor::acis();
        let arch = ArchTag::new("NT_VC14_64_DLL", ArchSource::Detected);

        let search = search_libraries(
            fixture.root(),
            &arch,
            &desc,
            Platform::Windows,
            &desc.primary(),
        );

        assert!(search.is_found());
        assert!(search
            .libraries
            .release
            .unwrap()
            .ends_with("NT_VC14_64_DLL/code/lib/SpaACIS.lib"));
        assert!(search
            .libraries
            .debug
            .unwrap()
            .ends_with("NT_VC14_64_DLLD/code/lib/SpaACISd.lib"));
        assert_eq!(search.redistributables.release.len(), 1);
        assert_eq!(search.redistributables.debug.len(), 1);
    }

    #[test]
    fn test_linux_single_configuration() {
        let fixture = InstallFixture::new().linux().library("SpaACIS", "SpaACISd");
        let desc = ToolkitDescriptor::acis();
        let arch = ArchTag::new("linux_a64", ArchSource::Fixed);

        let search = search_libraries(fixture.root(), &arch, &desc, Platform::Linux, &desc.primary());

        assert!(search.is_found());
        assert_eq!(search.libraries.debug, search.libraries.release);
        assert!(search.redistributables.is_empty());
    }

    #[test]
    fn test_wrong_arch_finds_nothing() {
        let fixture = InstallFixture::new()
            .windows("NT_VC14_64_DLL")
            .library("SpaACIS", "SpaACISd");
        let desc = ToolkitDescriptor::acis();
        let arch = ArchTag::new("NT_VC15_64_DLL", ArchSource::Override);

        let search = search_libraries(
            fixture.root(),
            &arch,
            &desc,
            Platform::Windows,
            &desc.primary(),
        );

        assert!(!search.is_found());
        assert!(search.libraries.is_empty());
    }
}
