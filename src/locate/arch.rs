//! Architecture tag resolution.

use std::path::Path;

use crate::core::descriptor::ToolkitDescriptor;
use crate::core::platform::{ArchStrategy, Platform};
use crate::core::resolution::{ArchSource, ArchTag};
use crate::util::env::Environment;
use crate::util::errors::LocateError;
use crate::util::fs::glob_dirs_in;

/// Determine the architecture tag for an installation root.
///
/// An explicit environment override always wins and skips every
/// heuristic. Returns `Ok(None)` when the platform scans the root and
/// nothing matches.
pub fn resolve_arch(
    root: &Path,
    env: &Environment,
    desc: &ToolkitDescriptor,
    platform: Platform,
) -> Result<Option<ArchTag>, LocateError> {
    if let Some(value) = env.get(&desc.arch_env) {
        validate_tag(value)?;
        tracing::debug!("architecture from {}: {}", desc.arch_env, value);
        return Ok(Some(ArchTag::new(value, ArchSource::Override)));
    }

    match platform.arch_strategy() {
        ArchStrategy::Fixed(tag) => Ok(Some(ArchTag::new(tag, ArchSource::Fixed))),
        ArchStrategy::ScanRoot => {
            let dirs = glob_dirs_in(root, &desc.arch_dir_glob)?;
            // Sorted, so the last match is the newest compiler tag
            let tag = dirs
                .last()
                .and_then(|dir| dir.file_name())
                .map(|name| name.to_string_lossy().into_owned());

            match &tag {
                Some(tag) => tracing::debug!("detected architecture {}", tag),
                None => tracing::debug!(
                    "no `{}` directory under {}",
                    desc.arch_dir_glob,
                    root.display()
                ),
            }

            Ok(tag.map(|t| ArchTag::new(t, ArchSource::Detected)))
        }
    }
}

/// The tag is joined onto the root, so it must be a plain directory name.
fn validate_tag(tag: &str) -> Result<(), LocateError> {
    if tag == "." || tag == ".." || tag.contains(['/', '\\']) {
        return Err(LocateError::InvalidArchTag(tag.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_override_bypasses_scan() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join("NT_VC15_64_DLL")).unwrap();

        let env = Environment::from_pairs([("ARCH", "NT_VC14_64_DLL")]);
        let tag = resolve_arch(tmp.path(), &env, &ToolkitDescriptor::acis(), Platform::Windows)
            .unwrap()
            .unwrap();

        assert_eq!(tag.as_str(), "NT_VC14_64_DLL");
        assert_eq!(tag.source, ArchSource::Override);
    }

    #[test]
    fn test_scan_takes_last_match() {
        let tmp = TempDir::new().unwrap();
        for dir in ["NT_VC14_64_DLL", "NT_VC15_64_DLL", "NT_VC15_64_DLLD", "linux_a64"] {
            std::fs::create_dir(tmp.path().join(dir)).unwrap();
        }

        let tag = resolve_arch(
            tmp.path(),
            &Environment::empty(),
            &ToolkitDescriptor::acis(),
            Platform::Windows,
        )
        .unwrap()
        .unwrap();

        assert_eq!(tag.as_str(), "NT_VC15_64_DLL");
        assert_eq!(tag.source, ArchSource::Detected);
    }

    #[test]
    fn test_scan_without_match() {
        let tmp = TempDir::new().unwrap();
        let tag = resolve_arch(
            tmp.path(),
            &Environment::empty(),
            &ToolkitDescriptor::acis(),
            Platform::Windows,
        )
        .unwrap();
        assert!(tag.is_none());
    }

    #[test]
    fn test_fixed_tags() {
        let tmp = TempDir::new().unwrap();
        let desc = ToolkitDescriptor::acis();
        let env = Environment::empty();

        let linux = resolve_arch(tmp.path(), &env, &desc, Platform::Linux).unwrap().unwrap();
        assert_eq!(linux.as_str(), "linux_a64");
        assert_eq!(linux.source, ArchSource::Fixed);

        let mac = resolve_arch(tmp.path(), &env, &desc, Platform::MacOs).unwrap().unwrap();
        assert_eq!(mac.as_str(), "macos_b64");
    }

    #[test]
    fn test_override_must_be_directory_name() {
        let tmp = TempDir::new().unwrap();
        let env = Environment::from_pairs([("ARCH", "../elsewhere")]);
        let err = resolve_arch(tmp.path(), &env, &ToolkitDescriptor::acis(), Platform::Linux)
            .unwrap_err();
        assert!(matches!(err, LocateError::InvalidArchTag(_)));
    }
}
