//! Candidate install directories, in priority order.
//!
//! Groups are searched in order and the first group whose directories
//! contain the signature header wins:
//!
//! 1. the explicit root override (when given, nothing else is searched)
//! 2. the toolkit's root environment variable
//! 3. conventional install locations (built-in hints, then config hints)

use std::path::{Path, PathBuf};

use crate::core::descriptor::ToolkitDescriptor;
use crate::core::platform::Platform;
use crate::core::resolution::SearchOrigin;
use crate::util::env::Environment;
use crate::util::errors::LocateError;
use crate::util::fs::{find_in_dirs, glob_dirs};

/// Directories contributed by one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchGroup {
    pub origin: SearchOrigin,
    pub dirs: Vec<PathBuf>,
}

/// Where the signature header was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMatch {
    /// Directory containing the header
    pub include_dir: PathBuf,
    pub origin: SearchOrigin,
}

/// Ordered search groups for one locate call.
#[derive(Debug, Clone, Default)]
pub struct SearchPaths {
    groups: Vec<SearchGroup>,
}

impl SearchPaths {
    /// Build the search groups from the three sources.
    pub fn build(
        root: Option<&Path>,
        env: &Environment,
        desc: &ToolkitDescriptor,
        platform: Platform,
        extra_hints: &[String],
    ) -> Result<Self, LocateError> {
        if let Some(root) = root {
            tracing::debug!("searching explicit root only: {}", root.display());
            return Ok(SearchPaths {
                groups: vec![SearchGroup {
                    origin: SearchOrigin::ExplicitRoot,
                    dirs: vec![root.to_path_buf()],
                }],
            });
        }

        let mut groups = Vec::new();

        if let Some(value) = env.get(&desc.root_env) {
            groups.push(SearchGroup {
                origin: SearchOrigin::Environment,
                dirs: vec![PathBuf::from(value)],
            });
        }

        let hints = desc
            .hints
            .for_platform(platform)
            .iter()
            .chain(extra_hints.iter());
        for pattern in hints {
            let dirs = glob_dirs(pattern)?;
            if !dirs.is_empty() {
                groups.push(SearchGroup {
                    origin: SearchOrigin::Hint,
                    dirs,
                });
            }
        }

        Ok(SearchPaths { groups })
    }

    pub fn groups(&self) -> &[SearchGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Search every group, in order, for the signature header.
    pub fn find_header(&self, desc: &ToolkitDescriptor) -> Option<HeaderMatch> {
        for group in &self.groups {
            for dir in &group.dirs {
                let candidates: Vec<PathBuf> = desc
                    .header_suffixes
                    .iter()
                    .map(|suffix| {
                        if suffix.is_empty() {
                            dir.clone()
                        } else {
                            dir.join(suffix)
                        }
                    })
                    .collect();

                if let Some(header) =
                    find_in_dirs(candidates.iter().map(PathBuf::as_path), &desc.header)
                {
                    let include_dir = header.parent()?.to_path_buf();
                    tracing::debug!(
                        "found {} in {} ({})",
                        desc.header,
                        include_dir.display(),
                        group.origin
                    );
                    return Some(HeaderMatch {
                        include_dir,
                        origin: group.origin,
                    });
                }
            }
        }

        None
    }
}
