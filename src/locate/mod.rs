//! The artifact locator.
//!
//! Resolution runs in a single pass:
//!
//! ```text
//! search groups ──> header dir ──> root ──> arch tag ──> libraries
//!                                                   └──> components (each independent)
//! ```
//!
//! Nothing is written to disk and no process-global state is read; the
//! caller passes an [`Environment`] snapshot and receives a
//! [`Resolution`].

pub mod arch;
pub mod library;
pub mod search_paths;
pub mod threads;

use std::path::PathBuf;

use crate::core::descriptor::ToolkitDescriptor;
use crate::core::platform::Platform;
use crate::core::resolution::{ComponentResolution, LinkItem, Resolution};
use crate::core::target::{Configuration, ImportedTarget};
use crate::util::env::Environment;
use crate::util::errors::LocateError;

pub use arch::resolve_arch;
pub use library::{search_libraries, LibrarySearch};
pub use search_paths::{HeaderMatch, SearchGroup, SearchPaths};
pub use threads::resolve_threads;

/// Inputs of one locate call.
#[derive(Debug, Clone, Default)]
pub struct LocateRequest {
    /// Explicit installation root; searched exclusively when set
    pub root: Option<PathBuf>,
    /// Snapshot of the relevant environment variables
    pub env: Environment,
    /// Extra install-location globs searched after the built-in hints
    pub extra_hints: Vec<String>,
    /// Requested components (any case)
    pub components: Vec<String>,
    pub platform: Platform,
    /// Fail with [`LocateError::NotFound`] instead of reporting
    pub required: bool,
    /// Suppress the not-found report
    pub quiet: bool,
}

impl LocateRequest {
    pub fn new(platform: Platform) -> Self {
        LocateRequest {
            platform,
            ..Default::default()
        }
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn with_env(mut self, env: Environment) -> Self {
        self.env = env;
        self
    }

    pub fn with_hint(mut self, pattern: impl Into<String>) -> Self {
        self.extra_hints.push(pattern.into());
        self
    }

    pub fn with_component(mut self, name: impl Into<String>) -> Self {
        self.components.push(name.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Requested component names, upper-cased, duplicates removed,
    /// request order kept.
    pub fn normalized_components(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for name in &self.components {
            let name = name.trim().to_ascii_uppercase();
            if !name.is_empty() && !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}

/// Locates one toolkit described by a [`ToolkitDescriptor`].
#[derive(Debug, Clone, Default)]
pub struct Locator {
    descriptor: ToolkitDescriptor,
}

impl Locator {
    pub fn new(descriptor: ToolkitDescriptor) -> Self {
        Locator { descriptor }
    }

    pub fn descriptor(&self) -> &ToolkitDescriptor {
        &self.descriptor
    }

    /// Resolve the toolkit and the requested components.
    ///
    /// A toolkit that is not installed is reported through
    /// `Resolution::found` unless the request is `required`.
    pub fn locate(&self, request: &LocateRequest) -> Result<Resolution, LocateError> {
        let desc = &self.descriptor;
        let platform = request.platform;
        let prefix = desc.name.to_ascii_uppercase();
        let component_names = request.normalized_components();

        let mut resolution = Resolution::new(&desc.name, platform);

        let search_paths = SearchPaths::build(
            request.root.as_deref(),
            &request.env,
            desc,
            platform,
            &request.extra_hints,
        )?;

        let Some(header) = search_paths.find_header(desc) else {
            tracing::debug!("{} not found in any search path", desc.header);
            resolution.missing = vec![
                format!("{}_INCLUDE_DIR", prefix),
                format!("{}_LIBRARY", prefix),
            ];
            self.mark_components_unfound(&mut resolution, &component_names);
            return finish(resolution, request);
        };

        resolution.origin = Some(header.origin);
        let root = header
            .include_dir
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| header.include_dir.clone());
        resolution.include_dir = Some(header.include_dir);
        resolution.root = Some(root.clone());

        let Some(arch) = resolve_arch(&root, &request.env, desc, platform)? else {
            resolution.missing = vec![format!("{}_ARCH", prefix), format!("{}_LIBRARY", prefix)];
            self.mark_components_unfound(&mut resolution, &component_names);
            return finish(resolution, request);
        };

        let primary = search_libraries(&root, &arch, desc, platform, &desc.primary());
        resolution.arch = Some(arch.clone());
        resolution.found = primary.is_found();
        resolution.libraries = primary.libraries;
        resolution.redistributables = primary.redistributables;
        if !resolution.found {
            resolution.missing = vec![format!("{}_LIBRARY", prefix)];
        }

        for name in &component_names {
            let comp = match desc.component(name) {
                Some(entry) => {
                    let search = search_libraries(&root, &arch, desc, platform, entry);
                    let found = search.is_found();
                    if found {
                        tracing::debug!("found component {}", name);
                    } else {
                        tracing::debug!("component {} not found under {}", name, root.display());
                    }
                    ComponentResolution {
                        name: name.clone(),
                        found,
                        known: true,
                        libraries: search.libraries,
                        redistributables: search.redistributables,
                    }
                }
                None => {
                    tracing::debug!("{} has no component `{}`", desc.name, name);
                    ComponentResolution::not_found(name, false)
                }
            };
            resolution.components.insert(name.clone(), comp);
        }

        if resolution.found {
            build_outputs(&mut resolution);
            tracing::info!(
                "found {} in {} ({})",
                desc.name,
                root.display(),
                arch
            );
        }

        finish(resolution, request)
    }

    fn mark_components_unfound(&self, resolution: &mut Resolution, names: &[String]) {
        for name in names {
            let known = self.descriptor.component(name).is_some();
            resolution
                .components
                .insert(name.clone(), ComponentResolution::not_found(name, known));
        }
    }
}

fn finish(resolution: Resolution, request: &LocateRequest) -> Result<Resolution, LocateError> {
    if !resolution.found && request.required {
        return Err(LocateError::NotFound {
            toolkit: resolution.toolkit.clone(),
            missing: resolution.missing.clone(),
        });
    }
    Ok(resolution)
}

/// Threading dependency, link list and imported targets of a found toolkit.
fn build_outputs(resolution: &mut Resolution) {
    let threads = resolve_threads(resolution.platform);
    let include_dirs: Vec<PathBuf> = resolution.include_dir.iter().cloned().collect();
    let primary_name = ImportedTarget::qualified_name(&resolution.toolkit, &resolution.toolkit);

    let mut link = Vec::new();
    let mut targets = Vec::new();

    if let (Some(release), Some(debug)) = (
        resolution.libraries.for_config(Configuration::Release),
        resolution.libraries.for_config(Configuration::Debug),
    ) {
        link.push(LinkItem::Library {
            release: release.clone(),
            debug: debug.clone(),
        });
        targets.push(ImportedTarget {
            name: primary_name.clone(),
            include_dirs: include_dirs.clone(),
            release: release.clone(),
            debug: debug.clone(),
            runtime_release: resolution.redistributables.release.first().cloned(),
            runtime_debug: resolution.redistributables.debug.first().cloned(),
            dependencies: Vec::new(),
            system_libs: threads.libs.clone(),
        });
    }

    for lib in &threads.libs {
        link.push(LinkItem::System { name: lib.clone() });
    }

    for comp in resolution.components.values().filter(|c| c.found) {
        let (Some(release), Some(debug)) = (
            comp.libraries.for_config(Configuration::Release),
            comp.libraries.for_config(Configuration::Debug),
        ) else {
            continue;
        };

        link.push(LinkItem::Library {
            release: release.clone(),
            debug: debug.clone(),
        });
        targets.push(ImportedTarget {
            name: ImportedTarget::qualified_name(&resolution.toolkit, &comp.name),
            include_dirs: include_dirs.clone(),
            release: release.clone(),
            debug: debug.clone(),
            runtime_release: comp.redistributables.release.first().cloned(),
            runtime_debug: comp.redistributables.debug.first().cloned(),
            dependencies: vec![primary_name.clone()],
            system_libs: Vec::new(),
        });
    }

    resolution.threads = Some(threads);
    resolution.link_libraries = link;
    resolution.targets = targets;
}
