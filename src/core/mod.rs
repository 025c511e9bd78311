//! Core data types: platforms, toolkit descriptors, resolutions and
//! imported targets.

pub mod descriptor;
pub mod platform;
pub mod resolution;
pub mod target;

pub use descriptor::{ComponentDescriptor, ToolkitDescriptor};
pub use platform::Platform;
pub use resolution::{
    ArchSource, ArchTag, ComponentResolution, LibraryArtifacts, LinkItem, Redistributables,
    Resolution, SearchOrigin, ThreadsDependency,
};
pub use target::{Configuration, ImportedTarget};
