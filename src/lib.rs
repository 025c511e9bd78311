//! sdkfind - locate installed geometry-modeling toolkits
//!
//! This crate finds the headers, link libraries and redistributable
//! binaries of a prebuilt toolkit and its optional add-on components,
//! and describes them as imported targets a build can consume.

pub mod core;
pub mod locate;
pub mod ops;
pub mod util;

/// Test utilities for building fake toolkit installations.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{
    descriptor::ToolkitDescriptor, platform::Platform, resolution::Resolution,
    target::ImportedTarget,
};

pub use locate::{LocateRequest, Locator};
pub use util::env::Environment;
pub use util::errors::LocateError;
