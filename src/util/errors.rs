//! Locate error types.

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

/// Error raised while locating a toolkit.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum LocateError {
    /// A required toolkit could not be resolved.
    #[error("could not find `{toolkit}` (missing: {})", .missing.join(", "))]
    #[diagnostic(
        code(sdkfind::locate::not_found),
        help("Pass `--root <dir>` or set the toolkit's root environment variable")
    )]
    NotFound {
        toolkit: String,
        missing: Vec<String>,
    },

    /// An install-location hint is not a valid glob.
    #[error("invalid install hint `{pattern}`")]
    #[diagnostic(code(sdkfind::config::invalid_hint))]
    InvalidHint {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// A platform name that is not windows, linux or macos.
    #[error("unknown platform `{0}`")]
    #[diagnostic(
        code(sdkfind::config::unknown_platform),
        help("Supported platforms: windows, linux, macos")
    )]
    UnknownPlatform(String),

    /// An architecture tag would escape the installation root.
    #[error("invalid architecture tag `{0}`")]
    #[diagnostic(
        code(sdkfind::locate::invalid_arch),
        help("The architecture tag must be a single directory name")
    )]
    InvalidArchTag(String),
}
