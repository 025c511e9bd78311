//! High-level locate operation.
//!
//! Merges command-line options over configuration, captures the
//! environment once and runs the locator.

use std::path::PathBuf;

use anyhow::Result;

use crate::core::descriptor::ToolkitDescriptor;
use crate::core::platform::Platform;
use crate::core::resolution::Resolution;
use crate::locate::{LocateRequest, Locator};
use crate::util::config::Config;
use crate::util::diagnostic::{self, Diagnostic};
use crate::util::env::Environment;

/// Options given on the command line. Unset fields fall back to config.
#[derive(Debug, Clone, Default)]
pub struct LocateOptions {
    pub root: Option<PathBuf>,
    pub components: Vec<String>,
    /// Architecture tag, taking precedence over the environment
    pub arch: Option<String>,
    pub platform: Option<Platform>,
    pub required: bool,
    pub quiet: bool,
    pub color: bool,
}

/// Build a locate request from config, options and an environment snapshot.
pub fn build_request(
    config: &Config,
    desc: &ToolkitDescriptor,
    opts: &LocateOptions,
    mut env: Environment,
) -> Result<LocateRequest> {
    let platform = match (opts.platform, &config.search.platform) {
        (Some(platform), _) => platform,
        (None, Some(name)) => name.parse()?,
        (None, None) => Platform::host(),
    };

    if env.get(&desc.arch_env).is_none() {
        if let Some(arch) = &config.toolkit.arch {
            env.set(desc.arch_env.clone(), arch.clone());
        }
    }
    if let Some(arch) = &opts.arch {
        env.set(desc.arch_env.clone(), arch.clone());
    }

    let components = if opts.components.is_empty() {
        config.search.components.clone()
    } else {
        opts.components.clone()
    };

    Ok(LocateRequest {
        root: opts.root.clone().or_else(|| config.search.root.clone()),
        env,
        extra_hints: config.search.extra_hints.clone(),
        components,
        platform,
        required: opts.required || config.search.required.unwrap_or(false),
        quiet: opts.quiet,
    })
}

/// Locate the configured toolkit using the process environment.
pub fn locate(config: &Config, opts: &LocateOptions) -> Result<Resolution> {
    let desc = config.descriptor();
    let env = Environment::capture([desc.root_env.as_str(), desc.arch_env.as_str()]);
    let request = build_request(config, &desc, opts, env)?;
    run(Locator::new(desc), &request, opts.color)
}

/// Run a locator and report a failed resolution.
pub fn run(locator: Locator, request: &LocateRequest, color: bool) -> Result<Resolution> {
    let desc = locator.descriptor();
    tracing::debug!(
        "locating {} for {} (components: {:?})",
        desc.name,
        request.platform,
        request.normalized_components()
    );

    match locator.locate(request) {
        Ok(resolution) => {
            if !request.quiet {
                for diag in unknown_component_warnings(&resolution, desc) {
                    diagnostic::emit(&diag, color);
                }
                if !resolution.found {
                    let diag = resolution.failure_diagnostic(&desc.root_env, &desc.arch_env);
                    diagnostic::emit(&diag, color);
                }
            }
            Ok(resolution)
        }
        Err(e) => Err(e.into()),
    }
}

/// One warning per requested component the descriptor does not know.
pub fn unknown_component_warnings(
    resolution: &Resolution,
    desc: &ToolkitDescriptor,
) -> Vec<Diagnostic> {
    let known: Vec<&str> = desc.components.iter().map(|c| c.name.as_str()).collect();

    resolution
        .components
        .values()
        .filter(|c| !c.known)
        .map(|c| {
            Diagnostic::warning(format!("unknown {} component `{}`", desc.name, c.name))
                .with_suggestion(format!("Known components: {}", known.join(", ")))
        })
        .collect()
}
