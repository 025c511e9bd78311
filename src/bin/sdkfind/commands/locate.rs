//! `sdkfind locate` command

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::{LocateArgs, OutputFormat};
use sdkfind::core::{ArchSource, Resolution};
use sdkfind::util::Config;

pub fn execute(args: LocateArgs, config: &Config, color: bool) -> Result<()> {
    let opts = args.search.to_options(color);
    let resolution = sdkfind::ops::locate(config, &opts)?;

    match args.format {
        OutputFormat::Text => print_text(&resolution),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&resolution)
                .context("failed to serialize resolution")?;
            println!("{}", json);
        }
        OutputFormat::Env => {
            for (name, value) in resolution.variables() {
                println!("{}={}", name, value);
            }
        }
    }

    Ok(())
}

fn print_text(res: &Resolution) {
    let status = if res.found { "found" } else { "not found" };
    println!("{} ({}): {}", res.toolkit, res.platform, status);

    if let Some(origin) = res.origin {
        println!("  Source:   {}", origin);
    }
    if let Some(root) = &res.root {
        println!("  Root:     {}", root.display());
    }
    if let Some(include) = &res.include_dir {
        println!("  Include:  {}", include.display());
    }
    if let Some(arch) = &res.arch {
        let source = match arch.source {
            ArchSource::Override => "override",
            ArchSource::Detected => "detected",
            ArchSource::Fixed => "fixed",
        };
        println!("  Arch:     {} ({})", arch, source);
    }
    println!("  Release:  {}", display_opt(&res.libraries.release));
    println!("  Debug:    {}", display_opt(&res.libraries.debug));

    if !res.components.is_empty() {
        println!();
        println!("Components:");
        for comp in res.components.values() {
            let state = match (comp.found, comp.known) {
                (true, _) => display_opt(&comp.libraries.release),
                (false, true) => "not found".to_string(),
                (false, false) => "unknown component".to_string(),
            };
            println!("  {:<12} {}", comp.name, state);
        }
    }

    let redist = res.all_redistributables();
    if !redist.is_empty() {
        println!();
        println!("Redistributables:");
        for path in &redist.release {
            println!("  release  {}", path.display());
        }
        for path in &redist.debug {
            println!("  debug    {}", path.display());
        }
    }

    if !res.missing.is_empty() {
        println!();
        println!("Missing: {}", res.missing.join(", "));
    }

    println!();
    println!("Fingerprint: {}", res.fingerprint());
}

fn display_opt(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "-".to_string())
}
