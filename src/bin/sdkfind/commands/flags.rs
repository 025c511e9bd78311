//! `sdkfind flags` command

use anyhow::{bail, Result};

use crate::cli::FlagsArgs;
use sdkfind::core::Configuration;
use sdkfind::util::Config;

pub fn execute(args: FlagsArgs, config: &Config, color: bool) -> Result<()> {
    let opts = args.search.to_options(color);
    let resolution = sdkfind::ops::locate(config, &opts)?;

    if !resolution.found {
        bail!(
            "`{}` was not found, no flags to show\n\
             help: Run `sdkfind locate --verbose` to see where it was searched for",
            resolution.toolkit
        );
    }

    let configuration = if args.debug {
        Configuration::Debug
    } else {
        Configuration::Release
    };
    let flags = sdkfind::ops::flags(&resolution, configuration);

    let mut out: Vec<String> = Vec::new();
    if !args.link {
        out.extend(flags.compile);
    }
    if !args.compile {
        out.extend(flags.link);
    }

    println!("{}", out.join(" "));
    Ok(())
}
