//! `sdkfind components` command

use anyhow::Result;

use sdkfind::util::Config;

pub fn execute(config: &Config) -> Result<()> {
    let desc = config.descriptor();

    println!("Components of {}:", desc.name);
    println!();
    for comp in &desc.components {
        println!("  {:<12} {} (debug: {})", comp.name, comp.release, comp.debug);
    }

    Ok(())
}
