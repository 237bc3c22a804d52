//! Config subcommands handler

use anyhow::{bail, Result};

use adbar::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Print where the configuration file is (or would be).
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write a configuration file with default settings.
///
/// Refuses to overwrite an existing file unless `force` is set.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(force: bool) -> Result<()> {
    let config_path = Config::config_path()?;
    if config_path.exists() && !force {
        bail!(
            "Config file {} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    let path = Config::default().save()?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
