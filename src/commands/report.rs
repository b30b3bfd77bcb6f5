use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::core::config::{Config, OutputFormat};
use crate::core::pass::run_pass;
use crate::ui::output::format_report;

/// Load the config named by `--config` (or the user default) and apply CLI overrides.
pub fn load_config(matches: &clap::ArgMatches) -> Result<Config> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => Config::load_from(&PathBuf::from(path))
            .with_context(|| format!("Failed to load config file: {}", path))?,
        None => Config::load().context("Failed to load config")?,
    };

    if let Some(root) = matches.get_one::<String>("root") {
        config.hwmon_root = PathBuf::from(root);
    }

    if let Some(format) = matches.get_one::<String>("format") {
        config.format = OutputFormat::parse(format)
            .with_context(|| format!("Unknown output format '{}'", format))?;
    }

    if matches.get_flag("no-detail") {
        for entry in &mut config.sensors {
            entry.show_detail = false;
        }
    }

    Ok(config)
}

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    let config = load_config(matches)?;

    let buffers = run_pass(&config);
    let output = format_report(&buffers, config.format).context("Failed to encode report")?;
    println!("{}", output);

    Ok(())
}
