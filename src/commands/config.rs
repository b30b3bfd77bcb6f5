use crate::commands::report::load_config;
use crate::core::Config;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("path", _)) => show_path(),
        Some(("show", sub_matches)) => show_config(sub_matches),
        Some(("init", sub_matches)) => init_config(sub_matches),
        _ => {
            println!("Use 'thermbar config --help' for more information.");
            Ok(())
        }
    }
}

fn target_path(matches: &clap::ArgMatches) -> Result<PathBuf> {
    match matches.get_one::<String>("config") {
        Some(path) => Ok(PathBuf::from(path)),
        None => Config::config_path().context("Failed to resolve config path"),
    }
}

fn show_path() -> Result<()> {
    let path = Config::config_path().context("Failed to resolve config path")?;
    println!("{}", path.display().to_string().cyan().bold());
    Ok(())
}

fn show_config(matches: &clap::ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    let json = serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
    println!("{}", json);
    Ok(())
}

fn init_config(matches: &clap::ArgMatches) -> Result<()> {
    let path = target_path(matches)?;
    let force = matches.get_flag("force");

    if path.exists() && !force {
        println!(
            "{}",
            format!("⚠️  Config already exists at {}", path.display()).yellow()
        );
        println!("{}", "Use --force to overwrite it with the defaults.".dimmed());
        return Ok(());
    }

    Config::default()
        .save_to(&path)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    println!(
        "{} {}",
        "✓ Default config written to:".green(),
        path.display()
    );

    Ok(())
}
