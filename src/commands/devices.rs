use anyhow::Result;
use colored::*;

use crate::commands::report::load_config;
use crate::core::pass::survey_devices;
use crate::core::thermometer::NodeStatus;

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    let config = load_config(matches)?;

    println!(
        "{}",
        format!("Sensor tree: {}", config.hwmon_root.display()).white()
    );
    println!();

    for survey in survey_devices(&config) {
        let device = survey.thermometer.device();
        let status = match &survey.status {
            NodeStatus::Present { .. } => "present".green(),
            NodeStatus::Missing => "missing".dimmed(),
            NodeStatus::Mismatch { found } => {
                format!("name mismatch (found '{}')", found).yellow()
            }
        };

        println!(
            "{:<14} {:<18} {:<8} {:<10} {}",
            survey.category.bold(),
            device.kind.to_string().cyan(),
            device.name,
            device.node_dir_name(),
            status
        );

        for reading in survey.thermometer.readings() {
            println!(
                "    {:<16} {:>7.1}°C",
                reading.label,
                f64::from(reading.temp_mc) / 1000.0
            );
        }
    }

    Ok(())
}
