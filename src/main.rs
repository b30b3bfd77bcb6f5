use anyhow::Result;
use clap::{Arg, ArgAction, Command};

use thermbar::commands;

fn build_cli() -> Command {
    Command::new("thermbar")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Fixed-index hwmon temperature reporter for status bars")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Config file (defaults to the user config directory)")
                .global(true),
        )
        .arg(
            Arg::new("root")
                .long("root")
                .value_name("DIR")
                .help("Root of the hwmon tree")
                .global(true),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Output format")
                .value_parser(["plain", "waybar"])
                .global(true),
        )
        .arg(
            Arg::new("no-detail")
                .long("no-detail")
                .help("Skip the detailed tooltip block")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(Command::new("report").about("Read all configured sensors and print the report (default)"))
        .subcommand(
            Command::new("devices").about("Show each configured device, its hwmon node and current readings"),
        )
        .subcommand(
            Command::new("config")
                .about("Inspect or create the config file")
                .subcommand_required(true)
                .subcommand(Command::new("path").about("Print the config file path"))
                .subcommand(Command::new("show").about("Print the effective config as JSON"))
                .subcommand(
                    Command::new("init").about("Write the default config").arg(
                        Arg::new("force")
                            .long("force")
                            .help("Overwrite an existing config")
                            .action(ArgAction::SetTrue),
                    ),
                ),
        )
        .subcommand(Command::new("version").about("Shows version information"))
}

fn main() -> Result<()> {
    thermbar::init_logging();

    let matches = build_cli().get_matches();

    if matches.get_flag("version") {
        return commands::version();
    }

    match matches.subcommand() {
        Some(("report", sub_matches)) => commands::report(sub_matches),
        Some(("devices", sub_matches)) => commands::devices(sub_matches),
        Some(("config", sub_matches)) => commands::config::execute(sub_matches),
        Some(("version", _)) => commands::version(),
        _ => commands::report(&matches),
    }
}
