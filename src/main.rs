use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use habit_diary::cli::args::Cli;
use habit_diary::cli::commands;
use habit_diary::config::{ColorSetting, Config, Paths};
use habit_diary::core::calendar;
use habit_diary::error::DiaryError;
use habit_diary::logging;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        let code = e.downcast_ref::<DiaryError>().map_or(1, DiaryError::exit_code);
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = Paths::new()?;
    let config = Config::load_from_path(&paths.config_file)
        .with_context(|| format!("loading {}", paths.config_file.display()))?;

    logging::init(&config.general.log_level);
    match config.general.color {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {}
    }

    let format = cli.output.unwrap_or(config.general.default_output);
    let output = commands::execute(cli.command, &paths, &config, calendar::today(), format)?;

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
