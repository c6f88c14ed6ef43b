use chrono::Local;
use clap::Parser;
use colored::Colorize;

use taskflow::cli::args::{Cli, Commands};
use taskflow::cli::commands::{self, Context};
use taskflow::config::{ColorSetting, Config, Paths};
use taskflow::error::TaskFlowError;
use taskflow::logging;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), TaskFlowError> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Commands::Completions { shell, install } = cli.command {
        println!("{}", commands::completions(shell, install)?);
        return Ok(());
    }

    let paths = Paths::new()?;
    let config = Config::load(&paths)?;
    match config.general.color {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {}
    }

    let format = cli.output.unwrap_or(config.general.default_output);
    let task_file = cli.file.or_else(|| config.general.tasks_file.clone());
    let mut ctx = Context::new(config, paths, task_file, Local::now().date_naive());

    let output = match cli.command {
        Commands::Home => commands::home(&ctx, format)?,
        Commands::Tasks(args) => commands::tasks(&ctx, args.command, format)?,
        Commands::Stats(args) => commands::stats(&ctx, args, format)?,
        Commands::Settings(args) => commands::settings(&mut ctx, args.command, format)?,
        Commands::Completions { .. } => String::new(),
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
