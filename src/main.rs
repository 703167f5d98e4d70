mod cli;
mod coloring;
mod config;
mod error;
mod loader;
mod logging;
mod model;
mod report;
mod report_helpers;

use std::error::Error;
use std::path::Path;

use clap::{CommandFactory, Parser};
use tracing::debug;

use cli::{Cli, ColorArgs, Commands};
use config::Config;
use loader::load_comparison_file;
use loader::report_dir::ReportDir;
use report::CheckEntry;

fn palette_size(args: &ColorArgs) -> Result<usize, Box<dyn Error>> {
    let config = Config::load(args.config.as_deref(), Path::new("."))?
        .with_palette_size(args.palette_size)?;
    debug!(palette_size = config.palette_size, "resolved palette");
    Ok(config.palette_size)
}

fn run_color(file: &Path, args: &ColorArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let palette_size = palette_size(args)?;
    let comparison = load_comparison_file(file, palette_size)?;
    if json {
        report::print_json(&comparison, palette_size)
    } else {
        Ok(report::print_summary(&comparison, palette_size)?)
    }
}

fn run_report(
    dir: &Path,
    id1: &str,
    id2: &str,
    args: &ColorArgs,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let palette_size = palette_size(args)?;
    let comparison = ReportDir::new(dir).load_comparison(id1, id2, palette_size)?;
    if json {
        report::print_json(&comparison, palette_size)
    } else {
        Ok(report::print_summary(&comparison, palette_size)?)
    }
}

fn run_check(dir: &Path, args: &ColorArgs) -> Result<(), Box<dyn Error>> {
    let palette_size = palette_size(args)?;
    let files = ReportDir::new(dir).comparison_files()?;
    if files.is_empty() {
        println!("No comparison files found.");
        return Ok(());
    }

    let entries: Vec<CheckEntry> = files
        .iter()
        .map(|path| CheckEntry {
            file: path
                .strip_prefix(dir)
                .unwrap_or(path)
                .display()
                .to_string(),
            outcome: load_comparison_file(path, palette_size)
                .map(|c| c.matches.len())
                .map_err(|err| err.to_string()),
        })
        .collect();
    report::print_check(&entries)?;

    let failed = entries.iter().filter(|e| e.outcome.is_err()).count();
    if failed > 0 {
        return Err(format!("{failed} of {} comparisons could not be colored", entries.len()).into());
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match &cli.command {
        Commands::Color { file, color, json } => run_color(file, color, *json),
        Commands::Report {
            dir,
            id1,
            id2,
            color,
            json,
        } => run_report(dir, id1, id2, color, *json),
        Commands::Check { dir, color } => run_check(dir, color),
        Commands::Completions { shell } => {
            clap_complete::generate(*shell, &mut Cli::command(), "mcolor", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
