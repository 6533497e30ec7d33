mod report;
mod scenario;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use thclear_rules::GameCatalog;

use report::SweepReport;
use scenario::{SCENARIOS, run_scenario};

#[derive(Debug, Parser)]
#[command(name = "thclear-tester", version = "0.3.0")]
#[command(about = "Automated QA sweeps for the thclear rule engine")]
struct Args {
    /// Scenarios to run (comma-separated)
    #[arg(long, default_value = "catalog")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Game catalog JSON to sweep (defaults to the bundled catalog)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "console"])]
    report: String,
}

fn main() -> ExitCode {
    env_logger::init();
    match run(&Args::parse()) {
        Ok(passed) => {
            if passed {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<bool> {
    if args.list_scenarios {
        for (name, desc) in SCENARIOS {
            println!("{name:<20} {desc}");
        }
        return Ok(true);
    }

    let catalog = load_catalog(args)?;
    log::info!("sweeping {} titles", catalog.games.len());

    let mut sweep = SweepReport {
        scenarios: Vec::new(),
    };
    for name in args.scenarios.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let Some(report) = run_scenario(name, &catalog) else {
            bail!("unknown scenario '{name}' (use --list-scenarios)");
        };
        sweep.scenarios.push(report);
    }
    if sweep.scenarios.is_empty() {
        bail!("no scenarios selected");
    }

    match args.report.as_str() {
        "json" => println!("{}", sweep.to_json()?),
        _ => println!("{}", sweep.to_console()),
    }
    Ok(sweep.passed())
}

fn load_catalog(args: &Args) -> Result<GameCatalog> {
    match &args.catalog {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading catalog {}", path.display()))?;
            GameCatalog::from_json(&json)
                .with_context(|| format!("parsing catalog {}", path.display()))
        }
        None => Ok(GameCatalog::load_from_static()),
    }
}
