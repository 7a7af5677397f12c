use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use log::error;

use course_schedule::menu::Menu;
use course_schedule::{Catalog, LoadError};

/// Look up courses in a schedule export.
#[derive(Parser)]
#[command(name = "course-schedule")]
#[command(version, about = "Menu-driven lookup over a course schedule CSV")]
struct Cli {
    /// Schedule file to load
    #[arg(default_value = "courses.csv")]
    file: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let mut catalog = Catalog::new();
    if let Err(e) = catalog.load(&cli.file) {
        match e {
            LoadError::NotFound { path } => println!(
                "Error: Could not find {0}. Make sure {0} is in the current directory.",
                path.display()
            ),
            other => println!("Error while loading data: {other}"),
        }
        return ExitCode::FAILURE;
    }

    match run(&catalog) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(catalog: &Catalog) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(catalog, stdin.lock(), stdout.lock()).run()
}
