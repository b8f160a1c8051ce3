//! diwkit CLI - serpentine G-code generator

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use diwkit::settings::{Config, SettingsManager, SETTINGS_FILE_NAME};
use diwkit::{init_logging, PrintJob, BUILD_DATE, VERSION};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "diwkit")]
#[command(about = "Serpentine direct-ink-write G-code generator", long_about = None)]
#[command(version)]
struct Cli {
    /// Settings file (.toml or .json), created with defaults when missing
    #[arg(short, long, default_value = SETTINGS_FILE_NAME)]
    config: PathBuf,

    /// Directory receiving generated files
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Override a setting for this run, e.g. --set x_width=25
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    overrides: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the G-code file
    Generate {
        /// Also write the serpentine stroke summary as CSV
        #[arg(long)]
        serpentine_info: bool,
    },
    /// Show the serpentine stroke table
    Info,
    /// Print plate, serpentine and segment coordinates as JSON
    Outline,
    /// Print every setting with its value
    List,
    /// Print the value of a single setting
    Get {
        /// Setting name, e.g. layer_height
        key: String,
    },
    /// Change a setting and save it to the settings file
    Set {
        /// Setting name, e.g. layer_height
        key: String,
        /// New value, coerced to the setting's type
        value: String,
    },
    /// Write a settings file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;
    info!("diwkit {} (built {})", VERSION, BUILD_DATE);

    match &cli.command {
        Commands::Init { force } => init_settings(&cli.config, *force)?,
        Commands::List => {
            for (key, value) in load_config(&cli)?.entries() {
                println!("{} = {}", key, value);
            }
        }
        Commands::Get { key } => {
            let config = load_config(&cli)?;
            println!("{}", config.value(key)?);
        }
        Commands::Set { key, value } => set_setting(&cli.config, key, value)?,
        Commands::Generate { serpentine_info } => {
            let job = PrintJob::from_config(&load_config(&cli)?)?;
            let path = job.write_gcode(&cli.output_dir)?;
            println!("G-code saved to {}", path.display());
            if *serpentine_info {
                let path = job.write_serpentine_info(&cli.output_dir)?;
                println!("Serpentine info saved to {}", path.display());
            }
        }
        Commands::Info => {
            let job = PrintJob::from_config(&load_config(&cli)?)?;
            show_info(&job);
        }
        Commands::Outline => {
            let job = PrintJob::from_config(&load_config(&cli)?)?;
            println!("{}", serde_json::to_string_pretty(&job.outline())?);
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut manager = SettingsManager::load_or_init(&cli.config)
        .with_context(|| format!("Failed to load settings from {}", cli.config.display()))?;
    for entry in &cli.overrides {
        let Some((key, value)) = entry.split_once('=') else {
            bail!("Invalid override '{}', expected KEY=VALUE", entry);
        };
        manager.set_value(key.trim(), value)?;
    }
    manager.config().validate()?;
    Ok(manager.config().clone())
}

fn init_settings(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists, use --force to overwrite it",
            path.display()
        );
    }
    Config::default().save_to_file(path)?;
    println!("Default settings written to {}", path.display());
    Ok(())
}

fn set_setting(path: &Path, key: &str, value: &str) -> Result<()> {
    let mut manager = SettingsManager::load_or_init(path)
        .with_context(|| format!("Failed to load settings from {}", path.display()))?;
    manager.set_value(key, value)?;
    manager.config().validate()?;
    manager.save()?;
    println!("{} = {} saved to {}", key, manager.value(key)?, manager.path().display());
    Ok(())
}

fn show_info(job: &PrintJob) {
    let serpentine = job.serpentine();
    println!("Serpentine");
    println!("  Strokes: {}", serpentine.stroke_count());
    println!("  Width: {} mm", serpentine.width());
    println!("  Layers: {}", job.sketch().len());
    if let Some(segment) = job.capping_segment() {
        let points = segment.points();
        println!(
            "  Capping segment: ({}, {}) -> ({}, {})",
            points[0].0, points[0].1, points[1].0, points[1].1
        );
    }

    print!("\n{}", job.serpentine_report().to_csv());
}
