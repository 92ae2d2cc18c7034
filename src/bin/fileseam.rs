// src/bin/fileseam.rs
use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use fileseam_core::api::Split;
use fileseam_core::cli::Cli;
use fileseam_core::component::{Component, MasterComponent};
use fileseam_core::config::Config;
use fileseam_core::exit::Exit;
use fileseam_core::logging;
use fileseam_core::os::MasterWrapper;
use fileseam_core::unit::{WriteUnit, SINGLE_JOB};

fn main() -> Exit {
    run().into()
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut config = load_config(&cli)?;
    cli.apply(&mut config);
    logging::init(config.level(), config.preferences.color)?;

    let example = Component::new();
    let master_example = MasterComponent::new();

    example
        .run()
        .with_context(|| format!("writing {}", example.job().file_name))?;
    info!("wrote {}", example.job().file_name);

    master_example
        .run()
        .with_context(|| format!("writing {}", master_example.job().file_name))?;
    info!("wrote {}", master_example.job().file_name);

    // The master wrapper binds wherever three single capabilities are expected.
    let master = MasterWrapper;
    let substituted = Split::new(&master, &master, &master);
    let unit = WriteUnit::new(&substituted, &SINGLE_JOB);
    debug!("master wrapper bound for {}", unit.job().file_name);

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config)
}
