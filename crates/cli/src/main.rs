//! Command-line entry point for DHIS2 reference-data provisioning.
//!
//! One subcommand per provisioning run. This binary owns argument parsing,
//! logging initialisation, the user-facing summary and the process exit code;
//! the run logic lives in `dhis2-core`.
//!
//! Exit codes: non-zero when the root organisation unit is rejected (no
//! mapping file is written in that case) and non-zero when any item in a run
//! failed. The mapping file is always written before a partial-failure exit.

use anyhow::Context;
use clap::{Parser, Subcommand};
use dhis2_core::constants::{COUNTY_MAPPING_PATH, DATA_ELEMENT_MAPPING_PATH, DEFAULT_CONFIG_PATH};
use dhis2_core::{provision_data_elements, provision_org_units, Dhis2Client, Dhis2Config};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "dhis2-provision")]
#[command(about = "Provision reference data into a DHIS2 instance")]
struct Cli {
    /// Path to the JSON configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the Kenya root and all 47 county organisation units
    OrgUnits {
        /// Where to write the county name→uid mapping
        #[arg(long, default_value = COUNTY_MAPPING_PATH)]
        mapping: PathBuf,
    },
    /// Create the malaria commodity data elements
    DataElements {
        /// Where to write the data-element code→uid mapping
        #[arg(long, default_value = DATA_ELEMENT_MAPPING_PATH)]
        mapping: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dhis2_core=info".parse()?)
                .add_directive("dhis2_cli=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Dhis2Config::load(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    let client = Dhis2Client::from_config(&config)?;
    tracing::info!("connected to {}", client.base_url());

    match cli.command {
        Commands::OrgUnits { mapping } => {
            let outcome = provision_org_units(&client, &mapping)?;

            println!("Counties created: {}/{}", outcome.created, outcome.total);
            println!("Kenya uid: {}", outcome.root_uid);
            println!("Mapping saved: {}", mapping.display());

            if !outcome.complete() {
                anyhow::bail!("{} counties failed", outcome.total - outcome.created);
            }
        }
        Commands::DataElements { mapping } => {
            let outcome = provision_data_elements(&client, &mapping)?;

            println!("Data elements created: {}/{}", outcome.created, outcome.total);
            println!("Mapping saved: {}", mapping.display());

            if !outcome.complete() {
                anyhow::bail!("{} data elements failed", outcome.total - outcome.created);
            }
        }
    }

    Ok(())
}
