//! CLI definition using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pettransit_types::{OutputFormat, PetType, VehicleStatus};

#[derive(Parser)]
#[command(name = "pettransit")]
#[command(version)]
#[command(about = "Pet transport dispatch: rider, driver and admin views")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Catalog TOML file (overrides config; built-in sample data otherwise)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Verbose logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate a fare
    Fare {
        /// Trip distance in kilometers
        #[arg(long, short = 'd')]
        distance: f64,

        /// Hour of day (0-23). Uses the local clock if not specified.
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
        hour: Option<u32>,
    },

    /// List veterinaries
    Vets {
        /// Only veterinaries currently open
        #[arg(long)]
        open_only: bool,
    },

    /// List pending trip requests
    Requests {
        /// Append trip requests from a CSV file
        #[arg(long)]
        import: Option<PathBuf>,
    },

    /// Run a driver session: accept:<id>, reject:<id>, complete
    Driver {
        /// Actions applied in order
        actions: Vec<String>,

        /// Append trip requests from a CSV file before starting
        #[arg(long)]
        import: Option<PathBuf>,
    },

    /// Request a trip as a rider
    Rider {
        /// Veterinary id
        #[arg(long)]
        vet: String,

        /// Pet type
        #[arg(long)]
        pet: Option<PetType>,

        /// Breed
        #[arg(long, default_value = "")]
        breed: String,

        /// Weight in kilograms
        #[arg(long, default_value = "")]
        weight: String,

        /// Notes for the driver
        #[arg(long, default_value = "")]
        notes: String,

        /// Go back from the confirm step once and resubmit the details
        #[arg(long)]
        back: bool,

        /// Stop at the confirm step without placing the request
        #[arg(long)]
        no_confirm: bool,

        /// Hour of day used for pricing (0-23). Uses the local clock if not specified.
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
        hour: Option<u32>,
    },

    /// Show the admin fleet dashboard
    Fleet {
        /// Only list vehicles with this status
        #[arg(long)]
        status: Option<VehicleStatus>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set catalog TOML file
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// Use the built-in sample catalog
        #[arg(long)]
        clear_catalog: bool,

        /// Set base fare
        #[arg(long)]
        set_base_fare: Option<f64>,

        /// Set per-kilometer rate
        #[arg(long)]
        set_per_km: Option<f64>,

        /// Set night multiplier
        #[arg(long)]
        set_night_multiplier: Option<f64>,

        /// Set rider reset delay in milliseconds
        #[arg(long)]
        set_reset_delay: Option<u64>,

        /// Set rider name
        #[arg(long)]
        set_rider_name: Option<String>,

        /// Set rider phone
        #[arg(long)]
        set_rider_phone: Option<String>,

        /// Set rider pickup address
        #[arg(long)]
        set_pickup: Option<String>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
