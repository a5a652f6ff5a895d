//! Command handlers

use std::path::PathBuf;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use pettransit_app::app::{
    fleet_board, quote_fare, run_driver_session, run_rider_flow, DriverAction, RiderRequest,
};
use pettransit_app::config::Config;
use pettransit_app::repository::open_catalog;
use pettransit_domain::repository::{TripRequestRepository, VeterinaryRepository};
use pettransit_domain::service::fare_estimator::current_hour;
use pettransit_infra::persistence::CatalogRepository;
use pettransit_types::{OutputFormat, Result};
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::output::{
    output_driver_report, output_fare, output_fleet, output_requests, output_rider_report,
    output_veterinaries,
};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);
    debug!(format = %output_format, "configuration loaded");

    match &cli.command {
        Commands::Fare { distance, hour } => cmd_fare(&config, *distance, *hour, output_format),

        Commands::Vets { open_only } => {
            let repo = open_catalog(&config, cli.catalog.as_deref())?;
            let vets = if *open_only {
                repo.find_open()?
            } else {
                VeterinaryRepository::find_all(&repo)?
            };
            output_veterinaries(output_format, &vets)
        }

        Commands::Requests { import } => {
            let repo = open_with_import(&cli, &config, import.as_ref())?;
            output_requests(output_format, &TripRequestRepository::find_all(&repo)?)
        }

        Commands::Driver { actions, import } => {
            let actions = actions
                .iter()
                .map(|a| a.parse::<DriverAction>())
                .collect::<Result<Vec<_>>>()?;
            let repo = open_with_import(&cli, &config, import.as_ref())?;
            let report = run_driver_session(&repo, &actions)?;
            output_driver_report(output_format, &report)
        }

        Commands::Rider {
            vet,
            pet,
            breed,
            weight,
            notes,
            back,
            no_confirm,
            hour,
        } => {
            let request = RiderRequest {
                vet_id: vet.clone(),
                pet_type: *pet,
                breed: breed.clone(),
                weight: weight.clone(),
                notes: notes.clone(),
                revisit_details: *back,
                skip_confirm: *no_confirm,
                hour: hour.unwrap_or_else(current_hour),
            };
            cmd_rider(&cli, &config, &request, output_format)
        }

        Commands::Fleet { status } => {
            let repo = open_catalog(&config, cli.catalog.as_deref())?;
            let board = fleet_board(&repo, *status)?;
            output_fleet(output_format, &board)
        }

        Commands::Config {
            show,
            set_output,
            set_catalog,
            clear_catalog,
            set_base_fare,
            set_per_km,
            set_night_multiplier,
            set_reset_delay,
            set_rider_name,
            set_rider_phone,
            set_pickup,
            reset,
        } => {
            let updates = ConfigUpdates {
                output: *set_output,
                catalog: set_catalog.clone(),
                clear_catalog: *clear_catalog,
                base_fare: *set_base_fare,
                per_km: *set_per_km,
                night_multiplier: *set_night_multiplier,
                reset_delay: *set_reset_delay,
                rider_name: set_rider_name.clone(),
                rider_phone: set_rider_phone.clone(),
                pickup: set_pickup.clone(),
            };
            cmd_config(config, *show, *reset, updates)
        }
    }
}

fn open_with_import(
    cli: &Cli,
    config: &Config,
    import: Option<&PathBuf>,
) -> Result<CatalogRepository> {
    let mut repo = open_catalog(config, cli.catalog.as_deref())?;
    if let Some(path) = import {
        let count = repo.import_trip_requests(path)?;
        eprintln!("Imported {} trip request(s) from {}", count, path.display());
    }
    Ok(repo)
}

fn cmd_fare(
    config: &Config,
    distance: f64,
    hour: Option<u32>,
    output_format: OutputFormat,
) -> Result<()> {
    let fare = quote_fare(config, distance, hour)?;
    output_fare(output_format, &fare, config.fare.surcharge_percent())
}

fn cmd_rider(
    cli: &Cli,
    config: &Config,
    request: &RiderRequest,
    output_format: OutputFormat,
) -> Result<()> {
    let repo = open_catalog(config, cli.catalog.as_deref())?;
    let show_spinner = output_format == OutputFormat::Table;
    let report = run_rider_flow(&repo, config, request, |delay| {
        wait_for_reset(delay, show_spinner)
    })?;
    output_rider_report(output_format, &report, config.fare.surcharge_percent())
}

fn wait_for_reset(delay: Duration, show_spinner: bool) {
    if delay.is_zero() {
        return;
    }
    let pb = if show_spinner {
        ProgressBar::new_spinner()
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message("Waiting for a driver to be assigned...");
    pb.enable_steady_tick(Duration::from_millis(100));
    std::thread::sleep(delay);
    pb.finish_and_clear();
}

struct ConfigUpdates {
    output: Option<OutputFormat>,
    catalog: Option<PathBuf>,
    clear_catalog: bool,
    base_fare: Option<f64>,
    per_km: Option<f64>,
    night_multiplier: Option<f64>,
    reset_delay: Option<u64>,
    rider_name: Option<String>,
    rider_phone: Option<String>,
    pickup: Option<String>,
}

impl ConfigUpdates {
    /// Apply the updates; returns true if anything changed
    fn apply(self, config: &mut Config) -> bool {
        let mut modified = false;
        if let Some(format) = self.output {
            config.output_format = format;
            println!("Output format set to: {}", format);
            modified = true;
        }
        if let Some(path) = self.catalog {
            println!("Catalog set to: {}", path.display());
            config.catalog_path = Some(path);
            modified = true;
        }
        if self.clear_catalog {
            config.catalog_path = None;
            println!("Catalog set to: (built-in sample)");
            modified = true;
        }
        if let Some(fare) = self.base_fare {
            config.fare.base_fare = fare;
            println!("Base fare set to: {:.2}", fare);
            modified = true;
        }
        if let Some(rate) = self.per_km {
            config.fare.per_km_rate = rate;
            println!("Per km rate set to: {:.2}", rate);
            modified = true;
        }
        if let Some(multiplier) = self.night_multiplier {
            config.fare.night_multiplier = multiplier;
            println!("Night multiplier set to: {}", multiplier);
            modified = true;
        }
        if let Some(ms) = self.reset_delay {
            config.reset_delay_ms = ms;
            println!("Reset delay set to: {} ms", ms);
            modified = true;
        }
        if let Some(name) = self.rider_name {
            println!("Rider name set to: {}", name);
            config.rider_name = name;
            modified = true;
        }
        if let Some(phone) = self.rider_phone {
            println!("Rider phone set to: {}", phone);
            config.rider_phone = phone;
            modified = true;
        }
        if let Some(pickup) = self.pickup {
            println!("Pickup set to: {}", pickup);
            config.rider_pickup = pickup;
            modified = true;
        }
        modified
    }
}

fn cmd_config(mut config: Config, show: bool, reset: bool, updates: ConfigUpdates) -> Result<()> {
    if reset {
        config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults.");
        return Ok(());
    }

    if updates.apply(&mut config) {
        config.save()?;
        println!("Configuration saved.");
    }

    if show {
        println!("{}", config);
    }

    Ok(())
}
