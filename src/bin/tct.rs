//! TCT command-line entry point.
//!
//! Solves the altitude-crossing time for one observation and prints the
//! result record (CSV by default, JSON with `--json`).
//!
//! # Usage
//!
//! ```bash
//! tct --lat -30.1679 --lon -70.8057 --elevation 2187 \
//!     --ra 180.0 --dec -30.0 --alt 45.0 \
//!     --time 2023-06-01T03:30:00Z
//! ```
//!
//! The site can also come from a TOML file (`--site-config site.toml`).
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: warn)

use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use tct_rust::config::SiteConfig;
use tct_rust::services::report::CSV_HEADER;
use tct_rust::{
    solve, CrossingRecord, EquatorialCoord, ModifiedJulianDate, ObservationLabel, ObserverSite,
};

#[derive(Parser)]
#[command(name = "tct", about = "Telescope altitude-crossing time solver")]
struct Cli {
    /// Target right ascension in degrees
    #[arg(long)]
    ra: f64,

    /// Target declination in degrees
    #[arg(long)]
    dec: f64,

    /// Target altitude in degrees; omit to report an undefined crossing
    #[arg(long)]
    alt: Option<f64>,

    /// Reference UTC timestamp, RFC 3339 (e.g. 2023-06-01T03:00:00Z)
    #[arg(long)]
    time: String,

    /// Observer latitude in degrees (alternative to --site-config)
    #[arg(long)]
    lat: Option<f64>,

    /// Observer longitude in degrees, east positive
    #[arg(long)]
    lon: Option<f64>,

    /// Observer elevation in meters
    #[arg(long, default_value_t = 0.0)]
    elevation: f64,

    /// Site configuration TOML file
    #[arg(long)]
    site_config: Option<PathBuf>,

    /// Object name for the output record
    #[arg(long, default_value = "unknown")]
    object: String,

    /// Filter identifier for the output record
    #[arg(long, default_value = "unknown")]
    filter: String,

    /// Search offset and window half-width in minutes
    #[arg(long, default_value_t = 10.0)]
    delta_time: f64,

    /// Number of grid samples per search window
    #[arg(long, default_value_t = 1800)]
    n_grid_points: usize,

    /// Append the record to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the CSV header before the record
    #[arg(long)]
    header: bool,

    /// Emit the record as JSON instead of CSV
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::WARN),
        )
        .with_target(true)
        .init();

    let cli = Cli::parse();

    let site = resolve_site(&cli)?;
    let target = EquatorialCoord::new(cli.ra, cli.dec)?;
    let reference = cli
        .time
        .parse::<chrono::DateTime<chrono::Utc>>()
        .with_context(|| format!("invalid reference timestamp: {}", cli.time))?;
    let reference = ModifiedJulianDate::from_datetime(reference);

    debug!(
        lat = site.latitude_deg,
        lon = site.longitude_deg,
        ra = target.ra_deg,
        dec = target.dec_deg,
        "solving crossing time"
    );

    let solution = solve(
        &site,
        &target,
        cli.alt,
        reference,
        cli.delta_time,
        cli.n_grid_points,
    );

    let label = ObservationLabel::new(&cli.object, &cli.filter);
    let record = CrossingRecord::from_solution(&label, &solution);

    let mut lines = Vec::new();
    if cli.json {
        lines.push(serde_json::to_string(&record)?);
    } else {
        if cli.header {
            lines.push(CSV_HEADER.to_string());
        }
        lines.push(record.csv_row());
    }

    match cli.output {
        Some(path) => {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("cannot open output file {}", path.display()))?;
            for line in lines {
                writeln!(file, "{line}")?;
            }
        }
        None => {
            for line in lines {
                println!("{line}");
            }
        }
    }

    Ok(())
}

fn resolve_site(cli: &Cli) -> anyhow::Result<ObserverSite> {
    if let Some(ref path) = cli.site_config {
        return Ok(SiteConfig::from_file(path)?.to_observer_site()?);
    }
    if let (Some(lat), Some(lon)) = (cli.lat, cli.lon) {
        return Ok(ObserverSite::new(lat, lon, cli.elevation)?);
    }
    SiteConfig::from_default_location()
        .and_then(|config| config.to_observer_site())
        .context("no site given: pass --site-config, or --lat and --lon, or provide site.toml")
}
