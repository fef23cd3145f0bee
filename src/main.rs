use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use prefixmap::HullBuilder;
use prefixmap::config::FileConfig;
use prefixmap::geojson::{HullCollection, RegionHullFeature};
use prefixmap::geometry::Bounds;
use prefixmap::input::load_region_tables;
use prefixmap::output::{write_hull_collection, write_region_hull};

/// Derive convex hull boundaries of ICAO prefix regions as GeoJSON
///
/// Examples:
///   # Hulls for every region table in the store
///   prefixmap db/prefix-table/*.json
///
///   # Write below a site folder with debug logging
///   prefixmap -o site/prefix -v db/prefix-table/ET.json db/prefix-table/NZ.json
///
///   # Use a config file with an extended ear table
///   prefixmap --config my-regions.toml db/prefix-table/*.json
#[derive(Parser, Debug)]
#[command(name = "prefixmap")]
#[command(version, about, long_about = None)]
struct Args {
    /// Region table JSON files
    #[arg(required = true)]
    tables: Vec<PathBuf>,

    /// Path to config file (optional, auto-searches prefixmap.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output folder (defaults to prefix)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            toml::from_str(&contents).context("Failed to parse config file")?
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load().unwrap_or_default()
    };

    let verbose = args.verbose || file_config.verbose;
    init_tracing(verbose);

    let output = args.output.unwrap_or_else(|| file_config.output.clone());
    let builder = HullBuilder::new(file_config.corrections());
    debug!(corrections = ?builder.corrections(), output = %output.display(), "configured");

    let spinner = create_spinner("Loading region tables...");
    let start = Instant::now();
    let tables = load_region_tables(&args.tables).context("Failed to load region tables")?;
    spinner.finish_with_message(format!(
        "Loaded {} region tables [{:.1}s]",
        tables.len(),
        start.elapsed().as_secs_f32()
    ));

    let spinner = create_spinner("Computing region hulls...");
    let start = Instant::now();
    let mut collection = HullCollection::new();
    let mut skipped = 0;
    for table in &tables {
        spinner.set_message(format!("Computing region hulls... {}", table.id));
        let points = table.points();

        let hull = match builder.compute_hull(&table.id, &points) {
            Ok(hull) => hull,
            Err(e) => {
                warn!("Skipping region {}: {}", table.id, e);
                skipped += 1;
                continue;
            }
        };

        if let Some(bounds) = Bounds::from_points(&points) {
            debug!(
                region = %table.id,
                bbox = %bounds,
                lat_span = bounds.lat_span(),
                lon_span = bounds.lon_span(),
                center_lat = bounds.center().lat,
                center_lon = bounds.center().lon,
                "region extent"
            );
        }
        debug!(
            region = %table.id,
            vertices = hull.len(),
            area_sq_deg = hull.area_sq_deg(),
            "region hull"
        );

        let feature = RegionHullFeature::new(table.id.clone(), &table.name, &hull);
        write_region_hull(&output, &feature)
            .with_context(|| format!("Failed to write hull for region {}", table.id))?;
        collection.push(feature);
    }
    spinner.finish_with_message(format!(
        "Computed {} hulls, skipped {} [{:.1}s]",
        collection.len(),
        skipped,
        start.elapsed().as_secs_f32()
    ));

    let path = write_hull_collection(&output, &collection)
        .context("Failed to write region hull collection")?;

    println!();
    println!(
        "Done! Total time: {:.1}s",
        total_start.elapsed().as_secs_f32()
    );
    println!();
    println!("Output: {}", path.display());

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
