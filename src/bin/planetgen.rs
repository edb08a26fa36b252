use ::planetgen::config::{PlanetCatalog, catalog_path, load_catalog_or_sample, save_catalog};
use ::planetgen::errors::PlanetGenResult;
use ::planetgen::terrain::generator::TerrainGenerator;
use ::planetgen::{PlanetDescriptor, PlanetType, TerrainGrid, generate_sensor_data};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

// Shares the library's name; library paths above are written `::planetgen`
mod planetgen {
    pub mod cli_utils;
}

use self::planetgen::cli_utils::{parse_fraction, parse_size};

#[derive(Parser, Clone, Debug)]
#[command(name = "planetgen")]
#[command(about = "Generate planet terrain maps and sensor scans")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Clone, Debug)]
enum Command {
    /// Generate a terrain grid and print a preview
    Terrain(TerrainArgs),
    /// Print a sensor scan for a planet
    Scan(PlanetArgs),
    /// List the planet catalog, or write the built-in one to disk
    Catalog(CatalogArgs),
}

#[derive(Args, Clone, Debug)]
struct PlanetArgs {
    /// Use a named planet from the catalog; other flags override its values
    #[arg(long)]
    catalog_planet: Option<String>,

    /// Catalog file (defaults to the user config directory)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Random seed for reproducible generation
    #[arg(long)]
    seed: Option<u32>,

    /// Planet type (magma, rocky, liquid, frozen, gas_giant)
    #[arg(long = "type")]
    planet_type: Option<String>,

    /// Water coverage (0.0-1.0)
    #[arg(long)]
    water: Option<f64>,

    /// Elevation scale (0.0-1.0)
    #[arg(long)]
    elevation: Option<f64>,

    /// Temperature (0.0-1.0)
    #[arg(long)]
    temperature: Option<f64>,

    /// Mineral richness (0.0-1.0)
    #[arg(long)]
    minerals: Option<f64>,
}

#[derive(Args, Clone, Debug)]
struct TerrainArgs {
    #[command(flatten)]
    planet: PlanetArgs,

    /// Grid size in cells (format: WIDTHxHEIGHT)
    #[arg(long, default_value = "64x32")]
    size: String,

    /// Export a colored PNG map
    #[arg(long)]
    png: Option<PathBuf>,

    /// Save the grid in binary form
    #[arg(long)]
    output: Option<PathBuf>,

    /// Rows and columns of glyph preview to print (0 disables)
    #[arg(long, default_value = "20")]
    preview: u32,
}

#[derive(Args, Clone, Debug)]
struct CatalogArgs {
    /// Catalog file to list (defaults to the user config directory)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Write the built-in catalog to this path
    #[arg(long)]
    write: Option<PathBuf>,
}

/// Build the descriptor from a catalog entry and/or explicit flags
fn resolve_descriptor(args: &PlanetArgs) -> PlanetGenResult<PlanetDescriptor> {
    let base = match &args.catalog_planet {
        Some(name) => {
            let catalog = load_catalog_or_sample(args.catalog.as_deref())?;
            Some(catalog.find(name)?.descriptor)
        }
        None => None,
    };

    let seed = args
        .seed
        .or(base.map(|d| d.seed()))
        .unwrap_or_else(rand::random);
    let planet_type = match &args.planet_type {
        Some(name) => PlanetType::from_name(name),
        None => base.map(|d| d.planet_type()).unwrap_or_default(),
    };

    let mut builder = PlanetDescriptor::builder(seed).planet_type(planet_type);
    if let Some(base) = base {
        builder = builder.terrain_params(*base.terrain_params());
    }
    if let Some(water) = args.water {
        builder = builder.water_coverage(parse_fraction("water", water)?);
    }
    if let Some(elevation) = args.elevation {
        builder = builder.elevation_scale(parse_fraction("elevation", elevation)?);
    }
    if let Some(temperature) = args.temperature {
        builder = builder.temperature(parse_fraction("temperature", temperature)?);
    }
    if let Some(minerals) = args.minerals {
        builder = builder.mineral_richness(parse_fraction("minerals", minerals)?);
    }

    builder.build()
}

fn run_terrain(args: &TerrainArgs) -> PlanetGenResult<()> {
    let dimensions = parse_size(&args.size)?;
    let descriptor = resolve_descriptor(&args.planet)?;

    let grid = TerrainGenerator::new(descriptor).generate(dimensions.width, dimensions.height)?;
    info!(
        "Generated {}x{} {} terrain (seed: {})",
        grid.width(),
        grid.height(),
        descriptor.planet_type(),
        descriptor.seed()
    );

    if let Some(path) = &args.png {
        grid.save_png(path)?;
        println!("Map image saved to: {}", path.display());
    }
    if let Some(path) = &args.output {
        grid.save_to_file(path)?;
        println!("Grid saved to: {}", path.display());
    }

    print_terrain_summary(&grid, args.preview);
    Ok(())
}

fn print_terrain_summary(grid: &TerrainGrid, preview: u32) {
    if preview > 0 {
        println!("{}\n", grid.render_ascii(preview, preview));
    }

    let total = grid.cells().len() as f64;
    println!("Terrain distribution:");
    for (terrain, count) in grid.distribution() {
        if count == 0 {
            continue;
        }
        println!(
            "  {} {:<11} {:>6} cells ({:.1}%)",
            terrain.glyph(),
            terrain.name(),
            count,
            count as f64 / total * 100.0
        );
    }
}

fn run_scan(args: &PlanetArgs) -> PlanetGenResult<()> {
    let descriptor = resolve_descriptor(args)?;
    let reading = generate_sensor_data(&descriptor)?;

    println!(
        "Scan of {} planet (seed: {}, landable: {})",
        descriptor.planet_type(),
        descriptor.seed(),
        if descriptor.can_land() { "yes" } else { "no" }
    );
    println!("{reading}");
    Ok(())
}

fn run_catalog(args: &CatalogArgs) -> PlanetGenResult<()> {
    if let Some(path) = &args.write {
        save_catalog(&PlanetCatalog::sample()?, path)?;
        println!("Catalog written to: {}", path.display());
        return Ok(());
    }

    let catalog = load_catalog_or_sample(args.catalog.as_deref())?;
    if args.catalog.is_none() {
        if let Ok(path) = catalog_path() {
            info!("Default catalog location: {}", path.display());
        }
    }

    for entry in &catalog.planets {
        let params = entry.descriptor.terrain_params();
        println!(
            "{:<12} {:<9} seed={:<6} water={:.2} elevation={:.2} temperature={:.2} minerals={:.2}",
            entry.name,
            entry.descriptor.planet_type(),
            entry.descriptor.seed(),
            params.water_coverage,
            params.elevation_scale,
            params.temperature,
            params.mineral_richness
        );
    }
    Ok(())
}

fn main() -> PlanetGenResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Terrain(args) => run_terrain(&args),
        Command::Scan(args) => run_scan(&args),
        Command::Catalog(args) => run_catalog(&args),
    }
}
