use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use wheelsim::{oradea, Vehicle};

#[derive(Debug, thiserror::Error)]
#[error("{0}: {1}")]
struct CatalogLoadError(PathBuf, #[source] CatalogLoadCause);

#[derive(Debug, thiserror::Error)]
enum CatalogLoadCause {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Parser)]
struct Cli {
    /// Path to the vehicle catalog: a JSON array of vehicle records
    catalog_file: PathBuf,

    /// Number of rides to simulate
    #[arg(long, default_value_t = 5)]
    rides: u32,

    /// RNG seed; the same seed and catalog reproduce the same rides
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    colog::init();
    let cli = Cli::parse();

    let vehicles = load_catalog(&cli.catalog_file)?;

    let mut sim = oradea::simulator(cli.seed);
    sim.sync_catalog(vehicles)?;

    let riders: Vec<i64> = sim
        .vehicles()
        .filter(|v| v.available)
        .map(|v| v.id)
        .collect();
    if riders.is_empty() {
        log::warn!("no available vehicles in the catalog, nothing to simulate");
    } else {
        for i in 0..cli.rides {
            let id = riders[i as usize % riders.len()];
            if let Some(ride) = sim.complete_ride(id) {
                let name = sim.vehicle(id).map(|v| v.name.as_str()).unwrap_or("?");
                println!(
                    "ride #{}: {}, {:.1} km, {:.2} €",
                    i + 1,
                    name,
                    ride.distance_km,
                    ride.cost
                );
            }
        }
    }

    println!();
    println!("final positions:");
    for (id, position) in sim.positions() {
        println!("  vehicle {}: {:.4}, {:.4}", id, position.lat, position.lng);
    }

    Ok(())
}

fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Vehicle>, CatalogLoadError> {
    let wrap = |cause: CatalogLoadCause| CatalogLoadError(path.as_ref().to_path_buf(), cause);
    let data = fs::read_to_string(path.as_ref()).map_err(|e| wrap(e.into()))?;
    serde_json::from_str(&data).map_err(|e| wrap(e.into()))
}
