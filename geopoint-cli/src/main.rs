//! GeoPoint CLI - command-line interface
//!
//! Loads a point table and reports its aggregate spatial queries: point
//! count, bounding box, and POI count.

use std::process;

use clap::Parser;
use geopoint::pointset::PointSet;

#[derive(Parser)]
#[command(name = "geopoint")]
#[command(version = geopoint::VERSION)]
#[command(about = "Report aggregate spatial queries over a point table", long_about = None)]
struct Args {
    /// Path to the comma-delimited point table
    #[arg(long, default_value = "points.csv")]
    input: String,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = geopoint::logging::init_logging() {
        eprintln!("Error: failed to initialize logging: {}", e);
        process::exit(1);
    }

    let set = match PointSet::from_csv(&args.input) {
        Ok(set) => set,
        Err(e) => {
            eprintln!("Error loading '{}': {}", args.input, e);
            process::exit(1);
        }
    };

    println!("Points: {}", set.len());

    let bbox = match set.bbox() {
        Ok(bbox) => bbox,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    println!("Bounding box: {}", bbox);
    println!("POI count: {}", set.poi_count());
}
