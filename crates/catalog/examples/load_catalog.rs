use catalog::{Catalog, DataPaths};
use std::time::Instant;

fn main() {
    let paths = DataPaths::default();

    println!("Loading restaurant catalog...\n");

    let start = Instant::now();
    let catalog = Catalog::load(&paths).expect("Failed to load catalog");
    let elapsed = start.elapsed();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Restaurants: {}", catalog.len());
    println!("Feature columns: {}", catalog.features().n_cols());
    println!("Cities: {}", catalog.list_cities().len());
    println!("\nPerformance: {:.0} rows/second",
             catalog.len() as f64 / elapsed.as_secs_f64());
}
