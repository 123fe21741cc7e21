//! # Catalog Crate
//!
//! This crate loads and holds the restaurant catalog.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Restaurant, Catalog, DataPaths)
//! - **parser**: Parse the CSV files into Rust structs
//! - **index**: Build and validate the Catalog
//! - **options**: City and cuisine option lists
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Catalog, DataPaths};
//!
//! let catalog = Catalog::load(&DataPaths::default())?;
//!
//! for city in catalog.list_cities() {
//!     println!("{}", city);
//! }
//! ```
//!
//! ## Row Alignment
//!
//! The restaurant table and the encoded feature table are parallel: row `i`
//! of one is row `i` of the other. Everything downstream addresses
//! restaurants by this shared `RowIndex`.

// Public modules
pub mod error;
pub mod index;
pub mod options;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use options::list_cuisines;
pub use types::{Catalog, DataPaths, Restaurant, RestaurantId, RowIndex};
