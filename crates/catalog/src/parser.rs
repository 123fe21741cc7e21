//! Parser for the catalog CSV files.
//!
//! - cleaned_data.csv: one row per restaurant with at least the columns
//!   `id,name,city,rating,rating_count,cost,cuisine` (extra columns are ignored)
//! - encoded_data.csv: one row per restaurant, every column numeric,
//!   including the one-hot `cuisine_<name>` flags
//!
//! Rating, rating count and cost arrive as free text ("4.1", "--",
//! "Too Few Ratings") and are coerced to numbers here, once.

use crate::error::{CatalogError, Result};
use crate::types::Restaurant;
use codec::FeatureMatrix;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Columns every restaurant file must provide
pub const RESTAURANT_COLUMNS: [&str; 7] =
    ["id", "name", "city", "rating", "rating_count", "cost", "cuisine"];

/// Open a file, naming it in the error if it's absent
fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| CatalogError::FileNotFound {
        path: path.display().to_string(),
        source,
    })
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::Headers)
        .from_reader(reader)
}

/// Coerce a free-text cell to a number.
///
/// Empty, non-numeric and non-finite values become `None`.
pub fn coerce_numeric(s: &str) -> Option<f32> {
    s.trim().parse::<f32>().ok().filter(|v| v.is_finite())
}

/// Parse one encoded cell.
///
/// One-hot flags may be written as `True`/`False`; they read as 1 and 0.
pub fn parse_feature(cell: &str) -> Option<f32> {
    match cell.trim() {
        "True" | "true" => Some(1.0),
        "False" | "false" => Some(0.0),
        value => value.parse::<f32>().ok(),
    }
}

/// Find the position of a required column in the header row
fn column_position(headers: &StringRecord, column: &str, file: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| CatalogError::MissingColumn {
            file: file.to_string(),
            column: column.to_string(),
        })
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

/// Parse the cleaned restaurant file
pub fn parse_restaurants(path: &Path) -> Result<Vec<Restaurant>> {
    let file = open(path)?;
    read_restaurants(file, &path.display().to_string())
}

/// Parse restaurant rows from any reader; `file` labels errors.
pub fn read_restaurants<R: Read>(reader: R, file: &str) -> Result<Vec<Restaurant>> {
    let mut reader = csv_reader(reader);
    let headers = reader
        .headers()
        .map_err(|source| CatalogError::Csv {
            file: file.to_string(),
            source,
        })?
        .clone();

    let [id_col, name_col, city_col, rating_col, count_col, cost_col, cuisine_col] =
        RESTAURANT_COLUMNS.map(|c| column_position(&headers, c, file));
    let (id_col, name_col, city_col) = (id_col?, name_col?, city_col?);
    let (rating_col, count_col, cost_col, cuisine_col) =
        (rating_col?, count_col?, cost_col?, cuisine_col?);

    let mut restaurants = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| CatalogError::Csv {
            file: file.to_string(),
            source,
        })?;
        let line = line_of(&record);
        let field = |col: usize| record.get(col).unwrap_or("");

        let id = field(id_col).trim().parse().map_err(|e| CatalogError::ParseError {
            file: file.to_string(),
            line,
            reason: format!("Invalid id '{}': {}", field(id_col), e),
        })?;

        let city = match field(city_col) {
            "" => None,
            city => Some(city.to_string()),
        };

        restaurants.push(Restaurant {
            id,
            name: field(name_col).to_string(),
            city,
            rating: coerce_numeric(field(rating_col)),
            rating_count: coerce_numeric(field(count_col)),
            cost: coerce_numeric(field(cost_col)),
            cuisine: field(cuisine_col).to_string(),
        });
    }

    Ok(restaurants)
}

/// Parse the encoded feature file
pub fn parse_encoded(path: &Path) -> Result<FeatureMatrix> {
    let file = open(path)?;
    read_encoded(file, &path.display().to_string())
}

/// Parse an all-numeric feature table from any reader; `file` labels errors.
///
/// Unlike the restaurant file, a non-numeric cell here is fatal: the scaler
/// cannot transform it.
pub fn read_encoded<R: Read>(reader: R, file: &str) -> Result<FeatureMatrix> {
    let mut reader = csv_reader(reader);
    let columns: Vec<String> = reader
        .headers()
        .map_err(|source| CatalogError::Csv {
            file: file.to_string(),
            source,
        })?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if columns.is_empty() {
        return Err(CatalogError::ValidationError(format!(
            "{} has no feature columns",
            file
        )));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| CatalogError::Csv {
            file: file.to_string(),
            source,
        })?;
        let line = line_of(&record);

        let row = record
            .iter()
            .zip(&columns)
            .map(|(cell, column)| {
                parse_feature(cell).ok_or_else(|| CatalogError::ParseError {
                    file: file.to_string(),
                    line,
                    reason: format!("Invalid value '{}' in column {}", cell, column),
                })
            })
            .collect::<Result<Vec<f32>>>()?;

        rows.push(row);
    }

    Ok(FeatureMatrix::from_rows(columns, rows)?)
}
