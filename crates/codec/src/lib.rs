//! # Codec Crate
//!
//! Pre-fitted feature codec for restaurant similarity search.
//!
//! ## Main Components
//!
//! - **matrix**: `FeatureMatrix`, a dense row-major table of encoded features
//! - **encoder**: the `CuisineEncoder` trait and the vocabulary-backed `MultiLabelEncoder`
//! - **scaler**: the `FeatureScaler` trait and the center/scale `StandardScaler`
//! - **error**: error types for artifact loading and transformation
//!
//! Both artifacts are fitted offline and treated as immutable black boxes.
//! They are injected into the recommendation engine as trait objects, so
//! tests can substitute fakes.
//!
//! ## Example Usage
//!
//! ```ignore
//! use codec::{CuisineEncoder, FeatureScaler, MultiLabelEncoder, StandardScaler};
//! use std::path::Path;
//!
//! let encoder = MultiLabelEncoder::load(Path::new("models/cuisine_encoder.json"))?;
//! let scaler = StandardScaler::load(Path::new("models/scaler.json"))?;
//!
//! let multi_hot = encoder.encode(&["Chinese".to_string()]);
//! let scaled = scaler.transform(&encoded_table)?;
//! ```

pub mod encoder;
pub mod error;
pub mod matrix;
pub mod scaler;

pub use encoder::{cuisine_column, CuisineEncoder, MultiLabelEncoder, CUISINE_COLUMN_PREFIX};
pub use error::{CodecError, Result};
pub use matrix::FeatureMatrix;
pub use scaler::{FeatureScaler, StandardScaler};
